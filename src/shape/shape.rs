use crate::shape::{BoundingBox, BoundingCircle};
use core::fmt;
use downcast_rs::{impl_downcast, DowncastSync};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A possibly rotated rectangle.
    BoundingBox = 0,
    /// A circle.
    BoundingCircle,
    /// A user-defined shape.
    Custom,
}

/// Enum representing the shape with its actual type.
#[derive(Copy, Clone, Debug)]
pub enum TypedShape<'a> {
    /// A possibly rotated rectangle.
    BoundingBox(&'a BoundingBox),
    /// A circle.
    BoundingCircle(&'a BoundingCircle),
    /// A user-defined shape.
    Custom(&'a dyn Shape),
}

impl TypedShape<'_> {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            TypedShape::BoundingBox(_) => ShapeType::BoundingBox,
            TypedShape::BoundingCircle(_) => ShapeType::BoundingCircle,
            TypedShape::Custom(_) => ShapeType::Custom,
        }
    }
}

impl fmt::Display for TypedShape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedShape::BoundingBox(s) => fmt::Display::fmt(s, f),
            TypedShape::BoundingCircle(s) => fmt::Display::fmt(s, f),
            TypedShape::Custom(s) => write!(f, "{s:?}"),
        }
    }
}

/// Trait implemented by shapes usable by the collision solver.
pub trait Shape: DowncastSync + fmt::Debug {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a bounding box, if it is one.
    pub fn as_bounding_box(&self) -> Option<&BoundingBox> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a bounding circle, if it is one.
    pub fn as_bounding_circle(&self) -> Option<&BoundingCircle> {
        self.downcast_ref()
    }
}

impl Shape for BoundingBox {
    fn shape_type(&self) -> ShapeType {
        ShapeType::BoundingBox
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::BoundingBox(self)
    }
}

impl Shape for BoundingCircle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::BoundingCircle
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::BoundingCircle(self)
    }
}
