//! Rotated rectangle shape.

use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::error::{is_valid_extent, InvalidShape};
use crate::utils::{degrees_to_radians, VectorOps};
use core::fmt;

/// A corner of a [`BoundingBox`].
///
/// Corners are listed in winding order: `TopLeft`, `TopRight`, `BottomRight`, `BottomLeft`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Corner {
    /// The corner at `(x, y)` before rotation.
    TopLeft = 0,
    /// The corner at `(x + width, y)` before rotation.
    TopRight = 1,
    /// The corner at `(x + width, y + height)` before rotation.
    BottomRight = 2,
    /// The corner at `(x, y + height)` before rotation.
    BottomLeft = 3,
}

impl Corner {
    /// All the corners of a box, in winding order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// The corner with the given index in winding order, if `index < 4`.
    pub fn from_index(index: usize) -> Option<Corner> {
        Self::ALL.get(index).copied()
    }

    /// The index of this corner in winding order.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A rectangle, possibly rotated around its center.
///
/// The box is described by its top-left corner `(x, y)` and its extents before rotation.
/// The rotation is expressed in degrees and applied around the center of the box.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct BoundingBox {
    x: Real,
    y: Real,
    width: Real,
    height: Real,
    rotation: Real,
}

impl BoundingBox {
    /// Creates a new box.
    ///
    /// Fails if `width` or `height` is negative (or NaN).
    pub fn new(
        x: Real,
        y: Real,
        width: Real,
        height: Real,
        rotation: Real,
    ) -> Result<BoundingBox, InvalidShape> {
        if !is_valid_extent(width) {
            return Err(InvalidShape::NegativeWidth(width));
        }

        if !is_valid_extent(height) {
            return Err(InvalidShape::NegativeHeight(height));
        }

        Ok(BoundingBox {
            x,
            y,
            width,
            height,
            rotation,
        })
    }

    /// A copy of this box with its rotation, in degrees, replaced by `rotation`.
    #[inline]
    pub fn with_rotation(self, rotation: Real) -> BoundingBox {
        BoundingBox { rotation, ..self }
    }

    /// The x coordinate of the top-left corner, before rotation.
    #[inline]
    pub fn x(&self) -> Real {
        self.x
    }

    /// The y coordinate of the top-left corner, before rotation.
    #[inline]
    pub fn y(&self) -> Real {
        self.y
    }

    /// The width of the box.
    #[inline]
    pub fn width(&self) -> Real {
        self.width
    }

    /// The height of the box.
    #[inline]
    pub fn height(&self) -> Real {
        self.height
    }

    /// The rotation of the box around its center, in degrees.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// The center of the box. It does not depend on the rotation.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The world-space position of the given corner, after rotation around the center.
    pub fn corner(&self, corner: Corner) -> Point<Real> {
        let offset = match corner {
            Corner::TopLeft => Vector::new(0.0, 0.0),
            Corner::TopRight => Vector::new(self.width, 0.0),
            Corner::BottomRight => Vector::new(self.width, self.height),
            Corner::BottomLeft => Vector::new(0.0, self.height),
        };

        let center = self.center();
        let unrotated = Point::new(self.x, self.y) + offset;
        let rotation = Rotation::new(degrees_to_radians(self.rotation));

        center + rotation * (unrotated - center)
    }

    /// The four corners of this box, in winding order.
    pub fn corners(&self) -> [Point<Real>; 4] {
        Corner::ALL.map(|corner| self.corner(corner))
    }

    /// The left normals of the four edges of this box, not normalized.
    ///
    /// The i-th normal belongs to the edge going from the i-th corner to the next one.
    /// Opposite edges have parallel normals so only the first two are worth testing,
    /// see [`BoundingBox::axes`].
    pub fn normals(&self) -> [Vector<Real>; 4] {
        let corners = self.corners();
        [0, 1, 2, 3].map(|i| (corners[(i + 1) % 4] - corners[i]).left_normal())
    }

    /// The two unit-length axes along which this box must be tested.
    ///
    /// A degenerate box with a zero extent yields zero axes.
    pub fn axes(&self) -> [Vector<Real>; 2] {
        let normals = self.normals();
        [
            normals[0].normalized_or_unchanged(),
            normals[1].normalized_or_unchanged(),
        ]
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox(x: {}, y: {}, width: {}, height: {})",
            self.x, self.y, self.width, self.height
        )
    }
}
