//! Shapes supported by the collision solver.
//!
//! Two shapes are available: the [`BoundingBox`], a possibly rotated rectangle, and the
//! [`BoundingCircle`]. Both are expressed directly in world-space: they carry their own
//! position, so no separate transform is needed to compare them.
//!
//! User-defined shapes can implement the [`Shape`] trait. The default collision
//! dispatcher reports them as unsupported, but a custom
//! [`CollisionDispatcher`](crate::query::CollisionDispatcher) can handle them.

pub use self::bounding_box::{BoundingBox, Corner};
pub use self::bounding_circle::BoundingCircle;
pub use self::error::InvalidShape;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType, TypedShape};

mod bounding_box;
mod bounding_circle;
mod error;
mod shape;
