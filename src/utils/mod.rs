//! Various unsorted geometrical and logical operators.

pub use self::angle::degrees_to_radians;
pub use self::vector_ops::VectorOps;

mod angle;
mod vector_ops;
