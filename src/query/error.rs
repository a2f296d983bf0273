use crate::shape::ShapeType;

/// Error returned when a collision could not be evaluated.
///
/// This is distinct from a successful evaluation reporting that the shapes do not collide.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// No collision algorithm exists between the two given shape types.
    #[error("unable to solve collision between {0:?} and {1:?}.")]
    UnsupportedShapePair(ShapeType, ShapeType),
    /// A shape projection was attempted over an empty set of points.
    #[error("cannot project an empty set of points on an axis.")]
    EmptyProjectionSet,
}
