use crate::query::{sat, CollisionDispatcher, CollisionResult, SolveError, SolverOptions};
use crate::shape::{Shape, TypedShape};

/// A dispatcher for the shapes provided by this crate.
///
/// Any pair of boxes and circles is supported, in any order. A circle tested against a box
/// is answered by the box-circle test, so the box is always the first shape of the
/// result. Pairs involving a custom shape are reported as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCollisionDispatcher;

impl CollisionDispatcher for DefaultCollisionDispatcher {
    fn solve<'a>(
        &self,
        shape1: &'a dyn Shape,
        shape2: &'a dyn Shape,
        options: &SolverOptions,
    ) -> Result<CollisionResult<'a>, SolveError> {
        match (shape1.as_typed_shape(), shape2.as_typed_shape()) {
            (TypedShape::BoundingBox(b1), TypedShape::BoundingBox(b2)) => {
                sat::solve_box_box(b1, b2, options)
            }
            (TypedShape::BoundingCircle(c1), TypedShape::BoundingCircle(c2)) => {
                Ok(sat::solve_circle_circle(c1, c2))
            }
            (TypedShape::BoundingBox(b1), TypedShape::BoundingCircle(c2)) => {
                sat::solve_box_circle(b1, c2, options)
            }
            (TypedShape::BoundingCircle(c1), TypedShape::BoundingBox(b2)) => {
                sat::solve_box_circle(b2, c1, options)
            }
            (typed1 @ TypedShape::Custom(_), typed2) | (typed1, typed2 @ TypedShape::Custom(_)) => {
                log::debug!(
                    "Unable to solve collision between {:?} and {:?}.",
                    typed1.shape_type(),
                    typed2.shape_type()
                );
                Err(SolveError::UnsupportedShapePair(
                    typed1.shape_type(),
                    typed2.shape_type(),
                ))
            }
        }
    }
}
