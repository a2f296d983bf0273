use crate::query::{
    CollisionDispatcher, CollisionResult, DefaultCollisionDispatcher, SolveError, SolverOptions,
};
use crate::shape::Shape;

/// Tests two shapes for collision, evaluating every candidate axis.
///
/// This is [`solve_with_options`] with the default [`SolverOptions`].
///
/// # Example
///
/// ```
/// use sat2d::math::Vector;
/// use sat2d::query;
/// use sat2d::shape::BoundingCircle;
///
/// let c1 = BoundingCircle::new(0.0, 0.0, 5.0).unwrap();
/// let c2 = BoundingCircle::new(7.0, 0.0, 5.0).unwrap();
///
/// let result = query::solve(&c1, &c2).unwrap();
/// assert!(result.is_colliding());
/// assert_eq!(result.penetrations(), &[Vector::new(-3.0, 0.0)]);
/// ```
pub fn solve<'a>(
    shape1: &'a dyn Shape,
    shape2: &'a dyn Shape,
) -> Result<CollisionResult<'a>, SolveError> {
    solve_with_options(shape1, shape2, &SolverOptions::default())
}

/// Tests two shapes for collision with the [`DefaultCollisionDispatcher`].
pub fn solve_with_options<'a>(
    shape1: &'a dyn Shape,
    shape2: &'a dyn Shape,
    options: &SolverOptions,
) -> Result<CollisionResult<'a>, SolveError> {
    DefaultCollisionDispatcher.solve(shape1, shape2, options)
}

/// Tests whether two shapes intersect.
///
/// Stops at the first separating axis and discards the penetration vectors.
pub fn intersection_test(shape1: &dyn Shape, shape2: &dyn Shape) -> Result<bool, SolveError> {
    solve_with_options(shape1, shape2, &SolverOptions::early_exit())
        .map(|result| result.is_colliding())
}
