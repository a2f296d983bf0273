//! Dispatch of collision tests to the algorithm matching a pair of shapes.

use crate::query::{CollisionResult, SolveError, SolverOptions};
use crate::shape::Shape;

/// Dispatcher for collision tests between pairs of shapes.
///
/// Implement this trait to support user-defined shapes, then chain your dispatcher with
/// the [`DefaultCollisionDispatcher`](crate::query::DefaultCollisionDispatcher) so the
/// built-in shapes keep working.
pub trait CollisionDispatcher: Send + Sync {
    /// Tests two shapes for collision.
    ///
    /// Returns [`SolveError::UnsupportedShapePair`] if this dispatcher has no algorithm for
    /// the given pair of shapes.
    fn solve<'a>(
        &self,
        shape1: &'a dyn Shape,
        shape2: &'a dyn Shape,
        options: &SolverOptions,
    ) -> Result<CollisionResult<'a>, SolveError>;

    /// Construct a `CollisionDispatcher` that falls back on `other` for cases not handled
    /// by `self`.
    fn chain<U: CollisionDispatcher>(self, other: U) -> CollisionDispatcherChain<Self, U>
    where
        Self: Sized,
    {
        CollisionDispatcherChain(self, other)
    }
}

/// A dispatcher that exposes collision tests supported by one of two dispatchers.
///
/// The first dispatcher is tried first; the second one only gets the shape pairs the first
/// one reports as unsupported.
pub struct CollisionDispatcherChain<T, U>(T, U);

impl<T, U> CollisionDispatcher for CollisionDispatcherChain<T, U>
where
    T: CollisionDispatcher,
    U: CollisionDispatcher,
{
    fn solve<'a>(
        &self,
        shape1: &'a dyn Shape,
        shape2: &'a dyn Shape,
        options: &SolverOptions,
    ) -> Result<CollisionResult<'a>, SolveError> {
        match self.0.solve(shape1, shape2, options) {
            Err(SolveError::UnsupportedShapePair(..)) => self.1.solve(shape1, shape2, options),
            result => result,
        }
    }
}
