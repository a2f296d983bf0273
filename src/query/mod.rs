//! Collision queries between pairs of shapes.
//!
//! The entry point is [`solve`], which returns a [`CollisionResult`] telling whether two
//! shapes collide and by how much they overlap along each tested axis.

pub use self::collision_dispatcher::{CollisionDispatcher, CollisionDispatcherChain};
pub use self::collision_result::CollisionResult;
pub use self::default_collision_dispatcher::DefaultCollisionDispatcher;
pub use self::error::SolveError;
pub use self::solve::{intersection_test, solve, solve_with_options};
pub use self::solver_options::SolverOptions;

mod collision_dispatcher;
mod collision_result;
mod default_collision_dispatcher;
mod error;
pub mod sat;
mod solve;
mod solver_options;
