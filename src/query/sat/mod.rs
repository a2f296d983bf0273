//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! the projections of the two shapes do not overlap.
//!
//! # How it is applied here
//!
//! 1. **Select candidate axes**: the edge normals of the boxes involved. A box only
//!    contributes two axes since opposite edges share the same normal line. Two circles
//!    only need the axis joining their centers.
//! 2. **Project both shapes onto each axis** with [`project`] or [`project_circle`].
//! 3. **Check for overlap**: disjoint projections on any axis mean no collision.
//! 4. **Record penetrations**: on each overlapping axis, the shortest translation
//!    separating the shapes along that axis is added to the
//!    [`CollisionResult`](crate::query::CollisionResult).

pub use self::projection::{project, project_circle, Projection};
pub use self::sat_box_box::{penetration_along_axis, solve_box_box};
pub use self::sat_box_circle::solve_box_circle;
pub use self::sat_circle_circle::solve_circle_circle;

mod projection;
mod sat_box_box;
mod sat_box_circle;
mod sat_circle_circle;
