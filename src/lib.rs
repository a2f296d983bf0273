/*!
sat2d
========

**sat2d** is a 2-dimensional collision detection library based on the
Separating Axis Theorem, written with the rust programming language.

It answers one question: given two shapes (rotated boxes or circles), do they
overlap, and by how much along each axis that could separate them?

```
use sat2d::query;
use sat2d::shape::BoundingBox;

let box1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0, 0.0).unwrap();
let box2 = BoundingBox::new(8.0, 0.0, 10.0, 10.0, 0.0).unwrap();

let result = query::solve(&box1, &box2).unwrap();
assert!(result.is_colliding());
assert_eq!(result.min_penetration().unwrap().norm(), 2.0);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Rotation2, Vector2};

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The rotation matrix type.
    pub type Rotation<N> = Rotation2<N>;
}
