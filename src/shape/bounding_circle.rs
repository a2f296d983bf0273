//! Circle shape.

use crate::math::{Point, Real};
use crate::shape::error::{is_valid_extent, InvalidShape};
use core::fmt;

/// A circle given by its center and radius.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct BoundingCircle {
    x: Real,
    y: Real,
    radius: Real,
}

impl BoundingCircle {
    /// Creates a new circle centered at `(x, y)`.
    ///
    /// Fails if `radius` is negative (or NaN).
    pub fn new(x: Real, y: Real, radius: Real) -> Result<BoundingCircle, InvalidShape> {
        if !is_valid_extent(radius) {
            return Err(InvalidShape::NegativeRadius(radius));
        }

        Ok(BoundingCircle { x, y, radius })
    }

    /// The x coordinate of the center.
    #[inline]
    pub fn x(&self) -> Real {
        self.x
    }

    /// The y coordinate of the center.
    #[inline]
    pub fn y(&self) -> Real {
        self.y
    }

    /// The center of the circle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::new(self.x, self.y)
    }

    /// The radius of the circle.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }
}

impl fmt::Display for BoundingCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingCircle(x: {}, y: {}, radius: {})",
            self.x, self.y, self.radius
        )
    }
}
