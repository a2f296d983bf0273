use crate::math::Vector;
use crate::query::CollisionResult;
use crate::shape::{BoundingCircle, TypedShape};
use num::Zero;

/// Tests two circles against each other.
///
/// The circles collide if the distance between their centers does not exceed the sum of
/// their radii. The penetration vector then points from the center of `circle2` toward the
/// center of `circle1`, with a length equal to the overlap depth. Concentric circles have
/// no preferred direction and get the arbitrary vector `(radius1 + radius2, 0)`.
pub fn solve_circle_circle<'a>(
    circle1: &'a BoundingCircle,
    circle2: &'a BoundingCircle,
) -> CollisionResult<'a> {
    let mut result = CollisionResult::new(
        TypedShape::BoundingCircle(circle1),
        TypedShape::BoundingCircle(circle2),
    );

    let sum_radius = circle1.radius() + circle2.radius();
    let center2_1 = circle1.center() - circle2.center();
    let distance = center2_1.norm();

    if distance > sum_radius {
        result.mark_separated();
    } else if distance.is_zero() {
        log::debug!("Concentric circles: picking the x axis as penetration direction.");
        result.add_penetration(Vector::new(sum_radius, 0.0));
    } else {
        result.add_penetration(center2_1 / distance * (sum_radius - distance));
    }

    result
}
