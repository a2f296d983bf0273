use crate::math::{Point, Real, Vector};
use crate::query::sat::project;
use crate::query::{CollisionResult, SolveError, SolverOptions};
use crate::shape::{BoundingBox, TypedShape};

/// Computes the penetration vector of two point sets along `axis`.
///
/// Returns `None` if the projections of the two sets on `axis` are disjoint. Otherwise,
/// returns `axis` scaled by the shallowest way out for `points1`: either
/// `max2 - min1` or `-(max1 - min2)`, whichever has the smallest magnitude. Ties pick the
/// latter.
pub fn penetration_along_axis(
    points1: &[Point<Real>],
    points2: &[Point<Real>],
    axis: &Vector<Real>,
) -> Result<Option<Vector<Real>>, SolveError> {
    let proj1 = project(points1, axis)?;
    let proj2 = project(points2, axis)?;

    if proj1.is_separated_from(&proj2) {
        return Ok(None);
    }

    let forward = proj2.max - proj1.min;
    let backward = proj1.max - proj2.min;

    if forward.abs() < backward.abs() {
        Ok(Some(axis * forward))
    } else {
        Ok(Some(axis * -backward))
    }
}

/// Tests two boxes against the two axes of each of them.
///
/// Every axis separating the boxes marks the result as non-colliding. Unless
/// `options.stop_at_separating_axis` is set, the remaining axes are still tested and
/// their penetration vectors still recorded.
pub fn solve_box_box<'a>(
    box1: &'a BoundingBox,
    box2: &'a BoundingBox,
    options: &SolverOptions,
) -> Result<CollisionResult<'a>, SolveError> {
    let corners1 = box1.corners();
    let corners2 = box2.corners();
    let [axis1, axis2] = box1.axes();
    let [axis3, axis4] = box2.axes();

    let mut result =
        CollisionResult::new(TypedShape::BoundingBox(box1), TypedShape::BoundingBox(box2));

    for axis in [axis1, axis2, axis3, axis4] {
        match penetration_along_axis(&corners1, &corners2, &axis)? {
            Some(penetration) => result.add_penetration(penetration),
            None => {
                result.mark_separated();

                if options.stop_at_separating_axis {
                    break;
                }
            }
        }
    }

    Ok(result)
}
