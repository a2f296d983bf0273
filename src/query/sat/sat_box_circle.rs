use crate::query::sat::{project, project_circle};
use crate::query::{CollisionResult, SolveError, SolverOptions};
use crate::shape::{BoundingBox, BoundingCircle, TypedShape};

/// Tests a box against a circle along the two axes of the box.
///
/// The box is always the first shape of the result. On each non-separating axis the
/// penetration vector is the shallowest way out for the circle: `-(circle.max - box.min)`
/// or `box.max - circle.min` times the axis, whichever is shorter. Ties pick the latter.
pub fn solve_box_circle<'a>(
    cuboid: &'a BoundingBox,
    circle: &'a BoundingCircle,
    options: &SolverOptions,
) -> Result<CollisionResult<'a>, SolveError> {
    let corners = cuboid.corners();
    let mut result = CollisionResult::new(
        TypedShape::BoundingBox(cuboid),
        TypedShape::BoundingCircle(circle),
    );

    for axis in cuboid.axes() {
        let proj_box = project(&corners, &axis)?;
        let proj_circle = project_circle(circle, &axis)?;

        if proj_box.is_separated_from(&proj_circle) {
            result.mark_separated();

            if options.stop_at_separating_axis {
                break;
            }
        } else {
            let forward = proj_circle.max - proj_box.min;
            let backward = proj_box.max - proj_circle.min;

            if forward.abs() < backward.abs() {
                result.add_penetration(axis * -forward);
            } else {
                result.add_penetration(axis * backward);
            }
        }
    }

    Ok(result)
}
