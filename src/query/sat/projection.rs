use crate::math::{Point, Real, Vector};
use crate::query::SolveError;
use crate::shape::BoundingCircle;

/// The range covered by the projection of a shape on an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Projection {
    /// The smallest projected value.
    pub min: Real,
    /// The largest projected value.
    pub max: Real,
}

impl Projection {
    /// Creates a new projection range.
    #[inline]
    pub fn new(min: Real, max: Real) -> Self {
        Projection { min, max }
    }

    /// Whether this range and `other` are disjoint.
    ///
    /// Ranges that merely touch are not separated.
    #[inline]
    pub fn is_separated_from(&self, other: &Projection) -> bool {
        self.max < other.min || other.max < self.min
    }
}

/// Projects a set of points on `axis` and returns the range of their dot products.
///
/// `axis` does not need to be normalized, but the resulting range is then scaled by its
/// length. Fails if `points` is empty.
pub fn project(points: &[Point<Real>], axis: &Vector<Real>) -> Result<Projection, SolveError> {
    let (first, rest) = points
        .split_first()
        .ok_or(SolveError::EmptyProjectionSet)?;
    let first = first.coords.dot(axis);
    let mut projection = Projection::new(first, first);

    for pt in rest {
        let dot = pt.coords.dot(axis);

        if dot > projection.max {
            projection.max = dot;
        }
        if dot < projection.min {
            projection.min = dot;
        }
    }

    Ok(projection)
}

/// Projects a circle on `axis`, assumed to be normalized.
///
/// The circle's extremal points along the axis are `center ± radius * axis`. Both are
/// projected so the range is correct whatever the orientation of the axis.
pub fn project_circle(
    circle: &BoundingCircle,
    axis: &Vector<Real>,
) -> Result<Projection, SolveError> {
    let center = circle.center();
    let offset = axis * circle.radius();
    project(&[center + offset, center - offset], axis)
}
