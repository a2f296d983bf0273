use crate::math::{Real, Vector};
use num::Zero;

/// Extra operations on 2D vectors needed by the separating axis tests.
///
/// Everything else (addition, subtraction, scaling, dot product, length,
/// exact equality) is provided by nalgebra directly. Every method returns a new
/// vector and leaves `self` untouched.
///
/// Nothing here guards against NaN or infinite components: they propagate
/// following IEEE-754 rules.
pub trait VectorOps: Sized {
    /// The 2D cross product `self.x * rhs.y - self.y * rhs.x`.
    fn cross_product(&self, rhs: &Self) -> Real;

    /// The normal `(y, -x)` of this vector.
    fn left_normal(&self) -> Self;

    /// The normal `(-y, x)` of this vector.
    fn right_normal(&self) -> Self;

    /// Divides this vector by its length.
    ///
    /// A zero-length vector is returned unchanged instead of producing NaNs.
    fn normalized_or_unchanged(&self) -> Self;

    /// The direction of this vector, i.e., [`VectorOps::normalized_or_unchanged`].
    #[inline]
    fn direction(&self) -> Self {
        self.normalized_or_unchanged()
    }

    /// The projection of `self` on the line directed by `onto`.
    ///
    /// If `onto` has a zero length, a warning is logged and `self` is returned.
    fn projected_on(&self, onto: &Self) -> Self;

    /// The length of the projection of `self` on `onto`, relative to the length of `onto`.
    ///
    /// If `onto` has a zero length, a warning is logged and `0.0` is returned.
    fn projected_length_on(&self, onto: &Self) -> Real;
}

impl VectorOps for Vector<Real> {
    #[inline]
    fn cross_product(&self, rhs: &Self) -> Real {
        self.perp(rhs)
    }

    #[inline]
    fn left_normal(&self) -> Self {
        Vector::new(self.y, -self.x)
    }

    #[inline]
    fn right_normal(&self) -> Self {
        Vector::new(-self.y, self.x)
    }

    #[inline]
    fn normalized_or_unchanged(&self) -> Self {
        let length = self.norm();

        if length.is_zero() {
            *self
        } else {
            self / length
        }
    }

    fn projected_on(&self, onto: &Self) -> Self {
        let denom = onto.norm_squared();

        if denom.is_zero() {
            log::warn!("Attempted to project {self:?} on a zero-length vector.");
            *self
        } else {
            onto * (self.dot(onto) / denom)
        }
    }

    fn projected_length_on(&self, onto: &Self) -> Real {
        let denom = onto.norm_squared();

        if denom.is_zero() {
            log::warn!("Attempted to compute a projection length on a zero-length vector.");
            0.0
        } else {
            (self.dot(onto) / denom).abs()
        }
    }
}
