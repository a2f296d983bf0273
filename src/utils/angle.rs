use crate::math::Real;

/// Converts an angle expressed in degrees into radians.
///
/// ```
/// use sat2d::utils::degrees_to_radians;
///
/// assert_eq!(degrees_to_radians(180.0), core::f64::consts::PI);
/// assert_eq!(degrees_to_radians(0.0), 0.0);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: Real) -> Real {
    degrees.to_radians()
}
