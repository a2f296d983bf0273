use crate::math::Real;

/// Error returned when a shape is built with meaningless dimensions.
///
/// NaN extents are rejected through the same variants as negative ones.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum InvalidShape {
    /// The width of a bounding box is negative.
    #[error("the width of a bounding box must be non-negative, got {0}.")]
    NegativeWidth(Real),
    /// The height of a bounding box is negative.
    #[error("the height of a bounding box must be non-negative, got {0}.")]
    NegativeHeight(Real),
    /// The radius of a bounding circle is negative.
    #[error("the radius of a bounding circle must be non-negative, got {0}.")]
    NegativeRadius(Real),
}

/// Returns `true` if `extent` can be used as a width, height, or radius.
#[inline]
pub(crate) fn is_valid_extent(extent: Real) -> bool {
    extent >= 0.0
}
