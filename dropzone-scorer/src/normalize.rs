//! Shared rescaling helpers.

/// Upper bound of every component and composite score.
pub const MAX_SCORE: f64 = 10.0;

/// Score used when a range or category carries no information.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Linearly rescale `value` from `min..=max` onto `0.0..=10.0`.
///
/// Values outside the declared range saturate at the bounds. A degenerate
/// range (`min == max`) yields [`NEUTRAL_SCORE`].
///
/// # Examples
/// ```
/// use dropzone_scorer::normalize;
///
/// assert_eq!(normalize(25.0, 0.0, 50.0), 5.0);
/// assert_eq!(normalize(80.0, 0.0, 50.0), 10.0);
/// assert_eq!(normalize(5.0, 5.0, 5.0), 5.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::float_cmp,
    reason = "rescaling divides by the declared span, which is checked for zero first"
)]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return NEUTRAL_SCORE;
    }
    ((value - min) / (max - min) * MAX_SCORE).clamp(0.0, MAX_SCORE)
}

/// Round half away from zero to two decimal places.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by one hundred and back"
)]
pub(crate) fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
