//! Numeric helpers guarding the engine against floating-point noise.
//!
//! These utilities clamp values that drift marginally outside their
//! mathematical domain and round numbers for display. They never change the
//! full-precision values the engine computes with.

use crate::constants::DISPLAY_DECIMALS;

/// Round `value` to the number of decimals used throughout the presentation
/// layer.
///
/// # Examples
/// ```
/// use statica::numeric::round_display;
/// assert_eq!(round_display(53.130_102), 53.13);
/// assert_eq!(round_display(-0.004), 0.0);
/// ```
#[must_use]
pub fn round_display(value: f64) -> f64 {
    let scale = 10_f64.powi(DISPLAY_DECIMALS);
    let rounded = (value * scale).round() / scale;
    // Normalise negative zero so tables never show "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round an optional angle for display, keeping `None` intact.
#[must_use]
pub fn round_display_opt(value: Option<f64>) -> Option<f64> {
    value.map(round_display)
}

/// Clamp a cosine argument into `[-1, 1]` so `acos` never returns NaN for
/// ratios that overshoot by rounding error.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Arc cosine in degrees of a ratio clamped into `[-1, 1]`.
///
/// # Examples
/// ```
/// use statica::numeric::acos_deg;
/// assert!((acos_deg(1.000_000_000_1) - 0.0).abs() < 1e-12);
/// assert!((acos_deg(0.0) - 90.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn acos_deg(ratio: f64) -> f64 {
    clamp_unit(ratio).acos().to_degrees()
}

/// Lift a value that sits just below zero because of cancellation back to
/// zero. Callers decide separately whether larger negatives are errors.
#[must_use]
pub fn clamp_noise(value: f64) -> f64 {
    value.max(0.0)
}
