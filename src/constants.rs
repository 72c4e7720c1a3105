//! Numeric tolerances and presentation defaults shared across the engine.
//!
//! The tolerances are the thresholds the statics toolbox has always used, so
//! derived vectors and derivation text stay stable between releases.

/// Below this magnitude a vector is treated as the zero vector and has no
/// defined direction.
pub const ZERO_MAGNITUDE: f64 = 1e-12;
/// Allowed deviation of `cos²α + cos²β + cos²γ` from one before direction
/// cosines are rescaled.
pub const DIRECTION_COSINE_TOLERANCE: f64 = 1e-3;
/// Most negative value of the hybrid remainder `F² − Y² − Z²` that is still
/// treated as floating-point noise.
pub const HYBRID_REST_TOLERANCE: f64 = -1e-9;
/// Tolerance used when checking that the solver's closing force sums to the
/// requested resultant.
pub const SOLVER_CHECK_TOLERANCE: f64 = 1e-9;
/// Axis spans narrower than this are widened to ±1 before padding.
pub const MIN_AXIS_SPAN: f64 = 1e-9;
/// Fraction of an axis span added on both sides when autoscaling.
pub const AXIS_PADDING: f64 = 0.15;
/// Number of decimals used for every displayed value.
pub const DISPLAY_DECIMALS: i32 = 2;

/// Plotly's default ten-colour qualitative palette; new rows cycle through it.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];
/// Default colour of the resultant vector.
pub const RESULTANT_COLOR: &str = "#e41a1c";
/// Colour of the solved unknown force in the solver plot.
pub const UNKNOWN_FORCE_COLOR: &str = "#d62728";
/// Colour of the dashed target resultant in the solver plot.
pub const TARGET_COLOR: &str = "#e41a1c";
