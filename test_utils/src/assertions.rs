//! Tolerance assertions for resolved vectors.

use glam::{DVec2, DVec3};

/// Assert that `actual` matches `expected` component-wise within `tolerance`.
///
/// # Panics
/// Panics with both vectors in the message when any component differs by more
/// than `tolerance`.
pub fn assert_vec3_close(actual: DVec3, expected: (f64, f64, f64), tolerance: f64) {
    let wanted = DVec3::from(expected);
    assert!(
        actual.abs_diff_eq(wanted, tolerance),
        "expected {wanted:?}, got {actual:?} (tolerance {tolerance})"
    );
}

/// Assert that `actual` matches `expected` component-wise within `tolerance`.
///
/// # Panics
/// Panics with both vectors in the message when any component differs by more
/// than `tolerance`.
pub fn assert_vec2_close(actual: DVec2, expected: (f64, f64), tolerance: f64) {
    let wanted = DVec2::from(expected);
    assert!(
        actual.abs_diff_eq(wanted, tolerance),
        "expected {wanted:?}, got {actual:?} (tolerance {tolerance})"
    );
}
