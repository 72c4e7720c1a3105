//! Scalar geometry helpers.
//! Norms, axis angles and polar decomposition used by every other module.
use glam::{DVec2, DVec3};
use serde::Serialize;

use crate::constants::ZERO_MAGNITUDE;
use crate::numeric::acos_deg;

/// Returns the Euclidean norm of a 2D vector given by its components.
///
/// # Examples
/// ```
/// use statica::geometry::norm2;
/// assert!((norm2(3.0, 4.0) - 5.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn norm2(x: f64, y: f64) -> f64 {
    DVec2::new(x, y).length()
}

/// Returns the Euclidean norm of a 3D vector given by its components.
///
/// # Examples
/// ```
/// use statica::geometry::norm3;
/// assert!((norm3(3.0, 4.0, 12.0) - 13.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn norm3(x: f64, y: f64, z: f64) -> f64 {
    DVec3::new(x, y, z).length()
}

/// Angle of `(x, y)` measured from the positive X-axis, in degrees.
///
/// The result lies in `(-180, 180]`. Returns `None` when both components are
/// effectively zero, because the zero vector has no direction.
///
/// # Examples
/// ```
/// use statica::geometry::angle_from_components;
/// let theta = angle_from_components(3.0, 4.0).unwrap();
/// assert!((theta - 53.130_102_354).abs() < 1e-6);
/// assert_eq!(angle_from_components(0.0, 0.0), None);
/// ```
#[must_use]
pub fn angle_from_components(x: f64, y: f64) -> Option<f64> {
    if norm2(x, y) < ZERO_MAGNITUDE {
        return None;
    }
    let theta = y.atan2(x).to_degrees();
    // atan2 reports -180 for (-x, -0.0); fold it onto the closed end.
    Some(if theta <= -180.0 { theta + 360.0 } else { theta })
}

/// Decompose a force of `magnitude` at `theta_deg` from the X-axis into
/// `(F·cosθ, F·sinθ)`.
///
/// # Examples
/// ```
/// use statica::geometry::polar_components;
/// let v = polar_components(2.0, 90.0);
/// assert!(v.x.abs() < 1e-12);
/// assert!((v.y - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn polar_components(magnitude: f64, theta_deg: f64) -> DVec2 {
    let (sin, cos) = theta_deg.to_radians().sin_cos();
    DVec2::new(magnitude * cos, magnitude * sin)
}

/// Angles between a 3D vector and the X, Y and Z axes, with its magnitude.
///
/// Each angle is `None` when the vector is too short to have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionAngles {
    /// Angle from the positive X-axis in degrees.
    pub alpha: Option<f64>,
    /// Angle from the positive Y-axis in degrees.
    pub beta: Option<f64>,
    /// Angle from the positive Z-axis in degrees.
    pub gamma: Option<f64>,
    /// Euclidean norm of the vector; zero for degenerate input.
    pub magnitude: f64,
}

impl DirectionAngles {
    /// Angles as an `[α, β, γ]` array.
    #[must_use]
    pub const fn as_array(&self) -> [Option<f64>; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// Returns `true` when the angles are defined.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        self.alpha.is_some()
    }
}

/// Compute the direction-cosine angles of `vector`.
///
/// Each angle is `acos(component / |v|)` in degrees, range `[0, 180]`. The
/// ratio is clamped to `[-1, 1]` first. Vectors shorter than the zero
/// threshold yield undefined angles and a magnitude of zero.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use statica::geometry::direction_cosine_angles;
/// let angles = direction_cosine_angles(DVec3::new(0.0, 5.0, 0.0));
/// let alpha = angles.alpha.unwrap();
/// assert!((alpha - 90.0).abs() < 1e-9);
/// assert_eq!(angles.beta, Some(0.0));
/// assert!((angles.magnitude - 5.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn direction_cosine_angles(vector: DVec3) -> DirectionAngles {
    let magnitude = vector.length();
    if magnitude < ZERO_MAGNITUDE {
        return DirectionAngles {
            alpha: None,
            beta: None,
            gamma: None,
            magnitude: 0.0,
        };
    }
    DirectionAngles {
        alpha: Some(acos_deg(vector.x / magnitude)),
        beta: Some(acos_deg(vector.y / magnitude)),
        gamma: Some(acos_deg(vector.z / magnitude)),
        magnitude,
    }
}
