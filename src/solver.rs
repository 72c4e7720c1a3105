//! Inverse solver for a single unknown planar force.
//!
//! Given known forces and a desired resultant, the solver finds the one force
//! `D` with `ΣF + D = R`. The closing check is recomputed from the solved
//! components rather than assumed, so callers can show it next to the result.

use glam::DVec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{PALETTE, SOLVER_CHECK_TOLERANCE};
use crate::geometry::{angle_from_components, polar_components};

/// A known force given by magnitude and angle from the X-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownForce {
    /// Magnitude in newtons.
    pub magnitude: f64,
    /// Angle from the positive X-axis in degrees.
    pub theta: f64,
    /// Presentation colour.
    #[serde(default = "default_force_color")]
    pub color: String,
}

fn default_force_color() -> String {
    PALETTE[0].to_owned()
}

impl KnownForce {
    /// A force of `magnitude` at `theta` degrees.
    #[must_use]
    pub fn new(magnitude: f64, theta: f64) -> Self {
        Self {
            magnitude,
            theta,
            color: default_force_color(),
        }
    }

    /// Set the presentation colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// `(F·cosθ, F·sinθ)`.
    #[must_use]
    pub fn components(&self) -> DVec2 {
        polar_components(self.magnitude, self.theta)
    }
}

/// How the direction of the target resultant was specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetDirection {
    /// Angle φ from the positive X-axis, in degrees.
    FromX {
        /// The angle.
        phi: f64,
    },
    /// Along an x′ axis rotated by α from X; the resultant lies on that axis.
    AlongRotatedAxis {
        /// Rotation of x′ from X, in degrees.
        alpha: f64,
    },
}

impl TargetDirection {
    /// The equivalent angle from the X-axis.
    #[must_use]
    pub const fn phi(&self) -> f64 {
        match self {
            Self::FromX { phi } => *phi,
            Self::AlongRotatedAxis { alpha } => *alpha,
        }
    }
}

/// The resultant the known forces plus the unknown force must produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetResultant {
    /// Magnitude in newtons.
    pub magnitude: f64,
    /// Direction specification.
    pub direction: TargetDirection,
}

impl Default for TargetResultant {
    fn default() -> Self {
        Self {
            magnitude: 1000.0,
            direction: TargetDirection::FromX { phi: 0.0 },
        }
    }
}

/// Target resultant resolved into components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetComponents {
    /// `|R|`.
    pub magnitude: f64,
    /// Angle from the X-axis in degrees.
    pub phi: f64,
    /// `(|R|·cosφ, |R|·sinφ)`.
    pub components: DVec2,
}

/// Result of re-adding the solved force to the known sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verification {
    /// `S + D`.
    pub sum: DVec2,
    /// `(S + D) − T`.
    pub residual: DVec2,
    /// Whether the residual is within tolerance.
    pub closes: bool,
}

/// Check that `known_sum + unknown` reproduces `target`.
///
/// The tolerance is relative to the size of the target so large forces do not
/// fail on rounding alone.
#[must_use]
pub fn verify(known_sum: DVec2, unknown: DVec2, target: DVec2) -> Verification {
    let sum = known_sum + unknown;
    let residual = sum - target;
    let scale = target.length().max(known_sum.length()).max(1.0);
    Verification {
        sum,
        residual,
        closes: residual.abs().max_element() <= SOLVER_CHECK_TOLERANCE * scale,
    }
}

/// The solved unknown force and everything needed to present it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    /// Components of each known force, in input order.
    pub known_components: Vec<DVec2>,
    /// `S`, the sum of the known forces.
    pub known_sum: DVec2,
    /// The target in components.
    pub target: TargetComponents,
    /// `D = T − S`.
    pub unknown: DVec2,
    /// `|D|`.
    pub magnitude: f64,
    /// Angle of `D` from the X-axis; `None` when `D` is the zero vector.
    pub angle: Option<f64>,
    /// Closing check `S + D = T`.
    pub check: Verification,
}

/// Solve for the single force that closes `known` onto `target`.
///
/// # Examples
/// ```
/// use statica::solver::{solve, KnownForce, TargetDirection, TargetResultant};
/// let target = TargetResultant {
///     magnitude: 10.0,
///     direction: TargetDirection::FromX { phi: 0.0 },
/// };
/// let solution = solve(&[KnownForce::new(4.0, 0.0)], &target);
/// assert!((solution.magnitude - 6.0).abs() < 1e-9);
/// assert!(solution.check.closes);
/// ```
#[must_use]
pub fn solve(known: &[KnownForce], target: &TargetResultant) -> Solution {
    let known_components: Vec<DVec2> = known.iter().map(KnownForce::components).collect();
    let known_sum = known_components
        .iter()
        .fold(DVec2::ZERO, |acc, components| acc + *components);
    let phi = target.direction.phi();
    let target_components = polar_components(target.magnitude, phi);
    let unknown = target_components - known_sum;
    let check = verify(known_sum, unknown, target_components);
    debug!(
        "solved unknown force from {} known forces: D = ({:.4}, {:.4})",
        known.len(),
        unknown.x,
        unknown.y
    );
    Solution {
        known_components,
        known_sum,
        target: TargetComponents {
            magnitude: target.magnitude,
            phi,
            components: target_components,
        },
        unknown,
        magnitude: unknown.length(),
        angle: angle_from_components(unknown.x, unknown.y),
        check,
    }
}
