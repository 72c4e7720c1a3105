//! Conversion of heterogeneous entries into canonical Cartesian vectors.
//!
//! Every entry mode funnels through [`resolve_in`], which returns the
//! resolved vector together with a [`Derivation`] recording the branch taken
//! and its intermediate values. The explanation generator formats those
//! values verbatim, so text and numbers cannot drift apart.

use glam::{DVec2, DVec3};
use log::{error, warn};
use serde::Serialize;
use thiserror::Error;

use crate::constants::{DIRECTION_COSINE_TOLERANCE, HYBRID_REST_TOLERANCE, ZERO_MAGNITUDE};
use crate::entry::{Dimension, EntrySpec, HybridOverride, ReferenceAxis, VectorEntry, XSign};
use crate::geometry::polar_components;
use crate::numeric::clamp_noise;

/// Why a hybrid override could not reconstruct X.
///
/// Neither case is fatal: the entry falls back to its typed components.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HybridError {
    /// `cos β` is zero, so Y carries no information about the magnitude.
    #[error("β = {beta:.2}° makes Y independent of the force; X cannot be reconstructed")]
    Unresolvable {
        /// Offending angle in degrees.
        beta: f64,
    },
    /// The given Y and Z already exceed the magnitude implied by β.
    #[error("β = {beta:.2}°, Y = {y:.2} and Z = {z:.2} are inconsistent: F² − Y² − Z² = {rest:.2} < 0")]
    Infeasible {
        /// Angle from the Y-axis in degrees.
        beta: f64,
        /// Y component used for the estimate.
        y: f64,
        /// Z component used for the estimate.
        z: f64,
        /// Negative remainder `F² − Y² − Z²`.
        rest: f64,
    },
}

impl HybridError {
    /// Whether the failure is a plain warning rather than a validation error.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Unresolvable { .. })
    }
}

/// Intermediate values of a successful hybrid reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HybridSolution {
    /// Angle from the Y-axis in degrees.
    pub beta: f64,
    /// `cos β`.
    pub cos_beta: f64,
    /// Y component the estimate starts from.
    pub y: f64,
    /// Estimated force `F = Y / cos β`; may be negative.
    pub force: f64,
    /// Z component used (zero when not given).
    pub z: f64,
    /// `F² − Y² − Z²` after clamping noise to zero.
    pub rest: f64,
    /// Chosen sign of X.
    pub x_sign: XSign,
    /// Reconstructed X component.
    pub x: f64,
}

/// Reconstruct X (and Z) from β, Y and an optional known Z.
///
/// # Errors
/// Returns [`HybridError::Unresolvable`] when `|cos β|` is effectively zero and
/// [`HybridError::Infeasible`] when `F² − Y² − Z²` is clearly negative.
///
/// # Examples
/// ```
/// use statica::entry::HybridOverride;
/// use statica::normalizer::reconstruct_hybrid;
/// let hybrid = HybridOverride { beta: 60.0, z: Some(0.0), ..HybridOverride::default() };
/// let solution = reconstruct_hybrid(&hybrid, 5.0).unwrap();
/// assert!((solution.force - 10.0).abs() < 1e-9);
/// assert!((solution.x - 75.0_f64.sqrt()).abs() < 1e-9);
/// ```
pub fn reconstruct_hybrid(hybrid: &HybridOverride, y: f64) -> Result<HybridSolution, HybridError> {
    let cos_beta = hybrid.beta.to_radians().cos();
    if cos_beta.abs() < ZERO_MAGNITUDE {
        return Err(HybridError::Unresolvable { beta: hybrid.beta });
    }
    let force = y / cos_beta;
    let z = hybrid.z.unwrap_or(0.0);
    let rest = force * force - y * y - z * z;
    if rest < HYBRID_REST_TOLERANCE {
        return Err(HybridError::Infeasible {
            beta: hybrid.beta,
            y,
            z,
            rest,
        });
    }
    let clamped = clamp_noise(rest);
    Ok(HybridSolution {
        beta: hybrid.beta,
        cos_beta,
        y,
        force,
        z,
        rest: clamped,
        x_sign: hybrid.x_sign,
        x: hybrid.x_sign.factor() * clamped.sqrt(),
    })
}

/// How a Cartesian triple became the final vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartesianScaling {
    /// Components used as they are.
    Direct {
        /// The components.
        components: DVec3,
    },
    /// Components rescaled so their norm equals the entry magnitude.
    Scaled {
        /// Components before scaling.
        base: DVec3,
        /// Requested magnitude.
        magnitude: f64,
        /// Norm of `base`.
        base_norm: f64,
        /// `magnitude / base_norm`.
        scale: f64,
        /// Scaled components.
        result: DVec3,
    },
}

impl CartesianScaling {
    /// The final components.
    #[must_use]
    pub const fn result(&self) -> DVec3 {
        match self {
            Self::Direct { components } => *components,
            Self::Scaled { result, .. } => *result,
        }
    }
}

/// Intermediate values of a direction-cosine resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectionCosineStep {
    /// Force magnitude.
    pub magnitude: f64,
    /// `[α, β, γ]` in degrees.
    pub angles: DVec3,
    /// `cos² α + cos² β + cos² γ` of the raw angles.
    pub cos_sum: f64,
    /// Whether the cosines were rescaled by `1/√s`.
    pub normalized: bool,
    /// Cosines actually multiplied by the magnitude.
    pub cosines: DVec3,
    /// Resolved vector; zero when the angles are degenerate.
    pub result: DVec3,
}

impl DirectionCosineStep {
    /// The angles do not describe any direction.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.cos_sum <= ZERO_MAGNITUDE
    }
}

/// Intermediate values of an angle-from-axis resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleStep {
    /// Force magnitude.
    pub magnitude: f64,
    /// Angle in degrees.
    pub theta: f64,
    /// Axis the angle is measured from.
    pub axis: ReferenceAxis,
    /// Resolved vector, always in the XY plane.
    pub result: DVec3,
}

/// The branch taken while resolving one entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Derivation {
    /// Cartesian input, possibly with a hybrid reconstruction first.
    Cartesian {
        /// Outcome of the hybrid override, if one was attached.
        hybrid: Option<Result<HybridSolution, HybridError>>,
        /// Magnitude scaling applied to the (reconstructed) components.
        scaling: CartesianScaling,
    },
    /// Direction-cosine input.
    DirectionCosine(DirectionCosineStep),
    /// Angle-from-axis input.
    AngleFromAxis(AngleStep),
}

/// A resolved entry: its canonical vector and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolved {
    /// Canonical components; `z` is zero in 2D.
    pub vector: DVec3,
    /// Recorded branch and intermediate values.
    pub derivation: Derivation,
}

impl Resolved {
    /// The hybrid failure recorded during resolution, if any.
    #[must_use]
    pub fn hybrid_error(&self) -> Option<HybridError> {
        match self.derivation {
            Derivation::Cartesian {
                hybrid: Some(Err(err)),
                ..
            } => Some(err),
            _ => None,
        }
    }
}

/// Typed components an entry carries before any reconstruction, restricted to
/// `dimension`.
fn raw_components(x: f64, y: f64, z: f64, dimension: Dimension) -> DVec3 {
    match dimension {
        Dimension::Two => DVec3::new(x, y, 0.0),
        Dimension::Three => DVec3::new(x, y, z),
    }
}

fn scale_cartesian(base: DVec3, magnitude: f64) -> CartesianScaling {
    let base_norm = base.length();
    if magnitude > 0.0 && base_norm > ZERO_MAGNITUDE {
        let scale = magnitude / base_norm;
        CartesianScaling::Scaled {
            base,
            magnitude,
            base_norm,
            scale,
            result: base * scale,
        }
    } else {
        CartesianScaling::Direct { components: base }
    }
}

/// Resolve direction cosines given in degrees into a vector of `magnitude`.
///
/// When `normalize` is set and the squared cosines sum to something farther
/// than the tolerance from one, the cosines are rescaled by `1/√s` first.
#[must_use]
pub fn resolve_direction_cosines(
    magnitude: f64,
    angles: DVec3,
    normalize: bool,
) -> DirectionCosineStep {
    let raw = DVec3::new(
        angles.x.to_radians().cos(),
        angles.y.to_radians().cos(),
        angles.z.to_radians().cos(),
    );
    let cos_sum = raw.length_squared();
    if cos_sum <= ZERO_MAGNITUDE {
        return DirectionCosineStep {
            magnitude,
            angles,
            cos_sum,
            normalized: false,
            cosines: raw,
            result: DVec3::ZERO,
        };
    }
    let normalized = normalize && (cos_sum - 1.0).abs() > DIRECTION_COSINE_TOLERANCE;
    let cosines = if normalized {
        raw / cos_sum.sqrt()
    } else {
        raw
    };
    DirectionCosineStep {
        magnitude,
        angles,
        cos_sum,
        normalized,
        cosines,
        result: cosines * magnitude,
    }
}

/// Resolve a force of `magnitude` at `theta` degrees from `axis`.
///
/// Measuring from Y swaps the roles of sine and cosine.
#[must_use]
pub fn resolve_angle_from_axis(magnitude: f64, theta: f64, axis: ReferenceAxis) -> AngleStep {
    let planar = polar_components(magnitude, theta);
    let oriented = match axis {
        ReferenceAxis::X => planar,
        ReferenceAxis::Y => DVec2::new(planar.y, planar.x),
    };
    AngleStep {
        magnitude,
        theta,
        axis,
        result: oriented.extend(0.0),
    }
}

/// Resolve `entry` in `dimension`.
///
/// Pure function of the entry fields and the normalisation flag. In 2D the
/// typed Z and any hybrid override are ignored.
#[must_use]
pub fn resolve_in(entry: &VectorEntry, dimension: Dimension, normalize: bool) -> Resolved {
    let magnitude = entry.effective_magnitude();
    let derivation = match entry.spec {
        EntrySpec::Cartesian { x, y, z, hybrid } => {
            let typed = raw_components(x, y, z, dimension);
            let hybrid_outcome = match (dimension, hybrid) {
                (Dimension::Three, Some(overlay)) => Some(reconstruct_hybrid(&overlay, y)),
                _ => None,
            };
            let base = match hybrid_outcome {
                Some(Ok(solution)) => DVec3::new(solution.x, y, solution.z),
                Some(Err(err)) => {
                    log_hybrid_failure(&err);
                    typed
                }
                None => typed,
            };
            Derivation::Cartesian {
                hybrid: hybrid_outcome,
                scaling: scale_cartesian(base, magnitude),
            }
        }
        EntrySpec::DirectionCosine { alpha, beta, gamma } => Derivation::DirectionCosine(
            resolve_direction_cosines(magnitude, DVec3::new(alpha, beta, gamma), normalize),
        ),
        EntrySpec::AngleFromAxis { theta, axis } => {
            Derivation::AngleFromAxis(resolve_angle_from_axis(magnitude, theta, axis))
        }
    };
    let vector = match &derivation {
        Derivation::Cartesian { scaling, .. } => scaling.result(),
        Derivation::DirectionCosine(step) => step.result,
        Derivation::AngleFromAxis(step) => step.result,
    };
    Resolved { vector, derivation }
}

/// Resolve `entry` as a 3D vector.
///
/// # Examples
/// ```
/// use statica::{normalizer::resolve, VectorEntry};
/// let v = resolve(&VectorEntry::cartesian(3.0, 4.0, 0.0).with_magnitude(10.0), true);
/// assert!((v.x - 6.0).abs() < 1e-12);
/// assert!((v.y - 8.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn resolve(entry: &VectorEntry, normalize: bool) -> DVec3 {
    resolve_in(entry, Dimension::Three, normalize).vector
}

fn log_hybrid_failure(err: &HybridError) {
    if err.is_warning() {
        warn!("hybrid override skipped: {err}");
    } else {
        error!("hybrid override rejected: {err}");
    }
}

/// Whether `entry` carries no vector and should be left out of aggregation.
///
/// Cartesian entries are blank when neither a magnitude nor any typed
/// component is given; other modes are blank without a positive magnitude.
#[must_use]
pub fn is_blank(entry: &VectorEntry, dimension: Dimension) -> bool {
    let no_magnitude = entry.magnitude <= 0.0;
    match entry.spec {
        EntrySpec::Cartesian { x, y, z, .. } => {
            no_magnitude && raw_components(x, y, z, dimension).length() <= 0.0
        }
        EntrySpec::DirectionCosine { .. } | EntrySpec::AngleFromAxis { .. } => no_magnitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_below_zero_is_clamped() {
        // Y = 1, β = 0 gives F = 1 so the remainder cancels exactly to zero.
        let hybrid = HybridOverride {
            beta: 0.0,
            z: None,
            x_sign: XSign::Negative,
        };
        let solution = reconstruct_hybrid(&hybrid, 1.0).unwrap();
        assert!(solution.rest >= 0.0);
        assert!(solution.x.abs() < 1e-9);
    }

    #[test]
    fn two_dimensional_scaling_ignores_z() {
        let entry = VectorEntry::cartesian(3.0, 4.0, 100.0).with_magnitude(10.0);
        let resolved = resolve_in(&entry, Dimension::Two, true);
        assert!((resolved.vector.x - 6.0).abs() < 1e-12);
        assert!(resolved.vector.z.abs() < f64::EPSILON);
    }
}
