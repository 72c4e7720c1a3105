//! Summation of canonical vectors into a resultant.
//!
//! The resultant is recomputed from scratch on every call; entry counts are
//! small so there is nothing worth caching.

use glam::DVec3;
use serde::Serialize;

use crate::entry::Dimension;
use crate::geometry::{angle_from_components, direction_cosine_angles, DirectionAngles};

/// A resolved vector together with its presentation colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalVector {
    /// Cartesian components; `z` is zero in 2D.
    pub components: DVec3,
    /// Presentation colour.
    pub color: String,
}

impl CanonicalVector {
    /// Pair `components` with `color`.
    #[must_use]
    pub fn new(components: DVec3, color: impl Into<String>) -> Self {
        Self {
            components,
            color: color.into(),
        }
    }
}

/// Direction of a vector in the form suited to its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Direction {
    /// Angle from the X-axis in degrees; `None` for the zero vector.
    Planar {
        /// Angle in `(-180, 180]`.
        theta: Option<f64>,
    },
    /// Angles from the X, Y and Z axes.
    Spatial(DirectionAngles),
}

impl Direction {
    /// Direction of `components` in `dimension`.
    #[must_use]
    pub fn of(components: DVec3, dimension: Dimension) -> Self {
        match dimension {
            Dimension::Two => Self::Planar {
                theta: angle_from_components(components.x, components.y),
            },
            Dimension::Three => Self::Spatial(direction_cosine_angles(components)),
        }
    }

    /// Angles in axis order; one for 2D, three for 3D.
    #[must_use]
    pub fn angles(&self) -> Vec<Option<f64>> {
        match self {
            Self::Planar { theta } => vec![*theta],
            Self::Spatial(angles) => angles.as_array().to_vec(),
        }
    }

    /// Whether the direction is defined.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        match self {
            Self::Planar { theta } => theta.is_some(),
            Self::Spatial(angles) => angles.is_defined(),
        }
    }
}

/// Magnitude of `components` restricted to `dimension`.
#[must_use]
pub fn magnitude_in(components: DVec3, dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Two => components.truncate().length(),
        Dimension::Three => components.length(),
    }
}

/// Component-wise sum of a vector set with its magnitude and direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resultant {
    /// Summed components.
    pub components: DVec3,
    /// Euclidean norm of `components`.
    pub magnitude: f64,
    /// Direction; undefined for the zero resultant.
    pub direction: Direction,
}

impl Resultant {
    /// Build the resultant for already-summed `components`.
    #[must_use]
    pub fn from_components(components: DVec3, dimension: Dimension) -> Self {
        Self {
            components,
            magnitude: magnitude_in(components, dimension),
            direction: Direction::of(components, dimension),
        }
    }
}

/// Sum `vectors` into their resultant.
///
/// An empty set yields the zero vector with an undefined direction.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use statica::aggregate::{aggregate, CanonicalVector};
/// use statica::Dimension;
/// let vectors = [
///     CanonicalVector::new(DVec3::new(3.0, 0.0, 0.0), "#1f77b4"),
///     CanonicalVector::new(DVec3::new(0.0, 4.0, 0.0), "#ff7f0e"),
/// ];
/// let resultant = aggregate(&vectors, Dimension::Two);
/// assert!((resultant.magnitude - 5.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn aggregate(vectors: &[CanonicalVector], dimension: Dimension) -> Resultant {
    let sum = vectors
        .iter()
        .fold(DVec3::ZERO, |acc, vector| acc + vector.components);
    Resultant::from_components(sum, dimension)
}
