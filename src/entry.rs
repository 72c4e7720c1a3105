//! Input records describing vectors before they are resolved.
//!
//! A [`VectorEntry`] is one row a user typed: a mode-specific [`EntrySpec`]
//! together with an optional force magnitude and a presentation colour. The
//! spec is a sum type so each mode only carries the fields it uses; the hybrid
//! override hangs off the Cartesian variant because it reinterprets typed
//! components.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::PALETTE;

/// Dimensionality of an evaluation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Dimension {
    /// Planar vectors; Z components are ignored.
    #[serde(rename = "2d")]
    #[value(name = "2d")]
    Two,
    /// Spatial vectors.
    #[default]
    #[serde(rename = "3d")]
    #[value(name = "3d")]
    Three,
}

impl Dimension {
    /// Number of axes in this dimension.
    #[must_use]
    pub const fn axes(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Two => f.write_str("2D"),
            Self::Three => f.write_str("3D"),
        }
    }
}

/// Axis an angle-from-axis entry measures its angle from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceAxis {
    /// θ is measured from the positive X-axis.
    #[default]
    X,
    /// θ is measured from the positive Y-axis.
    Y,
}

/// Sign chosen for the X component reconstructed by a hybrid override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XSign {
    /// X points along the positive axis.
    #[default]
    Positive,
    /// X points along the negative axis.
    Negative,
}

impl XSign {
    /// `1.0` or `-1.0`.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    /// Sign glyph used in derivation text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '−',
        }
    }
}

/// Partial 3D specification that reconstructs X from β and Y.
///
/// When attached to a Cartesian entry it replaces the typed X (and Z) with
/// values derived from `cos²α + cos²β + cos²γ = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HybridOverride {
    /// Angle between the vector and the Y-axis, in degrees.
    pub beta: f64,
    /// Known Z component; `None` means Z is taken as zero.
    #[serde(default)]
    pub z: Option<f64>,
    /// Sign of the reconstructed X component.
    #[serde(default)]
    pub x_sign: XSign,
}

/// Mode-specific fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EntrySpec {
    /// Explicit components, optionally rescaled to the entry magnitude.
    Cartesian {
        /// X component.
        #[serde(default)]
        x: f64,
        /// Y component.
        #[serde(default)]
        y: f64,
        /// Z component; ignored in 2D.
        #[serde(default)]
        z: f64,
        /// Optional hybrid reconstruction of X from β and Y (3D only).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hybrid: Option<HybridOverride>,
    },
    /// Magnitude plus the three axis angles α, β, γ in degrees (3D only).
    DirectionCosine {
        /// Angle from the X-axis.
        alpha: f64,
        /// Angle from the Y-axis.
        beta: f64,
        /// Angle from the Z-axis.
        gamma: f64,
    },
    /// Magnitude plus an angle from a reference axis, in the XY plane.
    AngleFromAxis {
        /// Angle in degrees.
        theta: f64,
        /// Axis `theta` is measured from.
        #[serde(default)]
        axis: ReferenceAxis,
    },
}

impl Default for EntrySpec {
    fn default() -> Self {
        Self::Cartesian {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            hybrid: None,
        }
    }
}

/// Discriminant of [`EntrySpec`], used in labels and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMode {
    /// See [`EntrySpec::Cartesian`].
    Cartesian,
    /// See [`EntrySpec::DirectionCosine`].
    DirectionCosine,
    /// See [`EntrySpec::AngleFromAxis`].
    AngleFromAxis,
}

impl fmt::Display for EntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cartesian => f.write_str("cart"),
            Self::DirectionCosine => f.write_str("dir"),
            Self::AngleFromAxis => f.write_str("angle"),
        }
    }
}

impl EntrySpec {
    /// The mode of this spec.
    #[must_use]
    pub const fn mode(&self) -> EntryMode {
        match self {
            Self::Cartesian { .. } => EntryMode::Cartesian,
            Self::DirectionCosine { .. } => EntryMode::DirectionCosine,
            Self::AngleFromAxis { .. } => EntryMode::AngleFromAxis,
        }
    }

    /// Whether the mode can be evaluated in `dimension`.
    ///
    /// Direction cosines need three axes; everything else works in both.
    #[must_use]
    pub const fn supports(&self, dimension: Dimension) -> bool {
        !matches!(
            (self, dimension),
            (Self::DirectionCosine { .. }, Dimension::Two)
        )
    }
}

/// One user-specified vector before resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorEntry {
    /// Mode and mode-specific fields.
    #[serde(flatten)]
    pub spec: EntrySpec,
    /// Force magnitude; zero or negative means "use the raw components".
    #[serde(default)]
    pub magnitude: f64,
    /// Presentation colour, irrelevant to the numerics.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    PALETTE[0].to_owned()
}

impl Default for VectorEntry {
    fn default() -> Self {
        Self {
            spec: EntrySpec::default(),
            magnitude: 0.0,
            color: default_color(),
        }
    }
}

impl VectorEntry {
    /// A Cartesian entry with no magnitude override.
    ///
    /// # Examples
    /// ```
    /// use statica::VectorEntry;
    /// let entry = VectorEntry::cartesian(3.0, 4.0, 0.0).with_magnitude(10.0);
    /// assert!((entry.magnitude - 10.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn cartesian(x: f64, y: f64, z: f64) -> Self {
        Self {
            spec: EntrySpec::Cartesian {
                x,
                y,
                z,
                hybrid: None,
            },
            ..Self::default()
        }
    }

    /// A direction-cosine entry.
    #[must_use]
    pub fn direction_cosine(magnitude: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            spec: EntrySpec::DirectionCosine { alpha, beta, gamma },
            magnitude,
            ..Self::default()
        }
    }

    /// An angle-from-axis entry.
    #[must_use]
    pub fn angle_from_axis(magnitude: f64, theta: f64, axis: ReferenceAxis) -> Self {
        Self {
            spec: EntrySpec::AngleFromAxis { theta, axis },
            magnitude,
            ..Self::default()
        }
    }

    /// Set the force magnitude.
    #[must_use]
    pub const fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Set the presentation colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Attach or detach a hybrid override.
    ///
    /// Has no effect on non-Cartesian entries. Passing `None` reverts to the
    /// literal components the user typed.
    #[must_use]
    pub fn with_hybrid(mut self, hybrid: Option<HybridOverride>) -> Self {
        self.set_hybrid(hybrid);
        self
    }

    /// In-place form of [`Self::with_hybrid`].
    pub fn set_hybrid(&mut self, hybrid: Option<HybridOverride>) {
        if let EntrySpec::Cartesian { hybrid: slot, .. } = &mut self.spec {
            *slot = hybrid;
        }
    }

    /// Magnitude with negatives treated as "not given".
    #[must_use]
    pub fn effective_magnitude(&self) -> f64 {
        self.magnitude.max(0.0)
    }
}
