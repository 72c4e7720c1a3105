//! Convenience constructors for entries and forces used in tests.

use glam::DVec3;
use statica::{
    EntrySpec, HybridOverride, KnownForce, ReferenceAxis, VectorEntry, XSign, PALETTE,
};

/// Fluent builder over [`VectorEntry`].
#[derive(Clone, Debug, Default)]
pub struct EntryBuilder {
    entry: VectorEntry,
}

impl EntryBuilder {
    /// Start from a Cartesian entry.
    ///
    /// # Examples
    /// ```
    /// use test_utils::EntryBuilder;
    /// let entry = EntryBuilder::cartesian(3.0, 4.0, 0.0).magnitude(10.0).build();
    /// assert!((entry.magnitude - 10.0).abs() < f64::EPSILON);
    /// ```
    pub fn cartesian(x: f64, y: f64, z: f64) -> Self {
        Self {
            entry: VectorEntry::cartesian(x, y, z),
        }
    }

    /// Start from a direction-cosine entry.
    pub fn direction_cosine(magnitude: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            entry: VectorEntry::direction_cosine(magnitude, alpha, beta, gamma),
        }
    }

    /// Start from an angle measured from the X-axis.
    pub fn angle_from_x(magnitude: f64, theta: f64) -> Self {
        Self {
            entry: VectorEntry::angle_from_axis(magnitude, theta, ReferenceAxis::X),
        }
    }

    /// Start from an angle measured from the Y-axis.
    pub fn angle_from_y(magnitude: f64, theta: f64) -> Self {
        Self {
            entry: VectorEntry::angle_from_axis(magnitude, theta, ReferenceAxis::Y),
        }
    }

    /// Set the force magnitude.
    pub fn magnitude(mut self, magnitude: f64) -> Self {
        self.entry.magnitude = magnitude;
        self
    }

    /// Attach a hybrid override; `z` of `None` means "Z not given".
    pub fn hybrid(mut self, beta: f64, z: Option<f64>, x_sign: XSign) -> Self {
        self.entry.set_hybrid(Some(HybridOverride { beta, z, x_sign }));
        self
    }

    /// Use the `n`-th palette colour.
    pub fn palette(mut self, n: usize) -> Self {
        self.entry.color = PALETTE[n % PALETTE.len()].to_owned();
        self
    }

    /// Finish building.
    pub fn build(self) -> VectorEntry {
        self.entry
    }
}

impl From<EntryBuilder> for VectorEntry {
    fn from(builder: EntryBuilder) -> Self {
        builder.build()
    }
}

/// A known force of `magnitude` at `theta` degrees.
pub fn known(magnitude: f64, theta: f64) -> KnownForce {
    KnownForce::new(magnitude, theta)
}

/// Axis angles `(α, β, γ)` of a fixed set of unit directions spread over
/// every octant, including axis-aligned and diagonal ones.
pub fn consistent_directions() -> Vec<(f64, f64, f64)> {
    let directions = [
        DVec3::X,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(-1.0, 2.0, 0.5),
        DVec3::new(0.3, -0.4, -2.0),
        DVec3::new(-3.0, -1.0, 4.0),
        DVec3::new(2.0, 0.0, -1.0),
    ];
    directions
        .into_iter()
        .map(|direction| {
            let unit = direction.normalize();
            (
                unit.x.acos().to_degrees(),
                unit.y.acos().to_degrees(),
                unit.z.acos().to_degrees(),
            )
        })
        .collect()
}

/// Whether `entry` is Cartesian.
pub fn is_cartesian(entry: &VectorEntry) -> bool {
    matches!(entry.spec, EntrySpec::Cartesian { .. })
}
