//! Explicitly owned session state.
//!
//! A [`Session`] holds the entry list and display options of one visualiser
//! and hands them to the stateless engine on every evaluation. A
//! [`SolverSession`] does the same for the unknown-force solver. Neither type
//! caches results; each evaluation recomputes everything.

use log::{debug, info};
use thiserror::Error;

use crate::constants::PALETTE;
use crate::engine::{evaluate, Report};
use crate::entry::{Dimension, VectorEntry};
use crate::presentation::DisplayOptions;
use crate::solver::{solve, KnownForce, Solution, TargetResultant};

/// Errors raised when a session is asked about a row it does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No entry at `index`.
    #[error("no vector entry at index {index} (session has {len})")]
    NoSuchEntry {
        /// Requested index.
        index: usize,
        /// Number of entries.
        len: usize,
    },
    /// No known force at `index`.
    #[error("no known force at index {index} (solver has {len})")]
    NoSuchForce {
        /// Requested index.
        index: usize,
        /// Number of known forces.
        len: usize,
    },
}

fn palette_color(index: usize) -> &'static str {
    PALETTE.get(index % PALETTE.len()).copied().unwrap_or(PALETTE[0])
}

/// Entry list and display options of one 2D or 3D visualiser.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    dimension: Dimension,
    entries: Vec<VectorEntry>,
    options: DisplayOptions,
    color_index: usize,
}

impl Session {
    /// A session holding a single default zero entry.
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self::with_options(dimension, DisplayOptions::for_dimension(dimension))
    }

    /// A fresh session using `options`.
    #[must_use]
    pub fn with_options(dimension: Dimension, options: DisplayOptions) -> Self {
        Self {
            dimension,
            entries: vec![VectorEntry::default()],
            options,
            color_index: 1,
        }
    }

    /// A session seeded with `entries` instead of the default row.
    ///
    /// The colour cycle continues after the seeded rows.
    #[must_use]
    pub fn from_entries(
        dimension: Dimension,
        entries: Vec<VectorEntry>,
        options: DisplayOptions,
    ) -> Self {
        let color_index = entries.len().max(1);
        Self {
            dimension,
            entries,
            options,
            color_index,
        }
    }

    /// Dimension of the visualiser.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Current entries in row order.
    #[must_use]
    pub fn entries(&self) -> &[VectorEntry] {
        &self.entries
    }

    /// Current display options.
    #[must_use]
    pub const fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Mutable access to the display options.
    pub fn options_mut(&mut self) -> &mut DisplayOptions {
        &mut self.options
    }

    /// Append a zero entry coloured with the next palette colour and return
    /// its index.
    pub fn add_row(&mut self) -> usize {
        let color = palette_color(self.color_index);
        self.color_index += 1;
        self.entries.push(VectorEntry::default().with_color(color));
        debug!("added vector row {} ({color})", self.entries.len());
        self.entries.len() - 1
    }

    /// Mutable access to the entry at `index`.
    ///
    /// # Errors
    /// Returns [`SessionError::NoSuchEntry`] when `index` is out of range.
    pub fn entry_mut(&mut self, index: usize) -> Result<&mut VectorEntry, SessionError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(SessionError::NoSuchEntry { index, len })
    }

    /// Replace the entry at `index`.
    ///
    /// # Errors
    /// Returns [`SessionError::NoSuchEntry`] when `index` is out of range.
    pub fn update(&mut self, index: usize, entry: VectorEntry) -> Result<(), SessionError> {
        *self.entry_mut(index)? = entry;
        Ok(())
    }

    /// Delete the entry at `index` and return it.
    ///
    /// # Errors
    /// Returns [`SessionError::NoSuchEntry`] when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<VectorEntry, SessionError> {
        let len = self.entries.len();
        if index >= len {
            return Err(SessionError::NoSuchEntry { index, len });
        }
        Ok(self.entries.remove(index))
    }

    /// Reset to a single default zero entry and restart the colour cycle.
    pub fn clear(&mut self) {
        info!("clearing {} vector rows", self.entries.len());
        self.entries = vec![VectorEntry::default()];
        self.color_index = 1;
    }

    /// Evaluate the current entries.
    #[must_use]
    pub fn evaluate(&self) -> Report {
        evaluate(&self.entries, self.dimension, &self.options)
    }
}

/// Known forces and target of the unknown-force solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSession {
    known: Vec<KnownForce>,
    target: TargetResultant,
    color_index: usize,
}

impl Default for SolverSession {
    fn default() -> Self {
        Self {
            known: vec![
                KnownForce::new(450.0, 45.0).with_color(palette_color(0)),
                KnownForce::new(200.0, 0.0).with_color(palette_color(1)),
            ],
            target: TargetResultant::default(),
            color_index: 2,
        }
    }
}

impl SolverSession {
    /// A solver with explicit known forces and target.
    #[must_use]
    pub fn new(known: Vec<KnownForce>, target: TargetResultant) -> Self {
        let color_index = known.len();
        Self {
            known,
            target,
            color_index,
        }
    }

    /// Current known forces.
    #[must_use]
    pub fn known(&self) -> &[KnownForce] {
        &self.known
    }

    /// Current target resultant.
    #[must_use]
    pub const fn target(&self) -> &TargetResultant {
        &self.target
    }

    /// Replace the target resultant.
    pub fn set_target(&mut self, target: TargetResultant) {
        self.target = target;
    }

    /// Append a zero force coloured with the next palette colour and return
    /// its index.
    pub fn add_known(&mut self) -> usize {
        let color = palette_color(self.color_index);
        self.color_index += 1;
        self.known.push(KnownForce::new(0.0, 0.0).with_color(color));
        self.known.len() - 1
    }

    /// Mutable access to the known force at `index`.
    ///
    /// # Errors
    /// Returns [`SessionError::NoSuchForce`] when `index` is out of range.
    pub fn known_mut(&mut self, index: usize) -> Result<&mut KnownForce, SessionError> {
        let len = self.known.len();
        self.known
            .get_mut(index)
            .ok_or(SessionError::NoSuchForce { index, len })
    }

    /// Delete the known force at `index` and return it.
    ///
    /// # Errors
    /// Returns [`SessionError::NoSuchForce`] when `index` is out of range.
    pub fn remove_known(&mut self, index: usize) -> Result<KnownForce, SessionError> {
        let len = self.known.len();
        if index >= len {
            return Err(SessionError::NoSuchForce { index, len });
        }
        Ok(self.known.remove(index))
    }

    /// Empty the known-force list and restart the colour cycle.
    pub fn clear(&mut self) {
        self.known.clear();
        self.color_index = 0;
    }

    /// Solve for the unknown force.
    #[must_use]
    pub fn solve(&self) -> Solution {
        solve(&self.known, &self.target)
    }
}
