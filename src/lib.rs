#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the statics vector engine.
//!
//! Entries typed as Cartesian components, direction cosines or an angle from
//! an axis are normalised into canonical vectors, summed into a resultant and
//! explained step by step. A separate solver finds the single force that
//! closes a set of known forces onto a target resultant.
pub mod aggregate;
pub mod config;
pub mod constants;
pub mod engine;
pub mod entry;
pub mod explanation;
pub mod geometry;
pub mod logging;
pub mod normalizer;
pub mod numeric;
pub mod presentation;
pub mod session;
pub mod solver;
pub use constants::*;

// Re-export commonly used items
pub use aggregate::{aggregate, CanonicalVector, Direction, Resultant};
pub use engine::{evaluate, Diagnostic, Report, Severity};
pub use entry::{Dimension, EntrySpec, HybridOverride, ReferenceAxis, VectorEntry, XSign};
pub use geometry::{angle_from_components, direction_cosine_angles, norm2, norm3, DirectionAngles};
pub use logging::init as init_logging;
pub use normalizer::{is_blank, resolve, resolve_in, HybridError, Resolved};
pub use presentation::DisplayOptions;
pub use session::{Session, SessionError, SolverSession};
pub use solver::{solve, KnownForce, Solution, TargetDirection, TargetResultant};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use statica::prelude::*;
    //! ```

    pub use crate::evaluate;
    pub use crate::solve;
    pub use crate::Dimension;
    pub use crate::DisplayOptions;
    pub use crate::Session;
    pub use crate::SolverSession;
    pub use crate::VectorEntry;
    pub use glam::{DVec2, DVec3};
}
