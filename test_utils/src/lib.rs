//! Utility helpers for tests.
//!
//! Builders for vector entries and known forces, plus tolerance assertions on
//! `glam` vectors.
pub mod assertions;
pub mod builders;

pub use assertions::{assert_vec2_close, assert_vec3_close};
pub use builders::{consistent_directions, is_cartesian, known, EntryBuilder};
