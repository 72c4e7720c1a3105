//! End-to-end evaluation of an entry list.
//!
//! `evaluate` runs the whole pipeline: filter blank entries, resolve the rest,
//! sum them, derive the explanation and map everything to presentation data.
//! It is a pure function of its arguments and never fails; per-entry problems
//! come back as [`Diagnostic`]s.

use log::debug;
use serde::Serialize;

use crate::aggregate::{aggregate, CanonicalVector, Resultant};
use crate::entry::{Dimension, VectorEntry};
use crate::explanation::explain;
use crate::normalizer::{is_blank, resolve_in, Resolved};
use crate::presentation::{plot_vectors, vector_rows, DisplayOptions, PlotData, TableRow};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The entry was evaluated with a fallback.
    Warning,
    /// The entry's input is invalid; a fallback or skip was applied.
    Error,
}

/// A user-visible message about one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based row number in the entry list.
    pub entry: usize,
    /// Severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

/// Everything derived from one entry list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Dimension the entries were evaluated in.
    pub dimension: Dimension,
    /// Resolved vectors of the included entries, in entry order.
    pub vectors: Vec<CanonicalVector>,
    /// Branch records matching `vectors`.
    pub resolved: Vec<Resolved>,
    /// Sum of `vectors`.
    pub resultant: Resultant,
    /// Step-by-step derivation lines.
    pub explanation: Vec<String>,
    /// Messages about individual entries.
    pub diagnostics: Vec<Diagnostic>,
    /// Plot primitives and axis layout.
    pub plot: PlotData,
    /// Results table including the resultant row.
    pub table: Vec<TableRow>,
}

/// Evaluate `entries` in `dimension` with `options`.
///
/// # Examples
/// ```
/// use statica::{engine::evaluate, Dimension, DisplayOptions, VectorEntry};
/// let entries = [VectorEntry::cartesian(3.0, 4.0, 0.0)];
/// let report = evaluate(&entries, Dimension::Two, &DisplayOptions::default());
/// assert!((report.resultant.magnitude - 5.0).abs() < 1e-12);
/// assert_eq!(report.table.len(), 2);
/// ```
#[must_use]
pub fn evaluate(entries: &[VectorEntry], dimension: Dimension, options: &DisplayOptions) -> Report {
    let mut diagnostics = Vec::new();
    let mut resolved = Vec::new();
    let mut vectors = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let row = index + 1;
        if !entry.spec.supports(dimension) {
            diagnostics.push(Diagnostic {
                entry: row,
                severity: Severity::Error,
                message: format!(
                    "{} entries need three axes and are skipped in {dimension}",
                    entry.spec.mode()
                ),
            });
            continue;
        }
        if is_blank(entry, dimension) {
            continue;
        }
        let outcome = resolve_in(entry, dimension, options.normalize_direction_cosines);
        if let Some(err) = outcome.hybrid_error() {
            diagnostics.push(Diagnostic {
                entry: row,
                severity: if err.is_warning() {
                    Severity::Warning
                } else {
                    Severity::Error
                },
                message: err.to_string(),
            });
        }
        vectors.push(CanonicalVector::new(outcome.vector, entry.color.clone()));
        resolved.push(outcome);
    }
    let resultant = aggregate(&vectors, dimension);
    debug!(
        "evaluated {} entries in {dimension}: {} included, |R| = {:.4}",
        entries.len(),
        vectors.len(),
        resultant.magnitude
    );
    let explanation = if vectors.is_empty() {
        Vec::new()
    } else {
        explain(&resolved, &resultant, dimension)
    };
    Report {
        dimension,
        plot: plot_vectors(&vectors, &resultant, dimension, options),
        table: vector_rows(&vectors, &resultant, dimension, options),
        vectors,
        resolved,
        resultant,
        explanation,
        diagnostics,
    }
}

impl Report {
    /// Number of vectors that took part in the sum.
    #[must_use]
    pub fn included(&self) -> usize {
        self.vectors.len()
    }
}
