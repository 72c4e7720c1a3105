//! End-to-end evaluation of entry lists.
use approx::assert_relative_eq;
use statica::{evaluate, Dimension, DisplayOptions, Severity, VectorEntry, XSign};
use test_utils::{assert_vec3_close, EntryBuilder};

fn run(entries: &[VectorEntry], dimension: Dimension) -> statica::Report {
    evaluate(entries, dimension, &DisplayOptions::for_dimension(dimension))
}

#[test]
fn empty_list_reports_nothing() {
    let report = run(&[], Dimension::Three);
    assert_eq!(report.included(), 0);
    assert_relative_eq!(report.resultant.magnitude, 0.0);
    assert!(!report.resultant.direction.is_defined());
    assert!(report.explanation.is_empty());
    assert!(report.table.is_empty());
    assert!(report.plot.segments.is_empty());
    assert!(report
        .plot
        .axes
        .ranges
        .iter()
        .all(|range| *range == statica::presentation::AxisRange::UNIT));
}

#[test]
fn blank_rows_are_left_out() {
    let entries = [
        VectorEntry::default(),
        EntryBuilder::cartesian(3.0, 4.0, 0.0).build(),
        EntryBuilder::angle_from_x(0.0, 45.0).build(),
    ];
    let report = run(&entries, Dimension::Two);
    assert_eq!(report.included(), 1);
    assert_relative_eq!(report.resultant.magnitude, 5.0);
    assert!(report.diagnostics.is_empty());
    assert!(report.explanation[0].starts_with("Vector 1 (cart)"));
}

#[test]
fn direction_cosines_are_skipped_in_two_dimensions() {
    let entries = [
        EntryBuilder::cartesian(1.0, 0.0, 0.0).build(),
        EntryBuilder::direction_cosine(10.0, 0.0, 90.0, 90.0).build(),
    ];
    let report = run(&entries, Dimension::Two);
    assert_eq!(report.included(), 1);
    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.entry, 2);
    assert_eq!(diagnostic.severity, Severity::Error);
    assert!(diagnostic.message.contains("three axes"));
}

#[test]
fn mixed_modes_sum_in_three_dimensions() {
    let entries = [
        EntryBuilder::cartesian(3.0, 4.0, 0.0).magnitude(10.0).build(),
        EntryBuilder::direction_cosine(2.0, 90.0, 90.0, 0.0).build(),
        EntryBuilder::angle_from_y(1.0, 0.0).build(),
    ];
    let report = run(&entries, Dimension::Three);
    assert_eq!(report.included(), 3);
    assert_vec3_close(report.resultant.components, (6.0, 9.0, 2.0), 1e-9);
    assert_relative_eq!(report.resultant.magnitude, 121.0_f64.sqrt(), epsilon = 1e-9);
    assert_eq!(report.table.len(), 4);
}

#[test]
fn unresolvable_hybrid_is_a_warning() {
    let entries = [EntryBuilder::cartesian(1.0, 2.0, 3.0)
        .hybrid(90.0, None, XSign::Positive)
        .build()];
    let report = run(&entries, Dimension::Three);
    assert_eq!(report.included(), 1);
    assert_vec3_close(report.resultant.components, (1.0, 2.0, 3.0), 0.0);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].severity, Severity::Warning);
    assert!(report.diagnostics[0].message.contains("β = 90.00°"));
}

#[test]
fn infeasible_hybrid_is_an_error() {
    let entries = [EntryBuilder::cartesian(0.0, 5.0, 0.0)
        .hybrid(60.0, Some(20.0), XSign::Negative)
        .build()];
    let report = run(&entries, Dimension::Three);
    assert_eq!(report.diagnostics[0].severity, Severity::Error);
    assert!(report.diagnostics[0].message.contains("inconsistent"));
}

#[test]
fn normalisation_flag_reaches_the_normalizer() {
    let entries = [EntryBuilder::direction_cosine(10.0, 45.0, 45.0, 45.0).build()];
    let mut options = DisplayOptions::default();
    let normalised = evaluate(&entries, Dimension::Three, &options);
    options.normalize_direction_cosines = false;
    let raw = evaluate(&entries, Dimension::Three, &options);
    assert_relative_eq!(normalised.resultant.magnitude, 10.0, epsilon = 1e-9);
    assert_relative_eq!(raw.resultant.magnitude, 10.0 * 1.5_f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn report_serialises_for_renderers() {
    let report = run(&[EntryBuilder::cartesian(3.0, 4.0, 0.0).build()], Dimension::Two);
    let json = serde_json::to_value(&report).expect("report serialises");
    assert_eq!(json["dimension"], "2d");
    assert_eq!(json["table"][1]["label"], "Resultant");
    assert_eq!(json["resultant"]["direction"]["kind"], "planar");
}
