//! Plot primitives, axis ranges and table rows handed to a renderer.
use approx::assert_relative_eq;
use glam::DVec3;
use rstest::rstest;
use statica::presentation::{
    axis_ranges, format_optional, pad_range, plot_vectors, solution_plot, solution_rows,
    vector_rows, AxisRange,
};
use statica::{
    aggregate, solve, CanonicalVector, Dimension, DisplayOptions, TargetResultant,
    RESULTANT_COLOR, TARGET_COLOR, UNKNOWN_FORCE_COLOR,
};
use test_utils::known;

fn assert_range(range: AxisRange, min: f64, max: f64) {
    assert_relative_eq!(range.min, min, epsilon = 1e-9);
    assert_relative_eq!(range.max, max, epsilon = 1e-9);
}

fn vectors(tips: &[(f64, f64, f64)]) -> Vec<CanonicalVector> {
    tips.iter()
        .map(|tip| CanonicalVector::new(DVec3::from(*tip), "#1f77b4"))
        .collect()
}

#[rstest]
#[case::span(&[0.0, 10.0], -1.5, 11.5)]
#[case::unordered(&[4.0, -2.0, 1.0], -2.9, 4.9)]
#[case::single_value(&[5.0], 3.7, 6.3)]
#[case::empty(&[], -1.0, 1.0)]
fn padded_ranges(#[case] values: &[f64], #[case] min: f64, #[case] max: f64) {
    assert_range(pad_range(values), min, max);
}

#[test]
fn autoscaled_axes_include_the_origin() {
    let ranges = axis_ranges(
        &[DVec3::new(3.0, 4.0, 0.0)],
        Dimension::Two,
        &DisplayOptions::for_dimension(Dimension::Two),
    );
    assert_eq!(ranges.len(), 2);
    assert_range(ranges[0], -0.45, 3.45);
    assert_range(ranges[1], -0.6, 4.6);
}

#[test]
fn manual_ranges_apply_when_autoscale_is_off() {
    let mut options = DisplayOptions::for_dimension(Dimension::Three);
    options.autoscale = false;
    options.manual_ranges.z = AxisRange::new(-2.0, 5.0);
    let ranges = axis_ranges(&[DVec3::new(300.0, 0.0, 0.0)], Dimension::Three, &options);
    assert_eq!(
        ranges,
        vec![
            AxisRange::new(-10.0, 10.0),
            AxisRange::new(-10.0, 10.0),
            AxisRange::new(-2.0, 5.0),
        ]
    );
}

#[test]
fn nothing_to_plot_gives_unit_ranges() {
    let ranges = axis_ranges(&[], Dimension::Three, &DisplayOptions::default());
    assert_eq!(ranges, vec![AxisRange::UNIT; 3]);
}

#[test]
fn resultant_segment_is_wider_than_the_vectors() {
    let included = vectors(&[(1.0, 0.0, 0.0), (0.0, 2.0, 0.0)]);
    let resultant = aggregate(&included, Dimension::Three);
    let options = DisplayOptions::for_dimension(Dimension::Three);
    let plot = plot_vectors(&included, &resultant, Dimension::Three, &options);

    let labels: Vec<&str> = plot.segments.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Vector 1", "Vector 2", "Resultant"]);
    let last = plot.segments.last().expect("resultant segment");
    assert_eq!(last.color, RESULTANT_COLOR);
    assert_eq!((last.line_width, last.marker_size), (8, 7));
    assert!(last.arrowhead);
}

#[test]
fn planar_resultant_widens_by_one() {
    let included = vectors(&[(1.0, 1.0, 0.0)]);
    let resultant = aggregate(&included, Dimension::Two);
    let options = DisplayOptions::for_dimension(Dimension::Two);
    let plot = plot_vectors(&included, &resultant, Dimension::Two, &options);
    let last = plot.segments.last().expect("resultant segment");
    assert_eq!((last.line_width, last.marker_size), (5, 8));
    assert_eq!(plot.axes.ranges.len(), 2);
}

#[test]
fn zero_length_vectors_get_no_arrowhead() {
    let included = vectors(&[(0.0, 0.0, 0.0)]);
    let resultant = aggregate(&included, Dimension::Three);
    let plot = plot_vectors(
        &included,
        &resultant,
        Dimension::Three,
        &DisplayOptions::default(),
    );
    assert!(plot.segments.iter().all(|segment| !segment.arrowhead));
}

#[test]
fn hidden_resultant_is_not_plotted() {
    let included = vectors(&[(1.0, 2.0, 3.0)]);
    let resultant = aggregate(&included, Dimension::Three);
    let mut options = DisplayOptions::default();
    options.show_resultant = false;
    options.show_arrowheads = false;
    let plot = plot_vectors(&included, &resultant, Dimension::Three, &options);
    assert_eq!(plot.segments.len(), 1);
    assert!(!plot.segments[0].arrowhead);
}

#[test]
fn table_rows_are_rounded_and_end_with_the_resultant() {
    let included = vectors(&[(3.0, 4.0, 0.0), (0.004, -0.004, 0.0)]);
    let resultant = aggregate(&included, Dimension::Two);
    let rows = vector_rows(
        &included,
        &resultant,
        Dimension::Two,
        &DisplayOptions::for_dimension(Dimension::Two),
    );
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].label, "1");
    assert_eq!(rows[0].components, vec![3.0, 4.0]);
    assert_relative_eq!(rows[0].magnitude, 5.0);
    assert_eq!(rows[0].angles, vec![Some(53.13)]);
    assert_eq!(rows[1].components, vec![0.0, 0.0]);
    assert_eq!(rows[2].label, "Resultant");
    assert_eq!(rows[2].color, RESULTANT_COLOR);
}

#[test]
fn zero_vector_rows_show_undefined_angles() {
    let included = vectors(&[(0.0, 0.0, 0.0)]);
    let resultant = aggregate(&included, Dimension::Three);
    let rows = vector_rows(&included, &resultant, Dimension::Three, &DisplayOptions::default());
    assert_eq!(rows[0].angles, vec![None, None, None]);
    let shown: Vec<String> = rows[0].angles.iter().copied().map(format_optional).collect();
    assert_eq!(shown, ["n/a", "n/a", "n/a"]);
}

#[test]
fn no_vectors_no_rows() {
    let resultant = aggregate(&[], Dimension::Two);
    assert!(vector_rows(&[], &resultant, Dimension::Two, &DisplayOptions::default()).is_empty());
}

#[test]
fn worked_table_for_the_solver() {
    let forces = [known(450.0, 45.0), known(200.0, 0.0)];
    let solution = solve(&forces, &TargetResultant::default());
    let rows = solution_rows(&forces, &solution);

    let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(
        labels,
        ["F2", "F3", "F1 (solution)", "Sum = R (check)", "R (target)"]
    );
    let unknown = &rows[2];
    assert_relative_eq!(unknown.force, 577.39);
    assert_eq!(unknown.theta, Some(-33.44));
    assert_relative_eq!(unknown.x, 481.8);
    assert_relative_eq!(unknown.y, -318.2);
    let check = &rows[3];
    assert_relative_eq!(check.force, 1000.0);
    assert_relative_eq!(check.y, 0.0);
}

#[test]
fn solver_plot_dashes_the_target() {
    let forces = [known(450.0, 45.0), known(200.0, 0.0)];
    let solution = solve(&forces, &TargetResultant::default());
    let plot = solution_plot(&forces, &solution);

    assert_eq!(plot.segments.len(), 4);
    let unknown = &plot.segments[2];
    assert_eq!(unknown.color, UNKNOWN_FORCE_COLOR);
    assert_eq!(unknown.line_width, 4);
    assert_eq!(unknown.label, "F1 (unknown) = 577 N @ -33.4°");
    let goal = &plot.segments[3];
    assert!(goal.dashed);
    assert_eq!(goal.color, TARGET_COLOR);
    assert_eq!(goal.line_width, 5);
}
