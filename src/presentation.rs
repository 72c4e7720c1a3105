//! Presentation adapter between the numeric engine and a renderer.
//!
//! Turns resolved vectors, resultants and solver output into plain plot
//! segments, axis ranges and table rows. Rounding for display and the
//! fallback for undefined angles are decided here and nowhere else; the
//! engine keeps full precision and `Option` angles throughout.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::aggregate::{magnitude_in, CanonicalVector, Direction, Resultant};
use crate::constants::{
    AXIS_PADDING, MIN_AXIS_SPAN, RESULTANT_COLOR, TARGET_COLOR, UNKNOWN_FORCE_COLOR,
    ZERO_MAGNITUDE,
};
use crate::entry::Dimension;
use crate::geometry::angle_from_components;
use crate::numeric::{round_display, round_display_opt};
use crate::solver::{KnownForce, Solution};

/// Closed interval shown along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AxisRange {
    /// The interval `[min, max]`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range used when nothing is plotted.
    pub const UNIT: Self = Self::new(-1.0, 1.0);
}

/// Manual axis bounds used when autoscaling is off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualRanges {
    /// X-axis bounds.
    pub x: AxisRange,
    /// Y-axis bounds.
    pub y: AxisRange,
    /// Z-axis bounds; ignored in 2D.
    pub z: AxisRange,
}

impl Default for ManualRanges {
    fn default() -> Self {
        let range = AxisRange::new(-10.0, 10.0);
        Self {
            x: range,
            y: range,
            z: range,
        }
    }
}

impl ManualRanges {
    fn for_dimension(&self, dimension: Dimension) -> Vec<AxisRange> {
        [self.x, self.y, self.z]
            .into_iter()
            .take(dimension.axes())
            .collect()
    }
}

/// Display options a renderer passes alongside the entries.
///
/// # Examples
///
/// ```
/// use statica::{Dimension, DisplayOptions};
/// let options = DisplayOptions::for_dimension(Dimension::Two);
/// assert_eq!(options.line_width, 4);
/// assert!(options.normalize_direction_cosines);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each flag mirrors an independent toggle in the settings panel."
)]
pub struct DisplayOptions {
    /// Draw arrowheads at vector tips.
    pub show_arrowheads: bool,
    /// Draw markers at the segment endpoints.
    pub show_endpoints: bool,
    /// Line width of vector segments.
    pub line_width: u32,
    /// Marker size of segment endpoints.
    pub marker_size: u32,
    /// Fit the axes to the plotted data.
    pub autoscale: bool,
    /// Rescale inconsistent direction cosines so their squares sum to one.
    pub normalize_direction_cosines: bool,
    /// Plot the resultant vector.
    pub show_resultant: bool,
    /// Colour of the resultant.
    pub resultant_color: String,
    /// Axis bounds used when `autoscale` is off.
    pub manual_ranges: ManualRanges,
    /// Draw axes through the origin.
    pub show_origin_axes: bool,
    /// Draw ticks and grid lines.
    pub show_ticks: bool,
    /// Hide the axes entirely.
    pub hide_axes: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::for_dimension(Dimension::Three)
    }
}

impl DisplayOptions {
    /// Defaults of the 2D or 3D visualiser.
    #[must_use]
    pub fn for_dimension(dimension: Dimension) -> Self {
        let (line_width, marker_size) = match dimension {
            Dimension::Two => (4, 6),
            Dimension::Three => (6, 5),
        };
        Self {
            show_arrowheads: true,
            show_endpoints: true,
            line_width,
            marker_size,
            autoscale: true,
            normalize_direction_cosines: true,
            show_resultant: true,
            resultant_color: RESULTANT_COLOR.to_owned(),
            manual_ranges: ManualRanges::default(),
            show_origin_axes: true,
            show_ticks: true,
            hide_axes: false,
        }
    }
}

/// One arrow from the origin to `tip`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSegment {
    /// Legend label.
    pub label: String,
    /// End point; `z` is zero in 2D.
    pub tip: DVec3,
    /// Line and marker colour.
    pub color: String,
    /// Line width.
    pub line_width: u32,
    /// Marker size.
    pub marker_size: u32,
    /// Draw endpoint markers.
    pub show_endpoints: bool,
    /// Draw an arrowhead at the tip.
    pub arrowhead: bool,
    /// Draw the line dashed.
    pub dashed: bool,
}

/// Axis layout handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    /// One range per axis.
    pub ranges: Vec<AxisRange>,
    /// Draw axes through the origin.
    pub show_origin_axes: bool,
    /// Draw ticks and grid lines.
    pub show_ticks: bool,
    /// Hide the axes entirely.
    pub hide_axes: bool,
}

/// Everything a renderer needs to draw one plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotData {
    /// Segments in drawing order.
    pub segments: Vec<PlotSegment>,
    /// Axis layout.
    pub axes: AxisLayout,
}

/// One row of the results table, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// `"1"`, `"2"`, … or `"Resultant"`.
    pub label: String,
    /// Components, one per axis.
    pub components: Vec<f64>,
    /// Magnitude.
    pub magnitude: f64,
    /// θ in 2D, α β γ in 3D; `None` where undefined.
    pub angles: Vec<Option<f64>>,
    /// Colour swatch.
    pub color: String,
}

/// One row of the solver's worked-example table, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionRow {
    /// Row label.
    pub label: String,
    /// Force magnitude.
    pub force: f64,
    /// Angle from the X-axis; `None` where undefined.
    pub theta: Option<f64>,
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

/// Pad the span of `values` by the axis padding ratio.
///
/// A span narrower than the minimum is first widened by one unit on each
/// side. Without values the unit range is returned.
///
/// # Examples
/// ```
/// use statica::presentation::pad_range;
/// let range = pad_range(&[0.0, 10.0]);
/// assert!((range.min + 1.5).abs() < 1e-12);
/// assert!((range.max - 11.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn pad_range(values: &[f64]) -> AxisRange {
    let Some(first) = values.first().copied() else {
        return AxisRange::UNIT;
    };
    let (mut low, mut high) = values
        .iter()
        .fold((first, first), |(lo, hi), value| (lo.min(*value), hi.max(*value)));
    if (high - low).abs() < MIN_AXIS_SPAN {
        low -= 1.0;
        high += 1.0;
    }
    let pad = (high - low) * AXIS_PADDING;
    AxisRange::new(low - pad, high + pad)
}

/// Axis ranges covering the origin and every tip in `points`.
///
/// With autoscaling off the manual ranges apply; with nothing to plot every
/// axis gets the unit range.
#[must_use]
pub fn axis_ranges(points: &[DVec3], dimension: Dimension, options: &DisplayOptions) -> Vec<AxisRange> {
    if points.is_empty() {
        return vec![AxisRange::UNIT; dimension.axes()];
    }
    if !options.autoscale {
        return options.manual_ranges.for_dimension(dimension);
    }
    (0..dimension.axes())
        .map(|axis| {
            let values: Vec<f64> = std::iter::once(0.0)
                .chain(points.iter().filter_map(|point| point.to_array().get(axis).copied()))
                .collect();
            pad_range(&values)
        })
        .collect()
}

fn layout(ranges: Vec<AxisRange>, options: &DisplayOptions) -> AxisLayout {
    AxisLayout {
        ranges,
        show_origin_axes: options.show_origin_axes,
        show_ticks: options.show_ticks,
        hide_axes: options.hide_axes,
    }
}

fn has_length(tip: DVec3) -> bool {
    tip.abs().element_sum() > ZERO_MAGNITUDE
}

/// Plot segments for the included vectors and, when enabled and non-zero,
/// the resultant.
#[must_use]
pub fn plot_vectors(
    vectors: &[CanonicalVector],
    resultant: &Resultant,
    dimension: Dimension,
    options: &DisplayOptions,
) -> PlotData {
    let mut segments: Vec<PlotSegment> = vectors
        .iter()
        .enumerate()
        .map(|(index, vector)| PlotSegment {
            label: format!("Vector {}", index + 1),
            tip: vector.components,
            color: vector.color.clone(),
            line_width: options.line_width,
            marker_size: options.marker_size,
            show_endpoints: options.show_endpoints,
            arrowhead: options.show_arrowheads && has_length(vector.components),
            dashed: false,
        })
        .collect();
    let mut points: Vec<DVec3> = vectors.iter().map(|vector| vector.components).collect();
    if !vectors.is_empty() && options.show_resultant {
        let widen = match dimension {
            Dimension::Two => 1,
            Dimension::Three => 2,
        };
        segments.push(PlotSegment {
            label: "Resultant".to_owned(),
            tip: resultant.components,
            color: options.resultant_color.clone(),
            line_width: options.line_width + widen,
            marker_size: options.marker_size + 2,
            show_endpoints: options.show_endpoints,
            arrowhead: options.show_arrowheads && has_length(resultant.components),
            dashed: false,
        });
        if has_length(resultant.components) {
            points.push(resultant.components);
        }
    }
    PlotData {
        segments,
        axes: layout(axis_ranges(&points, dimension, options), options),
    }
}

fn rounded_components(components: DVec3, dimension: Dimension) -> Vec<f64> {
    components
        .to_array()
        .into_iter()
        .take(dimension.axes())
        .map(round_display)
        .collect()
}

fn table_row(
    label: String,
    components: DVec3,
    dimension: Dimension,
    color: &str,
) -> TableRow {
    let direction = Direction::of(components, dimension);
    TableRow {
        label,
        components: rounded_components(components, dimension),
        magnitude: round_display(magnitude_in(components, dimension)),
        angles: direction.angles().into_iter().map(round_display_opt).collect(),
        color: color.to_owned(),
    }
}

/// Results table: one row per included vector and a final resultant row.
///
/// Empty when nothing is included.
#[must_use]
pub fn vector_rows(
    vectors: &[CanonicalVector],
    resultant: &Resultant,
    dimension: Dimension,
    options: &DisplayOptions,
) -> Vec<TableRow> {
    if vectors.is_empty() {
        return Vec::new();
    }
    let mut rows: Vec<TableRow> = vectors
        .iter()
        .enumerate()
        .map(|(index, vector)| {
            table_row(
                (index + 1).to_string(),
                vector.components,
                dimension,
                &vector.color,
            )
        })
        .collect();
    rows.push(table_row(
        "Resultant".to_owned(),
        resultant.components,
        dimension,
        &options.resultant_color,
    ));
    rows
}

/// Worked-example table: the known forces, the solved force, the closing
/// check and the requested target.
#[must_use]
pub fn solution_rows(known: &[KnownForce], solution: &Solution) -> Vec<SolutionRow> {
    let mut rows: Vec<SolutionRow> = known
        .iter()
        .zip(&solution.known_components)
        .enumerate()
        .map(|(index, (force, components))| SolutionRow {
            label: format!("F{}", index + 2),
            force: round_display(force.magnitude),
            theta: Some(round_display(force.theta)),
            x: round_display(components.x),
            y: round_display(components.y),
        })
        .collect();
    let check = solution.check.sum;
    let target = &solution.target;
    rows.extend([
        SolutionRow {
            label: "F1 (solution)".to_owned(),
            force: round_display(solution.magnitude),
            theta: round_display_opt(solution.angle),
            x: round_display(solution.unknown.x),
            y: round_display(solution.unknown.y),
        },
        planar_row("Sum = R (check)", check),
        SolutionRow {
            label: "R (target)".to_owned(),
            force: round_display(target.magnitude),
            theta: Some(round_display(target.phi)),
            x: round_display(target.components.x),
            y: round_display(target.components.y),
        },
    ]);
    rows
}

fn planar_row(label: &str, components: DVec2) -> SolutionRow {
    SolutionRow {
        label: label.to_owned(),
        force: round_display(components.length()),
        theta: round_display_opt(angle_from_components(components.x, components.y)),
        x: round_display(components.x),
        y: round_display(components.y),
    }
}

/// Angle shown for a possibly undefined direction: the zero vector is drawn
/// at 0°.
#[must_use]
pub fn angle_or_zero(angle: Option<f64>) -> f64 {
    angle.unwrap_or(0.0)
}

/// Text for an optional table value.
#[must_use]
pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |inner| format!("{inner:.2}"))
}

/// Plot for the solver: known forces, the solved force and the dashed target.
#[must_use]
pub fn solution_plot(known: &[KnownForce], solution: &Solution) -> PlotData {
    let options = DisplayOptions::for_dimension(Dimension::Two);
    let mut segments: Vec<PlotSegment> = known
        .iter()
        .zip(&solution.known_components)
        .enumerate()
        .map(|(index, (force, components))| PlotSegment {
            label: format!(
                "F{} = {:.0} N @ {:.0}°",
                index + 2,
                force.magnitude,
                force.theta
            ),
            tip: components.extend(0.0),
            color: force.color.clone(),
            line_width: 3,
            marker_size: 6,
            show_endpoints: true,
            arrowhead: false,
            dashed: false,
        })
        .collect();
    segments.push(PlotSegment {
        label: format!(
            "F1 (unknown) = {:.0} N @ {:.1}°",
            solution.magnitude,
            angle_or_zero(solution.angle)
        ),
        tip: solution.unknown.extend(0.0),
        color: UNKNOWN_FORCE_COLOR.to_owned(),
        line_width: 4,
        marker_size: 7,
        show_endpoints: true,
        arrowhead: false,
        dashed: false,
    });
    segments.push(PlotSegment {
        label: format!(
            "Target R = {:.0} N @ {:.1}°",
            solution.target.magnitude, solution.target.phi
        ),
        tip: solution.target.components.extend(0.0),
        color: TARGET_COLOR.to_owned(),
        line_width: 5,
        marker_size: 8,
        show_endpoints: true,
        arrowhead: false,
        dashed: true,
    });
    let points: Vec<DVec3> = segments.iter().map(|segment| segment.tip).collect();
    PlotData {
        segments,
        axes: layout(axis_ranges(&points, Dimension::Two, &options), &options),
    }
}
