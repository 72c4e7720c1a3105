//! Step-by-step derivation text.
//!
//! The generator only formats numbers that the normalizer, the aggregation
//! engine and the solver already computed. Values are shown with two decimals;
//! nothing here feeds back into the numerics.

use glam::DVec3;

use crate::aggregate::{Direction, Resultant};
use crate::constants::ZERO_MAGNITUDE;
use crate::entry::{Dimension, ReferenceAxis};
use crate::normalizer::{
    AngleStep, CartesianScaling, Derivation, DirectionCosineStep, HybridSolution, Resolved,
};
use crate::solver::Solution;

const AXIS_NAMES: [char; 3] = ['X', 'Y', 'Z'];
const ANGLE_NAMES: [char; 3] = ['α', 'β', 'γ'];

fn fmt2(value: f64) -> String {
    format!("{value:.2}")
}

fn axis_values(vector: DVec3, dimension: Dimension) -> Vec<f64> {
    vector.to_array().into_iter().take(dimension.axes()).collect()
}

fn tuple(vector: DVec3, dimension: Dimension) -> String {
    let values: Vec<String> = axis_values(vector, dimension)
        .into_iter()
        .map(fmt2)
        .collect();
    format!("({})", values.join(","))
}

fn axis_tuple_label(dimension: Dimension) -> String {
    let names: Vec<String> = AXIS_NAMES
        .iter()
        .take(dimension.axes())
        .map(char::to_string)
        .collect();
    format!("({})", names.join(","))
}

fn describe_scaling(scaling: &CartesianScaling, dimension: Dimension) -> String {
    match scaling {
        CartesianScaling::Direct { components } => format!(
            "direct {}={}",
            axis_tuple_label(dimension),
            tuple(*components, dimension)
        ),
        CartesianScaling::Scaled {
            base,
            magnitude,
            base_norm,
            scale,
            result,
        } => {
            let terms: Vec<String> = axis_values(*base, dimension)
                .into_iter()
                .zip(axis_values(*result, dimension))
                .zip(AXIS_NAMES)
                .map(|((raw, scaled), axis)| {
                    let lower = axis.to_ascii_lowercase();
                    format!(
                        "{axis}=s·{lower}0={}·{}={}",
                        fmt2(*scale),
                        fmt2(raw),
                        fmt2(scaled)
                    )
                })
                .collect();
            format!(
                "base={}, F={} N → s=F/||v0||={}/{}={} → {}",
                tuple(*base, dimension),
                fmt2(*magnitude),
                fmt2(*magnitude),
                fmt2(*base_norm),
                fmt2(*scale),
                terms.join(", ")
            )
        }
    }
}

fn describe_hybrid(solution: &HybridSolution) -> String {
    let sign = solution.x_sign.symbol();
    format!(
        "β={}°, Y={} → F=Y/cosβ={}/cos({}°)={} → X={sign}√(F²−Y²−Z²)={sign}√({}²−{}²−{}²)={}, Z={} → ",
        fmt2(solution.beta),
        fmt2(solution.y),
        fmt2(solution.y),
        fmt2(solution.beta),
        fmt2(solution.force),
        fmt2(solution.force),
        fmt2(solution.y),
        fmt2(solution.z),
        fmt2(solution.x),
        fmt2(solution.z),
    )
}

fn describe_direction_cosines(step: &DirectionCosineStep) -> String {
    let angles = step.angles.to_array();
    let header = format!(
        "F={} N, α={}°, β={}°, γ={}°",
        fmt2(step.magnitude),
        fmt2(step.angles.x),
        fmt2(step.angles.y),
        fmt2(step.angles.z)
    );
    if step.is_degenerate() {
        return format!(
            "{header} → cos²α+cos²β+cos²γ={} → no direction, zero vector",
            fmt2(step.cos_sum)
        );
    }
    let terms: Vec<String> = AXIS_NAMES
        .into_iter()
        .zip(ANGLE_NAMES)
        .zip(angles)
        .zip(step.cosines.to_array())
        .zip(step.result.to_array())
        .map(|((((axis, name), angle), cosine), value)| {
            if step.normalized {
                format!(
                    "{axis}=F·cos{name}/√s={}·{}={}",
                    fmt2(step.magnitude),
                    fmt2(cosine),
                    fmt2(value)
                )
            } else {
                format!(
                    "{axis}=F·cos{name}={}·cos({}°)={}",
                    fmt2(step.magnitude),
                    fmt2(angle),
                    fmt2(value)
                )
            }
        })
        .collect();
    if step.normalized {
        format!(
            "{header} → s=cos²α+cos²β+cos²γ={} ≠ 1, cosines scaled by 1/√s → {}",
            fmt2(step.cos_sum),
            terms.join(", ")
        )
    } else {
        format!("{header} → {}", terms.join(", "))
    }
}

fn describe_angle(step: &AngleStep) -> String {
    let (x_term, y_term) = match step.axis {
        ReferenceAxis::X => ("cos", "sin"),
        ReferenceAxis::Y => ("sin", "cos"),
    };
    let magnitude = fmt2(step.magnitude);
    let theta = fmt2(step.theta);
    format!(
        "F={magnitude} N, θ={theta}° → X=F·{x_term}θ={magnitude}·{x_term}({theta}°)={}, Y=F·{y_term}θ={magnitude}·{y_term}({theta}°)={}",
        fmt2(step.result.x),
        fmt2(step.result.y)
    )
}

fn mode_label(derivation: &Derivation) -> &'static str {
    match derivation {
        Derivation::Cartesian {
            hybrid: Some(Ok(_)),
            ..
        } => "hybrid",
        Derivation::Cartesian { .. } => "cart",
        Derivation::DirectionCosine(_) => "dir",
        Derivation::AngleFromAxis(AngleStep {
            axis: ReferenceAxis::X,
            ..
        }) => "angle from X",
        Derivation::AngleFromAxis(_) => "angle from Y",
    }
}

/// One derivation line for the entry shown as `Vector {number}`.
#[must_use]
pub fn describe_entry(number: usize, resolved: &Resolved, dimension: Dimension) -> String {
    let body = match &resolved.derivation {
        Derivation::Cartesian { hybrid, scaling } => {
            let prefix = match hybrid {
                Some(Ok(solution)) => describe_hybrid(solution),
                Some(Err(err)) => format!("hybrid skipped ({err}) → "),
                None => String::new(),
            };
            format!("{prefix}{}", describe_scaling(scaling, dimension))
        }
        Derivation::DirectionCosine(step) => describe_direction_cosines(step),
        Derivation::AngleFromAxis(step) => describe_angle(step),
    };
    format!(
        "Vector {number} ({}): {body}",
        mode_label(&resolved.derivation)
    )
}

/// `R{axis} = a + b + … = total` for each axis of `dimension`.
#[must_use]
pub fn component_sums(
    resolved: &[Resolved],
    resultant: &Resultant,
    dimension: Dimension,
) -> Vec<String> {
    AXIS_NAMES
        .iter()
        .zip(axis_values(resultant.components, dimension))
        .enumerate()
        .map(|(axis_index, (axis, total))| {
            let addends: Vec<String> = resolved
                .iter()
                .filter_map(|entry| entry.vector.to_array().get(axis_index).copied())
                .map(fmt2)
                .collect();
            let axis_lower = axis.to_ascii_lowercase();
            if addends.is_empty() {
                format!("R{axis_lower} = {}", fmt2(total))
            } else {
                format!("R{axis_lower} = {} = {}", addends.join(" + "), fmt2(total))
            }
        })
        .collect()
}

/// Resultant summary plus, when it has a direction, its angle derivation.
#[must_use]
pub fn describe_resultant(resultant: &Resultant, dimension: Dimension) -> Vec<String> {
    let (labels, squares) = match dimension {
        Dimension::Two => ("(Rx, Ry)", "√(Rx²+Ry²)"),
        Dimension::Three => ("(Rx, Ry, Rz)", "√(Rx²+Ry²+Rz²)"),
    };
    let values: Vec<String> = axis_values(resultant.components, dimension)
        .into_iter()
        .map(fmt2)
        .collect();
    let mut lines = vec![format!(
        "R = {labels} = ({}), |R| = {squares} = {} N",
        values.join(", "),
        fmt2(resultant.magnitude)
    )];
    if resultant.magnitude <= ZERO_MAGNITUDE {
        lines.push("R is the zero vector; its direction is undefined".to_owned());
        return lines;
    }
    let components = resultant.components;
    match resultant.direction {
        Direction::Planar { theta } => lines.push(format!(
            "θ = atan2(Ry, Rx) = atan2({}, {}) = {} (from the X-axis)",
            fmt2(components.y),
            fmt2(components.x),
            fmt_angle(theta)
        )),
        Direction::Spatial(angles) => {
            lines.extend(
                ANGLE_NAMES
                    .iter()
                    .zip(AXIS_NAMES)
                    .zip(components.to_array())
                    .zip(angles.as_array())
                    .map(|(((name, axis), value), angle)| {
                        format!(
                            "{name} = arccos(R{}/|R|) = arccos({}/{}) = {}",
                            axis.to_ascii_lowercase(),
                            fmt2(value),
                            fmt2(resultant.magnitude),
                            fmt_angle(angle)
                        )
                    }),
            );
        }
    }
    lines
}

fn fmt_angle(angle: Option<f64>) -> String {
    angle.map_or_else(|| "undefined".to_owned(), |value| format!("{value:.2}°"))
}

/// Full derivation: one line per included entry, the component sums and the
/// resultant.
#[must_use]
pub fn explain(resolved: &[Resolved], resultant: &Resultant, dimension: Dimension) -> Vec<String> {
    let mut lines: Vec<String> = resolved
        .iter()
        .enumerate()
        .map(|(index, entry)| describe_entry(index + 1, entry, dimension))
        .collect();
    lines.extend(component_sums(resolved, resultant, dimension));
    lines.extend(describe_resultant(resultant, dimension));
    lines
}

/// Method text for an unknown-force solution.
#[must_use]
pub fn explain_solution(solution: &Solution) -> Vec<String> {
    let target = &solution.target;
    let theta = solution.angle.unwrap_or(0.0);
    vec![
        format!(
            "Known: Sx = {}, Sy = {}",
            fmt2(solution.known_sum.x),
            fmt2(solution.known_sum.y)
        ),
        format!(
            "Target: Rx = |R|cosφ = {}·cos({}°) = {}, Ry = |R|sinφ = {}·sin({}°) = {}",
            fmt2(target.magnitude),
            fmt2(target.phi),
            fmt2(target.components.x),
            fmt2(target.magnitude),
            fmt2(target.phi),
            fmt2(target.components.y)
        ),
        format!(
            "F₁ must supply: Dx = Rx − Sx = {}, Dy = Ry − Sy = {}",
            fmt2(solution.unknown.x),
            fmt2(solution.unknown.y)
        ),
        format!(
            "F₁ = √(Dx² + Dy²) = {} N, θ₁ = atan2(Dy, Dx) = atan2({}, {}) = {}°",
            fmt2(solution.magnitude),
            fmt2(solution.unknown.y),
            fmt2(solution.unknown.x),
            fmt2(theta)
        ),
    ]
}
