//! Command line front end for the statics vector engine.
//!
//! Stands in for the interactive pages: `visualise` evaluates a JSON list of
//! vector entries and `solve` finds the unknown force closing a set of known
//! forces onto a target resultant.
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;
use statica::explanation::explain_solution;
use statica::presentation::{
    angle_or_zero, format_optional, solution_plot, solution_rows, PlotData, SolutionRow,
};
use statica::{
    config, init_logging, logging::Verbosity, Dimension, KnownForce, Report, Session,
    Solution, SolverSession, TargetDirection, TargetResultant, VectorEntry,
};

/// Force vector decomposition and resultants for statics
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve vector entries, sum them and explain the derivation
    Visualise {
        /// Dimension of the vectors
        #[arg(short, long, value_enum, default_value_t = Dimension::Three)]
        dimension: Dimension,
        /// JSON file with the entry list, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        entries: PathBuf,
        /// TOML file with display options
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Keep inconsistent direction cosines as typed
        #[arg(long)]
        no_normalize: bool,
        /// Leave the resultant out of the plot
        #[arg(long)]
        no_resultant: bool,
    },
    /// Solve for the single force that closes the known forces onto a target
    Solve {
        /// Known force as `magnitude@angle` (degrees from X); repeatable.
        /// Without any, the 450 N @ 45° and 200 N @ 0° example is used.
        #[arg(short, long = "known", value_parser = parse_force)]
        known: Vec<ForceArg>,
        /// Target resultant as `magnitude@phi`
        #[arg(short, long, value_parser = parse_force, conflicts_with = "target_axis")]
        target: Option<ForceArg>,
        /// Target resultant along an x′ axis rotated by alpha, as `magnitude@alpha`
        #[arg(long, value_parser = parse_force)]
        target_axis: Option<ForceArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ForceArg {
    magnitude: f64,
    angle: f64,
}

fn parse_force(raw: &str) -> Result<ForceArg, String> {
    let (magnitude, angle) = raw
        .split_once('@')
        .ok_or_else(|| format!("expected `magnitude@angle`, got `{raw}`"))?;
    let parse = |part: &str, what: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid {what} `{part}`: {err}"))
    };
    Ok(ForceArg {
        magnitude: parse(magnitude, "magnitude")?,
        angle: parse(angle, "angle")?,
    })
}

fn read_entries(path: &Path) -> Result<Vec<VectorEntry>> {
    let mut raw = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut raw)
            .context("reading entries from stdin")?;
    } else {
        BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )
        .read_to_string(&mut raw)
        .with_context(|| format!("reading {}", path.display()))?;
    }
    serde_json::from_str(&raw).context("parsing vector entries")
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("writing JSON output")?;
    writeln!(out)?;
    Ok(())
}

fn write_report(out: &mut impl Write, report: &Report) -> Result<()> {
    writeln!(
        out,
        "Vectors ({}): {} included",
        report.dimension,
        report.included()
    )?;
    for row in &report.table {
        let components: Vec<String> = row.components.iter().map(|c| format!("{c:.2}")).collect();
        let angles: Vec<String> = row.angles.iter().copied().map(format_optional).collect();
        writeln!(
            out,
            "  {:<10} ({})  |v| = {:.2}  angles = [{}]  {}",
            row.label,
            components.join(", "),
            row.magnitude,
            angles.join(", "),
            row.color
        )?;
    }
    if !report.explanation.is_empty() {
        writeln!(out, "\nExplanation (step by step):")?;
        for line in &report.explanation {
            writeln!(out, "  {line}")?;
        }
    }
    if !report.diagnostics.is_empty() {
        writeln!(out, "\nDiagnostics:")?;
        for diagnostic in &report.diagnostics {
            writeln!(
                out,
                "  [{:?}] entry {}: {}",
                diagnostic.severity, diagnostic.entry, diagnostic.message
            )?;
        }
    }
    let ranges: Vec<String> = report
        .plot
        .axes
        .ranges
        .iter()
        .zip(["X", "Y", "Z"])
        .map(|(range, axis)| format!("{axis} [{:.2}, {:.2}]", range.min, range.max))
        .collect();
    writeln!(out, "\nAxis ranges: {}", ranges.join("  "))?;
    Ok(())
}

fn write_solution(out: &mut impl Write, known: &[KnownForce], solution: &Solution) -> Result<()> {
    writeln!(
        out,
        "F1 = {:.2} N, θ1 = {:.2}° (from the X-axis)",
        solution.magnitude,
        angle_or_zero(solution.angle)
    )?;
    writeln!(
        out,
        "Target resultant: R = {:.2} N @ {:.2}°",
        solution.target.magnitude, solution.target.phi
    )?;
    writeln!(out, "\nCheck:")?;
    for row in solution_rows(known, solution) {
        writeln!(
            out,
            "  {:<16} F = {:>10.2}  θ = {:>8}  X = {:>10.2}  Y = {:>10.2}",
            row.label,
            row.force,
            format_optional(row.theta),
            row.x,
            row.y
        )?;
    }
    if !solution.check.closes {
        writeln!(out, "  warning: S + D differs from R by {:?}", solution.check.residual)?;
    }
    writeln!(out, "\nMethod:")?;
    for line in explain_solution(solution) {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct SolverOutput<'a> {
    known: &'a [KnownForce],
    solution: &'a Solution,
    table: Vec<SolutionRow>,
    method: Vec<String>,
    plot: PlotData,
}

fn run_visualise(
    out: &mut impl Write,
    format: OutputFormat,
    dimension: Dimension,
    entries_path: &Path,
    config_path: Option<&Path>,
    overrides: (bool, bool),
) -> Result<()> {
    let (no_normalize, no_resultant) = overrides;
    let mut options = config::load(config_path, dimension)?;
    if no_normalize {
        options.normalize_direction_cosines = false;
    }
    if no_resultant {
        options.show_resultant = false;
    }
    let entries = read_entries(entries_path)?;
    info!("evaluating {} {dimension} entries", entries.len());
    let session = Session::from_entries(dimension, entries, options);
    let report = session.evaluate();
    match format {
        OutputFormat::Text => write_report(out, &report),
        OutputFormat::Json => write_json(out, &report),
    }
}

fn run_solve(
    out: &mut impl Write,
    format: OutputFormat,
    known: &[ForceArg],
    target: Option<ForceArg>,
    target_axis: Option<ForceArg>,
) -> Result<()> {
    let mut session = if known.is_empty() {
        SolverSession::default()
    } else {
        SolverSession::new(Vec::new(), TargetResultant::default())
    };
    for force in known {
        let index = session.add_known();
        let slot = session.known_mut(index)?;
        slot.magnitude = force.magnitude;
        slot.theta = force.angle;
    }
    let resolved_target = match (target, target_axis) {
        (Some(_), Some(_)) => bail!("--target and --target-axis are mutually exclusive"),
        (Some(force), None) => Some(TargetResultant {
            magnitude: force.magnitude,
            direction: TargetDirection::FromX { phi: force.angle },
        }),
        (None, Some(force)) => Some(TargetResultant {
            magnitude: force.magnitude,
            direction: TargetDirection::AlongRotatedAxis { alpha: force.angle },
        }),
        (None, None) => None,
    };
    if let Some(chosen) = resolved_target {
        session.set_target(chosen);
    }
    let solution = session.solve();
    match format {
        OutputFormat::Text => write_solution(out, session.known(), &solution),
        OutputFormat::Json => write_json(
            out,
            &SolverOutput {
                known: session.known(),
                table: solution_rows(session.known(), &solution),
                method: explain_solution(&solution),
                plot: solution_plot(session.known(), &solution),
                solution: &solution,
            },
        ),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(Verbosity::from_flags(args.verbose, args.quiet));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command {
        Command::Visualise {
            dimension,
            entries,
            config: config_path,
            no_normalize,
            no_resultant,
        } => run_visualise(
            &mut out,
            args.format,
            dimension,
            &entries,
            config_path.as_deref(),
            (no_normalize, no_resultant),
        ),
        Command::Solve {
            known,
            target,
            target_axis,
        } => run_solve(&mut out, args.format, &known, target, target_axis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("450@45", 450.0, 45.0)]
    #[case(" 200 @ -12.5 ", 200.0, -12.5)]
    fn parses_magnitude_at_angle(#[case] raw: &str, #[case] magnitude: f64, #[case] angle: f64) {
        let force = parse_force(raw).expect("valid force");
        assert!((force.magnitude - magnitude).abs() < f64::EPSILON);
        assert!((force.angle - angle).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("450")]
    #[case("a@45")]
    #[case("450@north")]
    fn rejects_malformed_forces(#[case] raw: &str) {
        assert!(parse_force(raw).is_err());
    }

    #[test]
    fn default_solver_run_prints_the_worked_example() {
        let mut out = Vec::new();
        run_solve(&mut out, OutputFormat::Text, &[], None, None).expect("solve succeeds");
        let text = String::from_utf8(out).expect("utf-8 output");
        assert!(text.starts_with("F1 = 577.39 N, θ1 = -33.44° (from the X-axis)"));
        assert!(text.contains("F1 (solution)"));
    }

    #[test]
    fn target_along_rotated_axis_is_accepted() {
        let mut out = Vec::new();
        let axis = ForceArg {
            magnitude: 500.0,
            angle: 30.0,
        };
        run_solve(
            &mut out,
            OutputFormat::Json,
            &[ForceArg {
                magnitude: 100.0,
                angle: 0.0,
            }],
            None,
            Some(axis),
        )
        .expect("solve succeeds");
        let json: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
        assert_eq!(json["known"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["table"][1]["label"], "F1 (solution)");
    }
}
