//! # splines
//!
//! Command-line front end for `spline_core`. Each designation is parsed,
//! derived and printed as drawing data (or JSON with `--json`). Failures
//! are reported per designation on stderr and turn the exit status to 1.

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spline_core::units::Millimeters;
use spline_core::{
    DrawingData, OutputSettings, SplineCalculator, SplineError, SplineReport, SplineSpecification,
};

mod cli;

use cli::Cli;

/// One designation's outcome in JSON output
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Entry {
    Ok {
        report: SplineReport,
        drawing: DrawingData,
    },
    Error {
        designation: String,
        code: &'static str,
        error: SplineError,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

/// Designations from the arguments, or stdin lines when there are none
fn collect_designations(cli: &Cli) -> io::Result<Vec<String>> {
    if !cli.designations.is_empty() {
        return Ok(cli.designations.clone());
    }
    let mut designations = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        designations.push(trimmed.to_string());
    }
    Ok(designations)
}

fn derive(
    calculator: &SplineCalculator,
    designation: &str,
    length: Option<f64>,
) -> Result<SplineReport, SplineError> {
    let specification =
        SplineSpecification::parse(designation)?.with_reference_length(length.map(Millimeters));
    calculator.report(designation, specification)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let designations = match collect_designations(&cli) {
        Ok(designations) => designations,
        Err(err) => {
            eprintln!("error: failed to read stdin: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if designations.is_empty() {
        eprintln!("error: no spline designation given");
        return ExitCode::FAILURE;
    }

    let settings: OutputSettings = cli.output_settings();
    let calculator = SplineCalculator::new();
    let mut failed = false;
    let mut entries = Vec::new();

    for designation in &designations {
        debug!(%designation, "processing");
        match derive(&calculator, designation, cli.length) {
            Ok(report) => {
                let drawing = DrawingData::new(&report, &settings);
                if cli.json {
                    entries.push(Entry::Ok { report, drawing });
                } else {
                    println!("{}", drawing);
                }
            }
            Err(error) => {
                failed = true;
                eprintln!("error: {}: {}", designation, error);
                if cli.json {
                    entries.push(Entry::Error {
                        designation: designation.clone(),
                        code: error.error_code(),
                        error,
                    });
                }
            }
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("error: failed to serialize results: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
