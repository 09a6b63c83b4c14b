//! uncertainty-report: evaluate the measurement uncertainty of a logged DMM run.
//!
//! Reads a JSON array of `{timestamp, voltage, temperature}` readings, optionally
//! corrects the voltages to a reference temperature, and prints the Type A,
//! Type B and expanded uncertainty together with per-reading `± U` bounds.
//!
//! Usage:
//!   cargo run -p bench-cli -- --input run.json
//!   cargo run -p bench-cli -- --input run.json --pretty
//!   REFERENCE_TEMPERATURE=23 cargo run -p bench-cli -- --input run.json

use anyhow::{bail, Context, Result};
use bench_core::MeasurementSource;

mod config;
mod report;
mod source;

use config::ReportConfig;
use report::UncertaintyReport;
use source::JsonFileSource;

const USAGE: &str = "usage: uncertainty-report --input <readings.json> [--pretty]";

/// Value following `--input`; another flag in that position is a missing value
fn input_path(args: &[String]) -> Result<&str> {
    let value = args
        .iter()
        .position(|a| a == "--input")
        .and_then(|i| args.get(i + 1))
        .context(USAGE)?;
    if value.starts_with("--") {
        bail!("--input expects a file path, got {}; {}", value, USAGE);
    }
    Ok(value.as_str())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays a clean JSON document
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let args: Vec<String> = std::env::args().collect();
    let pretty = args.iter().any(|a| a == "--pretty");
    let input = input_path(&args)?;

    let config = ReportConfig::from_env()?;
    tracing::info!(
        k = config.coverage_factor,
        reading_ppm = config.reading_ppm,
        range_ppm = config.range_ppm,
        range_volts = config.range_volts,
        "configuration loaded"
    );

    let source = JsonFileSource::new(input);
    let readings = source.readings().await?;

    let report = UncertaintyReport::build(&readings, &config)?;
    tracing::info!(
        mean = report.mean_voltage,
        type_a = report.type_a_uncertainty,
        type_b = report.type_b_uncertainty,
        type_a_fraction = report.type_a_fraction,
        expanded = report.total_expanded_uncertainty,
        "uncertainty evaluated"
    );

    let output = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}
