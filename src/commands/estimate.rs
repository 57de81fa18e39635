//! Estimate command implementation.
//!
//! The estimate command:
//! 1. Obtains a trace (by simulating, or from a recorded file)
//! 2. Counts toggles per bit
//! 3. Aggregates energy and average power
//! 4. Writes the JSON report and optional text summary

use super::models::{EstimateArgs, TraceSource};
use crate::circuit::{eight_bit_adder, NetlistSimulator};
use crate::estimator::{analyze_trace, estimate_power, try_estimate_power};
use crate::model::{PowerReport, ReportDocument, Stimulus};
use crate::output::{generate_text_summary, validate_path, write_report};
use crate::parser::{read_trace_file, StimulusReader};
use crate::power::PowerParams;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Input vectors of the sample adder run
pub const DEMO_VECTORS: [(u128, u128); 4] = [
    (0b0000_0000, 0b0000_0000),
    (0b1001_0101, 0b1001_0111),
    (0b1010_1010, 0b1111_0101),
    (0b1010_0010, 0b1000_0100),
];

/// Execute the estimate command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The computed report, after any requested output has been written
///
/// # Errors
/// * Stimulus or trace file read/parse failures
/// * Simulator rejecting a stimulus record
/// * File write errors
pub fn execute_estimate(args: EstimateArgs) -> Result<PowerReport> {
    let start_time = Instant::now();

    info!("Step 1/3: Collecting trace...");
    let report = match &args.source {
        TraceSource::Demo { stimuli } => run_demo(stimuli.as_deref(), &args.params)?,
        TraceSource::Recorded { trace } => run_recorded(trace, &args.params)?,
    };

    info!("Step 2/3: {}", report.summary());
    if let Some((name, energy)) = report.hottest_signal() {
        debug!("Highest energy signal: {} ({:.3e} J)", name, energy);
    }

    info!("Step 3/3: Writing output...");
    if let Some(path) = &args.output_json {
        let document = ReportDocument::new(report.clone(), args.params);
        write_report(&document, path).context("Failed to write power report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("POWER SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Capacitance: {:.3e} F/bit", args.params.capacitance_f);
        println!("Voltage:     {} V", args.params.voltage);
        println!("Clock:       {:.3e} Hz", args.params.clock_freq_hz);
        println!("\n{}", generate_text_summary(&report));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Estimate completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Simulate the sample adder
fn run_demo(stimuli: Option<&Path>, params: &PowerParams) -> Result<PowerReport> {
    let circuit = eight_bit_adder().context("Failed to build adder circuit")?;
    let simulator = NetlistSimulator::new(&circuit);

    let report = match stimuli {
        Some(path) => {
            info!("Reading stimuli from: {}", path.display());
            let reader = StimulusReader::open(path)
                .with_context(|| format!("Failed to open stimulus file {}", path.display()))?;
            try_estimate_power(circuit.signals(), simulator, reader, params)?
        }
        None => {
            let records = DEMO_VECTORS
                .iter()
                .map(|&(a, b)| Stimulus::new().with("A", a).with("B", b));
            estimate_power(circuit.signals(), simulator, records, params)?
        }
    };

    Ok(report)
}

/// Re-analyze a recorded trace file
fn run_recorded(path: &Path, params: &PowerParams) -> Result<PowerReport> {
    info!("Loading trace from: {}", path.display());
    let file = read_trace_file(path)
        .with_context(|| format!("Failed to load trace file {}", path.display()))?;

    Ok(analyze_trace(&file.signals, &file.trace, file.cycles(), params))
}

/// Validate estimate arguments
///
/// **Public** - can be called before execute_estimate for early validation
pub fn validate_args(args: &EstimateArgs) -> Result<()> {
    let params = &args.params;

    if !params.capacitance_f.is_finite() || params.capacitance_f < 0.0 {
        anyhow::bail!("Capacitance must be a finite, non-negative number of Farads");
    }

    if !params.voltage.is_finite() {
        anyhow::bail!("Voltage must be finite");
    }

    // Zero is allowed and yields zero average power
    if !params.clock_freq_hz.is_finite() || params.clock_freq_hz < 0.0 {
        anyhow::bail!("Clock frequency must be a finite, non-negative number of Hz");
    }

    match &args.source {
        TraceSource::Demo { stimuli: Some(path) } | TraceSource::Recorded { trace: path } => {
            if !path.is_file() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
        }
        TraceSource::Demo { stimuli: None } => {}
    }

    if let Some(path) = &args.output_json {
        validate_path(path)?;
    }

    Ok(())
}
