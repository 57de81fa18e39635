//! Toggle Power CLI
//!
//! Estimates dynamic switching power from cycle-by-cycle signal traces.
//! Simulates the built-in sample adder or re-analyzes recorded traces.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use toggle_power::commands::{
    display_schema, display_version, execute_estimate, validate_args, validate_report_file,
    EstimateArgs, TraceSource,
};
use toggle_power::utils::config::{
    DEFAULT_CAPACITANCE_F, DEFAULT_CLOCK_FREQ_HZ, DEFAULT_VOLTAGE, ENV_CAPACITANCE_F,
    ENV_CLOCK_FREQ_HZ, ENV_VOLTAGE,
};
use toggle_power::PowerParams;

/// Toggle Power - dynamic switching power estimation
#[derive(Parser, Debug)]
#[command(name = "toggle-power")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Physical constants shared by the estimation commands
#[derive(Args, Debug)]
struct PhysicalArgs {
    /// Capacitance per bit in Farads
    #[arg(long, env = ENV_CAPACITANCE_F, default_value_t = DEFAULT_CAPACITANCE_F)]
    capacitance: f64,

    /// Supply voltage in Volts
    #[arg(long, env = ENV_VOLTAGE, default_value_t = DEFAULT_VOLTAGE)]
    voltage: f64,

    /// Clock frequency in Hz
    #[arg(long, env = ENV_CLOCK_FREQ_HZ, default_value_t = DEFAULT_CLOCK_FREQ_HZ)]
    clock_freq: f64,
}

impl From<PhysicalArgs> for PowerParams {
    fn from(args: PhysicalArgs) -> Self {
        PowerParams::new()
            .with_capacitance(args.capacitance)
            .with_voltage(args.voltage)
            .with_clock_freq(args.clock_freq)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate the sample 8-bit adder and estimate its power
    Demo {
        /// JSON Lines stimulus file (one {"A": .., "B": ..} record per line)
        #[arg(short, long)]
        stimuli: Option<PathBuf>,

        /// Output path for JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        #[command(flatten)]
        physical: PhysicalArgs,
    },

    /// Estimate power from a recorded trace file
    Analyze {
        /// Path to trace JSON file
        #[arg(short, long)]
        trace: PathBuf,

        /// Output path for JSON report (placed in artifacts/ by default)
        #[arg(short, long, default_value = "artifacts/power_report.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        #[command(flatten)]
        physical: PhysicalArgs,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Demo {
            stimuli,
            output,
            summary,
            physical,
        } => {
            // Without an output file the summary is the only result
            let print_summary = summary || output.is_none();
            run_estimate(EstimateArgs {
                source: TraceSource::Demo { stimuli },
                output_json: output,
                params: physical.into(),
                print_summary,
            })?;
        }

        Commands::Analyze {
            trace,
            output,
            summary,
            physical,
        } => {
            run_estimate(EstimateArgs {
                source: TraceSource::Recorded { trace },
                output_json: Some(output),
                params: physical.into(),
                print_summary: summary,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

fn run_estimate(args: EstimateArgs) -> Result<()> {
    validate_args(&args)?;
    execute_estimate(args)?;
    Ok(())
}
