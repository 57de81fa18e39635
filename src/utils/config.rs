//! Configuration and constants for the estimator and CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Physical defaults for the switching model
pub const DEFAULT_CAPACITANCE_F: f64 = 1e-15; // 1 fF per bit
pub const DEFAULT_VOLTAGE: f64 = 1.0;
pub const DEFAULT_CLOCK_FREQ_HZ: f64 = 50e6; // 50 MHz

/// Widest signal the toggle counter accepts (values are stored as u128)
pub const MAX_SIGNAL_WIDTH: u32 = 128;

// Environment variables consulted by the CLI when a flag is omitted
pub const ENV_CAPACITANCE_F: &str = "TOGGLE_POWER_CAPACITANCE_F";
pub const ENV_VOLTAGE: &str = "TOGGLE_POWER_VOLTAGE";
pub const ENV_CLOCK_FREQ_HZ: &str = "TOGGLE_POWER_CLOCK_FREQ_HZ";
