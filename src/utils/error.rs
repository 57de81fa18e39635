//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while declaring signals
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    #[error("Invalid width {width} for signal '{name}' (expected 1..={max})")]
    InvalidWidth { name: String, width: u32, max: u32 },

    #[error("Duplicate signal name: {0}")]
    DuplicateName(String),

    #[error("Unknown signal: {0}")]
    UnknownSignal(String),

    #[error("Signal '{0}' cannot be assigned (input or constant)")]
    NotAssignable(String),

    #[error("Constant value {value} does not fit in {width} bits")]
    ConstantOutOfRange { value: u128, width: u32 },
}

/// Errors raised by a simulator while applying a stimulus record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Stimulus names unknown signal '{0}'")]
    UnknownInput(String),

    #[error("Signal '{0}' is not an input and cannot be driven")]
    NotAnInput(String),

    #[error("Stimulus is missing a value for input '{0}'")]
    MissingInput(String),

    #[error("Value {value} out of range for '{name}' ({width} bits)")]
    ValueOutOfRange { name: String, value: u128, width: u32 },
}

/// Errors in recorded trace data
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid stimulus record on line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inconsistent trace: '{name}' has {len} cycles, expected {expected}")]
    InconsistentLength {
        name: String,
        len: usize,
        expected: usize,
    },

    #[error("simCycles ({sim_cycles}) is shorter than the recorded trace ({recorded} cycles)")]
    CyclesBelowTrace { sim_cycles: u64, recorded: u64 },

    #[error("Invalid signal in trace file: {0}")]
    InvalidSignal(#[from] SignalError),
}

/// Errors that abort an estimation run
///
/// These are usage errors: the run stops and no partial report is produced.
#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Simulation step {cycle} failed: {source}")]
    Simulation {
        cycle: u64,
        #[source]
        source: SimulationError,
    },

    #[error("Stimulus source failed at record {cycle}: {message}")]
    Stimulus { cycle: u64, message: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
