//! Recorded trace files.
//!
//! A trace file pairs signal descriptors with their recorded values so a
//! previous simulation can be re-analyzed without re-running it:
//!
//! ```json
//! {
//!   "signals": [{ "name": "A", "width": 8, "role": "input" }],
//!   "trace": { "A": [0, 149, 170, 162] },
//!   "simCycles": 4
//! }
//! ```

use crate::model::{Signal, Trace};
use crate::utils::error::TraceError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Signals plus their recorded values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceFile {
    pub signals: Vec<Signal>,

    pub trace: Trace,

    /// Cycle count for the time base; defaults to the trace length.
    /// May exceed the recorded length when only recent history was kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sim_cycles: Option<u64>,
}

impl TraceFile {
    pub fn new(signals: Vec<Signal>, trace: Trace) -> Self {
        Self {
            signals,
            trace,
            sim_cycles: None,
        }
    }

    /// Cycles to use when computing average power
    pub fn cycles(&self) -> u64 {
        self.sim_cycles
            .unwrap_or_else(|| self.trace.cycle_count() as u64)
    }
}

/// Parse a trace file from a JSON string
///
/// **Public** - main entry point for trace parsing
///
/// # Errors
/// * `TraceError::JsonError` - malformed JSON
/// * `TraceError::InvalidSignal` - a descriptor has an invalid width
/// * `TraceError::InconsistentLength` - sequences differ in length
/// * `TraceError::CyclesBelowTrace` - `simCycles` is shorter than the trace
pub fn parse_trace_file(json: &str) -> Result<TraceFile, TraceError> {
    let file: TraceFile = serde_json::from_str(json)?;
    check_trace_file(&file)?;
    Ok(file)
}

/// Load a trace file from disk
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<TraceFile, TraceError> {
    let path = path.as_ref();
    debug!("Reading trace from: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let file: TraceFile = serde_json::from_reader(reader)?;
    check_trace_file(&file)?;

    debug!(
        "Trace loaded: {} signals, {} cycles",
        file.signals.len(),
        file.trace.cycle_count()
    );
    Ok(file)
}

/// Save a trace file to disk
pub fn write_trace_file(file: &TraceFile, path: impl AsRef<Path>) -> Result<(), TraceError> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(writer, file)?;
    Ok(())
}

fn check_trace_file(file: &TraceFile) -> Result<(), TraceError> {
    for signal in &file.signals {
        signal.validate()?;
    }
    file.trace.validate()?;

    let recorded = file.trace.cycle_count() as u64;
    if let Some(sim_cycles) = file.sim_cycles {
        if sim_cycles < recorded {
            return Err(TraceError::CyclesBelowTrace {
                sim_cycles,
                recorded,
            });
        }
    }
    Ok(())
}
