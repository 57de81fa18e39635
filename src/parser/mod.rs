//! Input parsing for recorded traces and stimulus streams.
//!
//! This module handles:
//! - Loading and saving recorded trace files
//! - Validating trace consistency
//! - Reading stimulus records lazily from JSON Lines

pub mod stimulus;
pub mod trace_file;

// Re-export main types
pub use stimulus::StimulusReader;
pub use trace_file::{parse_trace_file, read_trace_file, write_trace_file, TraceFile};
