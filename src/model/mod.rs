//! Data model shared by every stage of the pipeline.
//!
//! - Signal descriptors from the circuit builder
//! - Traces and stimulus records exchanged with the simulator
//! - Toggle and power reports returned to the caller

pub mod report;
pub mod signal;
pub mod trace;

// Re-export main types
pub use report::{PowerReport, ReportDocument, ToggleReport};
pub use signal::{width_mask, Signal, SignalRole};
pub use trace::{Stimulus, Trace};
