//! Toggle activity analysis.
//!
//! Turns raw per-cycle value traces into per-bit transition counts.

pub mod counter;

// Re-export main functions
pub use counter::{count_all_toggles, count_toggles};
