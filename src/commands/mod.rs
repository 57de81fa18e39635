//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod estimate;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use estimate::{execute_estimate, validate_args, DEMO_VECTORS};
pub use models::{EstimateArgs, TraceSource};
pub use utils::{display_schema, display_version, validate_report_file};
