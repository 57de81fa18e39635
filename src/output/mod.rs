//! Output writers for power reports.
//!
//! This module handles writing data to disk and to the terminal:
//! - JSON report documents
//! - Text summaries

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, validate_path, write_report};
pub use text::generate_text_summary;
