use crate::power::PowerParams;
use std::path::PathBuf;

/// Where the estimate command gets its cycles from
#[derive(Debug, Clone, PartialEq)]
pub enum TraceSource {
    /// Simulate the built-in 8-bit adder; `None` uses the sample vectors
    Demo { stimuli: Option<PathBuf> },

    /// Re-analyze a recorded trace file
    Recorded { trace: PathBuf },
}

/// Arguments for the estimate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct EstimateArgs {
    /// Input to analyze
    pub source: TraceSource,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Physical constants
    pub params: PowerParams,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for EstimateArgs {
    fn default() -> Self {
        Self {
            source: TraceSource::Demo { stimuli: None },
            output_json: Some(PathBuf::from("artifacts/power_report.json")),
            params: PowerParams::default(),
            print_summary: false,
        }
    }
}
