//! Dynamic switching power model.
//!
//! This module transforms toggle counts into:
//! - Switching energy per signal
//! - Total energy
//! - Average power over the simulated time

pub mod aggregator;

// Re-export main types and functions
pub use aggregator::{
    average_power_w, estimate_power_all_signals, simulation_time_s, switching_energy_j,
    PowerParams, PowerSummary,
};
