//! Convert toggle counts into switching energy and average power.
//!
//! Every observed toggle, rising or falling, costs `C * V^2 / 2` Joules.
//! Average power divides total energy by the simulated time
//! `cycles / clock_freq_hz`.

use crate::model::ToggleReport;
use crate::utils::config::{DEFAULT_CAPACITANCE_F, DEFAULT_CLOCK_FREQ_HZ, DEFAULT_VOLTAGE};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Physical constants of the switching model
///
/// **Public** - passed to every estimation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerParams {
    /// Capacitance per bit in Farads
    pub capacitance_f: f64,

    /// Supply voltage in Volts
    pub voltage: f64,

    /// Clock frequency in Hz
    pub clock_freq_hz: f64,
}

impl Default for PowerParams {
    fn default() -> Self {
        Self {
            capacitance_f: DEFAULT_CAPACITANCE_F,
            voltage: DEFAULT_VOLTAGE,
            clock_freq_hz: DEFAULT_CLOCK_FREQ_HZ,
        }
    }
}

impl PowerParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacitance(mut self, capacitance_f: f64) -> Self {
        self.capacitance_f = capacitance_f;
        self
    }

    pub fn with_voltage(mut self, voltage: f64) -> Self {
        self.voltage = voltage;
        self
    }

    pub fn with_clock_freq(mut self, clock_freq_hz: f64) -> Self {
        self.clock_freq_hz = clock_freq_hz;
        self
    }

    /// Energy of one bit toggle in Joules
    pub fn energy_per_toggle_j(&self) -> f64 {
        self.capacitance_f * half_voltage_squared(self.voltage)
    }
}

/// Energy figures computed from a toggle report
///
/// **Public** - returned from estimate_power_all_signals
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PowerSummary {
    pub energy_per_wire_j: BTreeMap<String, f64>,
    pub total_energy_j: f64,
    pub avg_power_w: f64,
}

/// Compute per-signal energy, total energy and average power
///
/// **Public** - main entry point for power aggregation
///
/// # Arguments
/// * `all_toggles` - Per-bit toggle counts for every analyzed signal
/// * `params` - Capacitance, voltage and clock frequency
/// * `sim_cycles` - Number of simulated cycles
///
/// # Returns
/// Power summary. Zero cycles or a non-positive clock frequency yield an
/// average power of zero rather than an error.
pub fn estimate_power_all_signals(
    all_toggles: &ToggleReport,
    params: &PowerParams,
    sim_cycles: u64,
) -> PowerSummary {
    let half_v2 = half_voltage_squared(params.voltage);

    let energy_per_wire_j: BTreeMap<String, f64> = all_toggles
        .iter()
        .map(|(name, toggles_per_bit)| {
            let energy = toggles_per_bit
                .iter()
                .map(|&toggles| switching_energy_j(toggles, params.capacitance_f, half_v2))
                .sum();
            (name.clone(), energy)
        })
        .collect();

    let total_energy_j: f64 = energy_per_wire_j.values().sum();
    let sim_time_s = simulation_time_s(sim_cycles, params.clock_freq_hz);
    let avg_power_w = average_power_w(total_energy_j, sim_time_s);

    debug!(
        "Aggregated {} signals: {:.3e} J over {:.3e} s",
        energy_per_wire_j.len(),
        total_energy_j,
        sim_time_s
    );

    PowerSummary {
        energy_per_wire_j,
        total_energy_j,
        avg_power_w,
    }
}

/// Energy of `toggles` transitions on one bit
pub fn switching_energy_j(toggles: u64, capacitance_f: f64, half_voltage_squared: f64) -> f64 {
    toggles as f64 * capacitance_f * half_voltage_squared
}

/// Simulated wall time; zero when the clock frequency is not positive
pub fn simulation_time_s(sim_cycles: u64, clock_freq_hz: f64) -> f64 {
    if clock_freq_hz > 0.0 {
        sim_cycles as f64 / clock_freq_hz
    } else {
        0.0
    }
}

/// Average power; zero when no time elapsed
pub fn average_power_w(total_energy_j: f64, sim_time_s: f64) -> f64 {
    if sim_time_s > 0.0 {
        total_energy_j / sim_time_s
    } else {
        0.0
    }
}

fn half_voltage_squared(voltage: f64) -> f64 {
    0.5 * voltage * voltage
}
