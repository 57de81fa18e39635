//! Estimation pipeline.
//!
//! The estimator:
//! 1. Pulls stimulus records one at a time
//! 2. Steps the simulator once per record
//! 3. Counts toggles over the resulting trace
//! 4. Aggregates switching energy and average power

use crate::model::{PowerReport, Signal, Stimulus, Trace};
use crate::power::{estimate_power_all_signals, PowerParams};
use crate::toggle::count_all_toggles;
use crate::utils::error::{EstimateError, SimulationError};
use log::{debug, info, warn};
use std::fmt::Display;

/// A cycle-stepping simulator
///
/// Implementors apply one stimulus record per step and expose the values
/// they have recorded so far. They may keep only a bounded history.
pub trait Simulator {
    /// Apply `stimulus` and advance one cycle
    fn step(&mut self, stimulus: &Stimulus) -> Result<(), SimulationError>;

    /// Values recorded so far
    fn trace(&self) -> &Trace;
}

impl<S: Simulator + ?Sized> Simulator for &mut S {
    fn step(&mut self, stimulus: &Stimulus) -> Result<(), SimulationError> {
        (**self).step(stimulus)
    }

    fn trace(&self) -> &Trace {
        (**self).trace()
    }
}

/// Drive a simulator with a lazy stimulus source and report power
///
/// **Public** - main entry point for estimation
///
/// # Arguments
/// * `signals` - Signal descriptors of the simulated circuit
/// * `simulator` - Simulator to drive; should start with an empty trace
/// * `stimuli` - Stimulus records, consumed one per cycle
/// * `params` - Physical constants
///
/// # Returns
/// Power report over every consumed cycle. Exhausting the source ends the
/// run normally, including when it yields nothing at all.
///
/// # Errors
/// * `EstimateError::Simulation` - the simulator rejected a record
pub fn estimate_power<S, I>(
    signals: &[Signal],
    simulator: S,
    stimuli: I,
    params: &PowerParams,
) -> Result<PowerReport, EstimateError>
where
    S: Simulator,
    I: IntoIterator<Item = Stimulus>,
{
    try_estimate_power(
        signals,
        simulator,
        stimuli.into_iter().map(Ok::<_, std::convert::Infallible>),
        params,
    )
}

/// Like [`estimate_power`], for sources that can fail
///
/// **Public** - used when stimuli are parsed lazily, e.g. from a file
///
/// # Errors
/// * `EstimateError::Stimulus` - the source yielded an error
/// * `EstimateError::Simulation` - the simulator rejected a record
pub fn try_estimate_power<S, I, E>(
    signals: &[Signal],
    mut simulator: S,
    stimuli: I,
    params: &PowerParams,
) -> Result<PowerReport, EstimateError>
where
    S: Simulator,
    I: IntoIterator<Item = Result<Stimulus, E>>,
    E: Display,
{
    info!("Running simulation over {} signals", signals.len());

    let mut sim_cycles: u64 = 0;
    for record in stimuli {
        let stimulus = record.map_err(|e| EstimateError::Stimulus {
            cycle: sim_cycles,
            message: e.to_string(),
        })?;

        simulator
            .step(&stimulus)
            .map_err(|source| EstimateError::Simulation {
                cycle: sim_cycles,
                source,
            })?;
        sim_cycles += 1;
    }

    info!("Simulated {} cycles", sim_cycles);

    Ok(analyze_trace(signals, simulator.trace(), sim_cycles, params))
}

/// Compute a power report from an already captured trace
///
/// **Public** - re-analysis without re-simulating (voltage/frequency sweeps)
///
/// # Arguments
/// * `signals` - Signal descriptors
/// * `trace` - Recorded values
/// * `sim_cycles` - Cycles the trace covers, used for the time base
/// * `params` - Physical constants
pub fn analyze_trace(
    signals: &[Signal],
    trace: &Trace,
    sim_cycles: u64,
    params: &PowerParams,
) -> PowerReport {
    if let Err(e) = trace.validate() {
        warn!("{}", e);
    }

    let toggles = count_all_toggles(signals, trace);
    debug!("Counted toggles for {} signals", toggles.len());

    let summary = estimate_power_all_signals(&toggles, params, sim_cycles);

    PowerReport {
        toggles,
        energy_per_wire_j: summary.energy_per_wire_j,
        total_energy_j: summary.total_energy_j,
        avg_power_w: summary.avg_power_w,
        sim_cycles,
    }
}
