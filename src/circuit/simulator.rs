//! Cycle-stepping simulation of a `Circuit`.
//!
//! Each step checks the stimulus against the circuit's inputs, evaluates
//! every assignment in declaration order and records the value of each
//! named signal.

use super::builder::Circuit;
use crate::estimator::Simulator;
use crate::model::{Signal, SignalRole, Stimulus, Trace};
use crate::utils::error::SimulationError;
use log::debug;
use std::collections::HashMap;

/// Reference simulator for combinational circuits
#[derive(Debug, Clone)]
pub struct NetlistSimulator<'c> {
    circuit: &'c Circuit,
    values: HashMap<String, u128>,
    trace: Trace,
    cycle: u64,
    history_limit: Option<usize>,
}

impl<'c> NetlistSimulator<'c> {
    pub fn new(circuit: &'c Circuit) -> Self {
        let values = circuit
            .constants()
            .filter_map(|(signal, value)| signal.name.clone().map(|name| (name, value)))
            .collect();

        Self {
            circuit,
            values,
            trace: Trace::new(),
            cycle: 0,
            history_limit: None,
        }
    }

    /// Keep only the most recent `limit` cycles in the trace
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Cycles simulated so far
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Current value of a named signal
    pub fn value(&self, name: &str) -> Option<u128> {
        self.values.get(name).copied()
    }

    fn apply_inputs(&mut self, stimulus: &Stimulus) -> Result<(), SimulationError> {
        let circuit = self.circuit;
        for (name, value) in stimulus.iter() {
            let signal = circuit
                .signal(name)
                .ok_or_else(|| SimulationError::UnknownInput(name.to_string()))?;
            if signal.role != SignalRole::Input {
                return Err(SimulationError::NotAnInput(name.to_string()));
            }
            check_range(signal, name, value)?;
        }

        let driven = circuit
            .inputs()
            .map(|input| {
                let name = input.display_name();
                stimulus
                    .get(name)
                    .map(|value| (name.to_string(), value))
                    .ok_or_else(|| SimulationError::MissingInput(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.values.extend(driven);
        Ok(())
    }

    fn evaluate(&mut self) {
        let circuit = self.circuit;
        for assignment in circuit.assignments() {
            let mask = circuit
                .signal(&assignment.target)
                .map(Signal::mask)
                .unwrap_or(u128::MAX);
            let value = assignment.expr.eval(&self.values) & mask;
            self.values.insert(assignment.target.clone(), value);
        }
    }

    fn record(&mut self) {
        let circuit = self.circuit;
        for signal in circuit.signals() {
            if signal.constant {
                continue;
            }
            let Some(name) = signal.name.as_deref() else {
                continue;
            };
            let value = self.values.get(name).copied().unwrap_or(0);
            self.trace.record(name, value);
        }

        if let Some(limit) = self.history_limit {
            self.trace.truncate_front(limit);
        }
    }
}

impl Simulator for NetlistSimulator<'_> {
    fn step(&mut self, stimulus: &Stimulus) -> Result<(), SimulationError> {
        self.apply_inputs(stimulus)?;
        self.evaluate();
        self.record();
        self.cycle += 1;

        debug!("Cycle {} complete", self.cycle);
        Ok(())
    }

    fn trace(&self) -> &Trace {
        &self.trace
    }
}

fn check_range(signal: &Signal, name: &str, value: u128) -> Result<(), SimulationError> {
    if value & !signal.mask() != 0 {
        return Err(SimulationError::ValueOutOfRange {
            name: name.to_string(),
            value,
            width: signal.width,
        });
    }
    Ok(())
}
