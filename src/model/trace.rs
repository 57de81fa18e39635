//! Recorded signal traces and per-cycle stimulus records.

use crate::utils::error::TraceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values observed per signal, one entry per simulated cycle
///
/// **Public** - produced by a simulator, read by the toggle counter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    values: BTreeMap<String, Vec<u128>>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one cycle's value for a signal
    pub fn record(&mut self, name: &str, value: u128) {
        self.values.entry(name.to_string()).or_default().push(value);
    }

    /// Replace the whole history of a signal
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<u128>) {
        self.values.insert(name.into(), values);
    }

    /// History of one signal, `None` if it was never recorded
    pub fn get(&self, name: &str) -> Option<&[u128]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Drop the oldest cycles so that at most `limit` remain per signal
    pub fn truncate_front(&mut self, limit: usize) {
        for history in self.values.values_mut() {
            if history.len() > limit {
                history.drain(..history.len() - limit);
            }
        }
    }

    /// Number of cycles in the trace
    ///
    /// Uses the longest sequence so a malformed trace never under-reports.
    pub fn cycle_count(&self) -> usize {
        self.values.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn signal_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that every sequence shares the same length
    pub fn validate(&self) -> Result<(), TraceError> {
        let mut iter = self.values.iter();
        let Some((_, first)) = iter.next() else {
            return Ok(());
        };
        let expected = first.len();

        for (name, history) in iter {
            if history.len() != expected {
                return Err(TraceError::InconsistentLength {
                    name: name.clone(),
                    len: history.len(),
                    expected,
                });
            }
        }
        Ok(())
    }
}

/// Input values applied for one simulated cycle
///
/// Records are passed to the simulator opaquely; checking names and
/// ranges is the simulator's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stimulus {
    inputs: BTreeMap<String, u128>,
}

impl Stimulus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: u128) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: u128) {
        self.inputs.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<u128> {
        self.inputs.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u128)> {
        self.inputs.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u128)> for Stimulus {
    fn from_iter<T: IntoIterator<Item = (S, u128)>>(iter: T) -> Self {
        Self {
            inputs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
