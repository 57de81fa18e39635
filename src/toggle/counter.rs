//! Count per-bit transitions in recorded traces.
//!
//! A bit toggles exactly when its value differs between two consecutive
//! cycles, so XOR-ing each adjacent pair of values yields the set of bits
//! that switched in that transition.

use crate::model::{width_mask, Signal, ToggleReport, Trace};
use log::debug;

/// Count toggles per bit for one signal
///
/// **Public** - main entry point for a single signal
///
/// # Arguments
/// * `values` - One value per cycle, oldest first
/// * `width` - Signal width in bits
///
/// # Returns
/// Vector of `width` counters; index 0 is the least significant bit.
/// Bits at or above `width` are ignored. Each counter is at most
/// `values.len() - 1`.
pub fn count_toggles(values: &[u128], width: u32) -> Vec<u64> {
    let mut toggles_per_bit = vec![0u64; width as usize];
    let mask = width_mask(width);

    for pair in values.windows(2) {
        let mut delta = (pair[0] ^ pair[1]) & mask;

        // Visit only the set bits of the delta
        while delta != 0 {
            let bit = delta.trailing_zeros() as usize;
            toggles_per_bit[bit] += 1;
            delta &= delta - 1;
        }
    }

    toggles_per_bit
}

/// Count toggles for every eligible signal of a circuit
///
/// **Public** - used by the estimator and for re-analysis of saved traces
///
/// Constants, unnamed signals and signals absent from the trace are
/// skipped without error.
pub fn count_all_toggles(signals: &[Signal], trace: &Trace) -> ToggleReport {
    let mut all_toggles = ToggleReport::new();

    for signal in signals {
        if !signal.is_eligible() {
            debug!("Skipping ineligible signal {}", signal.display_name());
            continue;
        }
        let Some(name) = signal.name.as_deref() else {
            continue;
        };
        let Some(values) = trace.get(name) else {
            debug!("Skipping '{}': not recorded", name);
            continue;
        };

        let toggles = count_toggles(values, signal.width);
        debug!(
            "'{}': {} toggles over {} cycles",
            name,
            toggles.iter().sum::<u64>(),
            values.len()
        );
        all_toggles.insert(name.to_string(), toggles);
    }

    all_toggles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_toggles_reference_sequence() {
        // deltas: 0x95, 0x3F, 0x08
        let toggles = count_toggles(&[0x00, 0x95, 0xAA, 0xA2], 8);
        assert_eq!(toggles, vec![2, 1, 2, 2, 2, 1, 0, 1]);
        assert_eq!(toggles.iter().sum::<u64>(), 11);
    }

    #[test]
    fn test_fewer_than_two_cycles() {
        assert_eq!(count_toggles(&[], 4), vec![0; 4]);
        assert_eq!(count_toggles(&[0xF], 4), vec![0; 4]);
    }

    #[test]
    fn test_constant_trace_has_no_toggles() {
        assert_eq!(count_toggles(&[5, 5, 5, 5], 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_bits_above_width_ignored() {
        assert_eq!(count_toggles(&[0b0000, 0b1101], 2), vec![1, 0]);
    }

    #[test]
    fn test_wide_signal() {
        let high = 1u128 << 127;
        let toggles = count_toggles(&[0, high | 1, 0], 128);
        assert_eq!(toggles.len(), 128);
        assert_eq!(toggles[0], 2);
        assert_eq!(toggles[127], 2);
        assert_eq!(toggles.iter().sum::<u64>(), 4);
    }

    #[test]
    fn test_count_all_toggles_skips_ineligible() {
        let signals = vec![
            Signal::input("A", 4).unwrap(),
            Signal::constant(Some("K"), 4).unwrap(),
            Signal::output("NOT_RECORDED", 4).unwrap(),
        ];
        let mut trace = Trace::new();
        trace.insert("A", vec![0, 1, 3]);
        trace.insert("K", vec![0, 15, 0]);

        let report = count_all_toggles(&signals, &trace);

        assert_eq!(report.len(), 1);
        assert_eq!(report["A"], vec![1, 1, 0, 0]);
    }
}
