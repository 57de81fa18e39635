//! Plain-text report rendering for terminal output.

use crate::model::PowerReport;
use std::fmt::Write;

/// Render a report as a per-signal table
///
/// Signals are listed by descending energy, ties broken by name.
pub fn generate_text_summary(report: &PowerReport) -> String {
    let mut rows: Vec<(&String, &Vec<u64>, f64)> = report
        .toggles
        .iter()
        .map(|(name, toggles)| {
            let energy = report.energy_per_wire_j.get(name).copied().unwrap_or(0.0);
            (name, toggles, energy)
        })
        .collect();
    rows.sort_by(|a, b| b.2.total_cmp(&a.2).then_with(|| a.0.cmp(b.0)));

    let name_width = rows
        .iter()
        .map(|(name, _, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("Signal".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:>8}  {:>12}  Per-bit toggles (LSB first)",
        "Signal", "Toggles", "Energy (J)"
    );
    for (name, toggles, energy) in &rows {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>8}  {:>12.3e}  {:?}",
            name,
            toggles.iter().sum::<u64>(),
            energy,
            toggles
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Simulation cycles: {}", report.sim_cycles);
    let _ = writeln!(out, "Total energy:      {:.3e} J", report.total_energy_j);
    let _ = write!(out, "Average power:     {:.3e} W", report.avg_power_w);
    if let Some((name, _)) = report.hottest_signal() {
        let _ = write!(out, "\nHighest energy:    {}", name);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_rows_sorted_by_energy() {
        let report = PowerReport {
            toggles: BTreeMap::from([
                ("A".to_string(), vec![1]),
                ("B".to_string(), vec![3, 1]),
            ]),
            energy_per_wire_j: BTreeMap::from([
                ("A".to_string(), 1.0),
                ("B".to_string(), 4.0),
            ]),
            total_energy_j: 5.0,
            avg_power_w: 2.5,
            sim_cycles: 2,
        };

        let text = generate_text_summary(&report);
        let b_pos = text.find("\nB ").unwrap();
        let a_pos = text.find("\nA ").unwrap();

        assert!(b_pos < a_pos);
        assert!(text.contains("Simulation cycles: 2"));
        assert!(text.contains("Highest energy:    B"));
    }

    #[test]
    fn test_empty_report() {
        let report = PowerReport {
            toggles: BTreeMap::new(),
            energy_per_wire_j: BTreeMap::new(),
            total_energy_j: 0.0,
            avg_power_w: 0.0,
            sim_cycles: 0,
        };

        let text = generate_text_summary(&report);
        assert!(text.starts_with("Signal"));
        assert!(!text.contains("Highest energy"));
    }
}
