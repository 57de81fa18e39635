use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let document = read_report(file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    if document.version != SCHEMA_VERSION {
        println!(
            "⚠ Schema version {} differs from current {}",
            document.version, SCHEMA_VERSION
        );
    }

    let report = &document.report;
    let sum: f64 = report.energy_per_wire_j.values().sum();
    // JSON decimal round-trips may move the last digit
    if (sum - report.total_energy_j).abs() > report.total_energy_j.abs() * 1e-12 {
        anyhow::bail!(
            "totalEnergyJ ({:e}) does not match the sum of per-signal energies ({:e})",
            report.total_energy_j,
            sum
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", document.version);
    println!("  Generated: {}", document.generated_at);
    println!("  Signals: {}", report.toggles.len());
    println!("  Cycles: {}", report.sim_cycles);
    println!("  Total Energy: {:.3e} J", report.total_energy_j);
    println!("  Average Power: {:.3e} W", report.avg_power_w);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Toggle Power Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  generatedAt: string        - ISO 8601 timestamp");
        println!("  params: object             - Physical constants");
        println!("    capacitanceF: number     - Capacitance per bit (F)");
        println!("    voltage: number          - Supply voltage (V)");
        println!("    clockFreqHz: number      - Clock frequency (Hz)");
        println!("  report: object             - Estimation result");
        println!("    toggles: object          - Per-bit toggle counts by signal (LSB first)");
        println!("    energyPerWireJ: object   - Switching energy by signal (J)");
        println!("    totalEnergyJ: number     - Sum of per-signal energies (J)");
        println!("    avgPowerW: number        - Average dynamic power (W)");
        println!("    simCycles: number        - Simulated cycles");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Toggle Power v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Dynamic switching power estimation from cycle-by-cycle signal traces.");
}
