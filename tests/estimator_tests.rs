use pretty_assertions::assert_eq;
use toggle_power::circuit::{eight_bit_adder, CircuitBuilder, Expr, NetlistSimulator};
use toggle_power::commands::DEMO_VECTORS;
use toggle_power::utils::error::{EstimateError, SimulationError};
use toggle_power::{analyze_trace, estimate_power, PowerParams, Simulator, Stimulus};

fn demo_stimuli() -> Vec<Stimulus> {
    DEMO_VECTORS
        .iter()
        .map(|&(a, b)| Stimulus::new().with("A", a).with("B", b))
        .collect()
}

fn totals(report: &toggle_power::PowerReport) -> Vec<(String, u64)> {
    report
        .toggles
        .iter()
        .map(|(name, t)| (name.clone(), t.iter().sum()))
        .collect()
}

#[test]
fn test_adder_demo_toggles() {
    let circuit = eight_bit_adder().unwrap();
    let report = estimate_power(
        circuit.signals(),
        NetlistSimulator::new(&circuit),
        demo_stimuli(),
        &PowerParams::default(),
    )
    .unwrap();

    assert_eq!(report.sim_cycles, 4);
    assert_eq!(report.toggles["A"], vec![2, 1, 2, 2, 2, 1, 0, 1]);
    assert_eq!(
        totals(&report),
        vec![
            ("A".to_string(), 11),
            ("B".to_string(), 12),
            ("CARRY".to_string(), 1),
            ("SUM".to_string(), 13),
            ("result".to_string(), 14),
        ]
    );
    assert_eq!(report.total_toggles(), 51);

    let sum: f64 = report.energy_per_wire_j.values().sum();
    assert_eq!(report.total_energy_j, sum);
}

#[test]
fn test_zero_stimuli() {
    let circuit = eight_bit_adder().unwrap();
    let report = estimate_power(
        circuit.signals(),
        NetlistSimulator::new(&circuit),
        Vec::new(),
        &PowerParams::default(),
    )
    .unwrap();

    assert_eq!(report.sim_cycles, 0);
    assert_eq!(report.avg_power_w, 0.0);
    assert_eq!(report.total_energy_j, 0.0);
}

#[test]
fn test_zero_clock_frequency() {
    let circuit = eight_bit_adder().unwrap();
    let report = estimate_power(
        circuit.signals(),
        NetlistSimulator::new(&circuit),
        demo_stimuli(),
        &PowerParams::default().with_clock_freq(0.0),
    )
    .unwrap();

    assert_eq!(report.avg_power_w, 0.0);
    assert!(report.total_energy_j > 0.0);
}

#[test]
fn test_caller_stops_early() {
    let circuit = eight_bit_adder().unwrap();

    // Unbounded source, cut off by the caller
    let stimuli = (0u128..)
        .map(|i| Stimulus::new().with("A", i % 256).with("B", 0))
        .take(10);

    let report = estimate_power(
        circuit.signals(),
        NetlistSimulator::new(&circuit),
        stimuli,
        &PowerParams::default(),
    )
    .unwrap();

    assert_eq!(report.sim_cycles, 10);
    // bit 0 of A alternates every cycle
    assert_eq!(report.toggles["A"][0], 9);
}

#[test]
fn test_bad_stimulus_aborts_run() {
    let circuit = eight_bit_adder().unwrap();
    let mut stimuli = demo_stimuli();
    stimuli.insert(2, Stimulus::new().with("A", 1).with("B", 999));

    let err = estimate_power(
        circuit.signals(),
        NetlistSimulator::new(&circuit),
        stimuli,
        &PowerParams::default(),
    )
    .unwrap_err();

    match err {
        EstimateError::Simulation { cycle, source } => {
            assert_eq!(cycle, 2);
            assert!(matches!(source, SimulationError::ValueOutOfRange { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_reanalysis_without_resimulation() {
    let circuit = eight_bit_adder().unwrap();
    let mut sim = NetlistSimulator::new(&circuit);
    for stimulus in demo_stimuli() {
        sim.step(&stimulus).unwrap();
    }

    let nominal = analyze_trace(circuit.signals(), sim.trace(), 4, &PowerParams::default());
    let fast = analyze_trace(
        circuit.signals(),
        sim.trace(),
        4,
        &PowerParams::default().with_clock_freq(100e6),
    );

    assert_eq!(nominal.toggles, fast.toggles);
    assert_eq!(nominal.total_energy_j, fast.total_energy_j);
    assert!((fast.avg_power_w / nominal.avg_power_w - 2.0).abs() < 1e-12);
}

#[test]
fn test_bounded_history_simulator() {
    let circuit = eight_bit_adder().unwrap();
    let report = estimate_power(
        circuit.signals(),
        NetlistSimulator::new(&circuit).with_history_limit(2),
        demo_stimuli(),
        &PowerParams::default(),
    )
    .unwrap();

    // Only the last transition (0xAA -> 0xA2) is visible
    assert_eq!(report.sim_cycles, 4);
    assert_eq!(report.toggles["A"], vec![0, 0, 0, 1, 0, 0, 0, 0]);
}

#[test]
fn test_constants_excluded_from_report() {
    let mut builder = CircuitBuilder::new();
    let a = builder.input("A", 4).unwrap();
    let k = builder.constant(Some("MASK"), 4, 0b1100).unwrap();
    let one = builder.constant(None, 4, 1).unwrap();
    builder.output("Y", 4).unwrap();
    builder.assign("Y", Expr::add(Expr::and(a, k), one)).unwrap();
    let circuit = builder.build();

    let stimuli = [0u128, 15, 0].map(|v| Stimulus::new().with("A", v));
    let report = estimate_power(
        circuit.signals(),
        NetlistSimulator::new(&circuit),
        stimuli,
        &PowerParams::default(),
    )
    .unwrap();

    assert_eq!(report.toggles.keys().collect::<Vec<_>>(), vec!["A", "Y"]);
    // Y: 1, 13, 1
    assert_eq!(report.toggles["Y"], vec![0, 0, 2, 2]);
}
