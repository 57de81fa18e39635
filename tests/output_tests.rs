use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use toggle_power::circuit::{eight_bit_adder, NetlistSimulator};
use toggle_power::commands::{execute_estimate, validate_args, EstimateArgs, TraceSource};
use toggle_power::model::ReportDocument;
use toggle_power::output::{read_report, validate_path, write_report};
use toggle_power::parser::{read_trace_file, write_trace_file, TraceFile};
use toggle_power::utils::config::SCHEMA_VERSION;
use toggle_power::{analyze_trace, PowerParams, Simulator, Stimulus};

fn recorded_adder_trace() -> TraceFile {
    let circuit = eight_bit_adder().unwrap();
    let mut sim = NetlistSimulator::new(&circuit);
    for (a, b) in [(0, 0), (149, 151), (170, 245), (162, 132)] {
        sim.step(&Stimulus::new().with("A", a).with("B", b)).unwrap();
    }
    TraceFile::new(circuit.signals().to_vec(), sim.trace().clone())
}

#[test]
fn test_trace_file_roundtrip_preserves_analysis() {
    let file = recorded_adder_trace();
    let temp = NamedTempFile::new().unwrap();

    write_trace_file(&file, temp.path()).unwrap();
    let loaded = read_trace_file(temp.path()).unwrap();

    assert_eq!(loaded, file);
    let params = PowerParams::default();
    let original = analyze_trace(&file.signals, &file.trace, file.cycles(), &params);
    let reloaded = analyze_trace(&loaded.signals, &loaded.trace, loaded.cycles(), &params);
    assert_eq!(original, reloaded);
}

#[test]
fn test_report_document_roundtrip() {
    let file = recorded_adder_trace();
    let report = analyze_trace(&file.signals, &file.trace, 4, &PowerParams::default());
    let document = ReportDocument::new(report, PowerParams::default());

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("reports/power.json");
    write_report(&document, &path).unwrap();

    let loaded = read_report(&path).unwrap();
    assert_eq!(loaded.version, SCHEMA_VERSION);
    assert_eq!(loaded.report.toggles, document.report.toggles);
    assert_eq!(loaded.report.sim_cycles, 4);
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_execute_estimate_from_recorded_trace() {
    let temp_dir = tempfile::tempdir().unwrap();
    let trace_path = temp_dir.path().join("trace.json");
    let report_path = temp_dir.path().join("out/report.json");
    write_trace_file(&recorded_adder_trace(), &trace_path).unwrap();

    let args = EstimateArgs {
        source: TraceSource::Recorded { trace: trace_path },
        output_json: Some(report_path.clone()),
        ..Default::default()
    };
    validate_args(&args).unwrap();
    let report = execute_estimate(args).unwrap();

    assert_eq!(report.total_toggles(), 51);
    assert!(report_path.exists());
}

#[test]
fn test_execute_estimate_from_stimulus_file() {
    let mut stimuli = NamedTempFile::new().unwrap();
    writeln!(stimuli, "# A B").unwrap();
    writeln!(stimuli, r#"{{"A": 0, "B": 0}}"#).unwrap();
    writeln!(stimuli, r#"{{"A": 255, "B": 1}}"#).unwrap();

    let args = EstimateArgs {
        source: TraceSource::Demo {
            stimuli: Some(stimuli.path().to_path_buf()),
        },
        output_json: None,
        ..Default::default()
    };
    let report = execute_estimate(args).unwrap();

    assert_eq!(report.sim_cycles, 2);
    assert_eq!(report.toggles["CARRY"], vec![1]);
    assert_eq!(report.toggles["SUM"], vec![0; 8]);
}

#[test]
fn test_execute_estimate_bad_stimulus_line() {
    let mut stimuli = NamedTempFile::new().unwrap();
    writeln!(stimuli, r#"{{"A": 0, "B": 0}}"#).unwrap();
    writeln!(stimuli, "not json").unwrap();

    let args = EstimateArgs {
        source: TraceSource::Demo {
            stimuli: Some(stimuli.path().to_path_buf()),
        },
        output_json: None,
        ..Default::default()
    };

    assert!(execute_estimate(args).is_err());
}

#[test]
fn test_unnamed_signal_in_trace_file_skipped() {
    let json = r#"{
        "signals": [
            { "name": "A", "width": 2, "role": "input" },
            { "width": 2, "role": "internal" }
        ],
        "trace": { "A": [0, 3, 0] }
    }"#;
    let file = toggle_power::parser::parse_trace_file(json).unwrap();
    let report = analyze_trace(&file.signals, &file.trace, file.cycles(), &PowerParams::default());

    assert_eq!(report.toggles.len(), 1);
    assert_eq!(report.toggles["A"], vec![2, 2]);
}
