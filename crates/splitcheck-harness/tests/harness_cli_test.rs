//! Integration test: harness CLI exit-status contract and artifacts.
//!
//! Validates:
//! 1. `run` exits success on a clean suite, for both backends.
//! 2. `run --report` writes markdown plus a JSON sibling that parses.
//! 3. `run --log` writes one JSONL line per comparison.
//! 4. `table` dumps the sixteen-entry fixture.
//! 5. Unknown backends fail before any comparison runs.

use std::path::PathBuf;
use std::process::Command;

fn harness() -> Command {
    Command::new(env!("CARGO_BIN_EXE_harness"))
}

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("splitcheck-{}-{name}", std::process::id()));
    path
}

#[test]
fn run_succeeds_on_both_backends() {
    for backend in ["host", "native"] {
        let status = harness()
            .args(["run", "--backend", backend])
            .status()
            .expect("harness spawns");
        assert!(status.success(), "backend {backend}");
    }
}

#[test]
fn run_writes_report_artifacts() {
    let report_path = temp_path("report.md");
    let status = harness()
        .args(["run", "--backend", "host", "--report"])
        .arg(&report_path)
        .status()
        .expect("harness spawns");
    assert!(status.success());

    let markdown = std::fs::read_to_string(&report_path).expect("markdown written");
    assert!(markdown.contains("- Total: 33"));
    assert!(markdown.contains("| nan propagation | PASS |"));

    let json_path = report_path.with_extension("json");
    let body = std::fs::read_to_string(&json_path).expect("json written");
    let report: serde_json::Value = serde_json::from_str(&body).expect("json parses");
    assert_eq!(report["summary"]["failed"].as_u64(), Some(0));
    assert_eq!(report["backend"].as_str(), Some("host"));

    let _ = std::fs::remove_file(&report_path);
    let _ = std::fs::remove_file(&json_path);
}

#[test]
fn run_writes_one_log_line_per_comparison() {
    let log_path = temp_path("run.jsonl");
    let status = harness()
        .args(["run", "--backend", "native", "--log"])
        .arg(&log_path)
        .status()
        .expect("harness spawns");
    assert!(status.success());

    let body = std::fs::read_to_string(&log_path).expect("log written");
    let lines: Vec<_> = body.lines().collect();
    assert_eq!(lines.len(), 33);
    for line in lines {
        splitcheck_harness::structured_log::validate_log_line(line).expect("line validates");
    }

    let _ = std::fs::remove_file(&log_path);
}

#[test]
fn table_dumps_the_fixture() {
    let fixture_path = temp_path("table.json");
    let status = harness()
        .args(["table", "--output"])
        .arg(&fixture_path)
        .status()
        .expect("harness spawns");
    assert!(status.success());

    let body = std::fs::read_to_string(&fixture_path).expect("fixture written");
    let records: Vec<serde_json::Value> = serde_json::from_str(&body).expect("fixture parses");
    assert_eq!(records.len(), 16);
    assert_eq!(records[0]["name"].as_str(), Some("zero"));
    assert_eq!(records[15]["value"].as_str(), Some("inf"));

    let _ = std::fs::remove_file(&fixture_path);
}

#[test]
fn parity_succeeds() {
    let status = harness().arg("parity").status().expect("harness spawns");
    assert!(status.success());
}

#[test]
fn unknown_backend_fails_fast() {
    let output = harness()
        .args(["run", "--backend", "libm"])
        .output()
        .expect("harness spawns");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown backend"), "{stderr}");
}
