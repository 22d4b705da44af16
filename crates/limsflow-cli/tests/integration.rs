#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;

fn limsflow() -> Command {
    Command::cargo_bin("limsflow").unwrap()
}

// ---------------------------------------------------------------------------
// limsflow entities
// ---------------------------------------------------------------------------

#[test]
fn entities_lists_all_six_machines() {
    limsflow()
        .arg("entities")
        .assert()
        .success()
        .stdout(predicate::str::contains("SAMPLE"))
        .stdout(predicate::str::contains("SEQUENCING_RUN"))
        .stdout(predicate::str::contains("PCR_PLATE"))
        .stdout(predicate::str::contains("INVOICE"));
}

#[test]
fn entities_json_includes_chains() {
    let output = limsflow().args(["entities", "--json"]).output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    let run = rows
        .iter()
        .find(|r| r["entity"] == "SEQUENCING_RUN")
        .unwrap();
    assert_eq!(run["statuses"][0], "SETUP");
    assert_eq!(run["statuses"][5], "SEQUENCED");
}

// ---------------------------------------------------------------------------
// limsflow statuses
// ---------------------------------------------------------------------------

#[test]
fn statuses_renders_reference_data() {
    limsflow()
        .args(["statuses", "SEQUENCING_RUN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DNA_EXTRACTED"))
        .stdout(predicate::str::contains("DNA Extracted"));
}

#[test]
fn statuses_rejects_unknown_entity() {
    limsflow()
        .args(["statuses", "BATCH"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown entity type"));
}

// ---------------------------------------------------------------------------
// limsflow transitions
// ---------------------------------------------------------------------------

#[test]
fn transitions_shows_single_successor() {
    limsflow()
        .args(["transitions", "SEQUENCING_RUN", "SETUP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SETUP -> DNA_EXTRACTED"));
}

#[test]
fn transitions_of_terminal_status_is_empty() {
    limsflow()
        .args(["transitions", "SEQUENCING_RUN", "SEQUENCED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("terminal"));
}

#[test]
fn transitions_rejects_unknown_status() {
    limsflow()
        .args(["transitions", "SEQUENCING_RUN", "DEMUXED"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown status"));
}

// ---------------------------------------------------------------------------
// limsflow check
// ---------------------------------------------------------------------------

#[test]
fn check_allows_adjacent_step() {
    limsflow()
        .args(["check", "SEQUENCING_RUN", "SETUP", "DNA_EXTRACTED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("allowed"));
}

#[test]
fn check_denies_skip_with_exit_code() {
    limsflow()
        .args(["check", "SEQUENCING_RUN", "SETUP", "POOLED"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("denied"));
}

#[test]
fn check_role_gate_denies_junior_actor() {
    limsflow()
        .args([
            "check",
            "TEST",
            "COMPLETED",
            "REVIEWED",
            "--role",
            "LAB_TECHNICIAN",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("LAB_MANAGER"));
}

#[test]
fn check_role_gate_admits_senior_actor() {
    limsflow()
        .args([
            "check",
            "TEST",
            "COMPLETED",
            "REVIEWED",
            "--role",
            "SUPER_ADMIN",
        ])
        .assert()
        .success();
}

#[test]
fn check_json_reports_required_role() {
    let output = limsflow()
        .args([
            "check", "ORDER", "REPORTED", "COMPLETED", "--role", "BILLING", "--json",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["allowed"], false);
    assert_eq!(parsed["required_role"], "ADMIN");
}

// ---------------------------------------------------------------------------
// limsflow sla report
// ---------------------------------------------------------------------------

fn write_orders(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("orders.json");
    let orders = r#"[
        {
            "id": "o1",
            "order_number": "LAB-0001",
            "received_date": "2026-03-01T08:00:00Z",
            "due_date": "2026-03-11T08:00:00Z",
            "status": "IN_PROGRESS"
        },
        {
            "id": "o2",
            "order_number": "LAB-0002",
            "received_date": "2026-03-01T08:00:00Z",
            "due_date": "2026-03-11T08:00:00Z",
            "completed_date": "2026-03-06T08:00:00Z",
            "status": "REPORTED"
        },
        {
            "id": "o3",
            "order_number": "LAB-0003",
            "status": "RECEIVED"
        }
    ]"#;
    std::fs::write(&path, orders).unwrap();
    path
}

#[test]
fn sla_report_classifies_orders() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_orders(&dir);

    // 192 of 240 hours elapsed on o1 => 80% AT_RISK
    limsflow()
        .args(["sla", "report"])
        .arg(&path)
        .args(["--at", "2026-03-09T08:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AT_RISK"))
        .stdout(predicate::str::contains("80.00%"))
        .stdout(predicate::str::contains("on-time rate: 100.00%"));
}

#[test]
fn sla_report_json_includes_metrics() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_orders(&dir);

    let output = limsflow()
        .args(["sla", "report"])
        .arg(&path)
        .args(["--at", "2026-03-09T08:00:00Z", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["metrics"]["total_orders"], 3);
    assert_eq!(parsed["metrics"]["completed_orders"], 1);
    assert_eq!(parsed["metrics"]["average_completion_hours"], 120.0);
    // o2 finished at 50% of its window
    let o2 = parsed["orders"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["order_id"] == "o2")
        .unwrap();
    assert_eq!(o2["level"], "ON_TRACK");
    assert_eq!(o2["percent_elapsed"], 50.0);
    // o3 has no due date: hours_remaining is +inf, serialized as null
    let o3 = parsed["orders"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["order_id"] == "o3")
        .unwrap();
    assert!(o3["hours_remaining"].is_null());
    assert_eq!(o3["level"], "ON_TRACK");
}

#[test]
fn sla_report_rejects_bad_timestamp() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_orders(&dir);

    limsflow()
        .args(["sla", "report"])
        .arg(&path)
        .args(["--at", "yesterday"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("RFC 3339"));
}

#[test]
fn sla_report_rejects_missing_file() {
    limsflow()
        .args(["sla", "report", "no-such-file.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}
