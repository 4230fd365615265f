// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn dry_run_previews_plan() {
    let temp = TempDir::new().unwrap();
    let plan = write_file(&temp, "plan.json", AUTH_PLAN);

    planpush(&temp)
        .arg("push")
        .arg(&plan)
        .args(["-p", "PAY", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprint 'S1'"))
        .stdout(predicate::str::contains("    story 'Login' (3 pts)"))
        .stdout(predicate::str::contains(
            "would create 1 sprint(s), 1 epic(s), 1 story(ies), 2 subtask(s) in PAY",
        ));
}

#[test]
fn dry_run_reads_stdin() {
    let temp = TempDir::new().unwrap();
    let output = planpush(&temp)
        .args(["push", "-", "-p", "PAY", "--dry-run", "-o", "json"])
        .write_stdin(AUTH_PLAN)
        .output()
        .unwrap();
    assert!(output.status.success());

    let preview: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(preview["totals"]["stories"], 1);
    assert_eq!(preview["sprints"][0]["goal"], "Ship login");
}

#[test]
fn bare_epic_list_is_accepted() {
    let temp = TempDir::new().unwrap();
    let plan = write_file(&temp, "plan.json", r#"[{"epic": "Auth", "stories": []}]"#);

    planpush(&temp)
        .arg("push")
        .arg(&plan)
        .args(["-p", "PAY", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would create 0 sprint(s)"));
}

#[test]
fn invalid_plan_fails_before_configuration() {
    let temp = TempDir::new().unwrap();
    let plan = write_file(&temp, "plan.json", r#"{"epics": [{"epic": "  "}]}"#);

    planpush(&temp)
        .arg("push")
        .arg(&plan)
        .args(["-p", "PAY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("epic #1 has no name"));
}

#[test]
fn missing_plan_file_fails() {
    let temp = TempDir::new().unwrap();
    planpush(&temp)
        .args(["push", "nope.json", "-p", "PAY", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn missing_credentials_name_the_variable() {
    let temp = TempDir::new().unwrap();
    let plan = write_file(&temp, "plan.json", AUTH_PLAN);

    planpush(&temp)
        .arg("push")
        .arg(&plan)
        .args(["-p", "PAY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"))
        .stderr(predicate::str::contains("JIRA_URL"));
}

#[test]
fn missing_field_ids_name_the_variable() {
    let temp = TempDir::new().unwrap();
    let plan = write_file(&temp, "plan.json", AUTH_PLAN);

    planpush(&temp)
        .arg("push")
        .arg(&plan)
        .args(["-p", "PAY"])
        .env("JIRA_URL", "https://example.atlassian.net")
        .env("JIRA_EMAIL", "me@example.com")
        .env("JIRA_TOKEN", "secret")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PLANPUSH_EPIC_NAME_FIELD"));
}

#[test]
fn unreachable_tracker_aborts_with_log() {
    let temp = TempDir::new().unwrap();
    let plan = write_file(&temp, "plan.json", AUTH_PLAN);
    let config = config_for(&temp, "http://127.0.0.1:9");

    planpush(&temp)
        .arg("push")
        .arg(&plan)
        .args(["-p", "PAY", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED run 'PAY'"))
        .stderr(predicate::str::contains("cannot determine management mode of project PAY"));
}
