// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::engine::test_helpers::FakeTracker;
use yare::parameterized;

#[parameterized(
    company = { FakeTracker::new("PP"), "PP: company-managed\n" },
    team = { FakeTracker::new("PP").team_managed(), "PP: team-managed\n" },
)]
fn prints_mode(tracker: FakeTracker, expected: &str) {
    let mut out = Vec::new();
    run_impl(&tracker, "PP", OutputFormat::Text, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn json_reports_custom_field_use() {
    let tracker = FakeTracker::new("PP").team_managed();
    let mut out = Vec::new();
    run_impl(&tracker, "PP", OutputFormat::Json, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["mode"], "team-managed");
    assert_eq!(value["custom_epic_fields"], false);
}
