// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

const TRACKER_VARS: &[&str] = &[
    "JIRA_URL",
    "JIRA_EMAIL",
    "JIRA_TOKEN",
    "PLANPUSH_EPIC_NAME_FIELD",
    "PLANPUSH_EPIC_LINK_FIELD",
    "PLANPUSH_CONFIG",
];

pub const AUTH_PLAN: &str = r#"{
  "epics": [
    {
      "epic": "Auth",
      "stories": [
        {
          "summary": "Login",
          "points": 3,
          "tasks": ["UI", "API"],
          "acceptance_criteria": ["User can log in"]
        }
      ]
    }
  ],
  "sprints": [{"name": "S1", "goal": "Ship login", "epics": ["Auth"]}]
}"#;

/// `planpush` isolated from the user's configuration and environment.
pub fn planpush(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("planpush");
    for var in TRACKER_VARS {
        cmd.env_remove(var);
    }
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path())
        .env("NO_COLOR", "1")
        .current_dir(temp.path());
    cmd
}

/// Writes `content` to `name` inside the temp directory.
pub fn write_file(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A complete config pointing at `url`.
pub fn config_for(temp: &TempDir, url: &str) -> PathBuf {
    write_file(
        temp,
        "config.toml",
        &format!(
            r#"[tracker]
url = "{}"
email = "me@example.com"
token = "secret"
timeout_secs = 2

[fields]
epic_name = "customfield_10011"
epic_link = "customfield_10014"
"#,
            url
        ),
    )
}
