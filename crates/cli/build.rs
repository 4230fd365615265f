// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    let vars = [
        ("JIRA_URL", "JIRA_URL"),
        ("JIRA_EMAIL", "JIRA_EMAIL"),
        ("JIRA_TOKEN", "JIRA_TOKEN"),
        ("EPIC_NAME_FIELD", "PLANPUSH_EPIC_NAME_FIELD"),
        ("EPIC_LINK_FIELD", "PLANPUSH_EPIC_LINK_FIELD"),
        ("CONFIG", "PLANPUSH_CONFIG"),
    ];

    for (const_name, env_name) in &vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";")?;
    }

    Ok(())
}
