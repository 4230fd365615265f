// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `planpush fields`.

use std::io::{self, Write};
use std::path::Path;

use super::write_json;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::tracker::{FieldInfo, JiraClient, Tracker};

pub fn run(config_path: Option<&Path>, all: bool, output: OutputFormat) -> Result<()> {
    // Field ids may not be configured yet; only the connection settings are needed.
    let tracker = Config::load_tracker(config_path)?;
    let client = JiraClient::new(&tracker)
        .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {}", e)))?;
    let stdout = io::stdout();
    run_impl(&client, all, output, &mut stdout.lock())
}

pub(crate) fn run_impl<T: Tracker>(tracker: &T, all: bool, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let fields: Vec<FieldInfo> = tracker
        .fields()
        .map_err(|e| Error::looking_up("fields", e))?
        .into_iter()
        .filter(|f| all || is_epic_field(f))
        .collect();

    match output {
        OutputFormat::Json => write_json(out, &fields),
        OutputFormat::Text => {
            for field in &fields {
                writeln!(out, "{:<24} {}", field.id, field.name)?;
            }
            Ok(())
        }
    }
}

fn is_epic_field(field: &FieldInfo) -> bool {
    field.name.to_lowercase().contains("epic")
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
