// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `planpush mode`.

use std::io::{self, Write};
use std::path::Path;

use super::{open_tracker, write_json};
use crate::cli::OutputFormat;
use crate::engine::SchemaProbe;
use crate::error::Result;
use crate::schema::ModeJson;
use crate::tracker::Tracker;

pub fn run(config_path: Option<&Path>, project: &str, output: OutputFormat) -> Result<()> {
    let (client, _) = open_tracker(config_path)?;
    let stdout = io::stdout();
    run_impl(&client, project, output, &mut stdout.lock())
}

pub(crate) fn run_impl<T: Tracker>(tracker: &T, project: &str, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let mode = SchemaProbe::new(tracker).detect_mode(project)?;
    match output {
        OutputFormat::Text => writeln!(out, "{}: {}", project, mode)?,
        OutputFormat::Json => write_json(
            out,
            &ModeJson {
                project: project.to_string(),
                mode,
                custom_epic_fields: mode.uses_custom_epic_fields(),
            },
        )?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
