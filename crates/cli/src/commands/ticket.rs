// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `planpush ticket`.

use std::io::{self, Write};
use std::path::Path;

use pp_core::Story;

use super::push::report;
use super::{open_tracker, read_input};
use crate::cli::OutputFormat;
use crate::engine::{EngineSettings, SyncOrchestrator};
use crate::error::Result;
use crate::tracker::Tracker;

pub fn run(config_path: Option<&Path>, story_path: &Path, project: &str, sprint_id: u64, output: OutputFormat) -> Result<()> {
    let story = Story::from_json(&read_input(story_path)?)?;
    let (client, config) = open_tracker(config_path)?;
    let stdout = io::stdout();
    run_impl(&client, &config.engine, &story, project, sprint_id, output, &mut stdout.lock())
}

pub(crate) fn run_impl<T: Tracker>(
    tracker: &T,
    settings: &EngineSettings,
    story: &Story,
    project: &str,
    sprint_id: u64,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut sync = SyncOrchestrator::new(tracker, settings, project);
    let result = sync.run_ticket(sprint_id, story);
    let state = sync.state();
    report(project, state, sync.into_log(), output, out, result)
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
