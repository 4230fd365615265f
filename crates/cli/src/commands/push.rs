// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `planpush push`.

use std::io::{self, Write};
use std::path::Path;

use pp_core::Plan;

use super::{open_tracker, read_input, write_json};
use crate::cli::OutputFormat;
use crate::engine::{EngineSettings, RunState, SyncLog, SyncOrchestrator};
use crate::error::{Error, Result};
use crate::schema::preview::PreviewJson;
use crate::schema::push::PushOutputJson;
use crate::tracker::Tracker;

pub fn run(config_path: Option<&Path>, plan_path: &Path, project: &str, dry_run: bool, output: OutputFormat) -> Result<()> {
    let plan = Plan::from_json(&read_input(plan_path)?)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if dry_run {
        return preview(&plan, project, output, &mut out);
    }
    let (client, config) = open_tracker(config_path)?;
    run_impl(&client, &config.engine, &plan, project, output, &mut out)
}

/// Pushes the plan and prints the run log.
///
/// The log is printed even when the push aborts.
pub(crate) fn run_impl<T: Tracker>(
    tracker: &T,
    settings: &EngineSettings,
    plan: &Plan,
    project: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut sync = SyncOrchestrator::new(tracker, settings, project);
    let result = sync.run(plan);
    let state = sync.state();
    report(project, state, sync.into_log(), output, out, result)
}

/// Prints a run log and turns recorded failures into an error.
pub(crate) fn report(
    project: &str,
    state: RunState,
    log: SyncLog,
    output: OutputFormat,
    out: &mut impl Write,
    result: Result<()>,
) -> Result<()> {
    let failed = log.failures().len();
    match output {
        OutputFormat::Text => writeln!(out, "{}", log)?,
        OutputFormat::Json => write_json(out, &PushOutputJson::new(project, state, log))?,
    }
    result?;
    if failed > 0 {
        return Err(Error::PushFailures { failed });
    }
    Ok(())
}

/// Prints what a push would create.
pub(crate) fn preview(plan: &Plan, project: &str, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let preview = PreviewJson::new(project, plan);
    if output == OutputFormat::Json {
        return write_json(out, &preview);
    }

    for sprint in &preview.sprints {
        writeln!(out, "sprint '{}'", sprint.name)?;
        for epic in &sprint.epics {
            writeln!(out, "  epic '{}'", epic.name)?;
            for story in &epic.stories {
                match story.points {
                    Some(points) => writeln!(out, "    story '{}' ({} pts)", story.summary, points)?,
                    None => writeln!(out, "    story '{}'", story.summary)?,
                }
                for task in &story.subtasks {
                    writeln!(out, "      subtask '{}'", task)?;
                }
            }
        }
        for name in &sprint.unmatched {
            writeln!(out, "  (no epic named '{}')", name)?;
        }
    }
    let totals = preview.totals;
    writeln!(
        out,
        "would create {} sprint(s), {} epic(s), {} story(ies), {} subtask(s) in {}",
        totals.sprints, totals.epics, totals.stories, totals.subtasks, project
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "push_tests.rs"]
mod tests;
