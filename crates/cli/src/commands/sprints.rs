// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `planpush sprints`.

use std::io::{self, Write};
use std::path::Path;

use super::{open_tracker, write_json};
use crate::cli::OutputFormat;
use crate::engine::SprintPlanner;
use crate::error::{Error, Result};
use crate::schema::sprints::{SprintJson, SprintsOutputJson};
use crate::tracker::Tracker;

pub fn run(config_path: Option<&Path>, project: &str, output: OutputFormat) -> Result<()> {
    let (client, _) = open_tracker(config_path)?;
    let stdout = io::stdout();
    run_impl(&client, project, output, &mut stdout.lock())
}

/// Lists open sprints of the project's first Scrum board. Never creates a board.
pub(crate) fn run_impl<T: Tracker>(tracker: &T, project: &str, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let boards = tracker
        .scrum_boards(project)
        .map_err(|e| Error::looking_up(format!("boards of {}", project), e))?;
    let board = boards.first().ok_or_else(|| Error::Lookup {
        what: format!("boards of {}", project),
        reason: "project has no scrum board".to_string(),
    })?;

    let sprints: Vec<SprintJson> = SprintPlanner::new(tracker)
        .open_sprints(board.id)?
        .into_iter()
        .map(SprintJson::from)
        .collect();

    match output {
        OutputFormat::Json => write_json(
            out,
            &SprintsOutputJson {
                project: project.to_string(),
                board_id: board.id,
                sprints,
            },
        ),
        OutputFormat::Text => {
            if sprints.is_empty() {
                writeln!(out, "no open sprints on board {}", board.id)?;
            }
            for sprint in &sprints {
                let marker = if sprint.is_active() { "*" } else { " " };
                match (sprint.start, sprint.end) {
                    (Some(start), Some(end)) => writeln!(
                        out,
                        "{} {:>6}  {}  ({} to {})",
                        marker,
                        sprint.id,
                        sprint.name,
                        start.format("%Y-%m-%d"),
                        end.format("%Y-%m-%d")
                    )?,
                    _ => writeln!(out, "{} {:>6}  {}", marker, sprint.id, sprint.name)?,
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "sprints_tests.rs"]
mod tests;
