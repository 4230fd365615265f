// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `planpush project`.

use std::io::{self, Write};
use std::path::Path;

use crate::cli::ProjectCommand;
use crate::config::Config;
use crate::engine::create_project;
use crate::error::{Error, Result};
use crate::tracker::{JiraClient, Tracker};

pub fn run(config_path: Option<&Path>, cmd: ProjectCommand) -> Result<()> {
    let tracker = Config::load_tracker(config_path)?;
    let client = JiraClient::new(&tracker)
        .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {}", e)))?;
    let stdout = io::stdout();
    match cmd {
        ProjectCommand::Create { name, key } => create(&client, &name, key.as_deref(), &mut stdout.lock()),
    }
}

pub(crate) fn create<T: Tracker>(tracker: &T, name: &str, key: Option<&str>, out: &mut impl Write) -> Result<()> {
    let key = create_project(tracker, name, key)?;
    writeln!(out, "created project {} '{}'", key, name.trim())?;
    Ok(())
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
