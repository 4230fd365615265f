// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod fields;
pub mod mode;
pub mod project;
pub mod push;
pub mod schema;
pub mod sprints;
pub mod ticket;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::tracker::JiraClient;

/// Loads configuration and builds the tracker client for one command.
pub fn open_tracker(config_path: Option<&Path>) -> Result<(JiraClient, Config)> {
    let config = Config::load(config_path)?;
    let client = JiraClient::new(&config.tracker)
        .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {}", e)))?;
    Ok((client, config))
}

/// Reads a JSON input file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|e| {
        Error::Io(io::Error::new(
            e.kind(),
            format!("cannot read {}: {}", path.display(), e),
        ))
    })
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
