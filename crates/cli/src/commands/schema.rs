// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema for the plan document and for JSON command output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{preview, push, sprints};
use schemars::schema_for;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    println!("{}", render(cmd)?);
    Ok(())
}

pub(crate) fn render(cmd: SchemaCommand) -> Result<String> {
    let schema = match cmd {
        SchemaCommand::Plan => schema_for!(pp_core::Plan),
        SchemaCommand::Push => schema_for!(push::PushOutputJson),
        SchemaCommand::Preview => schema_for!(preview::PreviewJson),
        SchemaCommand::Sprints => schema_for!(sprints::SprintsOutputJson),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
