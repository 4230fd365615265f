// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ppush - push generated project plans into Jira.
//!
//! This crate provides the engine behind the `planpush` CLI: it takes a
//! [`Plan`](pp_core::Plan) of epics, stories and sprints and materializes it
//! in a Jira Cloud project through the REST API.
//!
//! # Main Components
//!
//! - [`tracker`] - the [`Tracker`](tracker::Tracker) seam and its HTTP client
//! - [`engine`] - schema detection, board and sprint provisioning, issue
//!   creation and the push orchestrator
//! - [`config`] - TOML configuration with environment overrides
//! - [`Error`] - error types for all operations
//!
//! # Pushing a plan
//!
//! ```rust,ignore
//! use ppush::config::Config;
//! use ppush::engine::SyncOrchestrator;
//! use ppush::tracker::JiraClient;
//!
//! let config = Config::load(None)?;
//! let client = JiraClient::new(&config.tracker)?;
//! let plan = pp_core::Plan::from_json(&std::fs::read_to_string("plan.json")?)?;
//!
//! let mut sync = SyncOrchestrator::new(&client, &config.engine, "PAY");
//! sync.run(&plan)?;
//! println!("{}", sync.log());
//! ```

mod cli;
pub mod colors;
mod commands;
mod env;
pub mod help;
mod schema;

pub mod config;
pub mod engine;
pub mod error;
pub mod tracker;

pub use cli::{Cli, Command, OutputArgs, OutputFormat, ProjectArgs, ProjectCommand, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Push {
            plan,
            project,
            dry_run,
            output,
        } => commands::push::run(config, &plan, &project.project, dry_run, output.output),
        Command::Ticket {
            story,
            project,
            sprint,
            output,
        } => commands::ticket::run(config, &story, &project.project, sprint, output.output),
        Command::Sprints { project, output } => commands::sprints::run(config, &project.project, output.output),
        Command::Mode { project, output } => commands::mode::run(config, &project.project, output.output),
        Command::Fields { all, output } => commands::fields::run(config, all, output.output),
        Command::Project(cmd) => commands::project::run(config, cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "planpush", &mut std::io::stdout());
            Ok(())
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
