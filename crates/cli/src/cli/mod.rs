// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{OutputArgs, ProjectArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "planpush")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Push generated project plans into Jira")]
#[command(
    long_about = "Push generated project plans into Jira.\n\n\
    Creates the sprints, epics, stories and subtasks of a plan in a Jira Cloud project, \
    adapting to team- and company-managed projects."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Read configuration from <path> instead of the default location
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Pushing
    // ─────────────────────────────────────────────────────────────────────────
    /// Push a plan into a project
    ///
    /// Creates one sprint per plan sprint, then the epics it lists with their
    /// stories and subtasks. Every story is moved into its sprint. A push
    /// always creates new issues; pushing the same plan twice duplicates it.
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  planpush push plan.json -p PAY             Push plan.json into PAY
  planpush push plan.json -p PAY --dry-run   Show what would be created
  planpush push plan.json -p PAY -o json     Print the run log as JSON
  planpush push - -p PAY                     Read the plan from stdin")
    )]
    Push {
        /// Plan file (JSON), or - for stdin
        plan: PathBuf,

        #[command(flatten)]
        project: ProjectArgs,

        /// Validate the plan and print what would be created without contacting the tracker
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Push a single story into an existing sprint
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  planpush ticket story.json -p PAY --sprint 42   Push story.json into sprint 42
  planpush sprints -p PAY                         Find the sprint id")
    )]
    Ticket {
        /// Story file (JSON), or - for stdin
        story: PathBuf,

        #[command(flatten)]
        project: ProjectArgs,

        /// Id of the sprint to add the story to
        #[arg(long, short = 's')]
        sprint: u64,

        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Inspecting
    // ─────────────────────────────────────────────────────────────────────────
    /// List active and future sprints on the project's board
    #[command(after_help = colors::examples("\
Examples:
  planpush sprints -p PAY           List open sprints
  planpush sprints -p PAY -o json   Output as JSON"))]
    Sprints {
        #[command(flatten)]
        project: ProjectArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show whether a project is team-managed or company-managed
    Mode {
        #[command(flatten)]
        project: ProjectArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List fields whose name mentions "epic"
    ///
    /// Use the ids shown here for `[fields]` in the configuration file.
    Fields {
        /// List every field, not only epic-related ones
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  planpush completion bash > ~/.local/share/bash-completion/completions/planpush
  planpush completion zsh > ~/.zfunc/_planpush
  planpush completion fish > ~/.config/fish/completions/planpush.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Output JSON Schema for plan input and JSON output
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  planpush schema plan      Schema of the plan document
  planpush schema push      Schema of 'planpush push -o json'

Available schemas: plan, push, preview, sprints")
    )]
    Schema(SchemaCommand),
}

/// Project commands.
#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Create a Scrum software project led by the configured account
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  planpush project create --name Payments             Key derived as PAYM
  planpush project create --name Payments --key PAY   Explicit key")
    )]
    Create {
        /// Project name
        #[arg(long, value_parser = non_empty_string)]
        name: String,

        /// Project key (default: first four letters of the name)
        #[arg(long)]
        key: Option<String>,
    },
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for plan documents
    Plan,
    /// Output JSON Schema for 'planpush push' and 'planpush ticket' JSON output
    Push,
    /// Output JSON Schema for 'planpush push --dry-run' JSON output
    Preview,
    /// Output JSON Schema for 'planpush sprints' JSON output
    Sprints,
}
