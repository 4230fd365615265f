// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument groups shared by several commands.

use clap::Args;

use super::OutputFormat;

/// The target project.
#[derive(Args, Clone, Debug)]
pub struct ProjectArgs {
    /// Project key (e.g. "PAY")
    #[arg(long, short = 'p', value_parser = super::non_empty_string)]
    pub project: String,
}

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}
