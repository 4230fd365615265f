// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level help text.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the help colors.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    Styles::styled()
        .header(color(colors::codes::HEADER))
        .usage(color(colors::codes::HEADER))
        .literal(color(colors::codes::LITERAL))
        .placeholder(color(colors::codes::CONTEXT))
        .valid(color(colors::codes::CONTEXT))
}

/// Help template with the command list ahead of the options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Grouped command list.
pub fn commands() -> String {
    format!(
        "\
{header_push}
  {push}        Push a plan's sprints, epics, stories and subtasks
  {ticket}      Push one story into an existing sprint

{header_inspect}
  {sprints}     List active and future sprints
  {mode}        Show whether a project is team- or company-managed
  {fields}      List epic-related field ids

{header_setup}
  {project}     Create a Scrum project
  {schema}      Output JSON Schema for inputs and reports
  {completion}  Generate shell completions
",
        header_push = colors::header("Pushing:"),
        header_inspect = colors::header("Inspecting:"),
        header_setup = colors::header("Setup:"),
        push = colors::literal("push"),
        ticket = colors::literal("ticket"),
        sprints = colors::literal("sprints"),
        mode = colors::literal("mode"),
        fields = colors::literal("fields"),
        project = colors::literal("project"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart shown after the options.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  planpush fields                          Find the epic field ids
  planpush mode -p PP                      Check the project
  planpush push plan.json -p PP --dry-run  Preview a push
  planpush push plan.json -p PP            Push the plan",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
