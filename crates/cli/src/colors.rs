// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help text.
//!
//! `NO_COLOR=1` disables colors; `COLOR=1` forces them without a TTY.

use std::io::IsTerminal;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers.
    pub const HEADER: u8 = 74;
    /// Commands and literals.
    pub const LITERAL: u8 = 250;
    /// Placeholders and descriptions.
    pub const CONTEXT: u8 = 245;
}

/// Returns true when help output should be colored.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("\x1b[38;5;{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colors an examples block.
///
/// Lines ending in `:` are headers. In `  command args    description`
/// lines the command is a literal and `<placeholders>` are context.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{}{}", indent, header(trimmed));
            }
            match trimmed.find("  ") {
                Some(end) => {
                    let (cmd, desc) = trimmed.split_at(end);
                    format!("{}{}{}", indent, command(cmd), desc)
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.starts_with('<') || word.starts_with('"') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
