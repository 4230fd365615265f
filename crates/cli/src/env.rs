// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by planpush are defined here.
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `name` if it is set and not blank.
pub fn lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the value of `PLANPUSH_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    lookup(vars::CONFIG).map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
