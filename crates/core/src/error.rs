// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pp-core operations.

use thiserror::Error;

/// All possible errors that can occur in pp-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid plan: {0}")]
    InvalidPlan(String),

    #[error("invalid story: {0}")]
    InvalidStory(String),

    #[error("invalid management mode: '{0}'\n  hint: valid modes are: team-managed, company-managed")]
    InvalidMode(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for pp-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
