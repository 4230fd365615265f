// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::tracker::TrackerError;

/// All possible errors that can occur in the ppush library.
///
/// Only [`Error::Configuration`] and [`Error::SchemaDetection`] stop a push;
/// every other variant is recorded in the run log and the push moves on to
/// the next sibling sprint, epic or story.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("cannot determine management mode of project {project}: {reason}")]
    SchemaDetection { project: String, reason: String },

    #[error("{field} field ({field_id}) rejected: {reason}")]
    FieldRejection {
        field: &'static str,
        field_id: String,
        reason: String,
    },

    #[error("cannot create {what}: {reason}")]
    Creation { what: String, reason: String },

    #[error("cannot look up {what}: {reason}")]
    Lookup { what: String, reason: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("push already started\n  hint: a push cannot be resumed, start a new one")]
    RunAlreadyStarted,

    #[error("push finished with {failed} failure(s)")]
    PushFailures { failed: usize },

    #[error(transparent)]
    Plan(#[from] pp_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ppush operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if no further progress is possible after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Configuration(_) | Error::SchemaDetection { .. })
    }

    /// Classifies a tracker failure that happened while creating `what`.
    ///
    /// Authentication rejections become [`Error::Configuration`] and transport
    /// failures [`Error::Network`]; everything else is [`Error::Creation`].
    pub fn creating(what: impl Into<String>, err: TrackerError) -> Self {
        Self::classify(err, |reason| Error::Creation {
            what: what.into(),
            reason,
        })
    }

    /// Like [`Error::creating`], for read-only calls.
    pub fn looking_up(what: impl Into<String>, err: TrackerError) -> Self {
        Self::classify(err, |reason| Error::Lookup {
            what: what.into(),
            reason,
        })
    }

    fn classify(err: TrackerError, rejected: impl FnOnce(String) -> Error) -> Self {
        match err {
            TrackerError::Unauthorized { status } => Error::Configuration(format!(
                "tracker rejected the credentials (HTTP {})",
                status
            )),
            TrackerError::Transport(reason) => Error::Network(reason),
            other => rejected(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
