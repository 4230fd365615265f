// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker error type and structured rejection bodies.
//!
//! The tracker answers a failed write with
//! `{"errorMessages": [...], "errors": {"<field id>": "<message>"}}`.
//! [`Rejection::names_field`] is the single place that decides whether a
//! rejection was caused by one specific field.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Error type for tracker operations.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Credentials were refused (HTTP 401/403).
    #[error("authentication rejected (HTTP {status})")]
    Unauthorized { status: u16 },

    /// The tracker refused the request.
    #[error("{0}")]
    Rejected(Rejection),

    /// The request never completed.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

impl TrackerError {
    /// Returns true if the tracker rejected the request because of `field_id`.
    pub fn rejects_field(&self, field_id: &str) -> bool {
        match self {
            TrackerError::Rejected(rejection) => rejection.names_field(field_id),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TrackerError::Decode(e.to_string())
        } else {
            TrackerError::Transport(e.to_string())
        }
    }
}

/// A refused request with the tracker's explanation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rejection {
    /// HTTP status code.
    pub status: u16,
    /// Messages not tied to a field.
    pub messages: Vec<String>,
    /// Messages keyed by the offending field id.
    pub field_errors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

impl Rejection {
    pub fn new(status: u16) -> Self {
        Rejection {
            status,
            ..Rejection::default()
        }
    }

    /// Adds a general message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Adds a message for a specific field.
    pub fn with_field_error(mut self, field_id: impl Into<String>, message: impl Into<String>) -> Self {
        self.field_errors.insert(field_id.into(), message.into());
        self
    }

    /// Parses a response body. Bodies that are not the tracker's error
    /// document are kept verbatim as a single message.
    pub fn from_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Rejection {
                status,
                messages: parsed.error_messages,
                field_errors: parsed.errors,
            },
            Err(_) => {
                let text = body.trim();
                let messages = if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text.to_string()]
                };
                Rejection {
                    status,
                    messages,
                    field_errors: BTreeMap::new(),
                }
            }
        }
    }

    /// Returns true if this rejection names `field_id`.
    ///
    /// The structured per-field errors are checked first; the free-text
    /// messages are searched for the id as a whole word only as a fallback.
    pub fn names_field(&self, field_id: &str) -> bool {
        if field_id.is_empty() {
            return false;
        }
        if self.field_errors.contains_key(field_id) {
            return true;
        }
        self.messages.iter().any(|m| mentions(m, field_id))
            || self.field_errors.values().any(|m| mentions(m, field_id))
    }
}

/// Returns true if `id` occurs in `text` as a whole identifier.
fn mentions(text: &str, id: &str) -> bool {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    text.match_indices(id).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + id.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        let mut parts: Vec<String> = self.messages.clone();
        parts.extend(self.field_errors.iter().map(|(field, msg)| format!("{}: {}", field, msg)));
        if !parts.is_empty() {
            write!(f, ": {}", parts.join("; "))?;
        }
        Ok(())
    }
}
