// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output of `planpush push` and `planpush ticket`.

use schemars::JsonSchema;
use serde::Serialize;

use crate::engine::{RunState, SyncLog};

/// Result of a push.
#[derive(Debug, JsonSchema, Serialize)]
pub struct PushOutputJson {
    /// Project the plan was pushed into.
    pub project: String,
    /// Final state of the run.
    pub state: RunState,
    /// Keys of every issue created, in creation order.
    pub created: Vec<String>,
    /// Number of failures in the log.
    pub failed: usize,
    /// Everything that happened, in order.
    pub log: SyncLog,
}

impl PushOutputJson {
    pub fn new(project: &str, state: RunState, log: SyncLog) -> Self {
        PushOutputJson {
            project: project.to_string(),
            state,
            created: log.created_keys().into_iter().map(str::to_string).collect(),
            failed: log.failures().len(),
            log,
        }
    }
}
