// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output of `planpush sprints`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use crate::tracker::{Sprint, SprintState};

#[derive(Debug, JsonSchema, Serialize)]
pub struct SprintsOutputJson {
    pub project: String,
    pub board_id: u64,
    pub sprints: Vec<SprintJson>,
}

#[derive(Debug, JsonSchema, Serialize)]
pub struct SprintJson {
    pub id: u64,
    pub name: String,
    /// "active" or "future".
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl From<Sprint> for SprintJson {
    fn from(s: Sprint) -> Self {
        SprintJson {
            id: s.id,
            name: s.name,
            state: s.state.as_str().to_string(),
            start: s.start,
            end: s.end,
        }
    }
}

impl SprintJson {
    pub fn is_active(&self) -> bool {
        self.state == SprintState::Active.as_str()
    }
}
