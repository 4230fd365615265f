// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The tracker trait and the remote entities it returns.

use chrono::{DateTime, Utc};
use pp_core::ManagementMode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::rejection::TrackerResult;

/// Remote calls made by the synchronization engine.
///
/// Implementations block for the duration of each exchange. Entities are only
/// ever created or read, never edited or deleted.
pub trait Tracker {
    /// Fetch a project's metadata.
    fn project(&self, key: &str) -> TrackerResult<ProjectInfo>;

    /// Scrum boards scoped to the project.
    fn scrum_boards(&self, project_key: &str) -> TrackerResult<Vec<Board>>;

    /// Create a Scrum board for the project.
    fn create_scrum_board(&self, name: &str, project_key: &str) -> TrackerResult<Board>;

    /// Create a sprint on a board.
    fn create_sprint(&self, draft: &SprintDraft) -> TrackerResult<Sprint>;

    /// Sprints on a board in any of the given states.
    fn sprints(&self, board_id: u64, states: &[SprintState]) -> TrackerResult<Vec<Sprint>>;

    /// Create an issue from a rendered `fields` object, returning its key.
    fn create_issue(&self, fields: &Map<String, Value>) -> TrackerResult<String>;

    /// Move issues into a sprint.
    fn add_issues_to_sprint(&self, sprint_id: u64, issue_keys: &[String]) -> TrackerResult<()>;

    /// Account id of the authenticated user.
    fn myself(&self) -> TrackerResult<String>;

    /// Create a software project, returning its key.
    fn create_project(&self, project: &NewProject) -> TrackerResult<String>;

    /// All issue fields known to the tracker instance.
    fn fields(&self) -> TrackerResult<Vec<FieldInfo>>;
}

/// Project metadata needed for schema classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub id: String,
    pub key: String,
    pub simplified: bool,
}

impl ProjectInfo {
    pub fn mode(&self) -> ManagementMode {
        ManagementMode::from_simplified(self.simplified)
    }
}

/// An agile board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Board {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Lifecycle state of a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintState {
    Future,
    Active,
    Closed,
}

impl SprintState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SprintState::Future => "future",
            SprintState::Active => "active",
            SprintState::Closed => "closed",
        }
    }
}

impl fmt::Display for SprintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sprint as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    pub state: SprintState,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Parameters of a sprint create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintDraft {
    pub board_id: u64,
    pub name: String,
    pub goal: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Parameters of a project create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub key: String,
    pub name: String,
    pub lead_account_id: String,
}

/// An issue field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub custom: bool,
}
