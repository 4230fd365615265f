// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory tracker for engine tests.
//!
//! Records every call and lets a test inject rejections by field id, issue
//! summary, sprint name or assignment key.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use super::api::{Board, FieldInfo, NewProject, ProjectInfo, Sprint, SprintDraft, SprintState, Tracker};
use super::rejection::{Rejection, TrackerError, TrackerResult};

/// An issue the fake accepted.
#[derive(Debug, Clone)]
pub struct CreatedIssue {
    pub key: String,
    pub fields: Map<String, Value>,
}

impl CreatedIssue {
    pub fn issue_type(&self) -> &str {
        issue_type(&self.fields)
    }

    pub fn summary(&self) -> &str {
        self.fields.get("summary").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn parent(&self) -> Option<&str> {
        self.fields.get("parent").and_then(|p| p.get("key")).and_then(Value::as_str)
    }
}

fn issue_type(fields: &Map<String, Value>) -> &str {
    fields
        .get("issuetype")
        .and_then(|t| t.get("name"))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

#[derive(Default)]
struct FakeState {
    simplified: bool,
    project_status: Option<u16>,
    project_lookups: usize,
    boards: Vec<Board>,
    boards_created: Vec<String>,
    sprints_created: Vec<SprintDraft>,
    open_sprints: Vec<Sprint>,
    attempts: Vec<Map<String, Value>>,
    issues: Vec<CreatedIssue>,
    assignments: Vec<(u64, String)>,
    projects_created: Vec<NewProject>,
    rejected_fields: Vec<String>,
    failing_summaries: Vec<String>,
    field_failures: Vec<(String, String, String)>,
    failing_sprints: Vec<String>,
    failing_assignments: Vec<String>,
    board_lookup_fails: bool,
    next_issue: u64,
    next_sprint: u64,
}

/// Mock tracker for testing without a real server.
#[derive(Clone)]
pub struct FakeTracker {
    project_key: String,
    state: Arc<Mutex<FakeState>>,
}

impl FakeTracker {
    /// A company-managed project with no boards.
    pub fn new(project_key: &str) -> Self {
        FakeTracker {
            project_key: project_key.to_string(),
            state: Arc::new(Mutex::new(FakeState {
                next_sprint: 100,
                ..FakeState::default()
            })),
        }
    }

    pub fn team_managed(self) -> Self {
        self.state.lock().unwrap().simplified = true;
        self
    }

    /// Answer project lookups with the given HTTP status.
    pub fn project_status(self, status: u16) -> Self {
        self.state.lock().unwrap().project_status = Some(status);
        self
    }

    pub fn with_board(self, id: u64) -> Self {
        self.state.lock().unwrap().boards.push(Board {
            id,
            name: format!("board {}", id),
        });
        self
    }

    pub fn with_open_sprint(self, sprint: Sprint) -> Self {
        self.state.lock().unwrap().open_sprints.push(sprint);
        self
    }

    /// Reject any issue whose fields contain `field_id`.
    pub fn rejecting_field(self, field_id: &str) -> Self {
        self.state.lock().unwrap().rejected_fields.push(field_id.to_string());
        self
    }

    /// Reject any issue with this summary.
    pub fn failing_issue(self, summary: &str) -> Self {
        self.state.lock().unwrap().failing_summaries.push(summary.to_string());
        self
    }

    /// Reject any issue with this summary, blaming `field_id`.
    pub fn failing_issue_on_field(self, summary: &str, field_id: &str, message: &str) -> Self {
        self.state.lock().unwrap().field_failures.push((
            summary.to_string(),
            field_id.to_string(),
            message.to_string(),
        ));
        self
    }

    pub fn failing_sprint(self, name: &str) -> Self {
        self.state.lock().unwrap().failing_sprints.push(name.to_string());
        self
    }

    pub fn failing_assignment(self, key: &str) -> Self {
        self.state.lock().unwrap().failing_assignments.push(key.to_string());
        self
    }

    pub fn failing_board_lookup(self) -> Self {
        self.state.lock().unwrap().board_lookup_fails = true;
        self
    }

    pub fn project_lookups(&self) -> usize {
        self.state.lock().unwrap().project_lookups
    }

    pub fn boards_created(&self) -> Vec<String> {
        self.state.lock().unwrap().boards_created.clone()
    }

    pub fn sprints_created(&self) -> Vec<SprintDraft> {
        self.state.lock().unwrap().sprints_created.clone()
    }

    /// Every create call, accepted or not, in order.
    pub fn attempts(&self) -> Vec<Map<String, Value>> {
        self.state.lock().unwrap().attempts.clone()
    }

    pub fn issues(&self) -> Vec<CreatedIssue> {
        self.state.lock().unwrap().issues.clone()
    }

    pub fn issues_of_type(&self, name: &str) -> Vec<CreatedIssue> {
        self.issues().into_iter().filter(|i| i.issue_type() == name).collect()
    }

    pub fn assignments(&self) -> Vec<(u64, String)> {
        self.state.lock().unwrap().assignments.clone()
    }

    pub fn projects_created(&self) -> Vec<NewProject> {
        self.state.lock().unwrap().projects_created.clone()
    }

    fn rejection_for(state: &FakeState, fields: &Map<String, Value>) -> Option<Rejection> {
        if let Some(field) = state.rejected_fields.iter().find(|f| fields.contains_key(f.as_str())) {
            return Some(Rejection::new(400).with_field_error(
                field.clone(),
                format!("Field '{}' cannot be set. It is not on the appropriate screen, or unknown.", field),
            ));
        }
        let summary = fields.get("summary").and_then(Value::as_str).unwrap_or_default();
        if let Some((_, field, message)) = state.field_failures.iter().find(|(s, _, _)| s == summary) {
            return Some(Rejection::new(400).with_field_error(field.clone(), message.clone()));
        }
        if state.failing_summaries.iter().any(|s| s == summary) {
            return Some(Rejection::new(400).with_message(format!("cannot create '{}'", summary)));
        }
        None
    }
}

impl Tracker for FakeTracker {
    fn project(&self, key: &str) -> TrackerResult<ProjectInfo> {
        let mut state = self.state.lock().unwrap();
        state.project_lookups += 1;
        match state.project_status {
            Some(status @ (401 | 403)) => Err(TrackerError::Unauthorized { status }),
            Some(status) => Err(TrackerError::Rejected(
                Rejection::new(status).with_message(format!("No project could be found with key '{}'.", key)),
            )),
            None if key != self.project_key => Err(TrackerError::Rejected(Rejection::new(404))),
            None => Ok(ProjectInfo {
                id: "10000".to_string(),
                key: key.to_string(),
                simplified: state.simplified,
            }),
        }
    }

    fn scrum_boards(&self, _project_key: &str) -> TrackerResult<Vec<Board>> {
        let state = self.state.lock().unwrap();
        if state.board_lookup_fails {
            return Err(TrackerError::Transport("connection reset".into()));
        }
        Ok(state.boards.clone())
    }

    fn create_scrum_board(&self, name: &str, _project_key: &str) -> TrackerResult<Board> {
        let mut state = self.state.lock().unwrap();
        let board = Board {
            id: 1 + state.boards.len() as u64,
            name: name.to_string(),
        };
        state.boards_created.push(name.to_string());
        state.boards.push(board.clone());
        Ok(board)
    }

    fn create_sprint(&self, draft: &SprintDraft) -> TrackerResult<Sprint> {
        let mut state = self.state.lock().unwrap();
        if state.failing_sprints.contains(&draft.name) {
            return Err(TrackerError::Rejected(
                Rejection::new(400).with_message("The board does not support sprints"),
            ));
        }
        state.next_sprint += 1;
        state.sprints_created.push(draft.clone());
        Ok(Sprint {
            id: state.next_sprint,
            name: draft.name.clone(),
            state: SprintState::Future,
            start: Some(draft.start),
            end: Some(draft.end),
        })
    }

    fn sprints(&self, _board_id: u64, states: &[SprintState]) -> TrackerResult<Vec<Sprint>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .open_sprints
            .iter()
            .filter(|s| states.contains(&s.state))
            .cloned()
            .collect())
    }

    fn create_issue(&self, fields: &Map<String, Value>) -> TrackerResult<String> {
        let mut state = self.state.lock().unwrap();
        state.attempts.push(fields.clone());
        if let Some(rejection) = Self::rejection_for(&state, fields) {
            return Err(TrackerError::Rejected(rejection));
        }
        state.next_issue += 1;
        let key = format!("{}-{}", self.project_key, state.next_issue);
        state.issues.push(CreatedIssue {
            key: key.clone(),
            fields: fields.clone(),
        });
        Ok(key)
    }

    fn add_issues_to_sprint(&self, sprint_id: u64, issue_keys: &[String]) -> TrackerResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(key) = issue_keys.iter().find(|k| state.failing_assignments.contains(k)) {
            return Err(TrackerError::Rejected(
                Rejection::new(400).with_message(format!("Issue {} cannot be moved", key)),
            ));
        }
        for key in issue_keys {
            state.assignments.push((sprint_id, key.clone()));
        }
        Ok(())
    }

    fn myself(&self) -> TrackerResult<String> {
        Ok("account-1".to_string())
    }

    fn create_project(&self, project: &NewProject) -> TrackerResult<String> {
        let mut state = self.state.lock().unwrap();
        state.projects_created.push(project.clone());
        Ok(project.key.clone())
    }

    fn fields(&self) -> TrackerResult<Vec<FieldInfo>> {
        Ok(vec![
            FieldInfo {
                id: "summary".into(),
                name: "Summary".into(),
                custom: false,
            },
            FieldInfo {
                id: "customfield_10011".into(),
                name: "Epic Name".into(),
                custom: true,
            },
            FieldInfo {
                id: "customfield_10014".into(),
                name: "Epic Link".into(),
                custom: true,
            },
        ])
    }
}
