// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The run log.

use pp_core::ManagementMode;
use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// Lifecycle of a [`SyncOrchestrator`](super::SyncOrchestrator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    NotStarted,
    Running,
    Completed,
}

/// What a failure was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Board,
    Sprint,
    Epic,
    Story,
    Subtask,
    Assignment,
    Run,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Board => "board",
            Scope::Sprint => "sprint",
            Scope::Epic => "epic",
            Scope::Story => "story",
            Scope::Subtask => "subtask",
            Scope::Assignment => "assignment",
            Scope::Run => "run",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One thing that happened during a push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEntry {
    ModeDetected {
        project: String,
        mode: ManagementMode,
    },
    BoardResolved {
        project: String,
        board_id: u64,
    },
    SprintCreated {
        name: String,
        sprint_id: u64,
    },
    EpicCreated {
        name: String,
        key: String,
    },
    StoryCreated {
        summary: String,
        key: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        epic: Option<String>,
    },
    SubtaskCreated {
        task: String,
        key: String,
        parent: String,
    },
    StoryAssigned {
        key: String,
        sprint_id: u64,
    },
    /// An optional field was rejected and the issue created without it.
    FieldDropped {
        key: String,
        field: String,
        field_id: String,
    },
    Failed {
        scope: Scope,
        subject: String,
        cause: String,
    },
}

impl LogEntry {
    /// Key of the issue this entry created, if any.
    pub fn created_key(&self) -> Option<&str> {
        match self {
            LogEntry::EpicCreated { key, .. }
            | LogEntry::StoryCreated { key, .. }
            | LogEntry::SubtaskCreated { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LogEntry::Failed { .. })
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::ModeDetected { project, mode } => write!(f, "project {} is {}", project, mode),
            LogEntry::BoardResolved { project, board_id } => {
                write!(f, "using board {} for {}", board_id, project)
            }
            LogEntry::SprintCreated { name, sprint_id } => {
                write!(f, "created sprint {} '{}'", sprint_id, name)
            }
            LogEntry::EpicCreated { name, key } => write!(f, "created epic {} '{}'", key, name),
            LogEntry::StoryCreated { summary, key, epic } => match epic {
                Some(epic) => write!(f, "created story {} '{}' in {}", key, summary, epic),
                None => write!(f, "created story {} '{}'", key, summary),
            },
            LogEntry::SubtaskCreated { task, key, parent } => {
                write!(f, "created subtask {} '{}' under {}", key, task, parent)
            }
            LogEntry::StoryAssigned { key, sprint_id } => {
                write!(f, "assigned {} to sprint {}", key, sprint_id)
            }
            LogEntry::FieldDropped { key, field, field_id } => {
                write!(f, "created {} without {} ({})", key, field, field_id)
            }
            LogEntry::Failed { scope, subject, cause } => {
                write!(f, "FAILED {} '{}': {}", scope, subject, cause)
            }
        }
    }
}

/// Append-only, ordered record of a push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SyncLog {
    entries: Vec<LogEntry>,
}

impl SyncLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Records a failure.
    pub fn fail(&mut self, scope: Scope, subject: impl Into<String>, cause: impl fmt::Display) {
        self.push(LogEntry::Failed {
            scope,
            subject: subject.into(),
            cause: cause.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Keys of every issue created, in creation order.
    pub fn created_keys(&self) -> Vec<&str> {
        self.entries.iter().filter_map(LogEntry::created_key).collect()
    }

    pub fn failures(&self) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.is_failure()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for SyncLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        write!(
            f,
            "{} issue(s) created, {} failure(s)",
            self.created_keys().len(),
            self.failures().len()
        )
    }
}
