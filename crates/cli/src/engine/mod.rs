// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronization engine.
//!
//! Materializes a [`Plan`](pp_core::Plan) in the tracker. Components, leaves
//! first:
//!
//! - [`SchemaProbe`] classifies the project's management mode once per session
//! - [`BoardResolver`] finds or provisions the project's Scrum board
//! - [`SprintPlanner`] creates time-boxed sprints on that board
//! - [`IssueMaterializer`] creates epics, stories and subtasks and assigns
//!   stories to sprints, dropping a rejected optional field at most once
//! - [`SyncOrchestrator`] drives a whole plan through the above and records
//!   every outcome in a [`SyncLog`]
//!
//! Every component borrows the same tracker client; all calls are sequential.

mod board;
mod log;
mod materialize;
mod orchestrator;
mod project;
mod schema;
mod sprint;

pub use board::BoardResolver;
pub use log::{LogEntry, RunState, Scope, SyncLog};
pub use materialize::{IssueMaterializer, Materialized, StoryOutcome, SubtaskFailure};
pub use orchestrator::SyncOrchestrator;
pub use project::{create_project, derive_project_key};
pub use schema::SchemaProbe;
pub use sprint::{Clock, SprintPlanner, SystemClock, DEFAULT_SPRINT_DAYS};

use pp_core::{CustomFieldIds, IssueTypeNames};

/// Tracker-instance settings the engine needs beyond the client itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Identifiers of the epic name and epic link custom fields.
    pub fields: CustomFieldIds,
    /// Issue type names used in create calls.
    pub issue_types: IssueTypeNames,
    /// Sprint length in days.
    pub sprint_days: u32,
}

#[cfg(test)]
pub(crate) mod test_helpers;


#[cfg(test)]
mod materialize_tests;
