// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker access.
//!
//! Every engine component talks to the tracker through the [`Tracker`] trait.
//! One client value is created per top-level command and borrowed by each
//! component for the lifetime of that command.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Engine    │────►│   Tracker   │────►│  Jira REST  │
//! │ (components) │◄────│   (trait)   │◄────│     API     │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!                             │
//!                             ▼
//!                      ┌─────────────┐
//!                      │  Rejection  │  (structured error body)
//!                      └─────────────┘
//! ```
//!
//! Calls block until the HTTP exchange completes; nothing here is async.

mod api;
mod http;
mod rejection;

pub use api::{Board, FieldInfo, NewProject, ProjectInfo, Sprint, SprintDraft, SprintState, Tracker};
pub use http::JiraClient;
pub use rejection::{Rejection, TrackerError, TrackerResult};

#[cfg(test)]
pub(crate) mod test_helpers;
