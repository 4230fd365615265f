// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Management mode detection.

use std::cell::RefCell;
use std::collections::HashMap;

use pp_core::ManagementMode;

use crate::error::{Error, Result};
use crate::tracker::{Tracker, TrackerError};

/// Classifies projects as team- or company-managed, querying each project at
/// most once per session.
pub struct SchemaProbe<'a, T: Tracker> {
    tracker: &'a T,
    cache: RefCell<HashMap<String, ManagementMode>>,
}

impl<'a, T: Tracker> SchemaProbe<'a, T> {
    pub fn new(tracker: &'a T) -> Self {
        SchemaProbe {
            tracker,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the project's management mode.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if the credentials are refused,
    /// [`Error::SchemaDetection`] for any other failure. Failures are not cached.
    pub fn detect_mode(&self, project_key: &str) -> Result<ManagementMode> {
        if let Some(mode) = self.cache.borrow().get(project_key) {
            return Ok(*mode);
        }

        let project = self.tracker.project(project_key).map_err(|e| match e {
            TrackerError::Unauthorized { .. } => Error::creating("session", e),
            other => Error::SchemaDetection {
                project: project_key.to_string(),
                reason: other.to_string(),
            },
        })?;

        let mode = project.mode();
        tracing::info!(project = project_key, %mode, "detected management mode");
        self.cache.borrow_mut().insert(project_key.to_string(), mode);
        Ok(mode)
    }
}
