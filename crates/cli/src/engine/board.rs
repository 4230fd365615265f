// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scrum board lookup and provisioning.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::tracker::Tracker;

/// Finds a project's Scrum board, creating one only when none exists.
pub struct BoardResolver<'a, T: Tracker> {
    tracker: &'a T,
    resolved: RefCell<HashMap<String, u64>>,
}

impl<'a, T: Tracker> BoardResolver<'a, T> {
    pub fn new(tracker: &'a T) -> Self {
        BoardResolver {
            tracker,
            resolved: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the id of the project's Scrum board.
    ///
    /// The first existing Scrum board wins. Otherwise a board named
    /// `"<projectKey> Board"` is created with the Scrum preset.
    pub fn resolve_board(&self, project_key: &str) -> Result<u64> {
        if let Some(id) = self.resolved.borrow().get(project_key) {
            return Ok(*id);
        }

        let what = || format!("board for project {}", project_key);
        let existing = self
            .tracker
            .scrum_boards(project_key)
            .map_err(|e| Error::creating(what(), e))?;

        let id = match existing.first() {
            Some(board) => {
                tracing::info!(project = project_key, board = board.id, "using existing scrum board");
                board.id
            }
            None => {
                let name = board_name(project_key);
                let board = self
                    .tracker
                    .create_scrum_board(&name, project_key)
                    .map_err(|e| Error::creating(what(), e))?;
                tracing::info!(project = project_key, board = board.id, "created scrum board");
                board.id
            }
        };

        self.resolved.borrow_mut().insert(project_key.to_string(), id);
        Ok(id)
    }
}

/// Name given to a provisioned board.
pub fn board_name(project_key: &str) -> String {
    format!("{} Board", project_key)
}
