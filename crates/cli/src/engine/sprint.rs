// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint creation.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};
use crate::tracker::{Sprint, SprintDraft, SprintState, Tracker};

/// Default sprint length in days.
pub const DEFAULT_SPRINT_DAYS: u32 = 14;

/// Source of the current time for sprint windows.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

/// Creates sprints spanning `[now, now + duration)` on a board.
///
/// Windows of consecutive sprints may overlap; the tracker accepts that.
pub struct SprintPlanner<'a, T: Tracker, C: Clock = SystemClock> {
    tracker: &'a T,
    clock: C,
    duration_days: u32,
}

impl<'a, T: Tracker> SprintPlanner<'a, T, SystemClock> {
    pub fn new(tracker: &'a T) -> Self {
        Self::with_clock(tracker, SystemClock)
    }
}

impl<'a, T: Tracker, C: Clock> SprintPlanner<'a, T, C> {
    /// Creates a planner with a custom clock.
    pub fn with_clock(tracker: &'a T, clock: C) -> Self {
        SprintPlanner {
            tracker,
            clock,
            duration_days: DEFAULT_SPRINT_DAYS,
        }
    }

    /// Sets the sprint length.
    pub fn duration_days(mut self, days: u32) -> Self {
        self.duration_days = days;
        self
    }

    /// Creates a sprint starting now and returns its id.
    ///
    /// # Errors
    ///
    /// [`Error::Creation`] if the board refuses sprints (e.g. it is not a
    /// Scrum board).
    pub fn create_sprint(&self, board_id: u64, name: &str, goal: Option<&str>) -> Result<u64> {
        let start = self.clock.now();
        let draft = SprintDraft {
            board_id,
            name: name.to_string(),
            goal: goal.filter(|g| !g.is_empty()).map(str::to_string),
            start,
            end: start + Duration::days(i64::from(self.duration_days)),
        };

        let sprint = self
            .tracker
            .create_sprint(&draft)
            .map_err(|e| Error::creating(format!("sprint '{}'", name), e))?;
        tracing::info!(board = board_id, sprint = sprint.id, name, "created sprint");
        Ok(sprint.id)
    }

    /// Active and future sprints on the board.
    pub fn open_sprints(&self, board_id: u64) -> Result<Vec<Sprint>> {
        self.tracker
            .sprints(board_id, &[SprintState::Active, SprintState::Future])
            .map_err(|e| Error::looking_up(format!("sprints of board {}", board_id), e))
    }
}
