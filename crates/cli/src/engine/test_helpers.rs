// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures shared by the engine tests.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone, Utc};
use pp_core::{CustomFieldIds, Epic, IssueTypeNames, Plan, SprintSpec, Story};

use super::sprint::Clock;
use super::EngineSettings;

pub use crate::tracker::test_helpers::FakeTracker;

pub const EPIC_NAME_FIELD: &str = "customfield_10011";
pub const EPIC_LINK_FIELD: &str = "customfield_10014";

/// A clock stopped at a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap())
}

pub fn settings() -> EngineSettings {
    EngineSettings {
        fields: CustomFieldIds {
            epic_name: EPIC_NAME_FIELD.to_string(),
            epic_link: EPIC_LINK_FIELD.to_string(),
        },
        issue_types: IssueTypeNames::default(),
        sprint_days: 14,
    }
}

pub fn story(summary: &str, tasks: &[&str]) -> Story {
    Story {
        summary: summary.to_string(),
        points: Some(3.0),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
        acceptance_criteria: vec![format!("{} works", summary)],
    }
}

pub fn epic(name: &str, stories: Vec<Story>) -> Epic {
    Epic {
        name: name.to_string(),
        stories,
    }
}

pub fn sprint(name: &str, epics: &[&str]) -> SprintSpec {
    SprintSpec {
        name: name.to_string(),
        goal: String::new(),
        epic_names: epics.iter().map(|e| e.to_string()).collect(),
    }
}

/// One sprint, one epic "Auth", one story "Login" with two tasks.
pub fn auth_plan() -> Plan {
    Plan {
        epics: vec![epic("Auth", vec![story("Login", &["UI", "API"])])],
        sprints: vec![sprint("S1", &["Auth"])],
    }
}
