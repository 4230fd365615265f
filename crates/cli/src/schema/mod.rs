// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output structures.
//!
//! Every `-o json` output is one of these types, so `planpush schema`
//! describes exactly what the commands print.

use schemars::JsonSchema;
use serde::Serialize;

pub mod preview;
pub mod push;
pub mod sprints;

/// Output of `planpush mode -o json`.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ModeJson {
    pub project: String,
    /// "team-managed" or "company-managed".
    pub mode: pp_core::ManagementMode,
    /// Whether epic name and epic link fields are sent.
    pub custom_epic_fields: bool,
}

/// Object counts of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize)]
pub struct TotalsJson {
    pub sprints: usize,
    pub epics: usize,
    pub stories: usize,
    pub subtasks: usize,
}

impl From<pp_core::PlanTotals> for TotalsJson {
    fn from(t: pp_core::PlanTotals) -> Self {
        TotalsJson {
            sprints: t.sprints,
            epics: t.epics,
            stories: t.stories,
            subtasks: t.subtasks,
        }
    }
}
