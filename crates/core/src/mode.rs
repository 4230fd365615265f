// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project management mode.
//!
//! Trackers host two kinds of software projects. Team-managed projects have a
//! simplified, tracker-controlled schema that rejects the epic name and epic
//! link custom fields; company-managed projects need them set explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How a tracker project manages its issue schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ManagementMode {
    /// Simplified schema; custom epic fields are never sent.
    TeamManaged,
    /// Configurable schema; epic name and epic link fields are sent.
    CompanyManaged,
}

impl ManagementMode {
    /// Classifies a project from the tracker's `simplified` flag.
    pub fn from_simplified(simplified: bool) -> Self {
        if simplified {
            ManagementMode::TeamManaged
        } else {
            ManagementMode::CompanyManaged
        }
    }

    /// Returns true if optional custom epic fields should be attempted.
    pub fn uses_custom_epic_fields(&self) -> bool {
        matches!(self, ManagementMode::CompanyManaged)
    }

    /// Returns the string representation used in display and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ManagementMode::TeamManaged => "team-managed",
            ManagementMode::CompanyManaged => "company-managed",
        }
    }
}

impl fmt::Display for ManagementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ManagementMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "team-managed" | "team" => Ok(ManagementMode::TeamManaged),
            "company-managed" | "company" => Ok(ManagementMode::CompanyManaged),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
