// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plan data model.
//!
//! A plan is the epic/story/sprint structure produced by the planning oracle.
//! It is read once from JSON and never modified afterwards:
//!
//! ```json
//! {
//!   "epics": [{"epic": "Auth", "stories": [{"summary": "Login", "points": 3,
//!              "tasks": ["Add form"], "acceptance_criteria": ["User can log in"]}]}],
//!   "sprints": [{"name": "Sprint 1", "goal": "Foundation", "epics": ["Auth"]}]
//! }
//! ```
//!
//! A bare array of epics is also accepted and yields a plan without sprints.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The full epic/story/sprint structure to materialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Plan {
    /// Epics in the order they should be created.
    #[serde(default)]
    pub epics: Vec<Epic>,
    /// Sprints in the order they should be created.
    #[serde(default)]
    pub sprints: Vec<SprintSpec>,
}

/// A named group of stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Epic {
    /// Epic name, matched verbatim against sprint epic references.
    #[serde(rename = "epic")]
    pub name: String,
    /// Stories belonging to this epic.
    #[serde(default)]
    pub stories: Vec<Story>,
}

/// A user story with its subtasks and acceptance criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Story {
    /// Short title of the story.
    pub summary: String,
    /// Story point estimate. Only shown in previews, never sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// One subtask is created per entry.
    #[serde(default)]
    pub tasks: Vec<String>,
    /// Rendered as a bulleted description.
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
}

/// A time-boxed sprint referencing epics by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SprintSpec {
    /// Sprint name shown on the board.
    pub name: String,
    /// Sprint goal.
    #[serde(default)]
    pub goal: String,
    /// Names of the epics planned into this sprint.
    #[serde(default, rename = "epics")]
    pub epic_names: Vec<String>,
}

impl Plan {
    /// Parses a plan document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a plan document and
    /// [`Error::InvalidPlan`] if an epic or story is missing its name.
    pub fn from_json(text: &str) -> Result<Self> {
        let plan = if text.trim_start().starts_with('[') {
            Plan {
                epics: serde_json::from_str(text)?,
                sprints: Vec::new(),
            }
        } else {
            serde_json::from_str(text)?
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Checks that every epic, story and sprint carries a usable name.
    pub fn validate(&self) -> Result<()> {
        for (i, epic) in self.epics.iter().enumerate() {
            if epic.name.trim().is_empty() {
                return Err(Error::InvalidPlan(format!("epic #{} has no name", i + 1)));
            }
            for story in &epic.stories {
                story
                    .validate()
                    .map_err(|e| Error::InvalidPlan(format!("epic '{}': {}", epic.name, e)))?;
            }
        }
        for (i, sprint) in self.sprints.iter().enumerate() {
            if sprint.name.trim().is_empty() {
                return Err(Error::InvalidPlan(format!("sprint #{} has no name", i + 1)));
            }
        }
        Ok(())
    }

    /// Epics planned into the given sprint, in plan order.
    pub fn epics_in<'a>(&'a self, sprint: &'a SprintSpec) -> impl Iterator<Item = &'a Epic> + 'a {
        self.epics.iter().filter(move |epic| sprint.includes(&epic.name))
    }

    /// Epic names referenced by the sprint that match no epic in this plan.
    pub fn unmatched_epic_names<'a>(&self, sprint: &'a SprintSpec) -> Vec<&'a str> {
        sprint
            .epic_names
            .iter()
            .filter(|name| !self.epics.iter().any(|epic| &epic.name == *name))
            .map(String::as_str)
            .collect()
    }

    /// Totals of the objects a fully successful push creates.
    pub fn totals(&self) -> PlanTotals {
        let mut totals = PlanTotals {
            sprints: self.sprints.len(),
            ..PlanTotals::default()
        };
        for sprint in &self.sprints {
            for epic in self.epics_in(sprint) {
                totals.epics += 1;
                totals.stories += epic.stories.len();
                totals.subtasks += epic.stories.iter().map(|s| s.tasks.len()).sum::<usize>();
            }
        }
        totals
    }
}

/// Object counts for a push.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlanTotals {
    pub sprints: usize,
    pub epics: usize,
    pub stories: usize,
    pub subtasks: usize,
}

impl Story {
    /// Parses a single story document.
    pub fn from_json(text: &str) -> Result<Self> {
        let story: Story = serde_json::from_str(text)?;
        story.validate()?;
        Ok(story)
    }

    fn validate(&self) -> Result<()> {
        if self.summary.trim().is_empty() {
            return Err(Error::InvalidStory("story has no summary".to_string()));
        }
        Ok(())
    }

    /// Acceptance criteria as a bulleted list, one `* <criterion>` per line.
    pub fn description(&self) -> String {
        self.acceptance_criteria
            .iter()
            .map(|c| format!("* {}", c))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SprintSpec {
    /// Returns true if the epic name is listed verbatim.
    pub fn includes(&self, epic_name: &str) -> bool {
        self.epic_names.iter().any(|name| name == epic_name)
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
