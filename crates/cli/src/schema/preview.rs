// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output of `planpush push --dry-run`.

use pp_core::Plan;
use schemars::JsonSchema;
use serde::Serialize;

use super::TotalsJson;

/// What a push of the plan would create.
#[derive(Debug, JsonSchema, Serialize)]
pub struct PreviewJson {
    pub project: String,
    pub totals: TotalsJson,
    pub sprints: Vec<PreviewSprintJson>,
}

#[derive(Debug, JsonSchema, Serialize)]
pub struct PreviewSprintJson {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub goal: String,
    pub epics: Vec<PreviewEpicJson>,
    /// Epic names listed by the sprint that match no epic in the plan.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<String>,
}

#[derive(Debug, JsonSchema, Serialize)]
pub struct PreviewEpicJson {
    pub name: String,
    pub stories: Vec<PreviewStoryJson>,
}

#[derive(Debug, JsonSchema, Serialize)]
pub struct PreviewStoryJson {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    pub subtasks: Vec<String>,
}

impl PreviewJson {
    pub fn new(project: &str, plan: &Plan) -> Self {
        let sprints = plan
            .sprints
            .iter()
            .map(|sprint| PreviewSprintJson {
                name: sprint.name.clone(),
                goal: sprint.goal.clone(),
                epics: plan
                    .epics_in(sprint)
                    .map(|epic| PreviewEpicJson {
                        name: epic.name.clone(),
                        stories: epic
                            .stories
                            .iter()
                            .map(|story| PreviewStoryJson {
                                summary: story.summary.clone(),
                                points: story.points,
                                subtasks: story.tasks.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
                unmatched: plan
                    .unmatched_epic_names(sprint)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect();

        PreviewJson {
            project: project.to_string(),
            totals: plan.totals().into(),
            sprints,
        }
    }
}
