// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed field sets for issue creation.
//!
//! Each issue type has its own builder whose optional custom field is either
//! present or absent by construction. The single retry after a field
//! rejection derives a second set from the first by dropping that one field
//! ([`FieldSet::without_optional_field`]); every other field carries over.
//!
//! Custom field identifiers differ per tracker instance, so they are passed in
//! as [`CustomFieldIds`] when a set is rendered to its wire form.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

use crate::mode::ManagementMode;
use crate::plan::Story;

/// Instance-specific identifiers of the epic custom fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldIds {
    /// Field holding an epic's name (company-managed projects).
    pub epic_name: String,
    /// Field linking a story to its epic (company-managed projects).
    pub epic_link: String,
}

/// Issue type names as configured in the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTypeNames {
    #[serde(default = "default_epic_type")]
    pub epic: String,
    #[serde(default = "default_story_type")]
    pub story: String,
    #[serde(default = "default_subtask_type")]
    pub subtask: String,
}

fn default_epic_type() -> String {
    "Epic".to_string()
}

fn default_story_type() -> String {
    "Story".to_string()
}

fn default_subtask_type() -> String {
    "Sub-task".to_string()
}

impl Default for IssueTypeNames {
    fn default() -> Self {
        IssueTypeNames {
            epic: default_epic_type(),
            story: default_story_type(),
            subtask: default_subtask_type(),
        }
    }
}

/// An optional custom field that may be dropped on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalField {
    EpicName,
    EpicLink,
}

impl OptionalField {
    /// The tracker field identifier for this field.
    pub fn id<'a>(&self, ids: &'a CustomFieldIds) -> &'a str {
        match self {
            OptionalField::EpicName => &ids.epic_name,
            OptionalField::EpicLink => &ids.epic_link,
        }
    }

    /// Human-readable field name.
    pub fn label(&self) -> &'static str {
        match self {
            OptionalField::EpicName => "Epic Name",
            OptionalField::EpicLink => "Epic Link",
        }
    }
}

impl fmt::Display for OptionalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A complete set of fields for one issue create call.
pub trait FieldSet: Sized {
    /// The optional custom field this set carries, if any.
    fn optional_field(&self) -> Option<OptionalField>;

    /// The same set with its optional custom field removed.
    fn without_optional_field(&self) -> Self;

    /// Renders the `fields` object sent to the tracker.
    fn to_fields(&self, ids: &CustomFieldIds, types: &IssueTypeNames) -> Map<String, Value>;

    /// The issue summary.
    fn summary(&self) -> &str;
}

/// Fields for an Epic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicFields {
    project: String,
    summary: String,
    epic_name: Option<String>,
}

impl EpicFields {
    /// Base fields: project, summary and type.
    pub fn new(project: &str, name: &str) -> Self {
        EpicFields {
            project: project.to_string(),
            summary: name.to_string(),
            epic_name: None,
        }
    }

    /// Base fields plus the epic name field when the mode accepts it.
    pub fn for_mode(project: &str, name: &str, mode: ManagementMode) -> Self {
        let fields = EpicFields::new(project, name);
        if mode.uses_custom_epic_fields() {
            fields.with_epic_name()
        } else {
            fields
        }
    }

    /// Sets the epic name field to the summary.
    pub fn with_epic_name(mut self) -> Self {
        self.epic_name = Some(self.summary.clone());
        self
    }
}

impl FieldSet for EpicFields {
    fn optional_field(&self) -> Option<OptionalField> {
        self.epic_name.as_ref().map(|_| OptionalField::EpicName)
    }

    fn without_optional_field(&self) -> Self {
        EpicFields {
            epic_name: None,
            ..self.clone()
        }
    }

    fn to_fields(&self, ids: &CustomFieldIds, types: &IssueTypeNames) -> Map<String, Value> {
        let mut fields = base_fields(&self.project, &self.summary, &types.epic);
        if let Some(name) = &self.epic_name {
            fields.insert(ids.epic_name.clone(), json!(name));
        }
        fields
    }

    fn summary(&self) -> &str {
        &self.summary
    }
}

/// Fields for a Story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryFields {
    project: String,
    summary: String,
    description: String,
    epic_link: Option<String>,
}

impl StoryFields {
    /// Base fields: project, summary, bulleted description and type.
    pub fn new(project: &str, story: &Story) -> Self {
        StoryFields {
            project: project.to_string(),
            summary: story.summary.clone(),
            description: story.description(),
            epic_link: None,
        }
    }

    /// Base fields plus the epic link when an epic is given and the mode accepts it.
    pub fn for_mode(project: &str, epic_key: Option<&str>, story: &Story, mode: ManagementMode) -> Self {
        let fields = StoryFields::new(project, story);
        match epic_key {
            Some(key) if mode.uses_custom_epic_fields() => fields.with_epic_link(key),
            _ => fields,
        }
    }

    /// Links the story to an epic.
    pub fn with_epic_link(mut self, epic_key: &str) -> Self {
        self.epic_link = Some(epic_key.to_string());
        self
    }
}

impl FieldSet for StoryFields {
    fn optional_field(&self) -> Option<OptionalField> {
        self.epic_link.as_ref().map(|_| OptionalField::EpicLink)
    }

    fn without_optional_field(&self) -> Self {
        StoryFields {
            epic_link: None,
            ..self.clone()
        }
    }

    fn to_fields(&self, ids: &CustomFieldIds, types: &IssueTypeNames) -> Map<String, Value> {
        let mut fields = base_fields(&self.project, &self.summary, &types.story);
        fields.insert("description".to_string(), json!(self.description));
        if let Some(key) = &self.epic_link {
            fields.insert(ids.epic_link.clone(), json!(key));
        }
        fields
    }

    fn summary(&self) -> &str {
        &self.summary
    }
}

/// Fields for a Subtask under an existing story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskFields {
    project: String,
    summary: String,
    parent: String,
}

impl SubtaskFields {
    pub fn new(project: &str, parent_key: &str, task: &str) -> Self {
        SubtaskFields {
            project: project.to_string(),
            summary: task.to_string(),
            parent: parent_key.to_string(),
        }
    }

    /// Key of the parent story.
    pub fn parent(&self) -> &str {
        &self.parent
    }
}

impl FieldSet for SubtaskFields {
    fn optional_field(&self) -> Option<OptionalField> {
        None
    }

    fn without_optional_field(&self) -> Self {
        self.clone()
    }

    fn to_fields(&self, _ids: &CustomFieldIds, types: &IssueTypeNames) -> Map<String, Value> {
        let mut fields = base_fields(&self.project, &self.summary, &types.subtask);
        fields.insert("parent".to_string(), json!({ "key": self.parent }));
        fields
    }

    fn summary(&self) -> &str {
        &self.summary
    }
}

fn base_fields(project: &str, summary: &str, issue_type: &str) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("project".to_string(), json!({ "key": project }));
    fields.insert("summary".to_string(), json!(summary));
    fields.insert("issuetype".to_string(), json!({ "name": issue_type }));
    fields
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
