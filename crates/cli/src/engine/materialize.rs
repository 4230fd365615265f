// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue creation.
//!
//! Epics and stories are created from a [`FieldSet`] chosen by management
//! mode. When the tracker rejects the set's optional custom field, the same
//! set minus that field is sent once more. Subtasks have no optional field
//! and are never retried.

use pp_core::{CustomFieldIds, EpicFields, FieldSet, IssueTypeNames, OptionalField, Story, StoryFields, SubtaskFields};

use super::schema::SchemaProbe;
use crate::error::{Error, Result};
use crate::tracker::Tracker;

/// An issue that was created, possibly after dropping its optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub key: String,
    /// Set when the first attempt was rejected for this field.
    pub dropped_field: Option<OptionalField>,
}

/// Result of creating a story and its subtasks.
#[derive(Debug)]
pub struct StoryOutcome {
    pub key: String,
    pub dropped_field: Option<OptionalField>,
    /// Subtask keys created, in task order.
    pub subtasks: Vec<String>,
    /// The subtask failure that stopped the remaining tasks.
    pub halted: Option<SubtaskFailure>,
}

/// A subtask create that failed.
#[derive(Debug)]
pub struct SubtaskFailure {
    /// Zero-based index into the story's tasks.
    pub task_index: usize,
    pub task: String,
    pub error: Error,
}

/// Creates epics, stories and subtasks and moves stories into sprints.
pub struct IssueMaterializer<'a, T: Tracker> {
    tracker: &'a T,
    probe: &'a SchemaProbe<'a, T>,
    fields: &'a CustomFieldIds,
    types: &'a IssueTypeNames,
}

impl<'a, T: Tracker> IssueMaterializer<'a, T> {
    pub fn new(
        tracker: &'a T,
        probe: &'a SchemaProbe<'a, T>,
        fields: &'a CustomFieldIds,
        types: &'a IssueTypeNames,
    ) -> Self {
        IssueMaterializer {
            tracker,
            probe,
            fields,
            types,
        }
    }

    pub fn field_ids(&self) -> &CustomFieldIds {
        self.fields
    }

    /// Creates an epic. Company-managed projects also get the epic name field.
    pub fn create_epic(&self, project_key: &str, name: &str) -> Result<Materialized> {
        let mode = self.probe.detect_mode(project_key)?;
        let fields = EpicFields::for_mode(project_key, name, mode);
        let created = self.create_with_fallback(&fields, &format!("epic '{}'", name))?;
        tracing::info!(key = %created.key, epic = name, "created epic");
        Ok(created)
    }

    /// Creates a story, then one subtask per task.
    ///
    /// Only a failure of the story itself is returned as an error. The first
    /// failing subtask stops the rest and is reported in
    /// [`StoryOutcome::halted`].
    pub fn create_story(&self, project_key: &str, epic_key: Option<&str>, story: &Story) -> Result<StoryOutcome> {
        let mode = self.probe.detect_mode(project_key)?;
        let fields = StoryFields::for_mode(project_key, epic_key, story, mode);
        let created = self.create_with_fallback(&fields, &format!("story '{}'", story.summary))?;
        tracing::info!(key = %created.key, story = %story.summary, "created story");

        let mut subtasks = Vec::with_capacity(story.tasks.len());
        let mut halted = None;
        for (task_index, task) in story.tasks.iter().enumerate() {
            match self.create_subtask(project_key, &created.key, task) {
                Ok(key) => subtasks.push(key),
                Err(error) => {
                    tracing::warn!(
                        story = %created.key,
                        task_index,
                        remaining = story.tasks.len() - task_index - 1,
                        "subtask failed, skipping remaining tasks: {}",
                        error
                    );
                    halted = Some(SubtaskFailure {
                        task_index,
                        task: task.clone(),
                        error,
                    });
                    break;
                }
            }
        }

        Ok(StoryOutcome {
            key: created.key,
            dropped_field: created.dropped_field,
            subtasks,
            halted,
        })
    }

    /// Moves one issue into a sprint.
    pub fn assign_to_sprint(&self, sprint_id: u64, issue_key: &str) -> Result<()> {
        self.tracker
            .add_issues_to_sprint(sprint_id, &[issue_key.to_string()])
            .map_err(|e| Error::creating(format!("sprint assignment of {}", issue_key), e))?;
        tracing::info!(sprint = sprint_id, key = issue_key, "assigned to sprint");
        Ok(())
    }

    fn create_subtask(&self, project_key: &str, parent_key: &str, task: &str) -> Result<String> {
        let fields = SubtaskFields::new(project_key, parent_key, task);
        let key = self
            .tracker
            .create_issue(&fields.to_fields(self.fields, self.types))
            .map_err(|e| Error::creating(format!("subtask '{}'", task), e))?;
        tracing::info!(%key, parent = parent_key, "created subtask");
        Ok(key)
    }

    fn create_with_fallback<F: FieldSet>(&self, fields: &F, what: &str) -> Result<Materialized> {
        let err = match self.tracker.create_issue(&fields.to_fields(self.fields, self.types)) {
            Ok(key) => {
                return Ok(Materialized {
                    key,
                    dropped_field: None,
                })
            }
            Err(err) => err,
        };

        let Some(field) = fields.optional_field().filter(|f| err.rejects_field(f.id(self.fields))) else {
            return Err(Error::creating(what, err));
        };

        tracing::warn!(
            field = %field,
            field_id = field.id(self.fields),
            summary = fields.summary(),
            "tracker rejected optional field, retrying without it: {}",
            err
        );

        let retry = fields.without_optional_field();
        match self.tracker.create_issue(&retry.to_fields(self.fields, self.types)) {
            Ok(key) => Ok(Materialized {
                key,
                dropped_field: Some(field),
            }),
            Err(err) if err.rejects_field(field.id(self.fields)) => Err(Error::FieldRejection {
                field: field.label(),
                field_id: field.id(self.fields).to_string(),
                reason: err.to_string(),
            }),
            Err(err) => Err(Error::creating(what, err)),
        }
    }
}
