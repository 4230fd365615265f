// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use pp_core::OptionalField;
use serde_json::json;

use super::materialize::IssueMaterializer;
use super::schema::SchemaProbe;
use super::test_helpers::{settings, story, FakeTracker, EPIC_LINK_FIELD, EPIC_NAME_FIELD};
use crate::error::Error;

/// Builds a materializer over `tracker` and hands it to `f`.
fn with_materializer<R>(tracker: &FakeTracker, f: impl FnOnce(&IssueMaterializer<'_, FakeTracker>) -> R) -> R {
    let settings = settings();
    let probe = SchemaProbe::new(tracker);
    let issues = IssueMaterializer::new(tracker, &probe, &settings.fields, &settings.issue_types);
    f(&issues)
}

#[test]
fn company_managed_epic_carries_epic_name() {
    let tracker = FakeTracker::new("PP");
    let created = with_materializer(&tracker, |m| m.create_epic("PP", "Auth")).unwrap();

    assert_eq!(created.key, "PP-1");
    assert_eq!(created.dropped_field, None);
    let epic = &tracker.issues_of_type("Epic")[0];
    assert_eq!(epic.summary(), "Auth");
    assert_eq!(epic.fields[EPIC_NAME_FIELD], json!("Auth"));
}

#[test]
fn team_managed_epic_never_sends_epic_name() {
    let tracker = FakeTracker::new("PP").team_managed().rejecting_field(EPIC_NAME_FIELD);
    with_materializer(&tracker, |m| m.create_epic("PP", "Auth")).unwrap();

    let attempts = tracker.attempts();
    assert_eq!(attempts.len(), 1);
    assert!(!attempts[0].contains_key(EPIC_NAME_FIELD));
}

#[test]
fn rejected_epic_name_is_dropped_once() {
    let tracker = FakeTracker::new("PP").rejecting_field(EPIC_NAME_FIELD);
    let created = with_materializer(&tracker, |m| m.create_epic("PP", "Auth")).unwrap();

    assert_eq!(created.dropped_field, Some(OptionalField::EpicName));
    let attempts = tracker.attempts();
    assert_eq!(attempts.len(), 2);
    assert!(attempts[0].contains_key(EPIC_NAME_FIELD));
    assert!(!attempts[1].contains_key(EPIC_NAME_FIELD));

    let mut first = attempts[0].clone();
    first.remove(EPIC_NAME_FIELD);
    assert_eq!(first, attempts[1]);
}

#[test]
fn rejected_epic_link_keeps_other_story_fields() {
    let tracker = FakeTracker::new("PP").rejecting_field(EPIC_LINK_FIELD);
    let outcome = with_materializer(&tracker, |m| m.create_story("PP", Some("PP-9"), &story("Login", &[]))).unwrap();

    assert_eq!(outcome.dropped_field, Some(OptionalField::EpicLink));
    let attempts = tracker.attempts();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0][EPIC_LINK_FIELD], json!("PP-9"));
    let mut first = attempts[0].clone();
    first.remove(EPIC_LINK_FIELD);
    assert_eq!(first, attempts[1]);
    assert_eq!(attempts[1]["description"], json!("* Login works"));
}

#[test]
fn unrelated_rejection_is_not_retried() {
    let tracker = FakeTracker::new("PP").failing_issue("Auth");
    let err = with_materializer(&tracker, |m| m.create_epic("PP", "Auth")).unwrap_err();

    assert!(matches!(err, Error::Creation { .. }));
    assert_eq!(tracker.attempts().len(), 1);
}

#[test]
fn rejection_of_the_retry_is_not_retried_again() {
    let tracker = FakeTracker::new("PP")
        .rejecting_field(EPIC_NAME_FIELD)
        .failing_issue("Auth");
    let err = with_materializer(&tracker, |m| m.create_epic("PP", "Auth")).unwrap_err();

    assert!(matches!(err, Error::Creation { .. }));
    assert_eq!(tracker.attempts().len(), 2);
}

#[test]
fn retry_rejected_on_another_field_is_creation_error() {
    let tracker = FakeTracker::new("PP").rejecting_field(EPIC_NAME_FIELD).failing_issue_on_field(
        "Auth",
        "summary",
        "Summary must be less than 255 characters.",
    );
    let err = with_materializer(&tracker, |m| m.create_epic("PP", "Auth")).unwrap_err();

    match err {
        Error::Creation { what, reason } => {
            assert_eq!(what, "epic 'Auth'");
            assert!(reason.contains("summary: Summary must be less than 255 characters."));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(tracker.attempts().len(), 2);
}

#[test]
fn retry_still_blaming_the_dropped_field_is_field_rejection() {
    let tracker = FakeTracker::new("PP").rejecting_field(EPIC_NAME_FIELD).failing_issue_on_field(
        "Auth",
        EPIC_NAME_FIELD,
        "Epic Name is required.",
    );
    let err = with_materializer(&tracker, |m| m.create_epic("PP", "Auth")).unwrap_err();

    match err {
        Error::FieldRejection { field, field_id, reason } => {
            assert_eq!(field, "Epic Name");
            assert_eq!(field_id, EPIC_NAME_FIELD);
            assert!(reason.contains("Epic Name is required."));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(tracker.attempts().len(), 2);
}

#[test]
fn story_without_epic_has_no_link() {
    let tracker = FakeTracker::new("PP");
    with_materializer(&tracker, |m| m.create_story("PP", None, &story("Login", &[]))).unwrap();
    assert!(!tracker.attempts()[0].contains_key(EPIC_LINK_FIELD));
}

#[test]
fn team_managed_story_never_sends_epic_link() {
    let tracker = FakeTracker::new("PP").team_managed();
    with_materializer(&tracker, |m| m.create_story("PP", Some("PP-1"), &story("Login", &[]))).unwrap();
    assert!(!tracker.attempts()[0].contains_key(EPIC_LINK_FIELD));
}

#[test]
fn subtasks_are_created_under_the_story() {
    let tracker = FakeTracker::new("PP");
    let outcome = with_materializer(&tracker, |m| m.create_story("PP", None, &story("Login", &["UI", "API"]))).unwrap();

    assert_eq!(outcome.key, "PP-1");
    assert_eq!(outcome.subtasks, vec!["PP-2".to_string(), "PP-3".to_string()]);
    assert!(outcome.halted.is_none());
    let subtasks = tracker.issues_of_type("Sub-task");
    assert_eq!(subtasks.len(), 2);
    assert!(subtasks.iter().all(|s| s.parent() == Some("PP-1")));
    assert_eq!(subtasks[0].summary(), "UI");
}

#[test]
fn first_failing_subtask_halts_the_rest() {
    let tracker = FakeTracker::new("PP").failing_issue("B");
    let outcome =
        with_materializer(&tracker, |m| m.create_story("PP", None, &story("Login", &["A", "B", "C", "D"]))).unwrap();

    assert_eq!(outcome.subtasks.len(), 1);
    let halted = outcome.halted.unwrap();
    assert_eq!(halted.task_index, 1);
    assert_eq!(halted.task, "B");
    assert!(matches!(halted.error, Error::Creation { .. }));

    let summaries: Vec<String> = tracker.attempts().iter().map(|f| f["summary"].as_str().unwrap().to_string()).collect();
    assert_eq!(summaries, vec!["Login", "A", "B"]);
}

#[test]
fn assignment_moves_one_issue() {
    let tracker = FakeTracker::new("PP");
    with_materializer(&tracker, |m| m.assign_to_sprint(101, "PP-4")).unwrap();
    assert_eq!(tracker.assignments(), vec![(101, "PP-4".to_string())]);
}

#[test]
fn rejected_assignment_is_creation_error() {
    let tracker = FakeTracker::new("PP").failing_assignment("PP-4");
    let err = with_materializer(&tracker, |m| m.assign_to_sprint(101, "PP-4")).unwrap_err();
    assert!(matches!(err, Error::Creation { .. }));
    assert!(tracker.assignments().is_empty());
}
