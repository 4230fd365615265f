// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drives a whole plan into the tracker.

use pp_core::{Plan, Story};

use super::board::BoardResolver;
use super::log::{LogEntry, RunState, Scope, SyncLog};
use super::materialize::IssueMaterializer;
use super::schema::SchemaProbe;
use super::sprint::{Clock, SprintPlanner, SystemClock};
use super::EngineSettings;
use crate::error::{Error, Result};
use crate::tracker::Tracker;

/// Pushes one plan (or one ticket) into a project, exactly once.
///
/// Sprints are created in plan order. Within each sprint the matching epics
/// are created, then each epic's stories, their subtasks, and the story's
/// sprint assignment. A failure skips only the item it happened on and
/// everything beneath it. [`Error::is_fatal`] errors end the run; the log
/// collected so far is kept either way.
pub struct SyncOrchestrator<'a, T: Tracker, C: Clock = SystemClock> {
    tracker: &'a T,
    settings: &'a EngineSettings,
    project_key: String,
    clock: C,
    state: RunState,
    log: SyncLog,
}

impl<'a, T: Tracker> SyncOrchestrator<'a, T, SystemClock> {
    pub fn new(tracker: &'a T, settings: &'a EngineSettings, project_key: &str) -> Self {
        Self::with_clock(tracker, settings, project_key, SystemClock)
    }
}

impl<'a, T: Tracker, C: Clock> SyncOrchestrator<'a, T, C> {
    /// Creates an orchestrator whose sprints start at the clock's `now`.
    pub fn with_clock(tracker: &'a T, settings: &'a EngineSettings, project_key: &str, clock: C) -> Self {
        SyncOrchestrator {
            tracker,
            settings,
            project_key: project_key.to_string(),
            clock,
            state: RunState::NotStarted,
            log: SyncLog::new(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn log(&self) -> &SyncLog {
        &self.log
    }

    pub fn into_log(self) -> SyncLog {
        self.log
    }

    /// Pushes every sprint of the plan with its epics, stories and subtasks.
    ///
    /// # Errors
    ///
    /// [`Error::RunAlreadyStarted`] on a second call. Otherwise only fatal
    /// errors are returned; everything else ends up in [`Self::log`].
    pub fn run(&mut self, plan: &Plan) -> Result<()> {
        self.start()?;
        let result = self.push_plan(plan);
        self.finish(result)
    }

    /// Pushes a single story with no epic into an existing sprint.
    pub fn run_ticket(&mut self, sprint_id: u64, story: &Story) -> Result<()> {
        self.start()?;
        let result = self.push_ticket(sprint_id, story);
        self.finish(result)
    }

    fn start(&mut self) -> Result<()> {
        if self.state != RunState::NotStarted {
            return Err(Error::RunAlreadyStarted);
        }
        self.state = RunState::Running;
        Ok(())
    }

    fn finish(&mut self, result: Result<()>) -> Result<()> {
        self.state = RunState::Completed;
        if let Err(e) = &result {
            tracing::error!(project = %self.project_key, "push aborted: {}", e);
            self.log.fail(Scope::Run, self.project_key.clone(), e);
        } else {
            tracing::info!(
                project = %self.project_key,
                created = self.log.created_keys().len(),
                failed = self.log.failures().len(),
                "push finished"
            );
        }
        result
    }

    fn push_plan(&mut self, plan: &Plan) -> Result<()> {
        let project = self.project_key.as_str();
        let probe = SchemaProbe::new(self.tracker);
        let mode = probe.detect_mode(project)?;
        self.log.push(LogEntry::ModeDetected {
            project: project.to_string(),
            mode,
        });

        let boards = BoardResolver::new(self.tracker);
        let Some(board_id) = recover(&mut self.log, Scope::Board, project, boards.resolve_board(project))? else {
            return Ok(());
        };
        self.log.push(LogEntry::BoardResolved {
            project: project.to_string(),
            board_id,
        });

        let planner = SprintPlanner::with_clock(self.tracker, &self.clock).duration_days(self.settings.sprint_days);
        let issues = IssueMaterializer::new(
            self.tracker,
            &probe,
            &self.settings.fields,
            &self.settings.issue_types,
        );

        for sprint in &plan.sprints {
            for name in plan.unmatched_epic_names(sprint) {
                tracing::warn!(sprint = %sprint.name, epic = name, "sprint names an epic that is not in the plan");
            }

            let created = planner.create_sprint(board_id, &sprint.name, Some(&sprint.goal));
            let Some(sprint_id) = recover(&mut self.log, Scope::Sprint, &sprint.name, created)? else {
                continue;
            };
            self.log.push(LogEntry::SprintCreated {
                name: sprint.name.clone(),
                sprint_id,
            });

            for epic in plan.epics_in(sprint) {
                let created = issues.create_epic(project, &epic.name);
                let Some(created) = recover(&mut self.log, Scope::Epic, &epic.name, created)? else {
                    continue;
                };
                self.log.push(LogEntry::EpicCreated {
                    name: epic.name.clone(),
                    key: created.key.clone(),
                });
                if let Some(field) = created.dropped_field {
                    self.log.push(LogEntry::FieldDropped {
                        key: created.key.clone(),
                        field: field.label().to_string(),
                        field_id: field.id(&self.settings.fields).to_string(),
                    });
                }

                for story in &epic.stories {
                    push_story(&issues, &mut self.log, project, Some(&created.key), story, sprint_id)?;
                }
            }
        }
        Ok(())
    }

    fn push_ticket(&mut self, sprint_id: u64, story: &Story) -> Result<()> {
        let project = self.project_key.as_str();
        let probe = SchemaProbe::new(self.tracker);
        let mode = probe.detect_mode(project)?;
        self.log.push(LogEntry::ModeDetected {
            project: project.to_string(),
            mode,
        });

        let issues = IssueMaterializer::new(
            self.tracker,
            &probe,
            &self.settings.fields,
            &self.settings.issue_types,
        );
        push_story(&issues, &mut self.log, project, None, story, sprint_id)
    }
}

/// Creates a story with its subtasks and assigns it to the sprint.
///
/// A created story is assigned even when one of its subtasks failed.
fn push_story<T: Tracker>(
    issues: &IssueMaterializer<'_, T>,
    log: &mut SyncLog,
    project: &str,
    epic_key: Option<&str>,
    story: &Story,
    sprint_id: u64,
) -> Result<()> {
    let created = issues.create_story(project, epic_key, story);
    let Some(outcome) = recover(log, Scope::Story, &story.summary, created)? else {
        return Ok(());
    };

    log.push(LogEntry::StoryCreated {
        summary: story.summary.clone(),
        key: outcome.key.clone(),
        epic: epic_key.map(str::to_string),
    });
    if let Some(field) = outcome.dropped_field {
        log.push(LogEntry::FieldDropped {
            key: outcome.key.clone(),
            field: field.label().to_string(),
            field_id: field.id(issues.field_ids()).to_string(),
        });
    }
    for (task, key) in story.tasks.iter().zip(&outcome.subtasks) {
        log.push(LogEntry::SubtaskCreated {
            task: task.clone(),
            key: key.clone(),
            parent: outcome.key.clone(),
        });
    }
    if let Some(failure) = outcome.halted {
        recover::<()>(log, Scope::Subtask, &failure.task, Err(failure.error))?;
    }

    let assigned = issues.assign_to_sprint(sprint_id, &outcome.key);
    if recover(log, Scope::Assignment, &outcome.key, assigned)?.is_some() {
        log.push(LogEntry::StoryAssigned {
            key: outcome.key,
            sprint_id,
        });
    }
    Ok(())
}

/// Logs a non-fatal failure and yields `None`; fatal errors propagate.
fn recover<V>(log: &mut SyncLog, scope: Scope, subject: &str, result: Result<V>) -> Result<Option<V>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            tracing::warn!(%scope, subject, "{}", e);
            log.fail(scope, subject, &e);
            Ok(None)
        }
    }
}
