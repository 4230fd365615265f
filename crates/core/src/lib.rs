// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pp-core: Shared library for planpush
//!
//! This crate provides the plan data model read from the planning oracle,
//! the typed field sets sent to the issue tracker when materializing a plan,
//! and the project management mode that decides which optional fields apply.

pub mod error;
pub mod fields;
pub mod mode;
pub mod plan;

pub use error::{Error, Result};
pub use fields::{CustomFieldIds, EpicFields, FieldSet, IssueTypeNames, OptionalField, StoryFields, SubtaskFields};
pub use mode::ManagementMode;
pub use plan::{Epic, Plan, PlanTotals, SprintSpec, Story};
