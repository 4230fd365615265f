// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project creation.

use crate::error::{Error, Result};
use crate::tracker::{NewProject, Tracker};

const DERIVED_KEY_LEN: usize = 4;

/// Derives a project key from its name: the first four letters, upper-cased.
///
/// Returns `None` when the name contains no ASCII letter.
pub fn derive_project_key(name: &str) -> Option<String> {
    let key: String = name
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .take(DERIVED_KEY_LEN)
        .collect();
    (!key.is_empty()).then_some(key)
}

/// Creates a Scrum software project led by the authenticated account and
/// returns its key.
pub fn create_project<T: Tracker>(tracker: &T, name: &str, key: Option<&str>) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Configuration("project name is empty".to_string()));
    }
    let key = match key.map(str::trim) {
        Some(key) if !key.is_empty() => key.to_uppercase(),
        Some(_) => return Err(Error::Configuration("project key is empty".to_string())),
        None => derive_project_key(name).ok_or_else(|| {
            Error::Configuration(format!(
                "cannot derive a project key from '{}'\n  hint: pass --key explicitly",
                name
            ))
        })?,
    };

    let lead_account_id = tracker
        .myself()
        .map_err(|e| Error::looking_up("current account", e))?;
    let created = tracker
        .create_project(&NewProject {
            key: key.clone(),
            name: name.to_string(),
            lead_account_id,
        })
        .map_err(|e| Error::creating(format!("project {}", key), e))?;
    tracing::info!(key = %created, name, "created project");
    Ok(created)
}
