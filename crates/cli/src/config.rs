// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker configuration.
//!
//! Configuration is read from a TOML file (default
//! `<config dir>/planpush/config.toml`) and then overridden by environment
//! variables:
//!
//! ```toml
//! [tracker]
//! url = "https://example.atlassian.net"
//! email = "me@example.com"
//! token = "..."
//!
//! [fields]
//! epic_name = "customfield_..."
//! epic_link = "customfield_..."
//! ```
//!
//! The epic custom field identifiers differ between tracker instances and
//! have no defaults.

use pp_core::{CustomFieldIds, IssueTypeNames};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{EngineSettings, DEFAULT_SPRINT_DAYS};
use crate::env::{self, vars};
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "planpush";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of the configuration file. Every key is optional here; missing
/// values may still come from the environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub tracker: TrackerSection,
    #[serde(default)]
    pub fields: FieldsSection,
    #[serde(default)]
    pub issue_types: IssueTypeNames,
    #[serde(default)]
    pub sprint: SprintSection,
}

/// `[tracker]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSection {
    pub url: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TrackerSection {
    fn default() -> Self {
        TrackerSection {
            url: None,
            email: None,
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[fields]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldsSection {
    pub epic_name: Option<String>,
    pub epic_link: Option<String>,
}

/// `[sprint]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintSection {
    /// Sprint length in days (default: 14).
    #[serde(default = "default_duration_days")]
    pub duration_days: u32,
}

impl Default for SprintSection {
    fn default() -> Self {
        SprintSection {
            duration_days: default_duration_days(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_duration_days() -> u32 {
    DEFAULT_SPRINT_DAYS
}

/// Connection settings for the tracker client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub url: String,
    pub email: String,
    pub token: String,
    pub timeout_secs: u64,
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub tracker: TrackerSettings,
    pub engine: EngineSettings,
}

impl ConfigFile {
    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parses configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("failed to parse config: {}", e)))
    }

    /// Overrides file values with variables found by `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let overrides = [
            (vars::JIRA_URL, &mut self.tracker.url),
            (vars::JIRA_EMAIL, &mut self.tracker.email),
            (vars::JIRA_TOKEN, &mut self.tracker.token),
            (vars::EPIC_NAME_FIELD, &mut self.fields.epic_name),
            (vars::EPIC_LINK_FIELD, &mut self.fields.epic_link),
        ];
        for (name, slot) in overrides {
            if let Some(value) = lookup(name) {
                *slot = Some(value);
            }
        }
    }

    /// Checks the connection settings alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first missing or invalid value.
    pub fn resolve_tracker(&self) -> Result<TrackerSettings> {
        let url = required(self.tracker.url.clone(), "tracker url", "[tracker].url", vars::JIRA_URL)?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(Error::Configuration(format!(
                "invalid tracker url '{}': must start with https:// or http://",
                url
            )));
        }
        let email = required(self.tracker.email.clone(), "account email", "[tracker].email", vars::JIRA_EMAIL)?;
        let token = required(self.tracker.token.clone(), "API token", "[tracker].token", vars::JIRA_TOKEN)?;
        Ok(TrackerSettings {
            url,
            email,
            token,
            timeout_secs: self.tracker.timeout_secs,
        })
    }

    /// Checks that every required value is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first missing or invalid value.
    pub fn resolve(self) -> Result<Config> {
        let tracker = self.resolve_tracker()?;
        let epic_name = required(
            self.fields.epic_name,
            "epic name field id",
            "[fields].epic_name",
            vars::EPIC_NAME_FIELD,
        )?;
        let epic_link = required(
            self.fields.epic_link,
            "epic link field id",
            "[fields].epic_link",
            vars::EPIC_LINK_FIELD,
        )?;
        if self.sprint.duration_days == 0 {
            return Err(Error::Configuration("sprint duration_days must be at least 1".to_string()));
        }

        Ok(Config {
            tracker,
            engine: EngineSettings {
                fields: CustomFieldIds { epic_name, epic_link },
                issue_types: self.issue_types,
                sprint_days: self.sprint.duration_days,
            },
        })
    }
}

fn required(value: Option<String>, what: &str, key: &str, var: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            Error::Configuration(format!("{} is not set\n  hint: set {} in the config file or {}", what, key, var))
        })
}

impl Config {
    /// Loads configuration from `path` (or the default location) and the environment.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_file(path)?.resolve()
    }

    /// Like [`Config::load`], requiring only the connection settings.
    pub fn load_tracker(path: Option<&Path>) -> Result<TrackerSettings> {
        Self::load_file(path)?.resolve_tracker()
    }

    fn load_file(path: Option<&Path>) -> Result<ConfigFile> {
        let explicit = path.map(Path::to_path_buf).or_else(env::config_path);
        let mut file = match explicit {
            Some(path) => ConfigFile::load(&path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => ConfigFile::load(&path)?,
                _ => ConfigFile::default(),
            },
        };
        file.apply_env(env::lookup);
        Ok(file)
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
