// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jira Cloud implementation of [`Tracker`] over blocking HTTP.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::api::{Board, FieldInfo, NewProject, ProjectInfo, Sprint, SprintDraft, SprintState, Tracker};
use super::rejection::{Rejection, TrackerError, TrackerResult};
use crate::config::TrackerSettings;

const PAGE_SIZE: usize = 50;
const SCRUM_PROJECT_TEMPLATE: &str = "com.pyxis.greenhopper.jira:gh-scrum-template";
const SPRINT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000+0000";

/// Blocking Jira REST client authenticated with an account email and API token.
pub struct JiraClient {
    http: Client,
    base_url: String,
    email: String,
    token: String,
}

impl JiraClient {
    /// Create a client for the configured tracker.
    pub fn new(settings: &TrackerSettings) -> TrackerResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("planpush/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(JiraClient {
            http,
            base_url: settings.url.trim_end_matches('/').to_string(),
            email: settings.email.clone(),
            token: settings.token.clone(),
        })
    }

    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .basic_auth(&self.email, Some(&self.token))
            .header(reqwest::header::ACCEPT, "application/json")
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> TrackerResult<T> {
        let request = self.authed(self.http.get(self.endpoint(path))).query(query);
        tracing::debug!(path, "GET");
        let response = check(request.send()?)?;
        decode(response)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> TrackerResult<T> {
        let request = self.authed(self.http.post(self.endpoint(path))).json(body);
        tracing::debug!(path, "POST");
        let response = check(request.send()?)?;
        decode(response)
    }

    fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> TrackerResult<()> {
        let request = self.authed(self.http.post(self.endpoint(path))).json(body);
        tracing::debug!(path, "POST");
        check(request.send()?)?;
        Ok(())
    }

    /// Collects every page of an agile list endpoint.
    fn get_paged<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> TrackerResult<Vec<T>> {
        let mut items = Vec::new();
        let mut start_at = 0usize;
        loop {
            let mut page_query = query.to_vec();
            page_query.push(("startAt", start_at.to_string()));
            page_query.push(("maxResults", PAGE_SIZE.to_string()));

            let page: Page<T> = self.get(path, &page_query)?;
            let count = page.values.len();
            items.extend(page.values);

            if page.is_last.unwrap_or(true) || count == 0 {
                return Ok(items);
            }
            start_at += count;
        }
    }
}

/// Maps a non-success status to a [`TrackerError`].
fn check(response: Response) -> TrackerResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(TrackerError::Unauthorized {
            status: status.as_u16(),
        });
    }
    let body = response.text().unwrap_or_default();
    Err(TrackerError::Rejected(Rejection::from_body(status.as_u16(), &body)))
}

fn decode<T: DeserializeOwned>(response: Response) -> TrackerResult<T> {
    let text = response.text()?;
    serde_json::from_str(&text).map_err(|e| TrackerError::Decode(e.to_string()))
}

/// Formats a sprint boundary the way the agile API expects it.
pub(crate) fn format_sprint_date(at: DateTime<Utc>) -> String {
    at.format(SPRINT_DATE_FORMAT).to_string()
}

/// Parses a sprint boundary reported by the agile API.
pub(crate) fn parse_sprint_date(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.3f%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
    #[serde(default)]
    pub is_last: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectResponse {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub simplified: Option<bool>,
    #[serde(default)]
    pub is_simplified: Option<bool>,
}

impl From<ProjectResponse> for ProjectInfo {
    fn from(p: ProjectResponse) -> Self {
        ProjectInfo {
            id: p.id,
            key: p.key,
            simplified: p.simplified.unwrap_or(false) || p.is_simplified.unwrap_or(false),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SprintResponse {
    pub id: u64,
    pub name: String,
    pub state: SprintState,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl From<SprintResponse> for Sprint {
    fn from(s: SprintResponse) -> Self {
        Sprint {
            id: s.id,
            name: s.name,
            state: s.state,
            start: s.start_date.as_deref().and_then(parse_sprint_date),
            end: s.end_date.as_deref().and_then(parse_sprint_date),
        }
    }
}

#[derive(Deserialize)]
struct KeyResponse {
    key: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyselfResponse {
    account_id: String,
}

/// Body of a sprint create call.
pub(crate) fn sprint_body(draft: &SprintDraft) -> Value {
    let mut body = json!({
        "name": draft.name,
        "originBoardId": draft.board_id,
        "startDate": format_sprint_date(draft.start),
        "endDate": format_sprint_date(draft.end),
    });
    if let Some(goal) = draft.goal.as_deref().filter(|g| !g.is_empty()) {
        body["goal"] = json!(goal);
    }
    body
}

impl Tracker for JiraClient {
    fn project(&self, key: &str) -> TrackerResult<ProjectInfo> {
        let project: ProjectResponse = self.get(&format!("rest/api/2/project/{}", key), &[])?;
        Ok(project.into())
    }

    fn scrum_boards(&self, project_key: &str) -> TrackerResult<Vec<Board>> {
        self.get_paged(
            "rest/agile/1.0/board",
            &[("projectKeyOrId", project_key.to_string()), ("type", "scrum".to_string())],
        )
    }

    fn create_scrum_board(&self, name: &str, project_key: &str) -> TrackerResult<Board> {
        let project = self.project(project_key)?;
        self.post(
            "rest/greenhopper/1.0/rapidview/create/presets",
            &json!({
                "name": name,
                "projectIds": [project.id],
                "preset": "scrum",
            }),
        )
    }

    fn create_sprint(&self, draft: &SprintDraft) -> TrackerResult<Sprint> {
        let sprint: SprintResponse = self.post("rest/agile/1.0/sprint", &sprint_body(draft))?;
        Ok(sprint.into())
    }

    fn sprints(&self, board_id: u64, states: &[SprintState]) -> TrackerResult<Vec<Sprint>> {
        let state = states.iter().map(SprintState::as_str).collect::<Vec<_>>().join(",");
        let sprints: Vec<SprintResponse> =
            self.get_paged(&format!("rest/agile/1.0/board/{}/sprint", board_id), &[("state", state)])?;
        Ok(sprints.into_iter().map(Sprint::from).collect())
    }

    fn create_issue(&self, fields: &Map<String, Value>) -> TrackerResult<String> {
        let created: KeyResponse = self.post("rest/api/2/issue", &json!({ "fields": fields }))?;
        Ok(created.key)
    }

    fn add_issues_to_sprint(&self, sprint_id: u64, issue_keys: &[String]) -> TrackerResult<()> {
        self.post_no_content(
            &format!("rest/agile/1.0/sprint/{}/issue", sprint_id),
            &json!({ "issues": issue_keys }),
        )
    }

    fn myself(&self) -> TrackerResult<String> {
        let me: MyselfResponse = self.get("rest/api/2/myself", &[])?;
        Ok(me.account_id)
    }

    fn create_project(&self, project: &NewProject) -> TrackerResult<String> {
        let created: KeyResponse = self.post(
            "rest/api/2/project",
            &json!({
                "key": project.key,
                "name": project.name,
                "projectTypeKey": "software",
                "projectTemplateKey": SCRUM_PROJECT_TEMPLATE,
                "leadAccountId": project.lead_account_id,
            }),
        )?;
        Ok(created.key)
    }

    fn fields(&self) -> TrackerResult<Vec<FieldInfo>> {
        self.get("rest/api/2/field", &[])
    }
}
