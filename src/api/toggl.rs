//! Toggl API client.
//!
//! Authentication is HTTP basic auth with the API token as the username and
//! the literal string `api_token` as the password. A `403` always means the
//! token was rejected.
//!
//! See <https://github.com/toggl/toggl_api_docs/blob/master/chapters/projects.md>

use super::{decode, ensure_success, transport, ApiError, EntryTarget};
use crate::libs::entry::TogglEntry;
use crate::libs::normalize::parse_records;
use crate::libs::worklog::TogglProject;
use reqwest::{header::CONTENT_TYPE, Client, Response, StatusCode, Url};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.track.toggl.com/api/v8";
const TOKEN_PASSWORD: &str = "api_token";
const WORKSPACES_URL: &str = "workspaces";
const TIME_ENTRIES_URL: &str = "time_entries";

#[derive(Deserialize, Debug)]
struct Workspace {
    id: i64,
}

pub struct Toggl {
    client: Client,
    api_url: String,
    token: String,
}

impl Toggl {
    pub fn new(api_url: &Url, token: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.as_str().trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    async fn get(&self, url: &str) -> Result<String, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .basic_auth(&self.token, Some(TOKEN_PASSWORD))
            .send()
            .await
            .map_err(transport(url))?;
        read_body(url, response).await
    }
}

impl EntryTarget for Toggl {
    async fn projects(&self) -> Result<Vec<TogglProject>, ApiError> {
        let url = self.url(WORKSPACES_URL);
        let paths = workspace_project_paths(&url, &self.get(&url).await?)?;

        let mut projects = Vec::new();
        for path in paths {
            let url = self.url(&path);
            projects.extend(parse_list::<TogglProject>(&url, &self.get(&url).await?)?);
        }

        Ok(projects)
    }

    async fn push(&self, entry: &TogglEntry) -> Result<(), ApiError> {
        let url = self.url(TIME_ENTRIES_URL);
        let payload = serde_json::to_vec(entry).map_err(|source| ApiError::Encode {
            url: url.clone(),
            source,
        })?;
        tracing::debug!("POST {} {}", url, String::from_utf8_lossy(&payload));

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .basic_auth(&self.token, Some(TOKEN_PASSWORD))
            .body(payload)
            .send()
            .await
            .map_err(transport(&url))?;
        read_body(&url, response).await?;

        Ok(())
    }
}

async fn read_body(url: &str, response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(transport(url))?;
    check_response(url, status, body)
}

/// Status handling shared by every Toggl call.
pub fn check_response(url: &str, status: StatusCode, body: String) -> Result<String, ApiError> {
    if status == StatusCode::FORBIDDEN {
        return Err(ApiError::TogglToken);
    }
    ensure_success(url, status, body)
}

/// Project listing path of every workspace in a `GET workspaces` body, in
/// the order Toggl lists them.
pub fn workspace_project_paths(url: &str, body: &str) -> Result<Vec<String>, ApiError> {
    let workspaces: Vec<Workspace> = parse_list(url, body)?;
    Ok(workspaces
        .iter()
        .map(|workspace| format!("{}/{}/projects", WORKSPACES_URL, workspace.id))
        .collect())
}

/// Toggl answers `null` rather than `[]` for a workspace without projects.
pub fn parse_list<T: serde::de::DeserializeOwned>(url: &str, body: &str) -> Result<Vec<T>, ApiError> {
    let json = decode(url, body)?;
    if json.is_null() {
        return Ok(Vec::new());
    }

    parse_records(&json).map_err(|source| ApiError::Parse {
        url: url.to_string(),
        source,
    })
}
