//! Tempo Timesheets client.
//!
//! Jira projects come from the core Jira REST API, worklogs from the Tempo
//! Timesheets plugin mounted on the same Jira instance. Both responses are
//! camelCase with `self` links and go through the normalizer.
//!
//! See <http://developer.tempo.io/doc/timesheets/api/rest/latest>

use super::{decode, success_body, transport, ApiError, WorklogSource};
use crate::libs::normalize::parse_records;
use crate::libs::worklog::{JiraProject, Worklog};
use chrono::NaiveDate;
use reqwest::{Client, Url};

const PROJECTS_URL: &str = "rest/api/2/project";
const WORKLOGS_URL: &str = "rest/tempo-timesheets/3/worklogs";

pub struct Tempo {
    client: Client,
    jira_url: String,
    username: String,
    password: String,
}

impl Tempo {
    pub fn new(jira_url: &Url, username: &str, password: &str) -> Self {
        Self {
            client: Client::new(),
            jira_url: jira_url.as_str().trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.jira_url, path)
    }
}

impl WorklogSource for Tempo {
    async fn projects(&self) -> Result<Vec<JiraProject>, ApiError> {
        let url = self.url(PROJECTS_URL);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(transport(&url))?;
        let body = success_body(&url, response).await?;

        parse_projects(&url, &body)
    }

    async fn worklogs(&self, from: &NaiveDate) -> Result<Vec<Worklog>, ApiError> {
        let url = self.url(WORKLOGS_URL);
        let date_from = from.format("%Y-%m-%d").to_string();
        tracing::debug!("GET {}?dateFrom={}", url, date_from);

        let response = self
            .client
            .get(&url)
            .query(&[("dateFrom", date_from.as_str())])
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(transport(&url))?;
        let body = success_body(&url, response).await?;

        parse_worklogs(&url, &body)
    }
}

/// Parses the project listing.
///
/// Jira returns `200 []` instead of `401` for a wrong password, so an empty
/// listing is treated as a credentials failure.
pub fn parse_projects(url: &str, body: &str) -> Result<Vec<JiraProject>, ApiError> {
    let json = decode(url, body)?;
    if json.as_array().is_some_and(|projects| projects.is_empty()) {
        return Err(ApiError::JiraCredentials);
    }

    parse_records(&json).map_err(|source| ApiError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Parses the worklog listing. An empty listing is a valid answer.
pub fn parse_worklogs(url: &str, body: &str) -> Result<Vec<Worklog>, ApiError> {
    parse_records(&decode(url, body)?).map_err(|source| ApiError::Parse {
        url: url.to_string(),
        source,
    })
}
