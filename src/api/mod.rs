//! API client modules for the two systems being synchronized.
//!
//! - **Tempo**: worklogs and Jira projects, read over the Jira REST API with
//!   basic auth (username + prompted password).
//! - **Toggl**: workspaces, projects and time entry creation, basic auth with
//!   the API token as username.
//!
//! The sync orchestrator only sees the [`WorklogSource`] and [`EntryTarget`]
//! traits, so it can be driven by in-memory fakes in tests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempoggl::api::{EntryTarget, Toggl};
//!
//! # async fn run(url: &reqwest::Url) -> Result<(), tempoggl::api::ApiError> {
//! let toggl = Toggl::new(url, "0123456789abcdef");
//! let projects = toggl.projects().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::entry::TogglEntry;
use crate::libs::messages::Message;
use crate::libs::normalize::ParseError;
use crate::libs::worklog::{JiraProject, TogglProject, Worklog};
use chrono::NaiveDate;
use reqwest::{Response, StatusCode};
use thiserror::Error;

pub mod tempo;
pub mod toggl;

pub use tempo::Tempo;
pub use toggl::Toggl;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}: {body}")]
    Status { url: String, status: StatusCode, body: String },

    /// Jira answers 200 with an empty project list for a wrong password.
    #[error("{}", Message::JiraNoProjects)]
    JiraCredentials,

    #[error("{}", Message::TogglInvalidToken)]
    TogglToken,

    #[error("{url} returned malformed JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot encode request for {url}: {source}")]
    Encode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Authentication failures are reported differently from other HTTP errors.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::JiraCredentials | ApiError::TogglToken)
    }
}

/// Read side: the system worklogs are copied from.
#[allow(async_fn_in_trait)]
pub trait WorklogSource {
    /// Every project visible to the credentials.
    async fn projects(&self) -> Result<Vec<JiraProject>, ApiError>;

    /// Worklogs started on or after `from`.
    async fn worklogs(&self, from: &NaiveDate) -> Result<Vec<Worklog>, ApiError>;
}

/// Write side: the system entries are pushed into.
#[allow(async_fn_in_trait)]
pub trait EntryTarget {
    /// Projects of every workspace the token can see.
    async fn projects(&self) -> Result<Vec<TogglProject>, ApiError>;

    /// Creates one time entry. A failure carries the remote response body.
    async fn push(&self, entry: &TogglEntry) -> Result<(), ApiError>;
}

/// Reads the body of a response, failing on any non-2xx status.
pub(crate) async fn success_body(url: &str, response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;
    ensure_success(url, status, body)
}

/// Turns a non-2xx status into [`ApiError::Status`], keeping the body.
pub fn ensure_success(url: &str, status: StatusCode, body: String) -> Result<String, ApiError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status,
            body,
        })
    }
}

pub(crate) fn decode(url: &str, body: &str) -> Result<serde_json::Value, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

pub(crate) fn transport(url: &str) -> impl FnOnce(reqwest::Error) -> ApiError + '_ {
    move |source| ApiError::Transport {
        url: url.to_string(),
        source,
    }
}
