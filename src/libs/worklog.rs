//! Canonical records for both sides of the sync.
//!
//! These are the validation targets of the normalizer: wire JSON from Tempo
//! and Toggl is reformatted to snake_case and then deserialized into these
//! types. Unknown fields are ignored, missing or mistyped ones are errors.

use super::timestamp::SourceTimestamp;
use serde::{Deserialize, Deserializer, Serialize};

/// Jira project as listed by `rest/api/2/project`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraProject {
    #[serde(deserialize_with = "int_or_string")]
    pub id: i64,
    /// Short project key, e.g. `PROJ`.
    pub key: String,
    pub name: String,
}

/// The issue a worklog was booked on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorklogIssue {
    /// Issue key, e.g. `PROJ-1234`.
    pub key: String,
    #[serde(deserialize_with = "int_or_string")]
    pub id: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub project_id: i64,
}

/// A single Tempo worklog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Worklog {
    pub comment: String,
    pub date_started: SourceTimestamp,
    pub date_created: SourceTimestamp,
    /// Same as `date_created` if the log was never edited.
    pub date_updated: SourceTimestamp,
    pub time_spent_seconds: u64,
    pub issue: WorklogIssue,
}

/// Toggl project, scoped under one of the token's workspaces.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TogglProject {
    pub id: i64,
    pub name: String,
}

/// Jira serializes numeric ids as strings (`"id": "10000"`), Tempo as numbers.
fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Str(value) => value
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer id, got \"{}\"", value))),
    }
}
