//! Toggl time entry requests built from matched worklogs.
//!
//! See <https://github.com/toggl/toggl_api_docs/blob/master/chapters/time_entries.md>

use super::reconcile::MatchedEntry;
use super::timestamp::SourceTimestamp;
use serde::Serialize;

/// Value of the `created_with` field Toggl requires on every entry.
pub const CREATED_WITH: &str = "tempoggl";

/// Body of `POST /time_entries`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TogglEntry {
    pub time_entry: TogglEntryRequest,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TogglEntryRequest {
    pub description: String,
    /// Passed through from Tempo; serialized with an explicit offset.
    pub start: SourceTimestamp,
    /// Seconds.
    pub duration: u64,
    /// Toggl project id.
    pub pid: i64,
    pub created_with: String,
    pub billable: bool,
}

/// Makes sure the Jira issue key always appears in the Toggl description.
pub fn generate_description(issue_key: &str, comment: &str) -> String {
    if comment.contains(issue_key) {
        comment.to_string()
    } else {
        format!("{}: {}", issue_key, comment)
    }
}

impl From<&MatchedEntry> for TogglEntry {
    fn from(matched: &MatchedEntry) -> Self {
        let worklog = &matched.worklog;

        TogglEntry {
            time_entry: TogglEntryRequest {
                description: generate_description(&worklog.issue.key, &worklog.comment),
                start: worklog.date_started,
                duration: worklog.time_spent_seconds,
                pid: matched.toggl_project.id,
                created_with: CREATED_WITH.to_string(),
                billable: true,
            },
        }
    }
}
