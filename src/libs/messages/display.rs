//! Display implementation for tempoggl application messages.
//!
//! All user-facing text is defined here so the wording stays consistent
//! between the terminal output and the log lines emitted in debug mode.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigCreated(path) => format!("creating new config to path {}", path),
            Message::ConfigRead(path) => format!("reading config at path {}", path),
            Message::ConfigUsing(config) => format!("using combined configuration: {}", config),
            Message::ConfigInvalidValue(error) => format!("invalid config/parameter value: {}", error),
            Message::ConfigMissingParameters => "missing or invalid parameters, exiting...".to_string(),
            Message::ConfigUnsafeJiraProtocol => "jira with http protocol not supported, please use https".to_string(),
            Message::ConfigUnexpectedScheme(scheme) => format!("unexpected jira url scheme: {}", scheme),

            // === AUTHENTICATION MESSAGES ===
            Message::JiraNoProjects => "no jira projects found, possibly wrong password".to_string(),
            Message::TogglInvalidToken => "invalid toggl token".to_string(),
            Message::AuthenticationFailed(error) => format!("authentication failed: {}", error),
            Message::PromptJiraPassword(username) => format!("jira password for {}", username),

            // === SYNC MESSAGES ===
            Message::TogglMapping(mapping) => format!("using toggl mapping of {}", mapping),
            Message::ProjectIdsToToggl(ids) => format!("jira project ids to toggl ids: {}", ids),
            Message::NoWorklogsAfter(date) => format!("no tempo worklogs found after {}", date),
            Message::PendingWorklogs(count) => format!("{} worklog(s) will be written to Toggl:", count),
            Message::TotalDuration(duration) => format!("total: {}", duration),
            Message::PromptWriteChanges => "write changes to Toggl?".to_string(),
            Message::NegativePrompt => "negative prompt, exiting...".to_string(),
            Message::PushingWorklog { index, total } => format!("pushing worklog {}/{}", index, total),
            Message::PushInspectManually => "please inspect all listed worklog entries manually".to_string(),
            Message::SyncDone(count) => format!("done, {} worklog(s) written to Toggl", count),
        };
        write!(f, "{}", text)
    }
}
