pub mod sync;

use crate::libs::config::ConfigError;
use crate::libs::messages::Message;
use crate::libs::sync::{SyncError, EXIT_FAILURE};
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;
use clap::Parser;

const DESCRIPTION: &str = "Sync time tracking entries from Jira Tempo app into Toggl. Prompt before pushing any changes.";

#[derive(Debug, Parser)]
#[command(name = "tempoggl", author, version, about = DESCRIPTION, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub sync: sync::SyncArgs,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        sync::cmd(cli.sync).await
    }
}

/// One line of a failure report, tagged with how it is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Warning(String),
    Info(String),
    Error(String),
}

/// Chooses the lines a failed run reports and its process exit code.
pub fn failure_report(err: &anyhow::Error) -> (Vec<ReportLine>, u8) {
    if let Some(sync_error) = err.downcast_ref::<SyncError>() {
        let lines = match sync_error {
            SyncError::NothingToSync(_) => vec![ReportLine::Warning(sync_error.to_string())],
            SyncError::Declined => vec![ReportLine::Info(sync_error.to_string())],
            SyncError::Api(api_error) if api_error.is_auth() => {
                vec![ReportLine::Error(Message::AuthenticationFailed(api_error.to_string()).to_string())]
            }
            SyncError::Push { .. } => vec![
                ReportLine::Error(sync_error.to_string()),
                ReportLine::Error(Message::PushInspectManually.to_string()),
            ],
            _ => vec![ReportLine::Error(sync_error.to_string())],
        };
        return (lines, sync_error.exit_code());
    }

    if let Some(config_error) = err.downcast_ref::<ConfigError>() {
        let mut lines = vec![ReportLine::Error(config_error.to_string())];
        if matches!(config_error, ConfigError::Invalid(_)) {
            lines.push(ReportLine::Error(Message::ConfigMissingParameters.to_string()));
        }
        return (lines, EXIT_FAILURE);
    }

    (vec![ReportLine::Error(format!("{:#}", err))], EXIT_FAILURE)
}

/// Prints a failed run's report and returns the process exit code.
pub fn report(err: &anyhow::Error) -> u8 {
    let (lines, exit_code) = failure_report(err);

    for line in lines {
        match line {
            ReportLine::Warning(text) => msg_warning!(text),
            ReportLine::Info(text) => msg_info!(text),
            ReportLine::Error(text) => msg_error!(text),
        }
    }

    exit_code
}
