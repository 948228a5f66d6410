//! The sync command: the only thing tempoggl does.
//!
//! Glue between the command line, the config file, the interactive prompts
//! and the orchestrator in [`crate::libs::sync`].

use crate::{
    api::{Tempo, Toggl},
    libs::{
        config::{AppConfig, ConfigOrigin, ConfigOverrides, FileConfig},
        data_storage::DataStorage,
        formatter::format_duration,
        logging,
        messages::Message,
        reconcile::MatchedEntry,
        sync,
        view::View,
    },
    msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Password};
use regex::Regex;
use std::io;
use std::sync::OnceLock;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Sync all entries from this date
    #[arg(value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub from_date: NaiveDate,

    /// Jira username
    #[arg(long)]
    pub username: Option<String>,

    /// Root url for jira e.g. https://jira.example.com
    #[arg(short, long)]
    pub jira_url: Option<String>,

    /// Get from here https://track.toggl.com/profile
    #[arg(short = 't', long, value_name = "TOGGL_TOKEN")]
    pub toggl_api_token: Option<String>,

    /// Map jira project key to toggl project id, e.g. "--toggl-mapping PROJ=456 ABCD=5432"
    #[arg(short = 'm', long, value_name = "KEY=ID", num_args = 1.., value_parser = parse_mapping_pair)]
    pub toggl_mapping: Vec<(String, i64)>,

    /// Answer yes when prompted
    #[arg(short, long)]
    pub yes: bool,

    /// Print more information
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<SyncArgs> for ConfigOverrides {
    fn from(args: SyncArgs) -> Self {
        ConfigOverrides {
            username: args.username,
            jira_url: args.jira_url,
            toggl_token: args.toggl_api_token,
            from_date: Some(args.from_date),
            yes: args.yes,
            verbose: args.verbose,
            toggl_mapping: args.toggl_mapping,
        }
    }
}

pub async fn cmd(sync_args: SyncArgs) -> Result<()> {
    let (file_config, origin) = FileConfig::create_or_read(&DataStorage::new())?;

    logging::init(sync_args.verbose || file_config.general.verbose.unwrap_or(false));
    match &origin {
        ConfigOrigin::Created(path) => tracing::info!("{}", Message::ConfigCreated(path.display().to_string())),
        ConfigOrigin::Read(path) => tracing::info!("{}", Message::ConfigRead(path.display().to_string())),
    }

    let config = AppConfig::merge(sync_args.into(), &file_config)?;
    tracing::info!("{}", Message::ConfigUsing(format!("{:?}", config)));

    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptJiraPassword(config.username.clone()).to_string())
        .interact()?;

    let tempo = Tempo::new(&config.jira_url, &config.username, &password);
    let toggl = Toggl::new(&config.toggl_url, &config.toggl_token);

    let pushed = sync::run(&tempo, &toggl, &config.from_date, &config.toggl_mapping, |entries| {
        confirm(entries, config.yes)
    })
    .await?;

    msg_success!(Message::SyncDone(pushed));
    Ok(())
}

/// Shows the pending entries and asks before writing. `yes` skips the
/// question but the table is still printed.
fn confirm(entries: &[MatchedEntry], yes: bool) -> io::Result<bool> {
    msg_print!(Message::PendingWorklogs(entries.len()));
    View::worklogs(entries);
    msg_print!(Message::TotalDuration(format_duration(View::total_seconds(entries))));

    if yes {
        return Ok(true);
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWriteChanges.to_string())
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

pub fn parse_date(arg: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(arg.trim(), "%Y-%m-%d").map_err(|_| format!("cannot parse \"{}\"", arg))
}

/// Parses one `KEY=ID` pair, e.g. `PROJ=3456`.
pub fn parse_mapping_pair(arg: &str) -> Result<(String, i64), String> {
    static PAIR: OnceLock<Regex> = OnceLock::new();
    let pair = PAIR.get_or_init(|| Regex::new(r"^([A-Z][A-Z0-9_]*)=(\d+)$").expect("valid mapping regex"));

    let syntax_error = || "toggl-mapping syntax is \"PROJ=3456\"".to_string();
    let captures = pair.captures(arg.trim()).ok_or_else(syntax_error)?;
    let toggl_id = captures[2].parse().map_err(|_| syntax_error())?;

    Ok((captures[1].to_string(), toggl_id))
}
