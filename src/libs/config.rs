//! Configuration management for tempoggl.
//!
//! Settings come from two places: a JSON file in the per-user config
//! directory and command-line flags. Flags win over the file value for every
//! scalar, and `--toggl-mapping` pairs are overlaid on the file's mapping.
//!
//! ## File Location
//!
//! - **Linux**: `$XDG_CONFIG_HOME/tempoggl/config.json` (`~/.config/tempoggl/config.json`)
//! - **macOS**: `~/Library/Application Support/tempoggl/config.json`
//! - **Windows**: `%APPDATA%\tempoggl\config.json`
//!
//! A skeleton file is written on first run so users can see every key:
//!
//! ```json
//! {
//!   "general": {
//!     "username": null,
//!     "jira_url": null,
//!     "yes": null,
//!     "from_date": null,
//!     "verbose": null,
//!     "toggl_token": null,
//!     "toggl_url": null
//!   },
//!   "toggl_mapping": {}
//! }
//! ```
//!
//! Mapping entries take the form `"PROJ": 123456`.
//!
//! ## Validation
//!
//! [`AppConfig::merge`] checks every required field before any network call
//! and reports all failing fields at once. The Jira URL must use `https`;
//! `http` is refused as unsafe since the password is sent with basic auth.

use super::data_storage::DataStorage;
use super::messages::Message;
use super::reconcile::ProjectKeyMapping;
use crate::api::toggl::DEFAULT_API_URL;
use chrono::NaiveDate;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// One invalid or missing setting.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value for config parameter: {field}: {message} (in {})", path.display())]
    Parse { path: PathBuf, field: String, message: String },

    #[error("{}", join_field_errors(.0))]
    Invalid(Vec<FieldError>),

    #[error("{}", Message::ConfigUnsafeJiraProtocol)]
    UnsafeJiraProtocol,

    #[error("{}", Message::ConfigUnexpectedScheme(.0.clone()))]
    UnexpectedScheme(String),
}

/// `[general]` section of the config file. Every key is optional here;
/// requiredness is checked after merging with the command line.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    pub username: Option<String>,
    pub jira_url: Option<String>,
    pub yes: Option<bool>,
    pub from_date: Option<NaiveDate>,
    pub verbose: Option<bool>,
    pub toggl_token: Option<String>,
    pub toggl_url: Option<String>,
}

/// Contents of `config.json`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub general: GeneralConfig,
    /// Jira project key to Toggl project id, e.g. `"PROJ": 123456`.
    pub toggl_mapping: ProjectKeyMapping,
}

/// Where the file configuration came from, reported once logging is up.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    Created(PathBuf),
    Read(PathBuf),
}

impl FileConfig {
    /// Reads the config file, writing a skeleton first if none exists.
    pub fn create_or_read(storage: &DataStorage) -> Result<(Self, ConfigOrigin), ConfigError> {
        let path = storage.get_path(CONFIG_FILE_NAME).map_err(|source| ConfigError::Io {
            path: PathBuf::from(CONFIG_FILE_NAME),
            source,
        })?;

        if path.exists() {
            Ok((Self::read_from(&path)?, ConfigOrigin::Read(path)))
        } else {
            let config = FileConfig::default();
            config.save_to(&path)?;
            Ok((config, ConfigOrigin::Created(path)))
        }
    }

    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let deserializer = &mut serde_json::Deserializer::from_str(&content);
        serde_path_to_error::deserialize(deserializer).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            field: err.path().to_string(),
            message: err.inner().to_string(),
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_error)?;
        serde_json::to_writer_pretty(&file, &self).map_err(|e| io_error(e.into()))
    }
}

/// Values given on the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub username: Option<String>,
    pub jira_url: Option<String>,
    pub toggl_token: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub yes: bool,
    pub verbose: bool,
    pub toggl_mapping: Vec<(String, i64)>,
}

/// Command line and config file combined and validated.
#[derive(Clone, PartialEq)]
pub struct AppConfig {
    pub username: String,
    pub jira_url: Url,
    pub yes: bool,
    pub from_date: NaiveDate,
    pub verbose: bool,
    pub toggl_mapping: ProjectKeyMapping,
    pub toggl_token: String,
    pub toggl_url: Url,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("username", &self.username)
            .field("jira_url", &self.jira_url.as_str())
            .field("yes", &self.yes)
            .field("from_date", &self.from_date)
            .field("verbose", &self.verbose)
            .field("toggl_mapping", &self.toggl_mapping)
            .field("toggl_token", &"<redacted>")
            .field("toggl_url", &self.toggl_url.as_str())
            .finish()
    }
}

impl AppConfig {
    pub fn merge(overrides: ConfigOverrides, file: &FileConfig) -> Result<Self, ConfigError> {
        let general = &file.general;
        let mut errors = Vec::new();

        let username = required(&mut errors, "username", overrides.username.or_else(|| general.username.clone()));
        let toggl_token = required(
            &mut errors,
            "toggl_token",
            overrides.toggl_token.or_else(|| general.toggl_token.clone()),
        );
        let jira_url = required(&mut errors, "jira_url", overrides.jira_url.or_else(|| general.jira_url.clone()))
            .and_then(|url| parse_url(&mut errors, "jira_url", &url));
        let toggl_url = parse_url(
            &mut errors,
            "toggl_url",
            general.toggl_url.as_deref().unwrap_or(DEFAULT_API_URL),
        );
        let from_date = overrides.from_date.or(general.from_date);
        if from_date.is_none() {
            errors.push(FieldError {
                field: "from_date",
                message: "field required".to_string(),
            });
        }

        let mut toggl_mapping = file.toggl_mapping.clone();
        toggl_mapping.extend(overrides.toggl_mapping);

        match (username, jira_url, toggl_token, toggl_url, from_date) {
            (Some(username), Some(jira_url), Some(toggl_token), Some(toggl_url), Some(from_date)) if errors.is_empty() => {
                check_scheme(&jira_url)?;
                Ok(AppConfig {
                    username,
                    jira_url,
                    yes: overrides.yes || general.yes.unwrap_or(false),
                    from_date,
                    verbose: overrides.verbose || general.verbose.unwrap_or(false),
                    toggl_mapping,
                    toggl_token,
                    toggl_url,
                })
            }
            _ => Err(ConfigError::Invalid(errors)),
        }
    }
}

/// `https` only. Any scheme other than `http` is a configuration mistake
/// rather than a safety concern, and is reported as such.
pub fn check_scheme(url: &Url) -> Result<(), ConfigError> {
    match url.scheme() {
        "https" => Ok(()),
        "http" => Err(ConfigError::UnsafeJiraProtocol),
        other => Err(ConfigError::UnexpectedScheme(other.to_string())),
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| Message::ConfigInvalidValue(e.to_string()).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn required(errors: &mut Vec<FieldError>, field: &'static str, value: Option<String>) -> Option<String> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(value) => Some(value),
        None => {
            errors.push(FieldError {
                field,
                message: "field required".to_string(),
            });
            None
        }
    }
}

fn parse_url(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> Option<Url> {
    match Url::parse(value.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            errors.push(FieldError {
                field,
                message: format!("invalid url \"{}\": {}", value, e),
            });
            None
        }
    }
}
