//! # Tempoggl - Tempo to Toggl worklog synchronization
//!
//! Reads worklogs recorded with the Tempo Timesheets plugin of a Jira
//! instance and creates the matching time entries in Toggl, after showing
//! them to the user and asking for confirmation.
//!
//! ## Features
//!
//! - **Normalization**: camelCase Jira/Tempo JSON is reformatted and validated into typed records
//! - **Reconciliation**: worklogs are joined to Toggl projects through a user-configured key mapping
//! - **Safe pushing**: entries are written one at a time, stopping at the first failure
//! - **Configuration**: JSON config file with command-line overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempoggl::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
