//! Sync orchestration: fetch → reconcile → confirm → push.
//!
//! Everything runs strictly in sequence. Entries are pushed one at a time in
//! reconciliation order, so a failure mid-batch leaves a known prefix
//! written to Toggl and the rest untouched. Nothing is retried: a failed
//! write is reported and the run stops.

use super::entry::TogglEntry;
use super::messages::Message;
use super::reconcile::{reconcile, toggl_ids_by_project, MatchedEntry, ProjectKeyMapping, ReconcileError};
use crate::api::{ApiError, EntryTarget, WorklogSource};
use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// Exit code for a run that found nothing to push.
pub const EXIT_NOTHING_TO_SYNC: u8 = 3;
/// Exit code for every other unsuccessful run.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error("{}", Message::NoWorklogsAfter(.0.to_string()))]
    NothingToSync(NaiveDate),

    #[error("{}", Message::NegativePrompt)]
    Declined,

    #[error("confirmation prompt failed: {0}")]
    Prompt(#[from] io::Error),

    /// `pushed` entries were written before `reason` stopped the run.
    #[error("error writing changes to toggl after {pushed} of {total} worklog(s) were written: {reason}")]
    Push {
        pushed: usize,
        total: usize,
        #[source]
        reason: ApiError,
    },
}

impl SyncError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SyncError::NothingToSync(_) => EXIT_NOTHING_TO_SYNC,
            _ => EXIT_FAILURE,
        }
    }
}

/// Fetches both sides and joins them.
///
/// An empty worklog list is not a reconciliation failure but still ends the
/// run, as [`SyncError::NothingToSync`].
pub async fn plan<S, T>(
    source: &S,
    target: &T,
    from: &NaiveDate,
    mapping: &ProjectKeyMapping,
) -> Result<Vec<MatchedEntry>, SyncError>
where
    S: WorklogSource,
    T: EntryTarget,
{
    let jira_projects = source.projects().await?;
    let worklogs = source.worklogs(from).await?;
    let toggl_projects = target.projects().await?;
    tracing::info!(
        "fetched {} jira project(s), {} worklog(s), {} toggl project(s)",
        jira_projects.len(),
        worklogs.len(),
        toggl_projects.len()
    );
    tracing::info!("{}", Message::TogglMapping(format!("{:?}", mapping)));
    tracing::info!(
        "{}",
        Message::ProjectIdsToToggl(format!("{:?}", toggl_ids_by_project(&jira_projects, mapping)))
    );

    let entries = reconcile(&worklogs, &jira_projects, mapping, &toggl_projects)?;
    if entries.is_empty() {
        return Err(SyncError::NothingToSync(*from));
    }

    Ok(entries)
}

/// Pushes entries in order, stopping at the first failure.
/// Returns the number of entries written.
pub async fn push<T: EntryTarget>(target: &T, entries: &[MatchedEntry]) -> Result<usize, SyncError> {
    let total = entries.len();

    for (index, matched) in entries.iter().enumerate() {
        tracing::info!("{}", Message::PushingWorklog { index: index + 1, total });
        target
            .push(&TogglEntry::from(matched))
            .await
            .map_err(|reason| SyncError::Push {
                pushed: index,
                total,
                reason,
            })?;
    }

    Ok(total)
}

/// Full run. `confirm` sees the reconciled entries and decides whether to
/// push them; it is where the entry table is shown to the user.
pub async fn run<S, T, F>(
    source: &S,
    target: &T,
    from: &NaiveDate,
    mapping: &ProjectKeyMapping,
    confirm: F,
) -> Result<usize, SyncError>
where
    S: WorklogSource,
    T: EntryTarget,
    F: FnOnce(&[MatchedEntry]) -> io::Result<bool>,
{
    let entries = plan(source, target, from, mapping).await?;

    if !confirm(&entries)? {
        return Err(SyncError::Declined);
    }

    push(target, &entries).await
}
