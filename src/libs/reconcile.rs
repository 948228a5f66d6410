//! Joining Tempo worklogs to Toggl projects.
//!
//! The two systems share no keys. A worklog points at a Jira issue, the
//! issue at a Jira project by numeric id, the project has a short key
//! (`PROJ`), and the user's configuration maps that key to a Toggl project
//! id. [`reconcile`] walks that chain for every worklog and either resolves
//! all of them or reports the first link that is missing.
//!
//! A single unresolvable worklog fails the whole batch: a partial list
//! cannot be reviewed coherently before pushing.

use super::worklog::{JiraProject, TogglProject, Worklog};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Jira project key → Toggl project id, as configured by the user.
pub type ProjectKeyMapping = BTreeMap<String, i64>;

/// A worklog resolved all the way to its Toggl project.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedEntry {
    pub worklog: Worklog,
    pub jira_project: JiraProject,
    pub toggl_project: TogglProject,
}

#[derive(Debug, Error, PartialEq)]
pub enum ReconcileError {
    /// A worklog references a project id not present in the Jira project list.
    #[error("unexpected project id \"{0}\"")]
    UnknownProjectId(i64),

    /// The worklog's project key has no entry in the mapping.
    #[error("unknown jira key \"{0}\", please add the key to configuration")]
    UnknownJiraKey(String),

    /// The key is mapped, but to an id that none of the Toggl workspaces has.
    #[error("invalid toggl id {toggl_id} for jira key {key}")]
    InvalidTogglId { key: String, toggl_id: i64 },
}

/// Resolves every worklog, preserving input order.
///
/// Unused mapping entries are ignored, including ones pointing at Toggl ids
/// that do not exist: a bad id only matters once a worklog needs its key.
pub fn reconcile(
    worklogs: &[Worklog],
    jira_projects: &[JiraProject],
    mapping: &ProjectKeyMapping,
    toggl_projects: &[TogglProject],
) -> Result<Vec<MatchedEntry>, ReconcileError> {
    let jira_by_id: HashMap<i64, &JiraProject> = jira_projects.iter().map(|p| (p.id, p)).collect();
    let toggl_by_id: HashMap<i64, &TogglProject> = toggl_projects.iter().map(|p| (p.id, p)).collect();

    let resolved: HashMap<&str, Option<&TogglProject>> = mapping
        .iter()
        .map(|(key, toggl_id)| (key.as_str(), toggl_by_id.get(toggl_id).copied()))
        .collect();

    worklogs
        .iter()
        .map(|worklog| {
            let project_id = worklog.issue.project_id;
            let jira_project = jira_by_id.get(&project_id).ok_or(ReconcileError::UnknownProjectId(project_id))?;

            let toggl_project = match resolved.get(jira_project.key.as_str()) {
                None => return Err(ReconcileError::UnknownJiraKey(jira_project.key.clone())),
                Some(None) => {
                    return Err(ReconcileError::InvalidTogglId {
                        key: jira_project.key.clone(),
                        toggl_id: mapping[&jira_project.key],
                    })
                }
                Some(Some(project)) => project,
            };

            Ok(MatchedEntry {
                worklog: worklog.clone(),
                jira_project: (*jira_project).clone(),
                toggl_project: (*toggl_project).clone(),
            })
        })
        .collect()
}

/// For every Jira project id, the Toggl id its key is mapped to, or `None`
/// when the key is not configured.
pub fn toggl_ids_by_project(jira_projects: &[JiraProject], mapping: &ProjectKeyMapping) -> BTreeMap<i64, Option<i64>> {
    jira_projects.iter().map(|p| (p.id, mapping.get(&p.key).copied())).collect()
}
