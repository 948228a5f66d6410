#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempoggl::libs::normalize::parse_records;
    use tempoggl::libs::reconcile::{reconcile, toggl_ids_by_project, ProjectKeyMapping, ReconcileError};
    use tempoggl::libs::timestamp::SourceTimestamp;
    use tempoggl::libs::worklog::{JiraProject, TogglProject, Worklog, WorklogIssue};

    const WORKLOGS: &str = include_str!("fixtures/tempo_worklogs.json");
    const JIRA_PROJECTS: &str = include_str!("fixtures/tempo_projects.json");
    const TOGGL_PROJECTS: &str = include_str!("fixtures/toggl_projects.json");

    fn fixture<T: serde::de::DeserializeOwned>(raw: &str) -> Vec<T> {
        parse_records(&serde_json::from_str(raw).unwrap()).unwrap()
    }

    fn mapping(pairs: &[(&str, i64)]) -> ProjectKeyMapping {
        pairs.iter().map(|(key, id)| (key.to_string(), *id)).collect()
    }

    fn started() -> SourceTimestamp {
        SourceTimestamp::Naive(NaiveDate::from_ymd_opt(2019, 3, 4).unwrap().and_hms_opt(10, 0, 0).unwrap())
    }

    fn worklog(issue_key: &str, project_id: i64, comment: &str) -> Worklog {
        Worklog {
            comment: comment.to_string(),
            date_started: started(),
            date_created: started(),
            date_updated: started(),
            time_spent_seconds: 3600,
            issue: WorklogIssue {
                key: issue_key.to_string(),
                id: 1,
                project_id,
            },
        }
    }

    fn jira_project(id: i64, key: &str) -> JiraProject {
        JiraProject {
            id,
            key: key.to_string(),
            name: format!("{} project", key),
        }
    }

    fn toggl_project(id: i64, name: &str) -> TogglProject {
        TogglProject {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_reconcile_fixtures() {
        let worklogs: Vec<Worklog> = fixture(WORKLOGS);
        let jira: Vec<JiraProject> = fixture(JIRA_PROJECTS);
        let toggl: Vec<TogglProject> = fixture(TOGGL_PROJECTS);

        let entries = reconcile(&worklogs, &jira, &mapping(&[("PROJ", 1115), ("TUN", 1113)]), &toggl).unwrap();

        assert_eq!(entries.len(), 3);
        let keys: Vec<&str> = entries.iter().map(|e| e.worklog.issue.key.as_str()).collect();
        assert_eq!(keys, vec!["PROJ-12", "TUN-3", "PROJ-14"]);
        let pids: Vec<i64> = entries.iter().map(|e| e.toggl_project.id).collect();
        assert_eq!(pids, vec![1115, 1113, 1115]);
        assert_eq!(entries[1].jira_project.key, "TUN");
        assert_eq!(entries[1].worklog, worklogs[1]);
    }

    #[test]
    fn test_reconcile_single_worklog() {
        let entries = reconcile(
            &[worklog("PROJ-1", 1234, "fixed bug")],
            &[jira_project(1234, "PROJ")],
            &mapping(&[("PROJ", 777)]),
            &[toggl_project(777, "Client work")],
        )
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].jira_project.key, "PROJ");
        assert_eq!(entries[0].toggl_project.id, 777);
        assert_eq!(entries[0].toggl_project.name, "Client work");
    }

    #[test]
    fn test_reconcile_unknown_jira_key() {
        let worklogs: Vec<Worklog> = fixture(WORKLOGS);
        let jira: Vec<JiraProject> = fixture(JIRA_PROJECTS);
        let toggl: Vec<TogglProject> = fixture(TOGGL_PROJECTS);

        let err = reconcile(&worklogs, &jira, &mapping(&[("TUN", 1113)]), &toggl).unwrap_err();

        assert_eq!(err, ReconcileError::UnknownJiraKey("PROJ".to_string()));
        let message = err.to_string();
        assert!(message.contains("unknown jira key"));
        assert!(message.contains("PROJ"));
    }

    #[test]
    fn test_reconcile_invalid_toggl_id() {
        let worklogs: Vec<Worklog> = fixture(WORKLOGS);
        let jira: Vec<JiraProject> = fixture(JIRA_PROJECTS);
        let toggl: Vec<TogglProject> = fixture(TOGGL_PROJECTS);

        let err = reconcile(&worklogs, &jira, &mapping(&[("TUN", -100), ("PROJ", -101)]), &toggl).unwrap_err();

        assert_eq!(
            err,
            ReconcileError::InvalidTogglId {
                key: "PROJ".to_string(),
                toggl_id: -101
            }
        );
        let message = err.to_string();
        assert!(message.contains("invalid toggl id"));
        assert!(message.contains("PROJ"));
        assert!(message.contains("-101"));
    }

    #[test]
    fn test_reconcile_unknown_project_id() {
        let err = reconcile(
            &[worklog("GONE-1", 555, "deleted project")],
            &[jira_project(1234, "PROJ")],
            &mapping(&[("PROJ", 777)]),
            &[toggl_project(777, "Client work")],
        )
        .unwrap_err();

        assert_eq!(err, ReconcileError::UnknownProjectId(555));
        assert!(err.to_string().contains("555"));
    }

    #[test]
    fn test_reconcile_fails_whole_batch() {
        let err = reconcile(
            &[worklog("PROJ-1", 1234, "fine"), worklog("MISC-2", 900, "unmapped")],
            &[jira_project(1234, "PROJ"), jira_project(900, "MISC")],
            &mapping(&[("PROJ", 777)]),
            &[toggl_project(777, "Client work")],
        )
        .unwrap_err();

        assert_eq!(err, ReconcileError::UnknownJiraKey("MISC".to_string()));
    }

    #[test]
    fn test_reconcile_reports_first_failure() {
        let err = reconcile(
            &[worklog("GONE-1", 555, "first"), worklog("MISC-2", 900, "second")],
            &[jira_project(900, "MISC")],
            &mapping(&[]),
            &[],
        )
        .unwrap_err();

        assert_eq!(err, ReconcileError::UnknownProjectId(555));
    }

    #[test]
    fn test_reconcile_ignores_unused_mappings() {
        let entries = reconcile(
            &[worklog("PROJ-1", 1234, "fixed bug")],
            &[jira_project(1234, "PROJ"), jira_project(808, "TUN")],
            &mapping(&[("PROJ", 777), ("TUN", -5), ("NOPE", 777)]),
            &[toggl_project(777, "Client work")],
        )
        .unwrap();

        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_reconcile_empty_worklogs() {
        let entries = reconcile(&[], &[jira_project(1234, "PROJ")], &mapping(&[]), &[]).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_toggl_ids_by_project() {
        let jira = vec![jira_project(1234, "PROJ"), jira_project(808, "TUN")];
        let ids = toggl_ids_by_project(&jira, &mapping(&[("PROJ", 777)]));

        assert_eq!(ids.get(&1234), Some(&Some(777)));
        assert_eq!(ids.get(&808), Some(&None));
        assert_eq!(ids.len(), 2);
    }
}
