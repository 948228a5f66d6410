#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use reqwest::StatusCode;
    use tempoggl::api::tempo::{parse_projects, parse_worklogs};
    use tempoggl::api::toggl::{check_response, parse_list, workspace_project_paths};
    use tempoggl::api::{ensure_success, ApiError};
    use tempoggl::commands::sync::{parse_date, parse_mapping_pair};
    use tempoggl::commands::Cli;
    use tempoggl::libs::worklog::TogglProject;

    const URL: &str = "https://jira.example.com/rest/api/2/project";
    const JIRA_PROJECTS: &str = include_str!("fixtures/tempo_projects.json");
    const TOGGL_PROJECTS: &str = include_str!("fixtures/toggl_projects.json");

    #[test]
    fn test_empty_project_list_means_bad_password() {
        let err = parse_projects(URL, "[]").unwrap_err();
        assert!(matches!(err, ApiError::JiraCredentials));
        assert!(err.is_auth());
        assert!(err.to_string().contains("possibly wrong password"));
    }

    #[test]
    fn test_parse_projects_fixture() {
        let projects = parse_projects(URL, JIRA_PROJECTS).unwrap();
        let keys: Vec<&str> = projects.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["PROJ", "TUN", "MISC"]);
    }

    #[test]
    fn test_empty_worklog_list_is_valid() {
        assert!(parse_worklogs(URL, "[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_worklogs(URL, "<html>login</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(!err.is_auth());
    }

    #[test]
    fn test_invalid_record_names_field() {
        let err = parse_projects(URL, r#"[{"id": "1", "key": "PROJ"}]"#).unwrap_err();
        match err {
            ApiError::Parse { source, .. } => {
                assert_eq!(source.path, "[0]");
                assert!(source.message.contains("name"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_ensure_success_keeps_body() {
        assert_eq!(ensure_success(URL, StatusCode::OK, "[]".to_string()).unwrap(), "[]");

        match ensure_success(URL, StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()) {
            Err(ApiError::Status { status, body, .. }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn test_toggl_forbidden_means_bad_token() {
        let err = check_response("https://toggl.test/workspaces", StatusCode::FORBIDDEN, String::new()).unwrap_err();
        assert!(matches!(err, ApiError::TogglToken));
        assert_eq!(err.to_string(), "invalid toggl token");
    }

    #[test]
    fn test_toggl_other_errors_keep_body() {
        let err = check_response(
            "https://toggl.test/time_entries",
            StatusCode::BAD_REQUEST,
            "User cannot access the selected project".to_string(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("User cannot access the selected project"));
    }

    #[test]
    fn test_toggl_null_project_list() {
        let projects: Vec<TogglProject> = parse_list("https://toggl.test/workspaces/1/projects", "null").unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_toggl_project_fixture() {
        let projects: Vec<TogglProject> = parse_list("https://toggl.test/workspaces/777/projects", TOGGL_PROJECTS).unwrap();
        let ids: Vec<i64> = projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1115, 1113]);
        assert_eq!(projects[1].name, "Tunnels");
    }

    #[test]
    fn test_workspace_project_paths() {
        let body = r#"[
            {"id": 77, "name": "Main", "premium": false, "admin": true, "at": "2019-01-01T10:00:00+00:00"},
            {"id": 78, "name": "Side", "premium": true, "admin": false, "at": "2019-01-02T10:00:00+00:00"}
        ]"#;

        let paths = workspace_project_paths("https://toggl.test/workspaces", body).unwrap();
        assert_eq!(paths, vec!["workspaces/77/projects", "workspaces/78/projects"]);
    }

    #[test]
    fn test_workspace_project_paths_without_workspaces() {
        assert!(workspace_project_paths("https://toggl.test/workspaces", "[]").unwrap().is_empty());
        assert!(workspace_project_paths("https://toggl.test/workspaces", "null").unwrap().is_empty());
    }

    #[test]
    fn test_workspace_project_paths_rejects_bad_listing() {
        let err = workspace_project_paths("https://toggl.test/workspaces", r#"[{"name": "no id"}]"#).unwrap_err();
        match err {
            ApiError::Parse { url, source } => {
                assert_eq!(url, "https://toggl.test/workspaces");
                assert_eq!(source.path, "[0]");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_mapping_pair() {
        assert_eq!(parse_mapping_pair("PROJ=3456").unwrap(), ("PROJ".to_string(), 3456));
        assert_eq!(parse_mapping_pair("AB2_X=5").unwrap(), ("AB2_X".to_string(), 5));
    }

    #[test]
    fn test_parse_mapping_pair_rejects_bad_syntax() {
        for arg in ["proj=1", "PROJ=abc", "PROJ=", "=123", "PROJ:123", "PROJ=-5", "2PROJ=1"] {
            let err = parse_mapping_pair(arg).unwrap_err();
            assert!(err.contains("PROJ=3456"), "arg {}", arg);
        }
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2019-03-01").unwrap();
        assert_eq!(date.to_string(), "2019-03-01");
        assert_eq!(parse_date("01.03.2019").unwrap_err(), "cannot parse \"01.03.2019\"");
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_arguments() {
        let cli = Cli::try_parse_from([
            "tempoggl",
            "2019-03-01",
            "--username",
            "user.name",
            "-j",
            "https://jira.example.com",
            "-m",
            "PROJ=1115",
            "TUN=1113",
            "-y",
        ])
        .unwrap();

        assert_eq!(cli.sync.from_date.to_string(), "2019-03-01");
        assert_eq!(cli.sync.username.as_deref(), Some("user.name"));
        assert_eq!(
            cli.sync.toggl_mapping,
            vec![("PROJ".to_string(), 1115), ("TUN".to_string(), 1113)]
        );
        assert!(cli.sync.yes);
        assert!(!cli.sync.verbose);
    }

    #[test]
    fn test_cli_requires_date() {
        assert!(Cli::try_parse_from(["tempoggl", "--yes"]).is_err());
        assert!(Cli::try_parse_from(["tempoggl", "yesterday"]).is_err());
    }
}
