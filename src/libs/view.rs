use super::formatter::{format_duration, format_started};
use super::reconcile::MatchedEntry;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the table of entries about to be pushed. The description column
    /// shows the worklog comment as written in Tempo.
    pub fn worklogs_table(entries: &[MatchedEntry]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["STARTED", "DURATION", "JIRA ISSUE", "TOGGL PROJECT", "DESCRIPTION"]);
        for entry in entries {
            let worklog = &entry.worklog;
            table.add_row(row![
                format_started(&worklog.date_started),
                format_duration(worklog.time_spent_seconds),
                worklog.issue.key,
                entry.toggl_project.name,
                worklog.comment
            ]);
        }

        table
    }

    pub fn worklogs(entries: &[MatchedEntry]) {
        Self::worklogs_table(entries).printstd();
    }

    pub fn total_seconds(entries: &[MatchedEntry]) -> u64 {
        entries.iter().map(|e| e.worklog.time_spent_seconds).sum()
    }
}
