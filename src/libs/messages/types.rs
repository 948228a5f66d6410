/// Every user-facing message the application prints.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigCreated(String), // path
    ConfigRead(String),    // path
    ConfigUsing(String),   // debug rendering of the merged config
    ConfigInvalidValue(String),
    ConfigMissingParameters,
    ConfigUnsafeJiraProtocol,
    ConfigUnexpectedScheme(String),

    // === AUTHENTICATION MESSAGES ===
    JiraNoProjects,
    TogglInvalidToken,
    AuthenticationFailed(String), // error
    PromptJiraPassword(String), // username

    // === SYNC MESSAGES ===
    TogglMapping(String),
    ProjectIdsToToggl(String),
    NoWorklogsAfter(String), // date
    PendingWorklogs(usize),
    TotalDuration(String),
    PromptWriteChanges,
    NegativePrompt,
    PushingWorklog { index: usize, total: usize },
    PushInspectManually,
    SyncDone(usize),
}
