use std::process::ExitCode;
use tempoggl::commands::{report, Cli};
use tempoggl::libs::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Failures before the config is read happen with logging still down.
            logging::init(false);
            ExitCode::from(report(&err))
        }
    }
}
