//! Action entry point.

use clap::Parser;

use jira_issue_action::cli::{handle_error, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level =
        std::env::var("INPUT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    jira_issue_action::infrastructure::logging::init(&log_level);

    if let Err(err) = jira_issue_action::application::run_action(cli.dry_run, cli.json).await {
        handle_error(&err, cli.json);
    }
}
