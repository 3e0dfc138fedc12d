//! Command-line interface.

use clap::Parser;
use tracing::error;

/// Create a Jira issue from GitHub Actions inputs.
#[derive(Debug, Parser)]
#[command(name = "jira-issue-action")]
#[command(about = "Create a Jira issue from GitHub Actions workflow inputs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Validate inputs and exit without contacting Jira
    #[arg(long)]
    pub dry_run: bool,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}

/// Report a run failure and exit with code 1.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({
            "error": err.to_string(),
            "causes": err.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
        });
        println!("{payload}");
    }

    for cause in err.chain() {
        error!("{cause}");
    }

    std::process::exit(1);
}
