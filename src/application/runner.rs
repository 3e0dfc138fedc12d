//! Action orchestration: validate -> connect -> create -> attach -> report.
//!
//! The whole run is a single linear sequence; any validation or tracker
//! failure aborts it, except per-file attachment failures which are logged
//! and skipped.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::application::validation::InputValidator;
use crate::domain::models::{CreatedIssue, IssueFields, ValidatedConfig};
use crate::domain::ports::IssueTracker;
use crate::infrastructure::config::InputLoader;
use crate::infrastructure::github;
use crate::infrastructure::jira::{JiraClient, JiraClientConfig};
use crate::infrastructure::logging::mask_secret;

/// What a completed run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// The created issue
    pub issue: CreatedIssue,
    /// Number of files attached successfully
    pub attachments_added: usize,
    /// Files that could not be attached (path plus reason)
    pub attachments_failed: Vec<String>,
}

/// Full action entry point: load inputs, validate, create the issue, and
/// report through GitHub outputs and the step summary.
pub async fn run_action(dry_run: bool, json: bool) -> Result<()> {
    info!("validating input parameters");
    let raw = InputLoader::load()?;

    let validator = InputValidator::new();
    let config = validator
        .validate(&raw)
        .context("Input validation failed. Please check your input parameters and try again")?;

    info!(
        project_key = %config.project_key,
        issue_type = %config.issue_type,
        api_token = %mask_secret(&config.api_token),
        "configuration validated"
    );

    if dry_run {
        if json {
            println!(
                "{}",
                serde_json::json!({ "dry_run": true, "valid": true })
            );
        } else {
            println!("Inputs validated successfully (dry run, no issue created).");
        }
        return Ok(());
    }

    let client = JiraClient::new(JiraClientConfig::for_server(
        config.server_url.clone(),
        config.username.clone(),
        config.api_token.clone(),
    ))
    .context("Failed to build Jira client")?;

    let outcome = create_issue_flow(&config, &client).await?;

    github::set_output("issue_key", &outcome.issue.key);
    github::set_output("issue_url", &outcome.issue.url);
    github::prepend_issue_link(&outcome.issue.key, &outcome.issue.url);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("Jira issue created successfully!");
        println!("  Issue key: {}", outcome.issue.key);
        println!("  Issue URL: {}", outcome.issue.url);
        if outcome.attachments_added > 0 {
            println!("  Attachments: {} file(s)", outcome.attachments_added);
        }
        if !outcome.attachments_failed.is_empty() {
            println!(
                "  Attachments skipped: {}",
                outcome.attachments_failed.join(", ")
            );
        }
    }

    Ok(())
}

/// The tracker-facing part of the run, driven through the [`IssueTracker`]
/// port so tests can substitute a mock.
pub async fn create_issue_flow(
    config: &ValidatedConfig,
    tracker: &dyn IssueTracker,
) -> Result<RunOutcome> {
    // Connection probe before any mutation
    match tracker.server_info().await {
        Ok(info) => {
            info!(
                title = info.title.as_deref().unwrap_or("Unknown"),
                "connected to Jira server"
            );
        }
        Err(err) => {
            error!("{}", err.connection_guidance());
            return Err(anyhow!(err).context("Failed to connect to Jira"));
        }
    }

    let assignee_confirmed = match &config.assignee {
        Some(name) => confirm_assignee(tracker, name).await,
        None => false,
    };

    if let Some(parent_key) = &config.parent_issue_key {
        confirm_parent_issue(tracker, parent_key).await?;
    }

    info!(
        issue_type = %config.issue_type,
        project_key = %config.project_key,
        "creating Jira issue"
    );
    let fields = IssueFields::from_config(config, assignee_confirmed);
    let issue = match tracker.create_issue(&fields).await {
        Ok(issue) => issue,
        Err(err) => {
            error!("{}", err.operation_guidance());
            return Err(anyhow!(err).context("Failed to create Jira issue"));
        }
    };
    info!(issue_key = %issue.key, "issue created");

    let (attachments_added, attachments_failed) =
        add_attachments(tracker, &issue.key, config).await;

    Ok(RunOutcome {
        issue,
        attachments_added,
        attachments_failed,
    })
}

/// Check the assignee exists; an unknown or unverifiable assignee leaves the
/// issue unassigned rather than failing the run.
async fn confirm_assignee(tracker: &dyn IssueTracker, name: &str) -> bool {
    match tracker.lookup_user(name).await {
        Ok(Some(user)) => {
            info!(
                assignee = name,
                display_name = user.display_name.as_deref().unwrap_or(""),
                "assignee is valid"
            );
            true
        }
        Ok(None) => {
            warn!(assignee = name, "assignee not found, issue will be unassigned");
            false
        }
        Err(err) => {
            warn!(assignee = name, error = %err, "cannot validate assignee");
            false
        }
    }
}

/// Verify the parent issue exists before creating a sub-task under it.
async fn confirm_parent_issue(tracker: &dyn IssueTracker, parent_key: &str) -> Result<()> {
    match tracker.get_issue(parent_key).await {
        Ok(parent) => {
            info!(
                parent_key,
                summary = parent.summary.as_deref().unwrap_or(""),
                "parent issue is valid"
            );
            Ok(())
        }
        Err(err) => {
            error!("{}", err.operation_guidance());
            Err(anyhow!(err).context(format!("Parent issue '{parent_key}' is not accessible")))
        }
    }
}

/// Attach each validated file to the issue. Per-file failures are logged and
/// skipped; the created issue still counts as a success.
async fn add_attachments(
    tracker: &dyn IssueTracker,
    issue_key: &str,
    config: &ValidatedConfig,
) -> (usize, Vec<String>) {
    if config.attachment_paths.is_empty() {
        return (0, Vec::new());
    }

    info!(
        issue_key,
        count = config.attachment_paths.len(),
        "adding attachments"
    );

    let mut added = 0;
    let mut failed = Vec::new();

    for path in &config.attachment_paths {
        match tracker.add_attachment(issue_key, path).await {
            Ok(filename) => {
                info!(%filename, "attached file");
                added += 1;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to attach file, skipping");
                failed.push(format!("{} ({err})", path.display()));
            }
        }
    }

    (added, failed)
}
