//! Step summary writer (`GITHUB_STEP_SUMMARY`).

use std::fs;

use tracing::{info, warn};

/// Prepend the created-issue link to the job's step summary, so the link
/// sits above whatever earlier steps wrote.
///
/// A missing `GITHUB_STEP_SUMMARY` variable or a write failure is logged
/// and ignored.
pub fn prepend_issue_link(issue_key: &str, issue_url: &str) {
    let Ok(path) = std::env::var("GITHUB_STEP_SUMMARY") else {
        warn!("GITHUB_STEP_SUMMARY environment variable not found");
        return;
    };

    let line = format!("✅ **Jira Issue Created:** [{issue_key}]({issue_url})\n\n");
    let existing = fs::read_to_string(&path).unwrap_or_default();

    match fs::write(&path, format!("{line}{existing}")) {
        Ok(()) => info!(issue_url, "updated GitHub step summary with issue link"),
        Err(err) => warn!(error = %err, "failed to update GitHub step summary"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_prepended_before_existing_content() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "## Earlier step\n").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        temp_env::with_var("GITHUB_STEP_SUMMARY", Some(&path), || {
            prepend_issue_link("PROJ-7", "https://jira.example.com/browse/PROJ-7");
        });

        let contents = fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("✅ **Jira Issue Created:** [PROJ-7]"));
        assert!(contents.ends_with("## Earlier step\n"));
    }

    #[test]
    fn missing_env_var_is_not_fatal() {
        temp_env::with_var_unset("GITHUB_STEP_SUMMARY", || {
            prepend_issue_link("PROJ-7", "https://example.com");
        });
    }
}
