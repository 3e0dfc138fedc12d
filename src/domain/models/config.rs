//! Action input models: raw strings in, validated configuration out.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Raw action inputs as read from `INPUT_*` environment variables.
///
/// Everything is consumed as a string; nothing here has been checked yet.
/// Optional inputs default to the empty string so a missing variable and an
/// explicitly empty one behave identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RawInputs {
    /// Jira server base URL
    #[serde(default)]
    pub jira_server: String,

    /// Jira username or email
    #[serde(default)]
    pub jira_username: String,

    /// Jira API token
    #[serde(default)]
    pub jira_api_token: String,

    /// Target project key, e.g. `PROJ`
    #[serde(default)]
    pub project_key: String,

    /// Issue type name, e.g. `Task` or `Sub-task`
    #[serde(default)]
    pub issue_type: String,

    /// Issue summary (title)
    #[serde(default)]
    pub issue_summary: String,

    /// Issue description body
    #[serde(default)]
    pub issue_description: String,

    /// Priority name, e.g. `Medium`
    #[serde(default)]
    pub issue_priority: String,

    /// Parent issue key, required for sub-tasks
    #[serde(default)]
    pub parent_issue_key: String,

    /// Optional assignee username
    #[serde(default)]
    pub assignee: String,

    /// Comma-separated label list
    #[serde(default)]
    pub issue_labels: String,

    /// Comma-separated attachment file paths
    #[serde(default)]
    pub attachment_paths: String,

    /// Log level for the action run
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            jira_server: String::new(),
            jira_username: String::new(),
            jira_api_token: String::new(),
            project_key: String::new(),
            issue_type: String::new(),
            issue_summary: String::new(),
            issue_description: String::new(),
            issue_priority: String::new(),
            parent_issue_key: String::new(),
            assignee: String::new(),
            issue_labels: String::new(),
            attachment_paths: String::new(),
            log_level: default_log_level(),
        }
    }
}

/// Jira issue types supported by the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueType {
    /// Standard work item.
    Task,
    /// Defect report.
    Bug,
    /// User story.
    Story,
    /// Child of another issue; requires a parent key.
    #[serde(rename = "Sub-task")]
    SubTask,
    /// Large body of work grouping other issues.
    Epic,
}

impl IssueType {
    /// All supported issue types, in the order shown in error messages.
    pub const ALL: [Self; 5] = [Self::Task, Self::Bug, Self::Story, Self::SubTask, Self::Epic];

    /// The name Jira uses for this issue type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Bug => "Bug",
            Self::Story => "Story",
            Self::SubTask => "Sub-task",
            Self::Epic => "Epic",
        }
    }

    /// Parse an exact issue type name; `None` when unsupported.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// Sub-tasks require a parent issue key.
    pub const fn requires_parent(self) -> bool {
        matches!(self, Self::SubTask)
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Jira priority levels supported by the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Blocks everything else.
    Highest,
    /// Urgent.
    High,
    /// Default level.
    Medium,
    /// Can wait.
    Low,
    /// Background noise.
    Lowest,
}

impl Priority {
    /// All supported priorities, highest first.
    pub const ALL: [Self; 5] = [Self::Highest, Self::High, Self::Medium, Self::Low, Self::Lowest];

    /// The name Jira uses for this priority.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Highest => "Highest",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Lowest => "Lowest",
        }
    }

    /// Parse an exact priority name; `None` when unsupported.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized configuration produced by a successful validation pass.
///
/// Constructed only by [`crate::application::InputValidator::validate`];
/// immutable once produced.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Canonical server URL, trailing slash stripped
    pub server_url: String,
    /// Jira username
    pub username: String,
    /// API token (mask before logging)
    pub api_token: String,
    /// Validated project key
    pub project_key: String,
    /// Typed issue type
    pub issue_type: IssueType,
    /// Trimmed summary
    pub summary: String,
    /// Trimmed description
    pub description: String,
    /// Typed priority
    pub priority: Priority,
    /// Labels in input order, duplicates preserved
    pub labels: Vec<String>,
    /// Assignee, if one was supplied
    pub assignee: Option<String>,
    /// Parent issue key; `Some` only for sub-tasks
    pub parent_issue_key: Option<String>,
    /// Attachment paths that passed the security and size checks
    pub attachment_paths: Vec<PathBuf>,
}

impl ValidatedConfig {
    /// Browse URL for an issue on this server.
    pub fn issue_url(&self, issue_key: &str) -> String {
        format!("{}/browse/{}", self.server_url, issue_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_type_round_trips_names() {
        for issue_type in IssueType::ALL {
            assert_eq!(IssueType::parse(issue_type.as_str()), Some(issue_type));
        }
        assert_eq!(IssueType::parse("Subtask"), None);
        assert_eq!(IssueType::parse("task"), None);
    }

    #[test]
    fn only_sub_task_requires_parent() {
        assert!(IssueType::SubTask.requires_parent());
        assert!(!IssueType::Task.requires_parent());
        assert!(!IssueType::Epic.requires_parent());
    }

    #[test]
    fn priority_parse_is_exact() {
        assert_eq!(Priority::parse("Medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("medium"), None);
        assert_eq!(Priority::parse("Blocker"), None);
    }

    #[test]
    fn sub_task_serializes_with_hyphen() {
        let json = serde_json::to_string(&IssueType::SubTask).unwrap();
        assert_eq!(json, "\"Sub-task\"");
    }

    #[test]
    fn issue_url_joins_browse_path() {
        let config = ValidatedConfig {
            server_url: "https://jira.example.com".to_string(),
            username: "user@example.com".to_string(),
            api_token: "x".repeat(24),
            project_key: "PROJ".to_string(),
            issue_type: IssueType::Task,
            summary: "s".to_string(),
            description: "d".to_string(),
            priority: Priority::Medium,
            labels: vec![],
            assignee: None,
            parent_issue_key: None,
            attachment_paths: vec![],
        };
        assert_eq!(
            config.issue_url("PROJ-42"),
            "https://jira.example.com/browse/PROJ-42"
        );
    }
}
