//! Issue models exchanged with the tracker.

use serde::{Deserialize, Serialize};

use super::config::{IssueType, Priority, ValidatedConfig};

/// Field set for a new issue, assembled from a validated configuration.
///
/// This is the tracker-agnostic shape; the Jira client converts it into the
/// REST payload it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFields {
    /// Target project key
    pub project_key: String,
    /// Issue type name
    pub issue_type: IssueType,
    /// Summary line
    pub summary: String,
    /// Description body
    pub description: String,
    /// Priority name
    pub priority: Priority,
    /// Labels, empty when none were supplied
    pub labels: Vec<String>,
    /// Parent issue key; set only for sub-tasks
    pub parent_key: Option<String>,
    /// Assignee; set only when the tracker confirmed the user exists
    pub assignee: Option<String>,
}

impl IssueFields {
    /// Build the field set from a validated configuration.
    ///
    /// `assignee_confirmed` reflects the tracker-side user lookup: an
    /// unknown assignee leaves the issue unassigned rather than failing
    /// the whole run.
    pub fn from_config(config: &ValidatedConfig, assignee_confirmed: bool) -> Self {
        let parent_key = config
            .parent_issue_key
            .clone()
            .filter(|_| config.issue_type.requires_parent());
        let assignee = config.assignee.clone().filter(|_| assignee_confirmed);

        Self {
            project_key: config.project_key.clone(),
            issue_type: config.issue_type,
            summary: config.summary.clone(),
            description: config.description.clone(),
            priority: config.priority,
            labels: config.labels.clone(),
            parent_key,
            assignee,
        }
    }
}

/// An issue created in the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Issue key, e.g. `PROJ-123`
    pub key: String,
    /// Browse URL for the issue
    pub url: String,
}

/// A lightweight reference to an existing issue, used for parent lookups.
#[derive(Debug, Clone)]
pub struct IssueRef {
    /// Issue key
    pub key: String,
    /// Issue summary, when the tracker returned one
    pub summary: Option<String>,
}

/// Tracker server identification, returned by the connection probe.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    /// Human-readable server title
    pub title: Option<String>,
    /// Server version string
    pub version: Option<String>,
}

/// A tracker user, as returned by the user lookup.
#[derive(Debug, Clone)]
pub struct TrackerUser {
    /// Account/login name
    pub name: String,
    /// Display name shown in the tracker UI
    pub display_name: Option<String>,
}
