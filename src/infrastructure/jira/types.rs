//! Wire types for the Jira REST v2 API.

use serde::{Deserialize, Serialize};

use crate::domain::models::IssueFields;

/// Reference by key, e.g. `{"key": "PROJ"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyRef {
    /// Issue or project key.
    pub key: String,
}

/// Reference by name, e.g. `{"name": "Task"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRef {
    /// Display name of the referenced entity.
    pub name: String,
}

/// `POST /rest/api/2/issue` request body.
#[derive(Debug, Serialize)]
pub struct CreateIssueRequest {
    /// Issue fields to set on creation.
    pub fields: IssueFieldsPayload,
}

/// The `fields` object of an issue-create request.
#[derive(Debug, Serialize)]
pub struct IssueFieldsPayload {
    /// Target project.
    pub project: KeyRef,
    /// Issue type by name.
    pub issuetype: NameRef,
    /// Issue summary line.
    pub summary: String,
    /// Issue description body.
    pub description: String,
    /// Priority by name.
    pub priority: NameRef,
    /// Labels, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Parent issue, sub-tasks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<KeyRef>,
    /// Assignee, only when confirmed to exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<NameRef>,
}

impl From<&IssueFields> for CreateIssueRequest {
    fn from(fields: &IssueFields) -> Self {
        Self {
            fields: IssueFieldsPayload {
                project: KeyRef {
                    key: fields.project_key.clone(),
                },
                issuetype: NameRef {
                    name: fields.issue_type.as_str().to_string(),
                },
                summary: fields.summary.clone(),
                description: fields.description.clone(),
                priority: NameRef {
                    name: fields.priority.as_str().to_string(),
                },
                labels: fields.labels.clone(),
                parent: fields.parent_key.clone().map(|key| KeyRef { key }),
                assignee: fields.assignee.clone().map(|name| NameRef { name }),
            },
        }
    }
}

/// `POST /rest/api/2/issue` response.
#[derive(Debug, Deserialize)]
pub struct CreateIssueResponse {
    /// Key of the newly created issue.
    pub key: String,
}

/// `GET /rest/api/2/serverInfo` response (only the fields we report).
#[derive(Debug, Deserialize)]
pub struct ServerInfoResponse {
    /// Human-readable server title.
    #[serde(rename = "serverTitle")]
    pub server_title: Option<String>,
    /// Jira server version string.
    pub version: Option<String>,
}

/// `GET /rest/api/2/user` response (only the fields we report).
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    /// Account username.
    pub name: Option<String>,
    /// Display name shown in the UI.
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

/// `GET /rest/api/2/issue/{key}` response, narrowed to the summary field.
#[derive(Debug, Deserialize)]
pub struct IssueResponse {
    /// Issue key.
    pub key: String,
    /// Requested field subset.
    #[serde(default)]
    pub fields: IssueResponseFields,
}

/// The `fields` object of an issue-get response.
#[derive(Debug, Default, Deserialize)]
pub struct IssueResponseFields {
    /// Issue summary line.
    pub summary: Option<String>,
}

/// One element of an attachment-upload response array.
#[derive(Debug, Deserialize)]
pub struct AttachmentResponse {
    /// Filename as stored by the server.
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{IssueType, Priority};

    fn fields() -> IssueFields {
        IssueFields {
            project_key: "PROJ".to_string(),
            issue_type: IssueType::SubTask,
            summary: "Sum".to_string(),
            description: "Desc".to_string(),
            priority: Priority::Low,
            labels: vec!["ci".to_string()],
            parent_key: Some("PROJ-1".to_string()),
            assignee: Some("jdoe".to_string()),
        }
    }

    #[test]
    fn create_request_serializes_nested_refs() {
        let request = CreateIssueRequest::from(&fields());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["fields"]["project"]["key"], "PROJ");
        assert_eq!(value["fields"]["issuetype"]["name"], "Sub-task");
        assert_eq!(value["fields"]["priority"]["name"], "Low");
        assert_eq!(value["fields"]["parent"]["key"], "PROJ-1");
        assert_eq!(value["fields"]["assignee"]["name"], "jdoe");
    }

    #[test]
    fn empty_optionals_are_omitted() {
        let mut f = fields();
        f.labels.clear();
        f.parent_key = None;
        f.assignee = None;
        let value = serde_json::to_value(CreateIssueRequest::from(&f)).unwrap();
        let obj = value["fields"].as_object().unwrap();
        assert!(!obj.contains_key("labels"));
        assert!(!obj.contains_key("parent"));
        assert!(!obj.contains_key("assignee"));
    }
}
