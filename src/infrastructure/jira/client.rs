//! Jira REST v2 client implementation.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Response};
use tracing::{debug, info, warn};

use crate::domain::models::{CreatedIssue, IssueFields, IssueRef, ServerInfo, TrackerUser};
use crate::domain::ports::{IssueTracker, TrackerError};

use super::types::{
    AttachmentResponse, CreateIssueRequest, CreateIssueResponse, IssueResponse,
    ServerInfoResponse, UserResponse,
};

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Configuration for the Jira HTTP client.
#[derive(Debug, Clone)]
pub struct JiraClientConfig {
    /// Server base URL, no trailing slash
    pub server_url: String,
    /// Username for basic auth
    pub username: String,
    /// API token for basic auth
    pub api_token: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl JiraClientConfig {
    /// Config with the default timeout for a validated server/credential set.
    pub fn for_server(server_url: String, username: String, api_token: String) -> Self {
        Self {
            server_url,
            username,
            api_token,
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the Jira REST v2 API.
///
/// Connection pooling comes from the shared `reqwest::Client`; every failure
/// is mapped into a [`TrackerError`] kind at this boundary. No retries: the
/// action runs once and either completes or aborts.
pub struct JiraClient {
    http_client: ReqwestClient,
    base_url: String,
    username: String,
    api_token: String,
}

impl JiraClient {
    /// Build the client. Fails only if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: JiraClientConfig) -> Result<Self, TrackerError> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .user_agent(concat!("jira-issue-action/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.server_url,
            username: config.username,
            api_token: config.api_token,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest/api/2/{path}", self.base_url)
    }

    /// Map a non-success response to an enumerated error kind.
    async fn error_from_response(response: Response) -> TrackerError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        warn!(status, "Jira API error response");
        TrackerError::from_status(status, body)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, TrackerError> {
        let url = self.api_url(path);
        debug!(%url, "GET");

        let response = self
            .http_client
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|err| TrackerError::InvalidResponse(err.to_string()))
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn server_info(&self) -> Result<ServerInfo, TrackerError> {
        let info: ServerInfoResponse = self.get_json("serverInfo").await?;
        Ok(ServerInfo {
            title: info.server_title,
            version: info.version,
        })
    }

    async fn create_issue(&self, fields: &IssueFields) -> Result<CreatedIssue, TrackerError> {
        let url = self.api_url("issue");
        let request = CreateIssueRequest::from(fields);
        debug!(%url, "POST");

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let created: CreateIssueResponse = response
            .json()
            .await
            .map_err(|err| TrackerError::InvalidResponse(err.to_string()))?;

        info!(issue_key = %created.key, "created issue");
        Ok(CreatedIssue {
            url: format!("{}/browse/{}", self.base_url, created.key),
            key: created.key,
        })
    }

    async fn add_attachment(&self, issue_key: &str, path: &Path) -> Result<String, TrackerError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| TrackerError::Network(format!("cannot read {}: {err}", path.display())))?;

        let filename = path
            .file_name()
            .map_or_else(|| "attachment".to_string(), |n| n.to_string_lossy().into_owned());

        debug!(issue_key, filename = %filename, size = bytes.len(), "uploading attachment");

        let part = Part::bytes(bytes).file_name(filename);
        let form = Form::new().part("file", part);

        let response = self
            .http_client
            .post(self.api_url(&format!("issue/{issue_key}/attachments")))
            .basic_auth(&self.username, Some(&self.api_token))
            // Jira rejects attachment uploads without this CSRF opt-out
            .header("X-Atlassian-Token", "no-check")
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let attachments: Vec<AttachmentResponse> = response
            .json()
            .await
            .map_err(|err| TrackerError::InvalidResponse(err.to_string()))?;

        attachments
            .into_iter()
            .next()
            .map(|a| a.filename)
            .ok_or_else(|| {
                TrackerError::InvalidResponse("empty attachment response".to_string())
            })
    }

    async fn lookup_user(&self, username: &str) -> Result<Option<TrackerUser>, TrackerError> {
        let url = self.api_url("user");
        debug!(%url, username, "GET");

        let response = self
            .http_client
            .get(&url)
            .query(&[("username", username)])
            .basic_auth(&self.username, Some(&self.api_token))
            .send()
            .await?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let user: UserResponse = response
            .json()
            .await
            .map_err(|err| TrackerError::InvalidResponse(err.to_string()))?;

        Ok(Some(TrackerUser {
            name: user.name.unwrap_or_else(|| username.to_string()),
            display_name: user.display_name,
        }))
    }

    async fn get_issue(&self, key: &str) -> Result<IssueRef, TrackerError> {
        let issue: IssueResponse = self
            .get_json(&format!("issue/{key}?fields=summary"))
            .await?;

        Ok(IssueRef {
            key: issue.key,
            summary: issue.fields.summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds() {
        let client = JiraClient::new(JiraClientConfig::for_server(
            "https://jira.example.com".to_string(),
            "user".to_string(),
            "token-long-enough-xxxx".to_string(),
        ));
        assert!(client.is_ok());
    }

    #[test]
    fn api_url_joins_rest_path() {
        let client = JiraClient::new(JiraClientConfig::for_server(
            "https://jira.example.com".to_string(),
            "user".to_string(),
            "token-long-enough-xxxx".to_string(),
        ))
        .unwrap();
        assert_eq!(
            client.api_url("serverInfo"),
            "https://jira.example.com/rest/api/2/serverInfo"
        );
    }
}
