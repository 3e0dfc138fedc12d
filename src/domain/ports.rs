//! Ports: the contract between the action flow and the issue tracker.
//!
//! The tracker itself (Jira) is an external collaborator; the application
//! layer only sees this trait, which keeps the flow testable against an
//! in-process mock.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use super::models::{CreatedIssue, IssueFields, IssueRef, ServerInfo, TrackerUser};

/// Enumerated tracker error kinds, mapped from HTTP status codes once at the
/// client boundary.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The request body or parameters were rejected.
    #[error("Bad request (HTTP 400): {0}")]
    BadRequest(String),

    /// Credentials were missing or wrong.
    #[error("Authentication failed (HTTP 401)")]
    Unauthorized,

    /// Authenticated but not permitted.
    #[error("Access forbidden (HTTP 403)")]
    Forbidden(String),

    /// Endpoint or resource does not exist.
    #[error("Resource not found (HTTP 404)")]
    NotFound(String),

    /// The endpoint rejected the HTTP method.
    #[error("Method not allowed (HTTP 405)")]
    MethodNotAllowed(String),

    /// The resource already exists or is mid-change.
    #[error("Conflict (HTTP 409): {0}")]
    Conflict(String),

    /// Well-formed request with semantically invalid fields.
    #[error("Invalid input (HTTP 422): {0}")]
    UnprocessableEntity(String),

    /// Too many requests.
    #[error("Rate limit exceeded (HTTP 429)")]
    RateLimited,

    /// Any 5xx response.
    #[error("Server error (HTTP {status}): {body}")]
    Server { status: u16, body: String },

    /// A status outside the mapped set.
    #[error("Unexpected response (HTTP {status}): {body}")]
    Unexpected { status: u16, body: String },

    /// Transport failure before any HTTP status arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// The server replied but the body did not parse.
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

impl TrackerError {
    /// Map an HTTP status code and response body to an error kind.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => Self::BadRequest(body),
            401 => Self::Unauthorized,
            403 => Self::Forbidden(body),
            404 => Self::NotFound(body),
            405 => Self::MethodNotAllowed(body),
            409 => Self::Conflict(body),
            422 => Self::UnprocessableEntity(body),
            429 => Self::RateLimited,
            500..=599 => Self::Server { status, body },
            _ => Self::Unexpected { status, body },
        }
    }

    /// The HTTP status this error was mapped from, when there was one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::MethodNotAllowed(_) => Some(405),
            Self::Conflict(_) => Some(409),
            Self::UnprocessableEntity(_) => Some(422),
            Self::RateLimited => Some(429),
            Self::Server { status, .. } | Self::Unexpected { status, .. } => Some(*status),
            Self::Network(_) | Self::InvalidResponse(_) => None,
        }
    }

    /// Guidance printed when the initial connection to the tracker fails.
    pub fn connection_guidance(&self) -> &'static str {
        match self {
            Self::Unauthorized => {
                "Authentication failed. Please check your username and API token."
            }
            Self::Forbidden(_) => {
                "Access forbidden. Your account may not have permission to access this Jira instance."
            }
            Self::NotFound(_) => "Jira server not found. Please verify the server URL.",
            Self::MethodNotAllowed(_) => {
                "Method not allowed. The server URL may not point at a Jira REST API."
            }
            Self::RateLimited => "Rate limit exceeded. Please try again later.",
            Self::Server { status: 500, .. } => {
                "Jira server internal error. Please try again later or contact your administrator."
            }
            Self::Server { status: 502, .. } => {
                "Bad gateway. There may be network connectivity issues."
            }
            Self::Server { status: 503, .. } => {
                "Jira service unavailable. The server may be under maintenance."
            }
            Self::Server { status: 504, .. } => {
                "Gateway timeout. The request took too long to complete."
            }
            Self::Network(_) => {
                "Could not reach the Jira server. Check the URL and network connectivity."
            }
            _ => "Connection to Jira failed. Please check your server URL, username, and API token.",
        }
    }

    /// Guidance printed when an issue operation fails after connecting.
    pub fn operation_guidance(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "Bad request. Please check your input parameters.",
            Self::Unauthorized => "Authentication failed during the operation.",
            Self::Forbidden(_) => "Permission denied. Contact your Jira administrator.",
            Self::NotFound(_) => {
                "Resource not found. Check project key, issue type, or parent issue."
            }
            Self::MethodNotAllowed(_) => {
                "Method not allowed. The Jira REST endpoint rejected the request."
            }
            Self::Conflict(_) => "Conflict occurred. The resource may already exist.",
            Self::UnprocessableEntity(_) => {
                "Invalid input. Check required fields and field types."
            }
            Self::RateLimited => "Rate limit exceeded. Please try again later.",
            _ => "Operation failed. Please check your project permissions and input parameters.",
        }
    }
}

/// Contract with the external issue tracker.
///
/// Transport and HTTP concerns stay behind this trait; implementations map
/// failures into [`TrackerError`] kinds at their boundary.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Probe the server and return its identification.
    async fn server_info(&self) -> Result<ServerInfo, TrackerError>;

    /// Create an issue and return its key and browse URL.
    async fn create_issue(&self, fields: &IssueFields) -> Result<CreatedIssue, TrackerError>;

    /// Attach a file to an existing issue; returns the stored filename.
    async fn add_attachment(&self, issue_key: &str, path: &Path) -> Result<String, TrackerError>;

    /// Look up a user by name. `Ok(None)` means the user does not exist,
    /// which is not an error for the action flow.
    async fn lookup_user(&self, username: &str) -> Result<Option<TrackerUser>, TrackerError>;

    /// Fetch an existing issue, used to confirm a sub-task's parent.
    async fn get_issue(&self, key: &str) -> Result<IssueRef, TrackerError>;
}
