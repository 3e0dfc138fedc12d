//! Validation errors raised before any network call is made.

use thiserror::Error;

/// Local, pre-network rejection of malformed or malicious input.
///
/// Every variant names the offending field (or carries enough context to),
/// so workflow authors can fix the input without digging through logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required input was blank after trimming.
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// URL scheme was not `http://` or `https://`.
    #[error("Jira server URL must use HTTP or HTTPS protocol")]
    UrlScheme(String),

    /// URL had a scheme but no authority.
    #[error("Invalid Jira server URL format - missing hostname")]
    UrlMissingHost(String),

    /// URL carried a `user:pass@` authority.
    #[error("Jira server URL must not embed credentials")]
    UrlEmbeddedCredentials,

    /// Project key failed the `[A-Z][A-Z0-9_]*` pattern.
    #[error(
        "Project key '{0}' must start with a letter and contain only uppercase letters, numbers, and underscores"
    )]
    ProjectKeyFormat(String),

    /// Project key over the length cap.
    #[error("Project key cannot exceed {max} characters (got {len})")]
    ProjectKeyTooLong { len: usize, max: usize },

    /// Issue type not in the supported set.
    #[error("Issue type '{got}' is not supported. Valid types: {valid}")]
    UnsupportedIssueType { got: String, valid: String },

    /// Priority not in the supported set.
    #[error("Priority '{got}' is not supported. Valid priorities: {valid}")]
    UnsupportedPriority { got: String, valid: String },

    /// Free-text field over its length cap.
    #[error("{field} cannot exceed {max} characters (got {len})")]
    TextTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Text carried control characters other than tab or newline.
    #[error("{field} contains invalid control characters")]
    ControlCharacters { field: &'static str },

    /// Text matched an injection pattern.
    #[error(
        "Potentially malicious content detected in {field}. Please review your input for security issues"
    )]
    MaliciousContent { field: String },

    /// Username outside the allowed charset.
    #[error("{field} contains invalid characters")]
    UsernameCharset { field: &'static str },

    /// Username over the length cap.
    #[error("{field} cannot exceed {max} characters")]
    UsernameTooLong { field: &'static str, max: usize },

    /// Token under the plausible-length floor.
    #[error("API token appears to be too short (minimum {min} characters)")]
    TokenTooShort { min: usize },

    /// Token was a literal placeholder word.
    #[error("API token appears to be a placeholder")]
    TokenPlaceholder,

    /// A single label over the length cap.
    #[error("Label '{0}' cannot exceed 255 characters")]
    LabelTooLong(String),

    /// A label containing whitespace.
    #[error("Label '{0}' cannot contain spaces")]
    LabelWhitespace(String),

    /// A label outside the allowed charset.
    #[error("Label '{0}' contains invalid characters")]
    LabelCharset(String),

    /// Sub-task requested without a parent key.
    #[error("Parent issue key is required for Sub-task type")]
    ParentKeyRequired,

    /// Parent key failed the `PROJECT-123` pattern.
    #[error("Parent issue key must be in format PROJECT-123 (e.g., PROJ-123), got '{0}'")]
    ParentKeyFormat(String),

    /// Attachment path was absolute or escaped the workspace.
    #[error("Invalid file path '{0}' - potential security risk")]
    AttachmentPathTraversal(String),

    /// Attachment exists but could not be opened.
    #[error("File '{0}' is not readable")]
    AttachmentUnreadable(String),

    /// Attachment over the size cap.
    #[error("File '{path}' is too large: {size} bytes (max {max} bytes)")]
    AttachmentTooLarge { path: String, size: u64, max: u64 },
}

/// Convenience alias for validator results.
pub type ValidationResult<T> = Result<T, ValidationError>;
