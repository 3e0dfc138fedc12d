//! Domain models.

pub mod config;
pub mod issue;

pub use config::{IssueType, Priority, RawInputs, ValidatedConfig};
pub use issue::{CreatedIssue, IssueFields, IssueRef, ServerInfo, TrackerUser};
