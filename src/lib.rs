//! Jira Issue Creation Action
//!
//! A GitHub Action that creates Jira issues (or sub-tasks) from workflow
//! inputs, with defensive validation of every external input before any
//! network call is made.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Input and issue models, validation errors,
//!   and the issue-tracker port
//! - **Application Layer** (`application`): Input validation and the
//!   validate -> connect -> create -> attach -> report flow
//! - **Infrastructure Layer** (`infrastructure`): Jira REST client, GitHub
//!   Actions integration, input loading, logging setup
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use jira_issue_action::{InputValidator, RawInputs};
//!
//! let validator = InputValidator::new();
//! let config = validator.validate(&raw_inputs)?;
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{InputValidator, RunOutcome};
pub use domain::errors::ValidationError;
pub use domain::models::{
    CreatedIssue, IssueFields, IssueType, Priority, RawInputs, ValidatedConfig,
};
pub use domain::ports::{IssueTracker, TrackerError};
pub use infrastructure::config::InputLoader;
pub use infrastructure::jira::{JiraClient, JiraClientConfig};
