//! Property-based tests for the input validator, plus the end-to-end
//! validation cases that need filesystem fixtures.

use std::io::Write;

use jira_issue_action::domain::errors::ValidationError;
use jira_issue_action::{InputValidator, IssueType, Priority, RawInputs};
use proptest::prelude::*;

proptest! {
    // Uppercase alnum/underscore keys come back unchanged.
    #[test]
    fn valid_project_keys_round_trip(key in "[A-Z][A-Z0-9_]{0,8}") {
        let validator = InputValidator::new();
        prop_assert_eq!(validator.validate_project_key(&key).unwrap(), key);
    }

    #[test]
    fn lowercase_project_keys_fail(key in "[a-z][a-z0-9_]{0,8}") {
        let validator = InputValidator::new();
        prop_assert!(validator.validate_project_key(&key).is_err());
    }

    // Issue-key-shaped input (PROJ-123) is not a project key.
    #[test]
    fn hyphen_number_suffixed_keys_fail(key in "[A-Z][A-Z0-9]{0,5}", number in 0u32..100_000) {
        let validator = InputValidator::new();
        let issue_key = format!("{key}-{number}");
        prop_assert!(validator.validate_project_key(&issue_key).is_err());
    }

    // Any shell metacharacter anywhere in the text is rejected.
    #[test]
    fn shell_metacharacters_always_fail(
        prefix in "[A-Za-z0-9 .,_-]{0,40}",
        meta in prop::sample::select(vec![';', '&', '|', '`', '$', '(', ')']),
        suffix in "[A-Za-z0-9 .,_-]{0,40}",
    ) {
        let validator = InputValidator::new();
        let text = format!("{prefix}{meta}{suffix}");
        let rejected = matches!(
            validator.validate_text_field(&text, "issue_description", 255),
            Err(ValidationError::MaliciousContent { .. })
        );
        prop_assert!(rejected, "metacharacter {:?} was not rejected", meta);
    }

    // Clean text under the cap comes back trimmed.
    #[test]
    fn clean_text_is_returned_trimmed(core in "[A-Za-z0-9][A-Za-z0-9 .,_-]{0,60}[A-Za-z0-9]") {
        let validator = InputValidator::new();
        let padded = format!("  {core}  ");
        prop_assert_eq!(
            validator.validate_text_field(&padded, "issue_summary", 255).unwrap(),
            core
        );
    }

    // Labels survive a split/join round trip with arbitrary padding.
    #[test]
    fn labels_round_trip(
        labels in prop::collection::vec("[a-z0-9_-]{1,12}", 1..6),
        pad in "[ ]{0,3}",
    ) {
        let validator = InputValidator::new();
        let csv = labels
            .iter()
            .map(|l| format!("{pad}{l}{pad}"))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(validator.validate_labels(&csv).unwrap(), labels);
    }
}

fn all_valid_inputs() -> RawInputs {
    RawInputs {
        jira_server: "https://jira.example.com/".to_string(),
        jira_username: "user@example.com".to_string(),
        jira_api_token: "abcdefghij0123456789xyz".to_string(),
        project_key: "PROJ".to_string(),
        issue_type: "Task".to_string(),
        issue_summary: "  Nightly build failed  ".to_string(),
        issue_description: "See the attached log.".to_string(),
        issue_priority: "Medium".to_string(),
        parent_issue_key: String::new(),
        assignee: "jdoe".to_string(),
        issue_labels: "a, b ,, c".to_string(),
        attachment_paths: String::new(),
        log_level: "info".to_string(),
    }
}

#[test]
fn end_to_end_all_valid_inputs_produce_full_config() {
    let validator = InputValidator::new();
    let config = validator.validate(&all_valid_inputs()).expect("validation failed");

    assert_eq!(config.server_url, "https://jira.example.com");
    assert_eq!(config.username, "user@example.com");
    assert_eq!(config.project_key, "PROJ");
    assert_eq!(config.issue_type, IssueType::Task);
    assert_eq!(config.summary, "Nightly build failed");
    assert_eq!(config.description, "See the attached log.");
    assert_eq!(config.priority, Priority::Medium);
    assert_eq!(config.labels, vec!["a", "b", "c"]);
    assert_eq!(config.assignee.as_deref(), Some("jdoe"));
    assert_eq!(config.parent_issue_key, None);
    assert!(config.attachment_paths.is_empty());
}

#[test]
fn sub_task_without_parent_key_fails() {
    let validator = InputValidator::new();
    let mut raw = all_valid_inputs();
    raw.issue_type = "Sub-task".to_string();

    let err = validator.validate(&raw).unwrap_err();
    assert_eq!(err, ValidationError::ParentKeyRequired);
}

#[test]
fn sub_task_with_parent_key_succeeds() {
    let validator = InputValidator::new();
    let mut raw = all_valid_inputs();
    raw.issue_type = "Sub-task".to_string();
    raw.parent_issue_key = "PROJ-17".to_string();

    let config = validator.validate(&raw).expect("validation failed");
    assert_eq!(config.parent_issue_key.as_deref(), Some("PROJ-17"));
}

#[test]
fn absolute_attachment_path_fails_even_when_relative_sibling_exists() {
    let validator = InputValidator::new();
    // Relative entry is merely skipped when missing; /etc/passwd fails hard.
    let err = validator
        .validate_attachment_paths("a.txt,/etc/passwd")
        .unwrap_err();
    assert!(matches!(err, ValidationError::AttachmentPathTraversal(_)));
}

#[test]
fn existing_relative_attachment_is_accepted() {
    let mut file = tempfile::Builder::new()
        .prefix("attach-fixture-")
        .suffix(".txt")
        .tempfile_in(".")
        .expect("tempfile failed");
    file.write_all(b"contents").expect("write failed");

    let relative = format!(
        "./{}",
        file.path().file_name().unwrap().to_string_lossy()
    );

    let validator = InputValidator::new();
    let paths = validator
        .validate_attachment_paths(&relative)
        .expect("validation failed");
    assert_eq!(paths.len(), 1);
}

#[test]
fn oversized_attachment_fails_hard() {
    let file = tempfile::Builder::new()
        .prefix("attach-huge-")
        .tempfile_in(".")
        .expect("tempfile failed");
    // Sparse file just over the 10MB cap
    file.as_file()
        .set_len(10 * 1024 * 1024 + 1)
        .expect("set_len failed");

    let relative = format!(
        "./{}",
        file.path().file_name().unwrap().to_string_lossy()
    );

    let validator = InputValidator::new();
    let err = validator.validate_attachment_paths(&relative).unwrap_err();
    assert!(matches!(err, ValidationError::AttachmentTooLarge { .. }));
}
