//! Configuration error types.

use thiserror::Error;

/// A single problem found while validating a configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigIssue {
    #[error("Event source must not be empty")]
    EmptySource,
}

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but failed validation
    #[error("Invalid configuration: {}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
