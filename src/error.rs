//! Error types for release proxy operations.
//!
//! Store failures are plain values returned to the caller. The wider
//! [`ProxyError`] also covers the scenario runner and its CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release proxy operations
pub type Result<T> = std::result::Result<T, ProxyError>;

/// Main error type for all release proxy operations
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Release store errors
    #[error("{0}")]
    Release(#[from] ReleaseError),

    /// Scenario loading errors
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the release store itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    /// A release with this name is already in the store
    #[error("Release {name} already exists")]
    AlreadyExists {
        /// Release name
        name: String,
    },

    /// No release with this name is in the store
    #[error("Release {name} not found")]
    NotFound {
        /// Release name
        name: String,
    },
}

/// Scenario file errors
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// Scenario file missing or unreadable
    #[error("Failed to read scenario {path}: {source}")]
    ReadFailed {
        /// Path of the scenario file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Scenario file is not valid scenario JSON
    #[error("Failed to parse scenario {path}: {source}")]
    ParseFailed {
        /// Path of the scenario file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ReleaseError::AlreadyExists { .. } => "already_exists",
            ReleaseError::NotFound { .. } => "not_found",
        }
    }
}

impl ProxyError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ProxyError::Release(ReleaseError::AlreadyExists { name }) => vec![
                format!("Delete '{}' before creating it again", name),
                "Use an update operation to re-read an existing release".to_string(),
            ],
            ProxyError::Release(ReleaseError::NotFound { name }) => vec![
                format!("Create '{}' first or seed it in the scenario 'releases' list", name),
            ],
            ProxyError::Scenario(ScenarioError::ReadFailed { path, .. }) => vec![
                format!("Check that {} exists and is readable", path.display()),
            ],
            ProxyError::Scenario(ScenarioError::ParseFailed { .. }) => vec![
                "Each operation needs an \"op\" field: list, get, create, update, delete, status or resolve".to_string(),
                "Validate the file with a JSON linter".to_string(),
            ],
            ProxyError::Cli(CliError::InvalidArguments { .. }) => vec![
                "Run with --help to see accepted arguments".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
