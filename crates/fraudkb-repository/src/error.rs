//! Error types for the repository layer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur while loading rules
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Rule file not found at the specified path
    #[error("Rule file not found: {path}")]
    NotFound { path: PathBuf },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML
    #[error("Unsupported rule file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration is missing a required setting
    #[error("Invalid repository configuration: {0}")]
    InvalidConfig(String),
}
