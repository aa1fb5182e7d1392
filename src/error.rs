//! Error types for Arbor
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Arbor operations
pub type ArborResult<T> = Result<T, ArborError>;

/// Main error type for Arbor operations
#[derive(Error, Debug)]
pub enum ArborError {
    /// Input document does not have the expected shape
    #[error("invalid inventory at '{path}': {message}")]
    Schema { path: String, message: String },

    /// Host names registered more than once into the same standard group
    #[error(
        "the following hosts are created multiple times in the inventory source:\n{}\ncreate each host only once.",
        format_host_list(.hosts)
    )]
    DuplicateHosts { hosts: Vec<String> },

    /// Inventory source file does not exist
    #[error("inventory source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Inventory source is not valid YAML
    #[error("invalid YAML in {file}: {message}")]
    InvalidYaml { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("JSON rendering error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArborError {
    /// Shorthand for a schema violation at a dotted document path
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        ArborError::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}

fn format_host_list(hosts: &[String]) -> String {
    hosts
        .iter()
        .map(|h| format!("  - {}", h))
        .collect::<Vec<_>>()
        .join("\n")
}
