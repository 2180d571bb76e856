//! Error types for the deployment pipeline.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the deployment pipeline.
///
/// Every variant renders as a single human-readable line; the CLI prefixes
/// it with the target name when reporting.
#[derive(Debug, Error)]
pub enum Error {
    /// The canonical settings file does not exist.
    #[error("settings file not found: {path}")]
    NotFound { path: PathBuf },

    /// No dotfiles directory could be located.
    #[error("could not locate dotfiles directory (searched: {searched})")]
    DotfilesNotFound { searched: String },

    /// The settings file is not valid JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The settings document does not conform to the expected shape.
    #[error("invalid settings document: {}", .issues.join("; "))]
    Validation { issues: Vec<String> },

    /// The requested target identifier is not known.
    #[error("unknown target '{name}' (valid targets: {valid})")]
    UnknownTarget { name: String, valid: String },

    /// A value cannot be represented in the target's format.
    #[error("cannot encode {field}: {reason}")]
    Encode { field: String, reason: String },

    /// Directory creation or file write failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            context: format!("io error at {}", path.display()),
            source,
        }
    }

    pub fn encode(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Encode {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_target(name: &str, valid: &[&str]) -> Self {
        Self::UnknownTarget {
            name: name.to_string(),
            valid: valid.join(", "),
        }
    }
}
