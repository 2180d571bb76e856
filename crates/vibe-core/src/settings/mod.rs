//! Canonical settings document: location, loading, and validation.
//!
//! The canonical document lives at `<dotfiles>/mcp-settings.json`. Every
//! deployment run re-reads it fresh from disk so external edits between runs
//! are picked up; nothing is cached.

pub mod schema;

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub use schema::{MCP_SERVERS_KEY, validate_document};

/// File name of the canonical settings document.
pub const SETTINGS_FILE_NAME: &str = "mcp-settings.json";

/// Environment variable overriding the dotfiles directory.
pub const DOTFILES_ENV_VAR: &str = "DOTFILES_DIR";

/// Locate the dotfiles directory holding the canonical settings document.
///
/// Resolution order: `DOTFILES_DIR` (if set and existing), then
/// `~/Developer/repo/dotfiles`, `~/.dotfiles`, `~/dotfiles`.
pub fn find_dotfiles_dir(home_dir: &Path) -> Result<PathBuf> {
    if let Ok(overridden) = std::env::var(DOTFILES_ENV_VAR) {
        let path = PathBuf::from(overridden);
        if path.exists() {
            tracing::debug!(path = %path.display(), "using dotfiles directory from environment");
            return Ok(path);
        }
    }

    let candidates = [
        home_dir.join("Developer/repo/dotfiles"),
        home_dir.join(".dotfiles"),
        home_dir.join("dotfiles"),
    ];
    for candidate in &candidates {
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "found dotfiles directory");
            return Ok(candidate.clone());
        }
    }

    Err(Error::DotfilesNotFound {
        searched: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Resolve the canonical settings file path under `home_dir`.
pub fn settings_path(home_dir: &Path) -> Result<PathBuf> {
    Ok(find_dotfiles_dir(home_dir)?.join(SETTINGS_FILE_NAME))
}

/// Load and validate the canonical settings document at `path`.
///
/// Unknown top-level keys and extra fields inside server entries are
/// preserved untouched; only the documented shape is enforced.
pub fn load_settings(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value = serde_json::from_str(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let issues = schema::validate_document(&value);
    if !issues.is_empty() {
        return Err(Error::Validation { issues });
    }

    match value {
        Value::Object(map) => Ok(map),
        // validate_document rejects non-object roots
        _ => Err(Error::Validation {
            issues: vec!["document root must be a JSON object".to_string()],
        }),
    }
}
