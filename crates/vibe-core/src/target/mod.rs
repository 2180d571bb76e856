//! Target adapter layer for the deployed assistants.
//!
//! Provides abstraction over the AI assistants consuming the configuration:
//! - Fixed built-in targets (Claude Desktop, Codex, Gemini, Claude Code)
//! - Per-target config path and serialization format
//! - Capability set driving the built-in-server filter

mod claude_code;
mod claude_desktop;
mod codex;
mod gemini;
pub mod registry;

use std::path::PathBuf;

pub use claude_code::ClaudeCodeTarget;
pub use claude_desktop::ClaudeDesktopTarget;
pub use codex::CodexTarget;
pub use gemini::GeminiTarget;
pub use registry::TargetRegistry;

use crate::error::{Error, Result};

/// Config file serialization format for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

/// Static capabilities of a deployment target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetCapabilities {
    /// MCP servers the assistant ships natively; these are excluded from
    /// its deployed document so they are not duplicated.
    pub builtin_servers: &'static [&'static str],
}

/// Context for resolving target paths.
///
/// Built once at process start; tests inject temp directories instead of
/// touching the real home.
#[derive(Debug, Clone)]
pub struct DeployContext {
    /// The user's home directory.
    pub home_dir: PathBuf,
    /// The platform's per-user application-support directory.
    pub config_dir: PathBuf,
}

impl DeployContext {
    pub fn new(home_dir: PathBuf, config_dir: PathBuf) -> Self {
        Self {
            home_dir,
            config_dir,
        }
    }

    /// Build the context from platform conventions.
    pub fn from_env() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| Error::Io {
            context: "could not determine home directory".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })?;
        let config_dir = dirs::config_dir().ok_or_else(|| Error::Io {
            context: "could not determine config directory".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })?;
        Ok(Self {
            home_dir,
            config_dir,
        })
    }
}

/// Trait for target-specific deployment adapters.
///
/// Each assistant has its own well-known config path and format; everything
/// else the pipeline does is target-independent.
pub trait TargetAdapter: std::fmt::Debug + Send + Sync {
    /// Stable identifier used on the command line.
    fn id(&self) -> &'static str;

    /// Human-readable name for reporting.
    fn display_name(&self) -> &'static str;

    /// Capability set of this target.
    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities::default()
    }

    /// Absolute path of the target's config file.
    fn config_path(&self, ctx: &DeployContext) -> PathBuf;

    /// Serialization format of the config file.
    fn format(&self) -> ConfigFormat;
}
