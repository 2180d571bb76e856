//! Claude Code target.

use std::path::PathBuf;

use crate::target::{ConfigFormat, DeployContext, TargetAdapter, TargetCapabilities};

/// MCP servers Claude Code provides natively; deploying them again would
/// duplicate capability, so they are excluded from its document.
const BUILTIN_SERVERS: &[&str] = &["filesystem", "git", "github", "brave-search", "memory"];

#[derive(Debug, Default)]
pub struct ClaudeCodeTarget;

impl ClaudeCodeTarget {
    pub fn new() -> Self {
        Self
    }
}

impl TargetAdapter for ClaudeCodeTarget {
    fn id(&self) -> &'static str {
        "claude-code"
    }

    fn display_name(&self) -> &'static str {
        "Claude Code"
    }

    fn capabilities(&self) -> TargetCapabilities {
        TargetCapabilities {
            builtin_servers: BUILTIN_SERVERS,
        }
    }

    fn config_path(&self, ctx: &DeployContext) -> PathBuf {
        ctx.home_dir.join(".claude.json")
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }
}
