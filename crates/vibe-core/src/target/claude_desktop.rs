//! Claude Desktop target.

use std::path::PathBuf;

use crate::target::{ConfigFormat, DeployContext, TargetAdapter};

#[derive(Debug, Default)]
pub struct ClaudeDesktopTarget;

impl ClaudeDesktopTarget {
    pub fn new() -> Self {
        Self
    }
}

impl TargetAdapter for ClaudeDesktopTarget {
    fn id(&self) -> &'static str {
        "claude-desktop"
    }

    fn display_name(&self) -> &'static str {
        "Claude Desktop"
    }

    fn config_path(&self, ctx: &DeployContext) -> PathBuf {
        ctx.config_dir.join("Claude/claude_desktop_config.json")
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }
}
