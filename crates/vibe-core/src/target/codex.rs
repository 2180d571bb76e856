//! Codex CLI target.
//!
//! Codex reads TOML (`~/.codex/config.toml`) with one `[mcp_servers.<name>]`
//! table per server, so this is the only target on the TOML encoder.

use std::path::PathBuf;

use crate::target::{ConfigFormat, DeployContext, TargetAdapter};

#[derive(Debug, Default)]
pub struct CodexTarget;

impl CodexTarget {
    pub fn new() -> Self {
        Self
    }
}

impl TargetAdapter for CodexTarget {
    fn id(&self) -> &'static str {
        "codex"
    }

    fn display_name(&self) -> &'static str {
        "Codex CLI"
    }

    fn config_path(&self, ctx: &DeployContext) -> PathBuf {
        ctx.home_dir.join(".codex/config.toml")
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Toml
    }
}
