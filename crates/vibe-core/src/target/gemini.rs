//! Gemini CLI target.

use std::path::PathBuf;

use crate::target::{ConfigFormat, DeployContext, TargetAdapter};

#[derive(Debug, Default)]
pub struct GeminiTarget;

impl GeminiTarget {
    pub fn new() -> Self {
        Self
    }
}

impl TargetAdapter for GeminiTarget {
    fn id(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Gemini"
    }

    fn config_path(&self, ctx: &DeployContext) -> PathBuf {
        ctx.home_dir.join(".gemini/settings.json")
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }
}
