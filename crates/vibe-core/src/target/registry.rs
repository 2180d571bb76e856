//! Target registry for the supported deployment targets.
//!
//! The registry is the single place the fixed target table lives; lookup by
//! identifier and enumeration for "deploy all" both go through it. It is
//! built at process start and immutable thereafter.

use crate::error::{Error, Result};

use super::{
    ClaudeCodeTarget, ClaudeDesktopTarget, CodexTarget, GeminiTarget, TargetAdapter,
};

/// Registry of available target adapters.
pub struct TargetRegistry {
    targets: Vec<Box<dyn TargetAdapter>>,
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::with_default_targets()
    }
}

impl TargetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Create a registry with the four built-in targets.
    pub fn with_default_targets() -> Self {
        let targets: Vec<Box<dyn TargetAdapter>> = vec![
            Box::new(ClaudeDesktopTarget::new()),
            Box::new(CodexTarget::new()),
            Box::new(GeminiTarget::new()),
            Box::new(ClaudeCodeTarget::new()),
        ];
        Self { targets }
    }

    /// Register a target adapter.
    pub fn register(&mut self, target: Box<dyn TargetAdapter>) {
        self.targets.push(target);
    }

    /// Get all registered targets.
    pub fn all(&self) -> &[Box<dyn TargetAdapter>] {
        &self.targets
    }

    /// Get a target by identifier.
    pub fn get(&self, id: &str) -> Option<&dyn TargetAdapter> {
        self.targets
            .iter()
            .find(|t| t.id() == id)
            .map(|t| t.as_ref())
    }

    /// Get a target by identifier, or an error listing the valid ones.
    pub fn resolve(&self, id: &str) -> Result<&dyn TargetAdapter> {
        self.get(id)
            .ok_or_else(|| Error::unknown_target(id, &self.target_ids()))
    }

    /// List all target identifiers.
    pub fn target_ids(&self) -> Vec<&'static str> {
        self.targets.iter().map(|t| t.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_registered() {
        let registry = TargetRegistry::with_default_targets();
        let ids = registry.target_ids();

        assert!(ids.contains(&"claude-desktop"));
        assert!(ids.contains(&"codex"));
        assert!(ids.contains(&"gemini"));
        assert!(ids.contains(&"claude-code"));
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn get_target_by_id() {
        let registry = TargetRegistry::with_default_targets();

        let codex = registry.get("codex");
        assert!(codex.is_some());
        assert_eq!(codex.expect("target exists").id(), "codex");

        let missing = registry.get("nonexistent");
        assert!(missing.is_none());
    }

    #[test]
    fn resolve_unknown_target_lists_valid_ids() {
        let registry = TargetRegistry::with_default_targets();

        let err = registry.resolve("bogus").expect_err("bogus is not a target");
        let message = err.to_string();
        assert!(message.contains("bogus"));
        for id in registry.target_ids() {
            assert!(message.contains(id), "message should list '{id}'");
        }
    }

    #[test]
    fn empty_registry() {
        let registry = TargetRegistry::new();

        assert!(registry.all().is_empty());
        assert!(registry.get("claude-code").is_none());
    }

    #[test]
    fn register_custom_target() {
        let mut registry = TargetRegistry::new();
        registry.register(Box::new(CodexTarget::new()));
        assert_eq!(registry.all().len(), 1);
        assert_eq!(registry.get("codex").expect("exists").id(), "codex");
    }
}
