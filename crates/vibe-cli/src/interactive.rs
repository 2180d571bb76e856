//! Interactive target selection.
//!
//! Shown when `vibe` is invoked without a target argument. Uses dialoguer
//! for the terminal prompt.

use anyhow::Result;
use console::style;
use dialoguer::{Select, theme::ColorfulTheme};

use vibe_core::target::TargetRegistry;

/// Prompt for a deployment target. Returns the chosen identifier, or "all".
pub fn choose_target(registry: &TargetRegistry) -> Result<String> {
    println!("{}", style("Vibe - MCP Configuration Deployment").bold());

    let mut items: Vec<String> = registry
        .all()
        .iter()
        .map(|t| format!("{} ({})", t.display_name(), t.id()))
        .collect();
    items.push("All targets".to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a deployment target")
        .items(&items)
        .default(0)
        .interact_opt()?;

    match selection {
        Some(index) if index < registry.all().len() => {
            Ok(registry.all()[index].id().to_string())
        }
        Some(_) => Ok(super::ALL_TARGETS.to_string()),
        None => anyhow::bail!("operation cancelled"),
    }
}
