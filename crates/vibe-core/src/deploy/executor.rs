//! Execute deployments against target config files.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::task::JoinSet;

use crate::encode::encoder_for_format;
use crate::error::{Error, Result};
use crate::expand;
use crate::filter::filter_servers;
use crate::fs;
use crate::settings::{self, MCP_SERVERS_KEY};
use crate::target::{DeployContext, TargetAdapter, TargetRegistry};

/// Result of one target deployment.
#[derive(Debug, Clone)]
pub struct DeployReport {
    /// Target identifier.
    pub target: &'static str,
    /// Resolved config file path that was written.
    pub path: PathBuf,
    /// Number of servers in the deployed document.
    pub servers: usize,
    /// Number of built-in servers excluded for this target.
    pub excluded: usize,
}

/// Per-target outcome of a "deploy all" run.
#[derive(Debug)]
pub struct DeployOutcome {
    pub target: &'static str,
    pub result: Result<DeployReport>,
}

/// Deploy the canonical settings document to a single target.
///
/// Runs the whole pipeline: resolve the target, load and validate the
/// settings, expand environment variables, filter built-in servers, encode,
/// and write atomically. Any failure is terminal; there is no retry and no
/// partial write.
pub fn deploy_to_target(
    registry: &TargetRegistry,
    ctx: &DeployContext,
    target_id: &str,
) -> Result<DeployReport> {
    let target = registry.resolve(target_id)?;
    let document = load_expanded_document(ctx)?;
    apply_to_target(target, ctx, &document)
}

/// Deploy to every registered target concurrently.
///
/// The document is loaded and expanded once; each target then filters,
/// encodes, and writes independently over the immutable snapshot. One
/// target's failure neither prevents nor rolls back the others' writes.
pub async fn deploy_all(
    registry: Arc<TargetRegistry>,
    ctx: &DeployContext,
) -> Result<Vec<DeployOutcome>> {
    let document = Arc::new(load_expanded_document(ctx)?);

    let mut tasks = JoinSet::new();
    for index in 0..registry.all().len() {
        let registry = Arc::clone(&registry);
        let ctx = ctx.clone();
        let document = Arc::clone(&document);
        tasks.spawn_blocking(move || {
            let target = registry.all()[index].as_ref();
            (index, target.id(), apply_to_target(target, &ctx, &document))
        });
    }

    let mut outcomes: Vec<Option<DeployOutcome>> =
        (0..registry.all().len()).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, target, result) = joined.map_err(|e| Error::Io {
            context: "deployment task failed".to_string(),
            source: std::io::Error::other(e),
        })?;
        outcomes[index] = Some(DeployOutcome { target, result });
    }
    Ok(outcomes.into_iter().flatten().collect())
}

/// Load the canonical document and expand environment variables over it.
fn load_expanded_document(ctx: &DeployContext) -> Result<Map<String, Value>> {
    let path = settings::settings_path(&ctx.home_dir)?;
    let document = settings::load_settings(&path)?;
    Ok(expand::expand_map(&document))
}

/// Filter, encode, and write an already-expanded document for one target.
fn apply_to_target(
    target: &dyn TargetAdapter,
    ctx: &DeployContext,
    document: &Map<String, Value>,
) -> Result<DeployReport> {
    let mut outgoing = document.clone();
    let (servers, excluded) = match document.get(MCP_SERVERS_KEY).and_then(Value::as_object) {
        Some(map) => {
            let (kept, excluded) = filter_servers(map, target);
            let count = kept.len();
            outgoing.insert(MCP_SERVERS_KEY.to_string(), Value::Object(kept));
            (count, excluded)
        }
        None => (0, 0),
    };

    let path = target.config_path(ctx);
    fs::ensure_parent_dir(&path)?;
    let text = encoder_for_format(target.format()).encode(&outgoing)?;
    fs::atomic_write(&path, &text)?;
    tracing::debug!(
        target = target.id(),
        path = %path.display(),
        servers,
        excluded,
        "deployed configuration"
    );

    Ok(DeployReport {
        target: target.id(),
        path,
        servers,
        excluded,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn seeded_context(settings: &str) -> (TempDir, DeployContext) {
        let temp = TempDir::new().expect("create temp home");
        let home = temp.path().to_path_buf();
        let dotfiles = home.join(".dotfiles");
        std::fs::create_dir_all(&dotfiles).expect("create dotfiles dir");
        std::fs::write(dotfiles.join(settings::SETTINGS_FILE_NAME), settings)
            .expect("seed settings");
        let ctx = DeployContext::new(home.clone(), home.join(".config"));
        (temp, ctx)
    }

    #[test]
    fn unknown_target_fails_without_writing() {
        let (temp, ctx) = seeded_context(r#"{"mcpServers": {"demo": {"command": "run"}}}"#);
        let registry = TargetRegistry::with_default_targets();

        let err = deploy_to_target(&registry, &ctx, "bogus").expect_err("bogus target");
        assert!(matches!(err, Error::UnknownTarget { .. }));

        // Nothing was written anywhere under the temp home.
        let written: Vec<_> = walk_files(temp.path())
            .into_iter()
            .filter(|p| !p.ends_with(settings::SETTINGS_FILE_NAME))
            .collect();
        assert!(written.is_empty(), "unexpected files: {written:?}");
    }

    #[test]
    fn missing_settings_file_propagates_not_found() {
        let temp = TempDir::new().expect("create temp home");
        let home = temp.path().to_path_buf();
        std::fs::create_dir_all(home.join(".dotfiles")).expect("create dotfiles dir");
        let ctx = DeployContext::new(home.clone(), home.join(".config"));
        let registry = TargetRegistry::with_default_targets();

        let err = deploy_to_target(&registry, &ctx, "gemini").expect_err("no settings");
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn document_without_server_map_deploys_as_is() {
        let (_temp, ctx) = seeded_context(r#"{"theme": "dark"}"#);
        let registry = TargetRegistry::with_default_targets();

        let report = deploy_to_target(&registry, &ctx, "gemini").expect("deploy");
        assert_eq!(report.servers, 0);
        assert_eq!(report.excluded, 0);

        let written = std::fs::read_to_string(&report.path).expect("read output");
        let parsed: Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(parsed["theme"], serde_json::json!("dark"));
        assert!(parsed.get(MCP_SERVERS_KEY).is_none());
    }

    fn walk_files(root: &std::path::Path) -> Vec<String> {
        let mut found = Vec::new();
        let mut stack = vec![root.to_path_buf()];
        while let Some(dir) = stack.pop() {
            for entry in std::fs::read_dir(&dir).expect("read dir") {
                let path = entry.expect("entry").path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    found.push(path.to_string_lossy().to_string());
                }
            }
        }
        found
    }
}
