//! Vibe - MCP configuration deployment
//!
//! Usage:
//!   vibe                  # interactive target selection
//!   vibe claude-desktop   # deploy to one target
//!   vibe all              # deploy to every target
//!   vibe -v codex         # deploy with verbose output

mod interactive;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vibe_core::deploy::{DeployReport, deploy_all, deploy_to_target};
use vibe_core::target::{DeployContext, TargetRegistry};

/// Identifier selecting every target at once.
const ALL_TARGETS: &str = "all";

#[derive(Parser)]
#[command(name = "vibe")]
#[command(about = "Deploy MCP configurations to AI coding assistants", long_about = None)]
struct Cli {
    /// Deployment target (claude-desktop, codex, gemini, claude-code, or all)
    ///
    /// Prompts interactively when omitted
    target: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if cli.verbose {
                    "vibe=debug,info".into()
                } else {
                    "vibe=warn".into()
                }
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ctx = DeployContext::from_env()?;
    load_dotenv(&ctx.home_dir);

    let registry = Arc::new(TargetRegistry::with_default_targets());
    let target = match cli.target {
        Some(target) => target,
        None => interactive::choose_target(&registry)?,
    };

    let failures = if target == ALL_TARGETS {
        run_deploy_all(Arc::clone(&registry), &ctx, cli.verbose).await
    } else {
        run_deploy_one(&registry, &ctx, &target, cli.verbose)
    };

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Load `.env` into the process environment before any deployment runs.
///
/// A `.env` next to the settings file is loaded first, then one in the
/// working directory; variables that are already set are never overridden.
fn load_dotenv(home_dir: &Path) {
    if let Ok(dotfiles) = vibe_core::settings::find_dotfiles_dir(home_dir) {
        dotenvy::from_path(dotfiles.join(".env")).ok();
    }
    dotenvy::dotenv().ok();
}

fn run_deploy_one(
    registry: &TargetRegistry,
    ctx: &DeployContext,
    target: &str,
    verbose: bool,
) -> usize {
    match deploy_to_target(registry, ctx, target) {
        Ok(report) => {
            print_report(&report, verbose);
            0
        }
        Err(err) => {
            eprintln!("✗ {target}: {err}");
            1
        }
    }
}

async fn run_deploy_all(
    registry: Arc<TargetRegistry>,
    ctx: &DeployContext,
    verbose: bool,
) -> usize {
    let outcomes = match deploy_all(registry, ctx).await {
        Ok(outcomes) => outcomes,
        // Loading the canonical document failed; no target was attempted.
        Err(err) => {
            eprintln!("✗ all: {err}");
            return 1;
        }
    };

    let mut failures = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(report) => print_report(report, verbose),
            Err(err) => {
                eprintln!("✗ {}: {err}", outcome.target);
                failures += 1;
            }
        }
    }
    failures
}

fn print_report(report: &DeployReport, verbose: bool) {
    println!(
        "✓ Deployed {} MCP server(s) to {}",
        report.servers, report.target
    );
    if verbose {
        println!("  Location: {}", report.path.display());
        if report.excluded > 0 {
            println!("  Skipped {} built-in server(s)", report.excluded);
        }
    }
}
