use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use touchdeck::cli::{self, Cli};
use touchdeck::controller::DeckController;
use touchdeck_config::{CONFIG_FILE_NAME, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level is the default; RUST_LOG still wins when set.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.clone()),
    )
    .init();

    let config_path = resolve_config_path(&cli)?;
    let controller = DeckController::load(&config_path)
        .with_context(|| format!("cannot load config from {}", config_path.display()))?;

    match cli::execute(cli, controller) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("touchdeck: error: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Resolve the config file path, seeding the user copy from a bundled
/// default on first run.
///
/// A missing config is fatal unless a `touchdeck.json` sits beside the
/// executable to seed from; the deck cannot run with empty state.
fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.config {
        return Ok(path.clone());
    }

    let path = Config::config_path();
    if !path.exists() {
        if let Some(bundled) = bundled_config() {
            log::info!(
                "Seeding config at {} from {}",
                path.display(),
                bundled.display()
            );
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&bundled, &path)
                .with_context(|| format!("cannot seed config from {}", bundled.display()))?;
        }
    }
    Ok(path)
}

fn bundled_config() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe.parent()?.join(CONFIG_FILE_NAME);
    candidate.exists().then_some(candidate)
}
