//! The launch boundary: turning a tile activation into a side effect.
//!
//! Resolution order for [`run_entry`]:
//! 1. a present shortcut is parsed and synthesized; success means no
//!    process is invoked at all;
//! 2. a single-string command naming an existing filesystem path with no
//!    extra arguments is opened with the OS default handler;
//! 3. anything else is spawned as a process, detached, with the tile's
//!    working directory if one is set.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use touchdeck_config::{ButtonEntry, CommandSpec};
use touchdeck_input::KeyInjector;

/// Failures surfaced to the user-facing layer when a tile activation
/// cannot produce its side effect.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The entry carries neither a usable command nor a shortcut.
    #[error("button '{0}' has nothing to run")]
    NothingToRun(String),

    /// Shortcut synthesis failed and no command was available to fall
    /// back on.
    #[error("could not synthesize shortcut '{0}'")]
    ShortcutFailed(String),

    /// The OS default handler refused the path.
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Process spawn failed.
    #[error("failed to spawn '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// How an entry's command will be executed, decided without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Hand the path to the OS default handler.
    Open(PathBuf),
    /// Spawn a process.
    Spawn {
        argv: Vec<String>,
        cwd: Option<PathBuf>,
    },
}

/// Decide how an entry's command would run, or `None` when it has no
/// usable command.
pub fn plan_command(entry: &ButtonEntry) -> Option<LaunchPlan> {
    let command = entry.command.as_ref().filter(|c| !c.is_empty())?;

    if let CommandSpec::Program(program) = command {
        if entry.args.is_empty() && Path::new(program).exists() {
            return Some(LaunchPlan::Open(PathBuf::from(program)));
        }
    }

    let mut argv = command.to_argv();
    argv.extend(entry.args.iter().cloned());
    Some(LaunchPlan::Spawn {
        argv,
        cwd: entry.cwd.as_ref().map(PathBuf::from),
    })
}

/// Activate a tile.
///
/// Shortcut synthesis failure falls back to the command when one exists;
/// spawned children are detached and never awaited.
pub fn run_entry(injector: &dyn KeyInjector, entry: &ButtonEntry) -> Result<(), LaunchError> {
    let shortcut = entry.shortcut_text();
    if let Some(text) = shortcut {
        let spec = touchdeck_keybindings::parse(text);
        if touchdeck_input::synthesize(injector, &spec) {
            return Ok(());
        }
        log::debug!("Shortcut '{text}' did not synthesize, falling back to command");
    }

    match plan_command(entry) {
        Some(LaunchPlan::Open(path)) => {
            log::info!("Opening {}", path.display());
            open::that(&path).map_err(|source| LaunchError::Open { path, source })
        }
        Some(LaunchPlan::Spawn { argv, cwd }) => {
            let program = argv[0].clone();
            log::info!("Spawning '{program}' with {} argument(s)", argv.len() - 1);
            let mut cmd = Command::new(&program);
            cmd.args(&argv[1..]);
            if let Some(dir) = cwd {
                cmd.current_dir(dir);
            }
            cmd.spawn()
                .map(drop)
                .map_err(|source| LaunchError::Spawn { program, source })
        }
        None => match shortcut {
            Some(text) => Err(LaunchError::ShortcutFailed(text.to_string())),
            None => Err(LaunchError::NothingToRun(entry.display_label().to_string())),
        },
    }
}
