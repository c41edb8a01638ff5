//! Command-line interface for touchdeck.
//!
//! The subcommands exercise the deck headlessly: listing modes and tiles,
//! activating a tile, sending a raw shortcut, and mode management.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use touchdeck_config::SwitchDirection;
use touchdeck_input::SystemInjector;

use crate::controller::DeckController;
use crate::launcher;

/// touchdeck - a touch-oriented launcher deck
#[derive(Parser)]
#[command(name = "touchdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the config file (default: the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all modes and the tiles of the current mode
    List,

    /// Activate a tile of the current mode by index
    Run {
        /// Zero-based tile index
        index: usize,
    },

    /// Parse and synthesize a shortcut string directly
    Send {
        /// Combo string, e.g. "Ctrl+Shift+F5" or "Undo"
        shortcut: String,
    },

    /// Append a new mode and make it current
    AddMode {
        /// Mode name (blank gets an automatic "Mode N" name)
        #[arg(default_value = "")]
        name: String,
    },

    /// Switch to the next mode
    NextMode,

    /// Switch to the previous mode
    PrevMode,
}

/// Execute the parsed CLI against a loaded deck.
pub fn execute(cli: Cli, mut controller: DeckController) -> Result<()> {
    match cli.command.unwrap_or(Commands::List) {
        Commands::List => {
            list(&controller);
            Ok(())
        }
        Commands::Run { index } => {
            let buttons = controller.config().current_buttons();
            let entry = buttons.get(index).with_context(|| {
                format!(
                    "no button {index} in mode '{}' ({} buttons)",
                    controller.current_mode().name,
                    buttons.len()
                )
            })?;
            launcher::run_entry(&SystemInjector::new(), entry)
                .with_context(|| format!("button '{}'", entry.display_label()))
        }
        Commands::Send { shortcut } => {
            let spec = touchdeck_keybindings::parse(&shortcut);
            if !spec.is_resolved() {
                bail!("shortcut '{shortcut}' does not resolve to a key");
            }
            if !touchdeck_input::synthesize(&SystemInjector::new(), &spec) {
                bail!("key injection is not available on this platform");
            }
            println!("Sent {spec}");
            Ok(())
        }
        Commands::AddMode { name } => {
            let index = controller.add_mode(&name)?;
            println!("Added mode {} '{}'", index, controller.current_mode().name);
            Ok(())
        }
        Commands::NextMode => switch(&mut controller, SwitchDirection::Next),
        Commands::PrevMode => switch(&mut controller, SwitchDirection::Previous),
    }
}

fn switch(controller: &mut DeckController, direction: SwitchDirection) -> Result<()> {
    if controller.switch_mode(direction) {
        controller.save()?;
        println!("Now in mode '{}'", controller.current_mode().name);
    } else {
        println!("Only one mode exists; nothing to switch to");
    }
    Ok(())
}

fn list(controller: &DeckController) {
    let config = controller.config();
    for (i, mode) in config.modes.iter().enumerate() {
        let marker = if i == config.current_mode_index { "*" } else { " " };
        println!("{marker} [{i}] {} ({} buttons)", mode.name, mode.buttons.len());
    }
    println!();
    for (i, button) in config.current_buttons().iter().enumerate() {
        let action = match (&button.command, button.shortcut_text()) {
            (Some(command), _) => command.program().unwrap_or_default().to_string(),
            (None, Some(shortcut)) => format!("shortcut {shortcut}"),
            (None, None) => "(nothing)".to_string(),
        };
        println!("  [{i}] {} -> {action}", button.display_label());
    }
}
