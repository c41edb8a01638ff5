//! Configuration for the TouchDeck launcher.
//!
//! Owns the deck's data model (modes of tiles with commands, shortcuts,
//! and presentation settings), the mutation protocol through which the
//! deck changes, JSON persistence with legacy-format migration, and the
//! edit-form finishing rules.
//!
//! The store is single-threaded by design; callers that need sharing wrap
//! it themselves.

pub mod config;
pub mod edit;
pub mod error;
mod types;

pub use config::{CONFIG_FILE_NAME, Config};
pub use edit::{EditForm, parse_args};
pub use error::ConfigError;
pub use types::{ButtonEntry, CommandSpec, Mode, SwitchDirection};
