//! Tile edit form: raw text in, validated [`ButtonEntry`] out.
//!
//! The presentation layer collects free-form text for every field; this
//! module owns the finishing rules that turn that text into a valid entry
//! or a rejection the dialog can display.

use crate::error::ConfigError;
use crate::types::{ButtonEntry, CommandSpec};

/// Raw text fields of the tile edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub label: String,
    pub command: String,
    pub args: String,
    pub shortcut: String,
    pub cwd: String,
    pub icon: String,
    pub color: String,
    pub text_color: String,
}

fn optional(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Tokenize an arguments field with shell quoting rules.
pub fn parse_args(text: &str) -> Result<Vec<String>, ConfigError> {
    shell_words::split(text.trim())
        .map_err(|e| ConfigError::Validation(format!("arguments field: {e}")))
}

impl EditForm {
    /// Populate the form from an existing entry for re-editing.
    pub fn from_entry(entry: &ButtonEntry) -> Self {
        let command = match &entry.command {
            None => String::new(),
            Some(CommandSpec::Program(p)) => p.clone(),
            Some(CommandSpec::Argv(argv)) => shell_words::join(argv),
        };
        Self {
            label: entry.label.clone(),
            command,
            args: shell_words::join(&entry.args),
            shortcut: entry.shortcut.clone().unwrap_or_default(),
            cwd: entry.cwd.clone().unwrap_or_default(),
            icon: entry.icon.clone().unwrap_or_default(),
            color: entry.color.clone().unwrap_or_default(),
            text_color: entry.text_color.clone().unwrap_or_default(),
        }
    }

    /// Finish editing: apply defaults, promote a bare working directory to
    /// the command, and validate.
    ///
    /// Rules, in order:
    /// - a multi-token command becomes an argv, a single token stays a
    ///   plain program, an empty field means no command;
    /// - a working directory with no command becomes the command itself
    ///   (the tile opens that directory) and the cwd is cleared;
    /// - a blank label becomes "App";
    /// - the entry must end up with a command or a shortcut.
    pub fn finish(&self) -> Result<ButtonEntry, ConfigError> {
        let command_tokens = shell_words::split(self.command.trim())
            .map_err(|e| ConfigError::Validation(format!("command field: {e}")))?;
        let mut command = match command_tokens.len() {
            0 => None,
            1 => Some(CommandSpec::Program(command_tokens[0].clone())),
            _ => Some(CommandSpec::Argv(command_tokens)),
        };

        let mut cwd = optional(&self.cwd);
        if command.is_none() {
            if let Some(dir) = cwd.take() {
                command = Some(CommandSpec::Program(dir));
            }
        }

        let label = match optional(&self.label) {
            Some(label) => label,
            None => "App".to_string(),
        };

        let entry = ButtonEntry {
            label,
            command,
            args: parse_args(&self.args)?,
            shortcut: optional(&self.shortcut),
            cwd,
            icon: optional(&self.icon),
            color: optional(&self.color),
            text_color: optional(&self.text_color),
        };
        entry.validate()?;
        Ok(entry)
    }
}
