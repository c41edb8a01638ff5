//! Tile definitions: what a single deck button launches.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The program a tile launches.
///
/// Config files may give either a bare program string or a full argv list;
/// the untagged representation accepts both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandSpec {
    /// A single program or file path.
    Program(String),
    /// An explicit argv: program followed by its arguments.
    Argv(Vec<String>),
}

impl CommandSpec {
    /// The program component, if present.
    ///
    /// For the argv form this is the first element; an empty argv has no
    /// program.
    pub fn program(&self) -> Option<&str> {
        match self {
            CommandSpec::Program(p) => Some(p.as_str()),
            CommandSpec::Argv(argv) => argv.first().map(String::as_str),
        }
    }

    /// Flatten to an argv list. The program form becomes a one-element list.
    pub fn to_argv(&self) -> Vec<String> {
        match self {
            CommandSpec::Program(p) => vec![p.clone()],
            CommandSpec::Argv(argv) => argv.clone(),
        }
    }

    /// Whether this spec names anything launchable.
    pub fn is_empty(&self) -> bool {
        self.program().is_none_or(|p| p.trim().is_empty())
    }
}

/// One tile in a deck mode.
///
/// A valid entry carries a command, a shortcut, or both. Everything else
/// is optional presentation or launch detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonEntry {
    /// Tile caption. Blank labels are replaced with "App" at edit time.
    #[serde(default)]
    pub label: String,

    /// Program or file to launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandSpec>,

    /// Extra arguments appended after the command's own argv.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Shortcut combo string, e.g. "Ctrl+Shift+F5" or "Undo".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,

    /// Working directory for the spawned process.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,

    /// Icon path, opaque to the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Per-tile background color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Per-tile text color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl ButtonEntry {
    /// Caption shown on the tile, falling back to "App" when blank.
    pub fn display_label(&self) -> &str {
        let label = self.label.trim();
        if label.is_empty() { "App" } else { label }
    }

    /// The shortcut string, trimmed, when one is set and non-blank.
    pub fn shortcut_text(&self) -> Option<&str> {
        self.shortcut
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Whether this entry carries anything launchable at all.
    pub fn has_action(&self) -> bool {
        self.command.as_ref().is_some_and(|c| !c.is_empty()) || self.shortcut_text().is_some()
    }

    /// Enforce the structural invariant: a tile must do something.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.has_action() {
            Ok(())
        } else {
            Err(ConfigError::Validation(format!(
                "button '{}' has neither a command nor a shortcut",
                self.display_label()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_accepts_both_shapes() {
        let single: CommandSpec = serde_json::from_str("\"notepad.exe\"").unwrap();
        assert_eq!(single.program(), Some("notepad.exe"));
        assert_eq!(single.to_argv(), vec!["notepad.exe"]);

        let argv: CommandSpec = serde_json::from_str("[\"py\", \"-3\", \"tool.py\"]").unwrap();
        assert_eq!(argv.program(), Some("py"));
        assert_eq!(argv.to_argv(), vec!["py", "-3", "tool.py"]);
    }

    #[test]
    fn test_empty_argv_has_no_program() {
        let argv = CommandSpec::Argv(Vec::new());
        assert!(argv.is_empty());
        assert_eq!(argv.program(), None);
    }

    #[test]
    fn test_display_label_default() {
        let entry = ButtonEntry {
            label: "   ".into(),
            ..Default::default()
        };
        assert_eq!(entry.display_label(), "App");
    }

    #[test]
    fn test_validate_requires_command_or_shortcut() {
        let empty = ButtonEntry::default();
        assert!(empty.validate().is_err());

        let with_shortcut = ButtonEntry {
            shortcut: Some("Ctrl+C".into()),
            ..Default::default()
        };
        assert!(with_shortcut.validate().is_ok());

        let with_command = ButtonEntry {
            command: Some(CommandSpec::Program("calc.exe".into())),
            ..Default::default()
        };
        assert!(with_command.validate().is_ok());
    }

    #[test]
    fn test_blank_shortcut_is_no_shortcut() {
        let entry = ButtonEntry {
            shortcut: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(entry.shortcut_text(), None);
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_serialization_omits_unset_fields() {
        let entry = ButtonEntry {
            label: "Terminal".into(),
            command: Some(CommandSpec::Program("wt.exe".into())),
            ..Default::default()
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("shortcut"));
        assert!(!json.contains("cwd"));
        assert!(!json.contains("icon"));
    }
}
