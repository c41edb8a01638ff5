//! Controller behavior: gestures driving mode switches, shortcut binding
//! lifecycle, and persistence failure reporting.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use touchdeck::controller::{DeckController, EditOutcome, ReleaseOutcome};
use touchdeck_config::{Config, EditForm, Mode};

fn deck(modes: &[&str]) -> (DeckController, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("touchdeck.json");
    let mut config = Config::default();
    config.modes = modes.iter().copied().map(Mode::new).collect();
    config.save_to(&path).unwrap();
    (DeckController::load(&path).unwrap(), dir)
}

fn saved_form(label: &str, command: &str, shortcut: &str) -> EditOutcome {
    EditOutcome::Save(EditForm {
        label: label.into(),
        command: command.into(),
        shortcut: shortcut.into(),
        ..Default::default()
    })
}

#[test]
fn test_swipe_left_advances_mode() {
    let (mut deck, _dir) = deck(&["A", "B", "C"]);
    deck.on_press((500.0, 300.0));
    let outcome = deck.on_release((380.0, 320.0));
    assert_eq!(outcome, ReleaseOutcome::Swiped { mode_changed: true });
    assert_eq!(deck.current_mode().name, "B");
}

#[test]
fn test_swipe_right_retreats_with_wraparound() {
    let (mut deck, _dir) = deck(&["A", "B", "C"]);
    deck.on_press((300.0, 300.0));
    let outcome = deck.on_release((420.0, 330.0));
    assert_eq!(outcome, ReleaseOutcome::Swiped { mode_changed: true });
    assert_eq!(deck.current_mode().name, "C");
}

#[test]
fn test_swipe_suppresses_tap_even_with_one_mode() {
    let (mut deck, _dir) = deck(&["Only"]);
    deck.on_press((500.0, 300.0));
    let outcome = deck.on_release((380.0, 320.0));
    assert_eq!(outcome, ReleaseOutcome::Swiped { mode_changed: false });
    assert_eq!(deck.current_mode().name, "Only");
}

#[test]
fn test_vertical_drag_is_a_tap() {
    let (mut deck, _dir) = deck(&["A", "B"]);
    deck.on_press((300.0, 300.0));
    assert_eq!(deck.on_release((420.0, 380.0)), ReleaseOutcome::Tap);
    assert_eq!(deck.current_mode().name, "A");
}

#[test]
fn test_release_without_press_is_a_tap() {
    let (mut deck, _dir) = deck(&["A", "B"]);
    assert_eq!(deck.on_release((380.0, 320.0)), ReleaseOutcome::Tap);
}

#[test]
fn test_edits_persist_and_rebuild_bindings() {
    let (mut deck, dir) = deck(&["Main"]);
    deck.apply_edit(None, saved_form("Copy", "", "Ctrl+C")).unwrap();
    deck.apply_edit(None, saved_form("Paste", "", "Ctrl+V")).unwrap();

    let copy = touchdeck_keybindings::parse("Ctrl+C");
    let paste = touchdeck_keybindings::parse("Ctrl+V");
    assert_eq!(deck.match_shortcut(&copy), Some(0));
    assert_eq!(deck.match_shortcut(&paste), Some(1));

    // Deleting the first tile shifts the second one down; bindings follow.
    deck.apply_edit(Some(0), EditOutcome::Delete).unwrap();
    assert_eq!(deck.match_shortcut(&copy), None);
    assert_eq!(deck.match_shortcut(&paste), Some(0));

    // The change reached disk.
    let reloaded = Config::load_from(&dir.path().join("touchdeck.json")).unwrap();
    assert_eq!(reloaded.current_buttons().len(), 1);
    assert_eq!(reloaded.current_buttons()[0].label, "Paste");
}

#[test]
fn test_edit_mode_silences_shortcuts() {
    let (mut deck, _dir) = deck(&["Main"]);
    deck.apply_edit(None, saved_form("Copy", "", "Ctrl+C")).unwrap();

    let copy = touchdeck_keybindings::parse("Ctrl+C");
    assert!(deck.toggle_edit_mode());
    assert_eq!(deck.match_shortcut(&copy), None);
    assert!(!deck.toggle_edit_mode());
    assert_eq!(deck.match_shortcut(&copy), Some(0));
}

#[test]
fn test_unresolvable_shortcuts_get_no_binding() {
    let (mut deck, _dir) = deck(&["Main"]);
    deck.apply_edit(None, saved_form("Broken", "tool.exe", "Ctrl+Bogus"))
        .unwrap();
    assert!(deck.bindings().is_empty());
}

#[test]
fn test_mode_switch_rebuilds_bindings_per_mode() {
    let (mut deck, _dir) = deck(&["One", "Two"]);
    deck.apply_edit(None, saved_form("Copy", "", "Ctrl+C")).unwrap();
    assert_eq!(deck.bindings().len(), 1);

    deck.on_press((500.0, 300.0));
    deck.on_release((380.0, 320.0));
    assert_eq!(deck.current_mode().name, "Two");
    assert!(deck.bindings().is_empty());
}

#[test]
fn test_add_mode_becomes_current_and_persists() {
    let (mut deck, dir) = deck(&["Main"]);
    let index = deck.add_mode("Streaming").unwrap();
    assert_eq!(index, 1);
    assert_eq!(deck.current_mode().name, "Streaming");

    let reloaded = Config::load_from(&dir.path().join("touchdeck.json")).unwrap();
    assert_eq!(reloaded.modes.len(), 2);
    assert_eq!(reloaded.modes[1].name, "Streaming");
}

#[test]
fn test_persist_failure_propagates_and_memory_wins() {
    let dir = tempfile::tempdir().unwrap();

    // A plain file where the config directory should be makes every
    // write attempt fail.
    let blocked = dir.path().join("blocker");
    fs::write(&blocked, "not a directory").unwrap();
    let bad_path: PathBuf = blocked.join("touchdeck.json");
    let mut deck = DeckController::new(Config::default(), bad_path);

    let err = deck.apply_edit(None, saved_form("Copy", "", "Ctrl+C"));
    assert!(err.is_err());

    // The in-memory configuration keeps the accepted change.
    assert_eq!(deck.config().current_buttons().len(), 1);
    assert_eq!(deck.config().current_buttons()[0].label, "Copy");
}
