//! End-to-end configuration tests: real files, legacy documents, and the
//! mutation protocol working against loaded state.

use std::fs;

use touchdeck_config::{Config, ConfigError, EditForm, SwitchDirection};

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("touchdeck.json");

    let mut config = Config::default();
    config.add_mode("Work");
    let entry = EditForm {
        label: "Editor".into(),
        command: "code".into(),
        args: "--new-window".into(),
        shortcut: "Ctrl+Alt+E".into(),
        ..Default::default()
    }
    .finish()
    .unwrap();
    config.upsert_button(1, None, entry).unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.current_mode().name, "Work");
    assert_eq!(loaded.current_buttons()[0].label, "Editor");
}

#[test]
fn test_legacy_flat_document_migrates_and_stays_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("touchdeck.json");
    fs::write(
        &path,
        r#"{
            "default_mode": "Main",
            "buttons": [
                {"label": "Browser", "command": "firefox"},
                {"label": "Paste", "shortcut": "Ctrl+V"}
            ],
            "columns": 3
        }"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.modes.len(), 1);
    assert_eq!(config.modes[0].name, "Main");
    assert_eq!(config.modes[0].buttons.len(), 2);
    assert_eq!(config.grid_columns, 3);

    // Persisting must not resurrect the flat shape.
    config.save_to(&path).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let top = raw.as_object().unwrap();
    assert!(!top.contains_key("buttons"));
    assert!(!top.contains_key("default_mode"));

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.modes, config.modes);
}

#[test]
fn test_malformed_document_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("touchdeck.json");
    fs::write(&path, "{\"modes\": [oops]}").unwrap();
    assert!(matches!(
        Config::load_from(&path).unwrap_err(),
        ConfigError::Parse(_)
    ));
}

#[test]
fn test_presentation_settings_survive_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("touchdeck.json");
    fs::write(
        &path,
        r##"{
            "modes": [{"name": "Only"}],
            "background": "#112233",
            "header_text": "Bench Deck",
            "fullscreen": false,
            "swipe_threshold": 120.0
        }"##,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.background, "#112233");
    assert_eq!(config.header_text, "Bench Deck");
    assert!(!config.fullscreen);
    assert_eq!(config.swipe_threshold, 120.0);

    config.save_to(&path).unwrap();
    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_out_of_range_index_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("touchdeck.json");
    fs::write(
        &path,
        r#"{"modes": [{"name": "A"}, {"name": "B"}], "current_mode_index": 9}"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.current_mode_index, 0);
    assert_eq!(config.current_mode().name, "A");
}

#[test]
fn test_wraparound_switching_on_loaded_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("touchdeck.json");
    fs::write(
        &path,
        r#"{"modes": [{"name": "A"}, {"name": "B"}, {"name": "C"}], "current_mode_index": 2}"#,
    )
    .unwrap();

    let mut config = Config::load_from(&path).unwrap();
    assert!(config.switch_mode(SwitchDirection::Next));
    assert_eq!(config.current_mode_index, 0);
    assert!(config.switch_mode(SwitchDirection::Previous));
    assert_eq!(config.current_mode_index, 2);
}

#[test]
fn test_delete_then_edit_uses_post_deletion_indices() {
    let mut config = Config::default();
    for label in ["first", "second", "third"] {
        let entry = EditForm {
            label: label.into(),
            command: format!("{label}.exe"),
            ..Default::default()
        }
        .finish()
        .unwrap();
        config.upsert_button(0, None, entry).unwrap();
    }

    config.delete_button(0, 0).unwrap();
    let replacement = EditForm {
        label: "replacement".into(),
        shortcut: "Ctrl+R".into(),
        ..Default::default()
    }
    .finish()
    .unwrap();
    config.upsert_button(0, Some(0), replacement).unwrap();

    let labels: Vec<&str> = config
        .current_buttons()
        .iter()
        .map(|b| b.label.as_str())
        .collect();
    assert_eq!(labels, vec!["replacement", "third"]);
}

#[test]
fn test_invariant_rejected_before_storage() {
    let mut config = Config::default();
    let err = EditForm::default().finish().unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(config.current_buttons().is_empty());

    // Feeding an invalid entry straight to the store is rejected too.
    let invalid = touchdeck_config::ButtonEntry::default();
    assert!(config.upsert_button(0, None, invalid).is_err());
    assert!(config.current_buttons().is_empty());
}
