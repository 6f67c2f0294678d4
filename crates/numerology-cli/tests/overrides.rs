//! Tests for loading Y override files from disk.

use std::fs;

use numerology_cli::overrides::load_overrides;
use numerology_core::compute_numerology;
use numerology_model::{BirthRecord, ComputeOptions, YMode};

#[test]
fn file_entries_merge_over_builtin() {
    let path = std::env::temp_dir().join("numerology_overrides_merge.toml");
    fs::write(&path, "[overrides]\nMaya = \"vowel\"\nYVES = \"vowel\"\n").unwrap();

    let table = load_overrides(&path).unwrap();
    assert_eq!(table.mode_for("MAYA"), Some(YMode::Vowel));
    assert_eq!(table.mode_for("YVES"), Some(YMode::Vowel));
    assert_eq!(table.mode_for("MYRIAM"), Some(YMode::Vowel));
    assert_eq!(table.len(), 4);

    let record = BirthRecord::new("Maya", "Dupont", "15/06/1990");
    let options = ComputeOptions::new()
        .with_target_year(2026)
        .with_y_overrides(table);
    let result = compute_numerology(&record, &options).unwrap();
    assert!(
        result
            .y_rule
            .overrides_applied
            .iter()
            .any(|entry| entry.token == "MAYA" && entry.mode == YMode::Vowel)
    );

    fs::remove_file(&path).ok();
}

#[test]
fn missing_file_names_the_path() {
    let path = std::env::temp_dir().join("numerology_overrides_missing.toml");
    fs::remove_file(&path).ok();
    let err = load_overrides(&path).unwrap_err();
    assert!(format!("{err:#}").contains("numerology_overrides_missing.toml"));
}

#[test]
fn invalid_key_is_reported_with_context() {
    let path = std::env::temp_dir().join("numerology_overrides_invalid.toml");
    fs::write(&path, "[overrides]\nANNE = \"consonant\"\n").unwrap();
    let err = load_overrides(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("load Y overrides from"));
    assert!(message.contains("ANNE"));
    fs::remove_file(&path).ok();
}
