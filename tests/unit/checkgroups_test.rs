//! Tests for the checkgroups list and its file store

use std::fs;

use signcontrol::adapters::FileCheckgroupsStore;
use signcontrol::core::models::{
    Checkgroups, CheckgroupsError, GroupDescription, NewsgroupName, format_entry,
};
use signcontrol::core::ports::CheckgroupsStore;
use tempfile::TempDir;

fn name(s: &str) -> NewsgroupName {
    NewsgroupName::parse(s).unwrap()
}

// =============================================================================
// Format Tests
// =============================================================================

#[test]
fn test_padding_depends_on_name_length() {
    assert_eq!(format_entry("fr.misc", "Divers."), "fr.misc\t\t\tDivers.");
    assert_eq!(format_entry("fr.comp.os", "OS."), "fr.comp.os\t\tOS.");
    assert_eq!(format_entry("fr.comp.lang.python", "Python."), "fr.comp.lang.python\tPython.");
    // Boundaries: 8 and 16 characters
    assert_eq!(format_entry("fr.abcde", "X."), "fr.abcde\t\tX.");
    assert_eq!(format_entry("fr.abcdefghijklm", "X."), "fr.abcdefghijklm\tX.");
}

#[test]
fn test_parse_collapses_tabs() {
    let groups = Checkgroups::parse("fr.misc\t\t\tDivers.\nfr.test\tTests.\n").unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups.get("fr.misc"), Some("Divers."));
    assert_eq!(groups.get("fr.test"), Some("Tests."));
}

#[test]
fn test_parse_keeps_spaces_in_description() {
    let groups = Checkgroups::parse("fr.misc\t\tAll  kinds of things.\n").unwrap();
    assert_eq!(groups.get("fr.misc"), Some("All  kinds of things."));
}

#[test]
fn test_parse_rejects_line_without_description() {
    let err = Checkgroups::parse("fr.misc\t\tDivers.\nfr.broken\n").unwrap_err();
    match err {
        CheckgroupsError::Malformed { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "fr.broken");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_rejects_extra_field() {
    assert!(matches!(
        Checkgroups::parse("fr.misc\tDivers.\tExtra.\n"),
        Err(CheckgroupsError::Malformed { line: 1, .. })
    ));
}

#[test]
fn test_parse_rejects_blank_line() {
    assert!(matches!(
        Checkgroups::parse("fr.misc\tDivers.\n\nfr.test\tTests.\n"),
        Err(CheckgroupsError::Malformed { line: 2, .. })
    ));
}

#[test]
fn test_to_text_is_sorted() {
    let mut groups = Checkgroups::new();
    groups.insert(&name("fr.test"), &GroupDescription::normalized("Tests.", false));
    groups.insert(&name("fr.annonces"), &GroupDescription::normalized("Annonces.", true));
    assert_eq!(
        groups.to_text(),
        "fr.annonces\t\tAnnonces. (Moderated)\nfr.test\t\t\tTests.\n"
    );
}

#[test]
fn test_insert_replaces_and_remove_forgets() {
    let mut groups = Checkgroups::new();
    let group = name("fr.test");
    assert_eq!(groups.insert(&group, &GroupDescription::normalized("Old.", false)), None);
    assert_eq!(
        groups.insert(&group, &GroupDescription::normalized("New.", false)),
        Some("Old.".to_string())
    );
    assert_eq!(groups.remove("fr.test"), Some("New.".to_string()));
    assert!(groups.is_empty());
    assert_eq!(groups.remove("fr.test"), None);
}

// =============================================================================
// Store Tests
// =============================================================================

#[test]
fn test_absent_store_is_created_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checkgroups");
    let store = FileCheckgroupsStore::new(path.clone());

    let groups = store.load().unwrap();
    assert!(groups.is_empty());
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_store_rewrites_with_canonical_padding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checkgroups");
    fs::write(&path, "fr.misc\tDivers.\n").unwrap();
    let store = FileCheckgroupsStore::new(path.clone());

    let groups = store.load().unwrap();
    store.save(&groups).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "fr.misc\t\t\tDivers.\n");
}

#[test]
fn test_store_reports_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checkgroups");
    fs::write(&path, "fr.misc Divers.\n").unwrap();

    let err = FileCheckgroupsStore::new(path).load().unwrap_err();
    assert!(err.to_string().contains("line 1"));
}
