//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use signcontrol::core::models::{
    DescriptionIssue, GroupDescription, NameError, NewsgroupName, Serial,
};
use signcontrol::core::services::Compatibility;
use test_case::test_case;

// =============================================================================
// Newsgroup Name Tests
// =============================================================================

#[test_case("fr.comp.lang.python" ; "deep name")]
#[test_case("news.test" ; "two components")]
#[test_case("alt.2600hz.hackers" ; "digits with letters")]
#[test_case("comp.lang.c++" ; "plus signs")]
#[test_case("de.comp.os.unix.x11" ; "mixed component")]
#[test_case("fr.misc.under_score-dash" ; "underscore and dash")]
fn test_valid_names(name: &str) {
    assert_eq!(NewsgroupName::parse(name).unwrap().as_str(), name);
}

#[test_case("a", NameError::TooFewComponents ; "single component")]
#[test_case("1a.b", NameError::FirstComponentNotAlphabetic ; "first starts with digit")]
#[test_case("control.foo", NameError::ReservedHierarchy("control".into()) ; "control hierarchy")]
#[test_case("example.foo", NameError::ReservedHierarchy("example".into()) ; "example hierarchy")]
#[test_case("to.foo", NameError::ReservedHierarchy("to".into()) ; "to hierarchy")]
#[test_case("fr.Misc", NameError::InvalidCharacters ; "uppercase")]
#[test_case("fr.mi sc", NameError::InvalidCharacters ; "space")]
#[test_case("a..b", NameError::BadComponentStart(String::new()) ; "empty component")]
#[test_case("a.-b", NameError::BadComponentStart("-b".into()) ; "punctuation start")]
#[test_case("a.ctl.b", NameError::ReservedComponent("ctl".into()) ; "ctl component")]
#[test_case("a.all", NameError::ReservedComponent("all".into()) ; "all component")]
#[test_case("a.123.b", NameError::NumericComponent("123".into()) ; "numeric component")]
fn test_invalid_names(name: &str, expected: NameError) {
    assert_eq!(NewsgroupName::parse(name), Err(expected));
}

// =============================================================================
// Description Tests
// =============================================================================

#[test_case("", false, DescriptionIssue::Empty ; "empty")]
#[test_case("Tab\there.", false, DescriptionIssue::ControlCharacter ; "tab")]
#[test_case("Talks (Moderated)", false, DescriptionIssue::UnmoderatedSuffix ; "unmoderated suffix")]
#[test_case("About (Moderated) groups.", true, DescriptionIssue::MisplacedModerated ; "misplaced marker")]
fn test_description_issue(text: &str, moderated: bool, expected: DescriptionIssue) {
    assert!(GroupDescription::issues(text, moderated).contains(&expected));
}

#[test_case(DescriptionIssue::TooLong(60), true ; "too long is overridable")]
#[test_case(DescriptionIssue::MisplacedModerated, true ; "misplaced is overridable")]
#[test_case(DescriptionIssue::Empty, false ; "empty is fatal")]
#[test_case(DescriptionIssue::ControlCharacter, false ; "control is fatal")]
#[test_case(DescriptionIssue::UnmoderatedSuffix, false ; "suffix is fatal")]
fn test_issue_overridable(issue: DescriptionIssue, expected: bool) {
    assert_eq!(issue.is_overridable(), expected);
}

#[test]
fn test_issue_is_copied_not_moved() {
    let issue = DescriptionIssue::TooLong(60);
    let kept = issue;
    assert_eq!(issue, kept);
    assert!(kept.is_overridable());
}

#[test_case("Discussions.", false, "Discussions." ; "unmoderated unchanged")]
#[test_case("Announcements.", true, "Announcements. (Moderated)" ; "suffix appended")]
#[test_case("Announcements. (Moderated)", true, "Announcements. (Moderated)" ; "suffix kept once")]
#[test_case("  Padded.  ", false, "Padded." ; "trimmed")]
fn test_description_normalized(text: &str, moderated: bool, expected: &str) {
    let description = GroupDescription::new(text, moderated, false).unwrap();
    assert_eq!(description.as_str(), expected);
    assert_eq!(description.is_moderated(), moderated);
}

#[test]
fn test_long_description_needs_force() {
    let text = "A description that goes well beyond the recommended length.";
    assert!(matches!(
        GroupDescription::new(text, false, false),
        Err(DescriptionIssue::TooLong(_))
    ));
    assert_eq!(GroupDescription::new(text, false, true).unwrap().as_str(), text);
}

#[test]
fn test_force_does_not_override_fatal_issues() {
    assert_eq!(
        GroupDescription::new("Talks (Moderated)", false, true),
        Err(DescriptionIssue::UnmoderatedSuffix)
    );
}

// =============================================================================
// Serial and Compatibility Parsing
// =============================================================================

#[test_case("0", Some(0) ; "first of the day")]
#[test_case("42", Some(42) ; "two digits")]
#[test_case("99", Some(99) ; "maximum")]
#[test_case("100", None ; "too large")]
#[test_case("-1", None ; "negative")]
#[test_case("two", None ; "not a number")]
fn test_serial_parsing(input: &str, expected: Option<u8>) {
    assert_eq!(input.parse::<Serial>().ok().map(Serial::value), expected);
}

#[test_case("off", Compatibility::Off ; "off")]
#[test_case("dual", Compatibility::Dual ; "dual")]
#[test_case("legacy-only", Compatibility::LegacyOnly ; "legacy only")]
#[test_case("Legacy", Compatibility::LegacyOnly ; "legacy alias")]
fn test_compatibility_parsing(input: &str, expected: Compatibility) {
    assert_eq!(input.parse::<Compatibility>().unwrap(), expected);
}
