//! Property-based tests for the checkgroups format
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::BTreeMap;

use proptest::prelude::*;
use signcontrol::adapters::FileCheckgroupsStore;
use signcontrol::core::models::{Checkgroups, GroupDescription, NewsgroupName, format_entry};
use signcontrol::core::ports::CheckgroupsStore;
use tempfile::TempDir;

fn group_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}(\\.[a-z][a-z0-9+_-]{0,10}){1,3}"
        .prop_filter("reserved names", |name| NewsgroupName::parse(name).is_ok())
}

fn description() -> impl Strategy<Value = String> {
    "[A-Z][a-z ,']{0,40}[a-z]\\."
}

fn checkgroups(entries: &BTreeMap<String, String>) -> Checkgroups {
    let mut groups = Checkgroups::new();
    for (name, text) in entries {
        groups.insert(
            &NewsgroupName::parse(name).unwrap(),
            &GroupDescription::normalized(text, false),
        );
    }
    groups
}

proptest! {
    /// Writing then reading a list gives the same list
    #[test]
    fn text_round_trip(entries in prop::collection::btree_map(group_name(), description(), 0..20)) {
        let groups = checkgroups(&entries);
        prop_assert_eq!(Checkgroups::parse(&groups.to_text()).unwrap(), groups);
    }

    /// The store persists exactly what it was given
    #[test]
    fn store_round_trip(entries in prop::collection::btree_map(group_name(), description(), 1..10)) {
        let dir = TempDir::new().unwrap();
        let store = FileCheckgroupsStore::new(dir.path().join("checkgroups"));
        let groups = checkgroups(&entries);

        store.save(&groups).unwrap();
        prop_assert_eq!(store.load().unwrap(), groups);
    }

    /// Lines are sorted by name and each ends with a newline
    #[test]
    fn text_is_sorted(entries in prop::collection::btree_map(group_name(), description(), 1..20)) {
        let text = checkgroups(&entries).to_text();
        let names: Vec<&str> = text.lines().map(|l| l.split('\t').next().unwrap()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        prop_assert_eq!(names, sorted);
        prop_assert!(text.ends_with('\n'));
    }

    /// Descriptions start on a tab stop past the name
    #[test]
    fn padding_aligns_descriptions(name in group_name(), text in description()) {
        let line = format_entry(&name, &text);
        let tabs = line.matches('\t').count();
        let column = (name.len() / 8 + tabs) * 8;
        prop_assert!(tabs >= 1);
        prop_assert!(column >= 24 || name.len() >= 16);
    }
}
