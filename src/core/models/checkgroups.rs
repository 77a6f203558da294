//! Checkgroups: the authoritative list of groups in a hierarchy
//!
//! On disk each group is one line: the name, tab padding, the description.
//! The padding emulates 8-column tab stops so descriptions line up:
//!
//! ```text
//! fr.misc<TAB><TAB><TAB>Divers.
//! fr.comp.os<TAB><TAB>Systemes d'exploitation.
//! fr.comp.lang.python<TAB>Le langage Python.
//! ```
//!
//! Lines are written sorted by name. Parsing collapses runs of tabs, so any
//! amount of padding is accepted back.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::{GroupDescription, NewsgroupName};

/// Names shorter than this get three tabs
const SHORT_NAME_LEN: usize = 8;

/// Names shorter than this (and not short) get two tabs
const MEDIUM_NAME_LEN: usize = 16;

/// Errors raised while reading a checkgroups list
#[derive(Debug, Error)]
pub enum CheckgroupsError {
    /// A line does not split into a name and a description
    #[error("the checkgroups is badly formed at line {line}: {content:?}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// Reading or writing the file failed
    #[error("checkgroups file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Format one checkgroups line (without the trailing newline)
#[must_use]
pub fn format_entry(name: &str, description: &str) -> String {
    let padding = if name.len() < SHORT_NAME_LEN {
        "\t\t\t"
    } else if name.len() < MEDIUM_NAME_LEN {
        "\t\t"
    } else {
        "\t"
    };
    format!("{name}{padding}{description}")
}

/// Mapping of newsgroup name to description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Checkgroups {
    groups: BTreeMap<String, String>,
}

impl Checkgroups {
    /// An empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the on-disk text format
    ///
    /// Every line must split into exactly two fields once tab runs are
    /// collapsed. A bad line aborts the parse; it is never skipped.
    pub fn parse(text: &str) -> Result<Self, CheckgroupsError> {
        let mut groups = BTreeMap::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let mut fields = line.split('\t').filter(|field| !field.is_empty());

            match (fields.next(), fields.next(), fields.next()) {
                (Some(name), Some(description), None) => {
                    groups.insert(name.to_string(), description.to_string());
                },
                _ => {
                    return Err(CheckgroupsError::Malformed {
                        line: index + 1,
                        content: raw.to_string(),
                    });
                },
            }
        }

        Ok(Self { groups })
    }

    /// Serialize to the on-disk text format, sorted by name
    #[must_use]
    pub fn to_text(&self) -> String {
        self.groups
            .iter()
            .map(|(name, description)| format_entry(name, description) + "\n")
            .collect()
    }

    /// Insert or replace a group, returning the previous description
    pub fn insert(
        &mut self,
        name: &NewsgroupName,
        description: &GroupDescription,
    ) -> Option<String> {
        self.groups.insert(name.to_string(), description.to_string())
    }

    /// Remove a group, returning its description
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.groups.remove(name)
    }

    /// Description of a group
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.groups.get(name).map(String::as_str)
    }

    /// Whether the group is listed
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Iterate over `(name, description)` in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().map(|(name, description)| (name.as_str(), description.as_str()))
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
