//! Newsgroup names
//!
//! A name is accepted only once it satisfies the naming rules news servers
//! enforce on control articles:
//!
//! - at least two dot-separated components
//! - the first component starts with a letter and is not `control`,
//!   `example` or `to`
//! - every component starts with a letter or digit, is not all digits,
//!   and is not `all` or `ctl`
//! - only `[a-z0-9+_.-]` characters
//!
//! # Examples
//!
//! ```
//! use signcontrol::core::models::NewsgroupName;
//!
//! let name = NewsgroupName::parse("fr.comp.lang.rust").unwrap();
//! assert_eq!(name.components().count(), 4);
//!
//! assert!(NewsgroupName::parse("control.cancel").is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First components that are reserved for special use
const RESERVED_HIERARCHIES: [&str; 3] = ["control", "example", "to"];

/// Components that may not appear anywhere in a name
const RESERVED_COMPONENTS: [&str; 2] = ["all", "ctl"];

static FORBIDDEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9+_.\-]").expect("charset pattern is valid"));

/// Reasons a newsgroup name is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Fewer than two components
    #[error("the group must have at least two components")]
    TooFewComponents,

    /// First component does not start with a letter
    #[error("the first component must start with a letter")]
    FirstComponentNotAlphabetic,

    /// First component is `control`, `example` or `to`
    #[error("the first component must not be \"{0}\"")]
    ReservedHierarchy(String),

    /// Character outside `[a-z0-9+_.-]`
    #[error("the group must not contain characters other than [a-z0-9+_.-]")]
    InvalidCharacters,

    /// Component is `all` or `ctl`
    #[error("\"{0}\" must not be used as a component")]
    ReservedComponent(String),

    /// Component is empty or starts with punctuation
    #[error("each component must start with a letter or a digit (got \"{0}\")")]
    BadComponentStart(String),

    /// Component made of digits only
    #[error("each component must contain at least one non-digit character (got \"{0}\")")]
    NumericComponent(String),
}

/// A validated newsgroup name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NewsgroupName(String);

impl NewsgroupName {
    /// Validate a name, returning the first rule it breaks
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let components: Vec<&str> = input.split('.').collect();
        if components.len() < 2 {
            return Err(NameError::TooFewComponents);
        }

        let first = components[0];
        if !first.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(NameError::FirstComponentNotAlphabetic);
        }
        if RESERVED_HIERARCHIES.contains(&first) {
            return Err(NameError::ReservedHierarchy(first.to_string()));
        }
        if FORBIDDEN_CHARS.is_match(input) {
            return Err(NameError::InvalidCharacters);
        }

        for component in &components {
            if RESERVED_COMPONENTS.contains(component) {
                return Err(NameError::ReservedComponent((*component).to_string()));
            }
            if !component.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
                return Err(NameError::BadComponentStart((*component).to_string()));
            }
            if component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(NameError::NumericComponent((*component).to_string()));
            }
        }

        Ok(Self(input.to_string()))
    }

    /// The name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the dot-separated components
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl std::fmt::Display for NewsgroupName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for NewsgroupName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NewsgroupName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NewsgroupName> for String {
    fn from(name: NewsgroupName) -> Self {
        name.0
    }
}

impl AsRef<str> for NewsgroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
