//! Newsgroup descriptions
//!
//! A description is checked against the moderation status of its group.
//! Some problems are only recommendations and can be overridden by the
//! operator; others always reject the description.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recommended maximum length of a description
pub const MAX_DESCRIPTION_LEN: usize = 56;

/// Suffix carried by the description of every moderated group
pub const MODERATED_SUFFIX: &str = " (Moderated)";

const MODERATED_MARKER: &str = "(Moderated)";

/// A problem found in a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DescriptionIssue {
    /// Empty description
    #[error("the description must not be empty")]
    Empty,

    /// Tab, newline or other control character
    #[error("the description must not contain tabs, newlines or control characters")]
    ControlCharacter,

    /// Longer than the recommended limit
    #[error("the description is too long ({0} characters, {MAX_DESCRIPTION_LEN} recommended)")]
    TooLong(usize),

    /// Unmoderated group whose description ends with the moderated suffix
    #[error("the description of an unmoderated group must not end with \" (Moderated)\"")]
    UnmoderatedSuffix,

    /// `(Moderated)` appears where it should not
    #[error("the description must not contain \"(Moderated)\" except as its final suffix")]
    MisplacedModerated,
}

impl DescriptionIssue {
    /// Whether the operator may accept the description anyway
    #[must_use]
    pub const fn is_overridable(self) -> bool {
        matches!(self, Self::TooLong(_) | Self::MisplacedModerated)
    }
}

/// A newsgroup description, normalized for the moderation status of its group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupDescription(String);

impl GroupDescription {
    /// List every issue with `text` for a group of the given status
    #[must_use]
    pub fn issues(text: &str, moderated: bool) -> Vec<DescriptionIssue> {
        let mut issues = Vec::new();

        if text.trim().is_empty() {
            issues.push(DescriptionIssue::Empty);
            return issues;
        }
        if text.chars().any(char::is_control) {
            issues.push(DescriptionIssue::ControlCharacter);
        }

        let length = text.chars().count();
        if length > MAX_DESCRIPTION_LEN {
            issues.push(DescriptionIssue::TooLong(length));
        }

        let markers = text.matches(MODERATED_MARKER).count();
        if markers > 0 {
            if !moderated && text.ends_with(MODERATED_SUFFIX) {
                issues.push(DescriptionIssue::UnmoderatedSuffix);
            } else if !moderated || markers > 1 || !text.ends_with(MODERATED_SUFFIX) {
                issues.push(DescriptionIssue::MisplacedModerated);
            }
        }

        issues
    }

    /// Accept a description, appending the moderated suffix when needed
    ///
    /// With `allow_overridable`, issues the operator may confirm are
    /// accepted; any other issue rejects the description.
    pub fn new(
        text: &str,
        moderated: bool,
        allow_overridable: bool,
    ) -> Result<Self, DescriptionIssue> {
        let text = text.trim();
        if let Some(issue) = Self::issues(text, moderated)
            .into_iter()
            .find(|issue| !(allow_overridable && issue.is_overridable()))
        {
            return Err(issue);
        }
        Ok(Self::normalized(text, moderated))
    }

    /// Build a description without checking it, only applying the suffix
    #[must_use]
    pub fn normalized(text: &str, moderated: bool) -> Self {
        if moderated && !text.ends_with(MODERATED_SUFFIX) {
            Self(format!("{text}{MODERATED_SUFFIX}"))
        } else {
            Self(text.to_string())
        }
    }

    /// Whether the description carries the moderated suffix
    #[must_use]
    pub fn is_moderated(&self) -> bool {
        self.0.ends_with(MODERATED_SUFFIX)
    }

    /// The description as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GroupDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
