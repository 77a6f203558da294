//! Compatibility fan-out
//!
//! Old verifiers only understand the legacy signature format, new ones
//! prefer the modern one. In dual mode the same draft is signed twice; the
//! legacy copy gets a distinct Message-ID so that both can be posted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::UnsignedDraft;

/// Inserted before the `@` of the legacy copy's Message-ID
pub const LEGACY_SUFFIX: &str = "-legacy";

/// Which signature formats to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compatibility {
    /// Modern format only
    #[default]
    Off,
    /// Both a modern and a legacy article
    Dual,
    /// Legacy format only
    LegacyOnly,
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Dual => write!(f, "dual"),
            Self::LegacyOnly => write!(f, "legacy-only"),
        }
    }
}

impl std::str::FromStr for Compatibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "dual" => Ok(Self::Dual),
            "legacy-only" | "legacy" => Ok(Self::LegacyOnly),
            _ => Err(format!("Invalid compatibility mode: {s}. Use: off, dual, legacy-only")),
        }
    }
}

/// Errors raised while deriving a legacy copy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FanoutError {
    /// Message-ID without `@`
    #[error("malformed Message-ID {0}")]
    MalformedMessageId(String),

    /// The Message-ID header line was not found exactly once
    #[error("the draft must contain the Message-ID header exactly once (found {0})")]
    MessageIdLine(usize),
}

/// One article to sign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// File stem of this copy
    pub stem: String,
    /// Message-ID of this copy
    pub message_id: String,
    /// Exact text to sign
    pub text: String,
    /// Whether to sign in the legacy format
    pub legacy: bool,
}

/// Insert `suffix` right before the `@` of a Message-ID
pub fn disambiguate(message_id: &str, suffix: &str) -> Result<String, FanoutError> {
    let at = message_id
        .rfind('@')
        .ok_or_else(|| FanoutError::MalformedMessageId(message_id.to_string()))?;
    Ok(format!("{}{suffix}{}", &message_id[..at], &message_id[at..]))
}

/// Replace the `Message-ID:` header line of a rendered draft
pub fn splice_message_id(text: &str, old: &str, new: &str) -> Result<String, FanoutError> {
    let line = format!("Message-ID: {old}\n");
    let count = text.matches(&line).count();
    if count != 1 {
        return Err(FanoutError::MessageIdLine(count));
    }
    Ok(text.replacen(&line, &format!("Message-ID: {new}\n"), 1))
}

/// Derive the articles to sign for a draft
pub fn fan_out(draft: &UnsignedDraft, mode: Compatibility) -> Result<Vec<Variant>, FanoutError> {
    let text = draft.render();
    let modern = Variant {
        stem: draft.stem.clone(),
        message_id: draft.message_id.clone(),
        text,
        legacy: false,
    };

    match mode {
        Compatibility::Off => Ok(vec![modern]),
        Compatibility::LegacyOnly => Ok(vec![Variant {
            legacy: true,
            ..modern
        }]),
        Compatibility::Dual => {
            let message_id = disambiguate(&modern.message_id, LEGACY_SUFFIX)?;
            let legacy = Variant {
                stem: format!("{}{LEGACY_SUFFIX}", modern.stem),
                text: splice_message_id(&modern.text, &modern.message_id, &message_id)?,
                message_id,
                legacy: true,
            };
            Ok(vec![modern, legacy])
        },
    }
}
