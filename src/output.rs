//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{Checkgroups, format_entry};
use crate::core::services::Variant;
use crate::publish::VariantOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an article generation
#[derive(Debug, Serialize)]
pub struct PublishReport {
    /// Control command (newgroup, rmgroup, checkgroups)
    pub kind: String,
    /// Group concerned, if any
    pub group: Option<String>,
    /// One entry per signed variant
    pub articles: Vec<ArticleInfo>,
    /// Whether the checkgroups file was rewritten
    pub checkgroups_updated: bool,
}

/// Outcome of one signed variant
#[derive(Debug, Serialize)]
pub struct ArticleInfo {
    /// Message-ID of the article
    pub message_id: String,
    /// Whether it was signed in the legacy format
    pub legacy: bool,
    /// Path of the signed article
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Why the variant failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&VariantOutcome> for ArticleInfo {
    fn from(outcome: &VariantOutcome) -> Self {
        let (path, error) = match &outcome.result {
            Ok(path) => (Some(path.display().to_string()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            message_id: outcome.message_id.clone(),
            legacy: outcome.legacy,
            path,
            error,
        }
    }
}

/// Unsigned drafts shown by `--dry-run`
#[derive(Debug, Serialize)]
pub struct DraftPreview {
    /// One entry per variant that would be signed
    pub drafts: Vec<DraftInfo>,
}

/// One unsigned draft
#[derive(Debug, Serialize)]
pub struct DraftInfo {
    /// Message-ID of the draft
    pub message_id: String,
    /// Whether it would be signed in the legacy format
    pub legacy: bool,
    /// Exact text that would be signed
    pub text: String,
}

impl From<&Variant> for DraftInfo {
    fn from(variant: &Variant) -> Self {
        Self {
            message_id: variant.message_id.clone(),
            legacy: variant.legacy,
            text: variant.text.clone(),
        }
    }
}

/// Result of a group listing
#[derive(Debug, Serialize)]
pub struct GroupListResult {
    /// Groups, sorted by name
    pub groups: Vec<GroupInfo>,
}

/// One listed group
#[derive(Debug, Serialize)]
pub struct GroupInfo {
    /// Newsgroup name
    pub name: String,
    /// Description
    pub description: String,
}

impl From<&Checkgroups> for GroupListResult {
    fn from(groups: &Checkgroups) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|(name, description)| GroupInfo {
                    name: name.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl PublishReport {
    /// Whether every variant was signed
    #[must_use]
    pub fn success(&self) -> bool {
        !self.articles.is_empty() && self.articles.iter().all(|a| a.error.is_none())
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for article in &self.articles {
            let format = if article.legacy { "legacy" } else { "modern" };
            match (&article.path, &article.error) {
                (Some(path), _) => {
                    println!("Signed {} ({format} signature)", article.message_id);
                    println!("  You can now post {path} using rnews or a similar tool.");
                },
                (None, Some(error)) => {
                    println!("NOT signed {} ({format} signature)", article.message_id);
                    println!("  {error}");
                },
                (None, None) => {},
            }
        }
        if self.checkgroups_updated {
            println!("Checkgroups file written.");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl DraftPreview {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for (index, draft) in self.drafts.iter().enumerate() {
                    if index > 0 {
                        println!();
                    }
                    let format = if draft.legacy { "legacy" } else { "modern" };
                    println!("# {} ({format} signature, not signed)", draft.message_id);
                    print!("{}", draft.text);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl GroupListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.groups.is_empty() {
            println!("No groups in the checkgroups file.");
            return;
        }
        for group in &self.groups {
            println!("{}", format_entry(&group.name, &group.description));
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
