//! Signature embedding
//!
//! Rebuilds the final article from a signed draft. Verifiers rebuild the
//! signed text from the headers named in `X-PGP-Sig`, so the headers up to
//! and including `From:` must come out exactly as they were signed, and the
//! unsigned headers go after them.
//!
//! The draft is scanned line by line through three states:
//!
//! | state            | line                  | action                          | next             |
//! |------------------|-----------------------|---------------------------------|------------------|
//! | `BeforeFrom`     | `X-Signed-Headers...` | drop                            | `BeforeFrom`     |
//! | `BeforeFrom`     | `From:...`            | canonical `From:` + envelope    | `AtFrom`         |
//! | `BeforeFrom`     | other                 | copy                            | `BeforeFrom`     |
//! | `AtFrom`         | any                   | `X-PGP-Sig` block, then copy    | `AfterSignature` |
//! | `AfterSignature` | any                   | copy                            | `AfterSignature` |

use thiserror::Error;

use super::drafting::Identity;
use crate::core::models::{
    ArmoredSignature, ArticleKind, SIGNED_HEADERS_MARKER, signed_headers_list,
};

/// Extra target of checkgroups in public hierarchies
pub const HIERARCHIES_GROUP: &str = "news.admin.hierarchies";

/// Documentation of the signature format, appended to `X-Info`
pub const PGPCONTROL_README: &str = "ftp://ftp.isc.org/pub/pgpcontrol/README.html";

/// Errors raised while rebuilding an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// The draft has no `From:` header to anchor the signature on
    #[error("the draft has no From: header")]
    MissingFrom,
}

/// Position of the scan relative to the signed headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceState {
    /// Still inside the signed headers
    BeforeFrom,
    /// `From:` and the envelope headers were written
    AtFrom,
    /// `X-PGP-Sig` was written; the rest is copied
    AfterSignature,
}

/// What to do with the current draft line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceAction {
    /// Copy the line unchanged
    Keep,
    /// Drop the line
    Skip,
    /// Write the canonical `From:` line and the envelope headers
    ReplaceFrom,
    /// Write the `X-PGP-Sig` block, then copy the line
    InjectSignature,
}

/// Transition table of the scan
#[must_use]
pub fn transition(state: SpliceState, line: &str) -> (SpliceState, SpliceAction) {
    match state {
        SpliceState::BeforeFrom if line.starts_with(SIGNED_HEADERS_MARKER) => {
            (SpliceState::BeforeFrom, SpliceAction::Skip)
        },
        SpliceState::BeforeFrom if line.starts_with("From:") => {
            (SpliceState::AtFrom, SpliceAction::ReplaceFrom)
        },
        SpliceState::BeforeFrom => (SpliceState::BeforeFrom, SpliceAction::Keep),
        SpliceState::AtFrom => (SpliceState::AfterSignature, SpliceAction::InjectSignature),
        SpliceState::AfterSignature => (SpliceState::AfterSignature, SpliceAction::Keep),
    }
}

/// Unsigned headers added to every article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Issuer identity
    pub identity: Identity,
    /// Kind of article
    pub kind: ArticleKind,
    /// Target group (the group itself, or the admin group for checkgroups)
    pub newsgroups: String,
    /// Whether the hierarchy is private (no `news.admin.hierarchies`)
    pub private_hierarchy: bool,
    /// URLs listed in `X-Info`, before the pgpcontrol README
    pub info_urls: Vec<String>,
}

impl Envelope {
    /// Lines written right after `From:`, newline-terminated
    #[must_use]
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("From: {}\n", self.identity.from_header()),
            format!("Approved: {}\n", self.identity.mail),
        ];

        if self.kind == ArticleKind::Checkgroups && !self.private_hierarchy {
            lines.push(format!("Newsgroups: {},{HIERARCHIES_GROUP}\n", self.newsgroups));
            lines.push(format!("Followup-To: {}\n", self.newsgroups));
        } else {
            lines.push(format!("Newsgroups: {}\n", self.newsgroups));
        }

        lines.push("Path: not-for-mail\n".to_string());

        let mut urls = self.info_urls.iter().map(String::as_str).chain([PGPCONTROL_README]);
        if let Some(first) = urls.next() {
            lines.push(format!("X-Info: {first}\n"));
        }
        lines.extend(urls.map(|url| format!("\t{url}\n")));

        lines.push("MIME-Version: 1.0\n".to_string());
        lines.push(format!("Content-Type: {}\n", self.kind.content_type(&self.identity.encoding)));
        lines.push("Content-Transfer-Encoding: 8bit\n".to_string());
        lines
    }
}

/// The `X-PGP-Sig` header block, folded, newline-terminated
#[must_use]
pub fn signature_header(signature: &ArmoredSignature) -> String {
    let mut header = format!("X-PGP-Sig: {} {}\n", signature.version(), signed_headers_list());
    for line in signature.body() {
        header.push('\t');
        header.push_str(line);
        header.push('\n');
    }
    header
}

/// Rebuild the final article from the draft text and its signature
pub fn embed(
    draft: &str,
    signature: &ArmoredSignature,
    envelope: &Envelope,
) -> Result<String, EmbedError> {
    let mut article = String::with_capacity(draft.len() + 1024);
    let mut state = SpliceState::BeforeFrom;

    for line in draft.split_inclusive('\n') {
        let (next, action) = transition(state, line);
        match action {
            SpliceAction::Keep => article.push_str(line),
            SpliceAction::Skip => {},
            SpliceAction::ReplaceFrom => {
                for header in envelope.header_lines() {
                    article.push_str(&header);
                }
            },
            SpliceAction::InjectSignature => {
                article.push_str(&signature_header(signature));
                article.push_str(line);
            },
        }
        state = next;
    }

    match state {
        SpliceState::BeforeFrom => Err(EmbedError::MissingFrom),
        SpliceState::AtFrom => {
            article.push_str(&signature_header(signature));
            Ok(article)
        },
        SpliceState::AfterSignature => Ok(article),
    }
}
