//! Unsigned drafts
//!
//! A draft holds exactly the bytes handed to the signer: the
//! `X-Signed-Headers` marker, the signed headers in marker order, a blank
//! line and the body. Verifiers rebuild this same text from the posted
//! article, so nothing else may appear in it.

use super::ArticleKind;

/// Name of the marker header listing the signed headers
pub const SIGNED_HEADERS_MARKER: &str = "X-Signed-Headers";

/// Signed headers, in the order they appear in the draft
pub const SIGNED_HEADERS: [&str; 6] =
    ["Subject", "Control", "Message-ID", "Date", "Injection-Date", "From"];

/// Comma-separated list of the signed headers
#[must_use]
pub fn signed_headers_list() -> String {
    SIGNED_HEADERS.join(",")
}

/// An unsigned control article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedDraft {
    /// Kind of article
    pub kind: ArticleKind,
    /// File stem used for the draft, signature and final article
    pub stem: String,
    /// Value of the `Newsgroups:` header (before any extra target)
    pub newsgroups: String,
    /// `Message-ID` value, angle brackets included
    pub message_id: String,
    /// Signed headers as `(name, value)`, in `SIGNED_HEADERS` order
    pub headers: Vec<(String, String)>,
    /// Article body, newline-terminated
    pub body: String,
}

impl UnsignedDraft {
    /// Render the exact text to be signed
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = format!("{SIGNED_HEADERS_MARKER}: {}\n", signed_headers_list());
        for (name, value) in &self.headers {
            text.push_str(name);
            text.push_str(": ");
            text.push_str(value);
            text.push('\n');
        }
        text.push('\n');
        text.push_str(&self.body);
        text
    }

    /// Value of a header
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
