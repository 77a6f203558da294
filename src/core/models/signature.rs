//! ASCII-armored detached signatures
//!
//! Only two things are kept from the armor: the `Version:` header, which
//! becomes the first word of `X-PGP-Sig`, and the radix-64 body lines.
//! Delimiter lines (`-----BEGIN ...`) and other armor headers are dropped.

use thiserror::Error;

/// Errors raised while reading an armored signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArmorError {
    /// No `Version:` armor header
    #[error("the signature has no Version: header (was it produced with --emit-version?)")]
    MissingVersion,

    /// No body lines
    #[error("the signature has no body")]
    EmptyBody,
}

/// A parsed armored signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmoredSignature {
    version: String,
    body: Vec<String>,
}

impl ArmoredSignature {
    /// Parse armor text
    pub fn parse(armor: &str) -> Result<Self, ArmorError> {
        let mut version = None;
        let mut body = Vec::new();
        let mut in_headers = true;

        for line in armor.lines().map(str::trim_end) {
            if line.starts_with('-') {
                continue;
            }
            if in_headers {
                if line.is_empty() {
                    in_headers = false;
                } else if let Some(value) = line.strip_prefix("Version:") {
                    version = Some(value.trim().replace(' ', "_"));
                }
                // Comment: and other armor headers are not signature data
                continue;
            }
            if !line.is_empty() {
                body.push(line.to_string());
            }
        }

        let version = version.ok_or(ArmorError::MissingVersion)?;
        if body.is_empty() {
            return Err(ArmorError::EmptyBody);
        }
        Ok(Self { version, body })
    }

    /// Signer version token, spaces replaced by underscores
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Radix-64 body lines, checksum line included
    #[must_use]
    pub fn body(&self) -> &[String] {
        &self.body
    }
}
