//! Signing pipeline
//!
//! For every variant of a draft: write the draft file, have it signed,
//! splice the signature into the final article and write it next to the
//! draft. Drafts and signatures are scratch files, removed whether the
//! variant succeeds or not. A failed variant never stops the others.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::Config;
use crate::core::models::{ArmorError, ArmoredSignature, UnsignedDraft};
use crate::core::ports::{SignError, SignRequest, Signer};
use crate::core::services::{
    Compatibility, EmbedError, Envelope, FanoutError, Identity, Variant, embed, fan_out,
};
use crate::paths;

/// Errors of one pipeline run
#[derive(Debug, Error)]
pub enum PublishError {
    /// No variants could be derived from the draft
    #[error(transparent)]
    Fanout(#[from] FanoutError),

    /// Writing a file failed
    #[error("could not write {}: {source}", path.display())]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The signer failed
    #[error(transparent)]
    Sign(#[from] SignError),

    /// The signature could not be read
    #[error(transparent)]
    Armor(#[from] ArmorError),

    /// The article could not be rebuilt
    #[error(transparent)]
    Embed(#[from] EmbedError),
}

/// Everything the pipeline needs besides the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSettings {
    /// Key used to sign
    pub key_id: String,
    /// Passphrase handed to the signer, if any
    pub passphrase: Option<String>,
    /// Where drafts and articles are written
    pub output_dir: PathBuf,
    /// Signature formats to produce
    pub compatibility: Compatibility,
    /// Issuer identity
    pub identity: Identity,
    /// Whether the hierarchy is private
    pub private_hierarchy: bool,
    /// URLs listed in `X-Info`
    pub info_urls: Vec<String>,
}

impl PublishSettings {
    /// Settings from the configuration, with command-line overrides
    #[must_use]
    pub fn from_config(
        config: &Config,
        passphrase: Option<String>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            key_id: config.key_id.clone(),
            passphrase,
            output_dir: output_dir.unwrap_or_else(|| config.output_dir.clone()),
            compatibility: config.compatibility,
            identity: config.identity(),
            private_hierarchy: config.private_hierarchy,
            info_urls: config.info_urls(),
        }
    }

    /// Unsigned headers for a draft
    #[must_use]
    pub fn envelope(&self, draft: &UnsignedDraft) -> Envelope {
        Envelope {
            identity: self.identity.clone(),
            kind: draft.kind,
            newsgroups: draft.newsgroups.clone(),
            private_hierarchy: self.private_hierarchy,
            info_urls: self.info_urls.clone(),
        }
    }
}

/// Result of one variant
#[derive(Debug)]
pub struct VariantOutcome {
    /// Message-ID of the variant
    pub message_id: String,
    /// Whether the legacy format was requested
    pub legacy: bool,
    /// Path of the signed article, or why there is none
    pub result: Result<PathBuf, PublishError>,
}

/// Files removed when dropped
#[derive(Debug, Default)]
struct ScratchFiles(Vec<PathBuf>);

impl ScratchFiles {
    fn track(&mut self, path: &Path) {
        self.0.push(path.to_path_buf());
    }
}

impl Drop for ScratchFiles {
    fn drop(&mut self) {
        for path in self.0.iter().filter(|p| p.exists()) {
            match fs::remove_file(path) {
                Ok(()) => debug!("removed {}", path.display()),
                Err(e) => warn!("could not remove {}: {e}", path.display()),
            }
        }
    }
}

/// Sign every variant of `draft`
pub fn publish(
    signer: &dyn Signer,
    draft: &UnsignedDraft,
    settings: &PublishSettings,
) -> Result<Vec<VariantOutcome>, PublishError> {
    let envelope = settings.envelope(draft);
    let variants = fan_out(draft, settings.compatibility)?;

    Ok(variants
        .iter()
        .map(|variant| {
            let result = publish_variant(signer, variant, &envelope, settings);
            if let Err(e) = &result {
                warn!("{} was not signed: {e}", variant.message_id);
            }
            VariantOutcome {
                message_id: variant.message_id.clone(),
                legacy: variant.legacy,
                result,
            }
        })
        .collect())
}

/// Sign one variant and write its article
pub fn publish_variant(
    signer: &dyn Signer,
    variant: &Variant,
    envelope: &Envelope,
    settings: &PublishSettings,
) -> Result<PathBuf, PublishError> {
    let dir = settings.output_dir.as_path();
    let draft_path = paths::draft_file(dir, &variant.stem);
    let signature_path = paths::signature_file(dir, &variant.stem);
    let article_path = paths::article_file(dir, &variant.stem);

    let mut scratch = ScratchFiles::default();
    scratch.track(&draft_path);
    scratch.track(&signature_path);

    write_file(&draft_path, &variant.text)?;

    let armor = signer.sign(&SignRequest {
        input: &draft_path,
        output: &signature_path,
        key_id: &settings.key_id,
        passphrase: settings.passphrase.as_deref(),
        legacy: variant.legacy,
    })?;
    let signature = ArmoredSignature::parse(&armor)?;
    let article = embed(&variant.text, &signature, envelope)?;

    write_file(&article_path, &article)?;
    info!("Wrote {}", article_path.display());
    Ok(article_path)
}

fn write_file(path: &Path, content: &str) -> Result<(), PublishError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PublishError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| PublishError::Write {
        path: path.to_path_buf(),
        source,
    })
}
