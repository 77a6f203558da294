//! Signer port
//!
//! Defines the interface to the program that produces detached signatures.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures of the signing collaborator
#[derive(Debug, Error)]
pub enum SignError {
    /// The signer could not be started
    #[error("could not run the signer {program}: {source}")]
    Spawn {
        /// Program that was run
        program: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The signer exited with a failure status
    #[error("the signer failed ({status}): {diagnostic}")]
    Failed {
        /// Exit status as reported by the OS
        status: String,
        /// Standard error of the signer, trimmed
        diagnostic: String,
    },

    /// The signer reported success but wrote nothing
    #[error("the signer did not produce {}", .0.display())]
    MissingOutput(PathBuf),

    /// Reading the produced signature failed
    #[error("could not read the signature: {0}")]
    Io(#[from] std::io::Error),
}

/// One signing request
#[derive(Debug, Clone, Copy)]
pub struct SignRequest<'a> {
    /// File whose exact bytes are signed
    pub input: &'a Path,
    /// Where the armored signature is written
    pub output: &'a Path,
    /// Key identity (uid or fingerprint)
    pub key_id: &'a str,
    /// Passphrase; the signer prompts on its own when absent
    pub passphrase: Option<&'a str>,
    /// Use the legacy-compatible signature format
    pub legacy: bool,
}

/// Producer of ASCII-armored detached signatures
///
/// Implementations wrap a vetted signing tool; nothing here implements
/// cryptography.
pub trait Signer {
    /// Sign `request.input` and return the armored signature text
    ///
    /// The signature is also left at `request.output`; removing it is the
    /// caller's job.
    fn sign(&self, request: &SignRequest<'_>) -> Result<String, SignError>;
}
