//! Key manager port
//!
//! Key lifecycle operations. They are interactive shims over the signing
//! tool: the tool talks to the operator directly.

use std::path::Path;

/// Key lifecycle operations of the signing tool
pub trait KeyManager {
    /// Show the installed secret keys
    fn list_secret_keys(&self) -> anyhow::Result<()>;

    /// Generate a new key pair
    fn generate(&self) -> anyhow::Result<()>;

    /// Export a public key (armored) to `output`
    fn export_public(&self, uid: &str, output: &Path) -> anyhow::Result<()>;

    /// Export a secret key (armored) to `output`
    fn export_secret(&self, uid: &str, output: &Path) -> anyhow::Result<()>;

    /// Import a secret key from `input`
    fn import_secret(&self, input: &Path) -> anyhow::Result<()>;

    /// Delete a secret and public key pair
    fn delete(&self, uid: &str) -> anyhow::Result<()>;

    /// Generate a revocation certificate
    fn revoke(&self, uid: &str) -> anyhow::Result<()>;
}
