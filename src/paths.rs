//! Centralized path definitions for signcontrol
//!
//! ## Layout
//!
//! ```text
//! ./signcontrol.toml                      # Per-hierarchy configuration
//! ~/.config/signcontrol/signcontrol.toml  # Fallback configuration
//!
//! <output_dir>/
//! ├── fr.test-1700000000.txt              # Draft (removed after signing)
//! ├── fr.test-1700000000.pgp              # Signature (removed after signing)
//! └── fr.test-1700000000.sig              # Signed control article
//! ```

use std::path::{Path, PathBuf};

/// Configuration filename
pub const CONFIG_FILE: &str = "signcontrol.toml";

/// Global config directory name
const GLOBAL_DIR: &str = "signcontrol";

/// Extension of the unsigned draft
pub const DRAFT_EXTENSION: &str = "txt";

/// Extension of the detached signature
pub const SIGNATURE_EXTENSION: &str = "pgp";

/// Extension of the signed article
pub const ARTICLE_EXTENSION: &str = "sig";

/// Exported public key filename
pub const PUBLIC_KEY_FILE: &str = "public-key.asc";

/// Exported secret key filename
pub const PRIVATE_KEY_FILE: &str = "private-key.asc";

/// Get path to `./signcontrol.toml`.
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Get the global signcontrol directory.
///
/// Returns `~/.config/signcontrol/` (or the platform equivalent).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Configuration files tried in order when none is given explicitly
#[must_use]
pub fn config_candidates() -> Vec<PathBuf> {
    vec![local_config(), global_config()]
}

/// Draft path for an article stem
#[must_use]
pub fn draft_file(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.{DRAFT_EXTENSION}"))
}

/// Signature path for an article stem
#[must_use]
pub fn signature_file(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.{SIGNATURE_EXTENSION}"))
}

/// Signed article path for an article stem
#[must_use]
pub fn article_file(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.{ARTICLE_EXTENSION}"))
}
