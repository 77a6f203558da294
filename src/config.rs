//! Hierarchy configuration
//!
//! Everything about the hierarchy and its administrator lives in one TOML
//! file of recognized keys:
//!
//! ```toml
//! gpg_program = "gpg"
//! key_id = "control@example.org"
//! name = "Example Hierarchy Administrator"
//! mail = "control@example.org"
//! host = "news.example.org"
//! admin_group = "example.admin.news"
//! checkgroups_scope = "example"
//! url = "https://www.example.org/hierarchy/"
//! private_hierarchy = false
//! checkgroups_file = "checkgroups"
//! encoding = "utf-8"
//! newgroup_message_moderated = "$GROUP$ is a moderated newsgroup."
//! newgroup_message_unmoderated = "$GROUP$ is an unmoderated newsgroup."
//! rmgroup_message = "$GROUP$ is removed."
//! compatibility = "dual"   # optional: off, dual, legacy-only
//! ```
//!
//! A missing file or key is fatal: nothing can be signed without them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::{Compatibility, Identity};
use crate::paths;

/// Fatal configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file could be found
    #[error("the configuration file is absent (looked for {}); please install it first", list_paths(.0))]
    NotFound(Vec<PathBuf>),

    /// The configuration file could not be read
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// Configuration file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The configuration file is not valid, or lacks a key
    #[error("you must update the configuration file {}: {source}", path.display())]
    Parse {
        /// Configuration file
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A required key is empty
    #[error("the parameter {0} must not be empty")]
    Empty(&'static str),

    /// The signing program does not exist
    #[error("the signing program {0} was not found; install GnuPG and set gpg_program")]
    SignerNotFound(String),
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// signcontrol configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Signing program (path or name looked up in `PATH`)
    pub gpg_program: String,
    /// Key used to sign
    pub key_id: String,
    /// Administrator name in `From:`
    pub name: String,
    /// Administrator address in `From:` and `Approved:`
    pub mail: String,
    /// Host part of Message-IDs
    pub host: String,
    /// Group receiving checkgroups articles
    pub admin_group: String,
    /// Scope of checkgroups articles (e.g. `fr`)
    pub checkgroups_scope: String,
    /// Hierarchy URL(s) for `X-Info`, whitespace-separated
    pub url: String,
    /// Whether the hierarchy is private
    pub private_hierarchy: bool,
    /// Checkgroups file, relative to the configuration file
    pub checkgroups_file: PathBuf,
    /// Charset of articles
    pub encoding: String,
    /// Body template of moderated newgroups
    pub newgroup_message_moderated: String,
    /// Body template of unmoderated newgroups
    pub newgroup_message_unmoderated: String,
    /// Body template of rmgroups
    pub rmgroup_message: String,
    /// Signature formats to produce
    #[serde(default)]
    pub compatibility: Compatibility,
    /// Where articles are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Find the configuration file: the explicit one, else the first candidate that exists
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = explicit {
            return if path.is_file() {
                Ok(path.to_path_buf())
            } else {
                Err(ConfigError::NotFound(vec![path.to_path_buf()]))
            };
        }

        let candidates = paths::config_candidates();
        candidates
            .iter()
            .find(|path| path.is_file())
            .cloned()
            .ok_or(ConfigError::NotFound(candidates))
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        if config.checkgroups_file.is_relative() {
            if let Some(base) = path.parent() {
                config.checkgroups_file = base.join(&config.checkgroups_file);
            }
        }
        Ok(config)
    }

    /// Reject empty required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("gpg_program", &self.gpg_program),
            ("key_id", &self.key_id),
            ("name", &self.name),
            ("mail", &self.mail),
            ("host", &self.host),
            ("admin_group", &self.admin_group),
            ("checkgroups_scope", &self.checkgroups_scope),
            ("encoding", &self.encoding),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((key, _)) => Err(ConfigError::Empty(*key)),
            None => Ok(()),
        }
    }

    /// Identity used in drafts and envelopes
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            name: self.name.clone(),
            mail: self.mail.clone(),
            host: self.host.clone(),
            encoding: self.encoding.clone(),
        }
    }

    /// URLs listed in `X-Info`
    #[must_use]
    pub fn info_urls(&self) -> Vec<String> {
        self.url.split_whitespace().map(String::from).collect()
    }

    /// Body template for a newgroup of the given status
    #[must_use]
    pub fn newgroup_template(&self, moderated: bool) -> &str {
        if moderated {
            &self.newgroup_message_moderated
        } else {
            &self.newgroup_message_unmoderated
        }
    }
}
