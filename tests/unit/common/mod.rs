//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing signcontrol components.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, TimeZone};
use signcontrol::core::ports::{SignError, SignRequest, Signer};
use signcontrol::core::services::{Compatibility, Identity};
use signcontrol::publish::PublishSettings;
use tempfile::TempDir;

/// Armor returned by the mock signers
pub const ARMOR: &str = "-----BEGIN PGP SIGNATURE-----\n\
                         Version: GnuPG v1.2.3\n\
                         \n\
                         iQEcBAEBAgAGBQJJIYQ3AAoJEPrsJhUnD6yR\n\
                         =AbCd\n\
                         -----END PGP SIGNATURE-----\n";

/// Fixed time of issue: 2008-11-17 09:05:03 -0300
pub fn issued_at() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2008, 11, 17, 9, 5, 3)
        .unwrap()
}

/// Identity of the test hierarchy
pub fn identity() -> Identity {
    Identity {
        name: "Example Control".to_string(),
        mail: "control@example.org".to_string(),
        host: "news.example.org".to_string(),
        encoding: "utf-8".to_string(),
    }
}

/// Pipeline settings writing to `dir`
pub fn settings(dir: &Path, compatibility: Compatibility) -> PublishSettings {
    PublishSettings {
        key_id: "control@example.org".to_string(),
        passphrase: None,
        output_dir: dir.to_path_buf(),
        compatibility,
        identity: identity(),
        private_hierarchy: false,
        info_urls: vec!["https://www.example.org/hierarchy/".to_string()],
    }
}

/// One call seen by a mock signer
#[derive(Debug, Clone)]
pub struct SignCall {
    pub input: PathBuf,
    pub text: String,
    pub legacy: bool,
}

/// Signer that writes [`ARMOR`] and records what it was asked to sign
///
/// With `fail_legacy`, legacy requests fail after writing their output,
/// like a signer that dies half way.
#[derive(Default)]
pub struct MockSigner {
    pub calls: RefCell<Vec<SignCall>>,
    pub fail_legacy: bool,
}

impl MockSigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_legacy() -> Self {
        Self {
            fail_legacy: true,
            ..Self::default()
        }
    }
}

impl Signer for MockSigner {
    fn sign(&self, request: &SignRequest<'_>) -> Result<String, SignError> {
        self.calls.borrow_mut().push(SignCall {
            input: request.input.to_path_buf(),
            text: fs::read_to_string(request.input)?,
            legacy: request.legacy,
        });
        fs::write(request.output, ARMOR)?;

        if self.fail_legacy && request.legacy {
            return Err(SignError::Failed {
                status: "exit status: 2".to_string(),
                diagnostic: "gpg: signing failed: Bad passphrase".to_string(),
            });
        }
        Ok(ARMOR.to_string())
    }
}

/// A hierarchy directory holding a configuration and a checkgroups file
pub struct TestHierarchy {
    dir: TempDir,
}

impl TestHierarchy {
    /// Create a hierarchy using `gpg_program` as signer
    pub fn new(gpg_program: &str, compatibility: Compatibility) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join("signcontrol.toml"), config_toml(gpg_program, compatibility))
            .unwrap();
        fs::write(
            dir.path().join("checkgroups"),
            "demo.admin.news\t\tAbout the demo.* hierarchy.\n\
             demo.test\t\tTesting of posting.\n",
        )
        .unwrap();
        Self { dir }
    }

    /// Root of the hierarchy directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the configuration file
    pub fn config(&self) -> PathBuf {
        self.dir.path().join("signcontrol.toml")
    }

    /// Content of a file of the hierarchy
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    /// Names of the files with the given extension
    pub fn files_with_extension(&self, extension: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == extension))
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Configuration of the test hierarchy
pub fn config_toml(gpg_program: &str, compatibility: Compatibility) -> String {
    format!(
        r#"gpg_program = "{gpg_program}"
key_id = "control@example.org"
name = "Example Control"
mail = "control@example.org"
host = "news.example.org"
admin_group = "demo.admin.news"
checkgroups_scope = "demo"
url = "https://www.example.org/hierarchy/ https://www.example.org/faq/"
private_hierarchy = false
checkgroups_file = "checkgroups"
encoding = "utf-8"
newgroup_message_moderated = "$GROUP$ is a moderated newsgroup."
newgroup_message_unmoderated = "$GROUP$ is an unmoderated newsgroup."
rmgroup_message = "$GROUP$ is removed from the hierarchy."
compatibility = "{compatibility}"
"#
    )
}
