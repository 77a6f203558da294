//! File-based checkgroups storage
//!
//! Implements `CheckgroupsStore` on the tab-aligned checkgroups file.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::models::{Checkgroups, CheckgroupsError};
use crate::core::ports::CheckgroupsStore;

/// Checkgroups list kept in a plain text file
#[derive(Debug, Clone)]
pub struct FileCheckgroupsStore {
    path: PathBuf,
}

impl FileCheckgroupsStore {
    /// Create a store backed by `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CheckgroupsStore for FileCheckgroupsStore {
    fn load(&self) -> Result<Checkgroups, CheckgroupsError> {
        if !self.path.exists() {
            info!("No checkgroups file found, creating an empty one at {}", self.path.display());
            self.save(&Checkgroups::new())?;
            return Ok(Checkgroups::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let groups = Checkgroups::parse(&content)?;
        debug!("loaded {} group(s) from {}", groups.len(), self.path.display());
        Ok(groups)
    }

    fn save(&self, groups: &Checkgroups) -> Result<(), CheckgroupsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, groups.to_text())?;
        debug!("wrote {} group(s) to {}", groups.len(), self.path.display());
        Ok(())
    }
}
