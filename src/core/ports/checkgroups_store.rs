//! Checkgroups store port
//!
//! Defines the interface for loading and saving the list of groups.

use super::super::models::{Checkgroups, CheckgroupsError};

/// Persistent storage of the checkgroups list
pub trait CheckgroupsStore {
    /// Load the list, creating an empty one if none exists yet
    fn load(&self) -> Result<Checkgroups, CheckgroupsError>;

    /// Replace the stored list
    fn save(&self, groups: &Checkgroups) -> Result<(), CheckgroupsError>;
}
