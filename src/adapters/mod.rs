//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `gpg/` - GnuPG signer and key manager
//! - `file/` - Checkgroups text file

pub mod file;
pub mod gpg;

pub use file::FileCheckgroupsStore;
pub use gpg::GnuPg;
