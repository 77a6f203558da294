//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the article logic and the
//! outside world (the signing tool, the checkgroups file).
//!
//! Implementations live in the `adapters` module; tests use hand-written
//! mocks.

mod checkgroups_store;
mod key_manager;
mod signer;

pub use checkgroups_store::CheckgroupsStore;
pub use key_manager::KeyManager;
pub use signer::{SignError, SignRequest, Signer};
