//! Core domain logic for signcontrol
//!
//! This module contains pure article logic with no I/O dependencies.
//! The signing tool and the checkgroups file are reached through port
//! traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (NewsgroupName, Checkgroups, UnsignedDraft)
//! - `services/` - Drafting, signature embedding, compatibility fan-out
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
