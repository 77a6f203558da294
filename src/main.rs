//! signcontrol - Generate and sign Usenet control articles
//!
//! Drafts newgroup, rmgroup and checkgroups articles for a hierarchy,
//! signs them with GnuPG and keeps the hierarchy's checkgroups file.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::process::ExitCode;

use signcontrol::config::ConfigError;

mod cli;

/// Exit status of fatal configuration errors
const CONFIG_EXIT_STATUS: u8 = 2;

/// Main entry point for the signcontrol CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if e.chain().any(|cause| cause.is::<ConfigError>()) {
                ExitCode::from(CONFIG_EXIT_STATUS)
            } else {
                ExitCode::FAILURE
            }
        },
    }
}
