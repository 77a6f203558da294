//! Article services
//!
//! Pure functions over the domain models, no I/O:
//!
//! - [`drafting`] - request to unsigned draft
//! - [`embedding`] - draft plus signature to final article
//! - [`fanout`] - how many signed copies to produce

pub mod drafting;
pub mod embedding;
pub mod fanout;

pub use drafting::{Identity, draft, expand_template, format_date, message_id};
pub use embedding::{EmbedError, Envelope, SpliceAction, SpliceState, embed, transition};
pub use fanout::{Compatibility, FanoutError, LEGACY_SUFFIX, Variant, fan_out};
