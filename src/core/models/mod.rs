//! Domain models for signcontrol
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`NewsgroupName`] - A validated group name
//! - [`GroupDescription`] - A description checked against moderation status
//! - [`Checkgroups`] - The list of groups of a hierarchy
//! - [`Serial`] - Daily revision of a checkgroups
//! - [`ArticleRequest`] - What the operator asked for
//! - [`UnsignedDraft`] - The exact text handed to the signer
//! - [`ArmoredSignature`] - A parsed detached signature

mod checkgroups;
mod description;
mod draft;
mod newsgroup;
mod request;
mod serial;
mod signature;

pub use checkgroups::{Checkgroups, CheckgroupsError, format_entry};
pub use description::{DescriptionIssue, GroupDescription, MAX_DESCRIPTION_LEN, MODERATED_SUFFIX};
pub use draft::{SIGNED_HEADERS, SIGNED_HEADERS_MARKER, UnsignedDraft, signed_headers_list};
pub use newsgroup::{NameError, NewsgroupName};
pub use request::{ArticleKind, ArticleRequest, MIME_BOUNDARY};
pub use serial::{MAX_SERIAL, Serial, SerialError};
pub use signature::{ArmorError, ArmoredSignature};
