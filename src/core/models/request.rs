//! Article requests
//!
//! What the operator asked for, before any header is written.

use serde::{Deserialize, Serialize};

use super::{Checkgroups, GroupDescription, NewsgroupName, Serial};

/// Kind of control article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleKind {
    /// Create a newsgroup or change its status/description
    NewGroup,
    /// Remove a newsgroup
    RmGroup,
    /// Publish the full list of groups
    Checkgroups,
}

impl ArticleKind {
    /// Control command name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewGroup => "newgroup",
            Self::RmGroup => "rmgroup",
            Self::Checkgroups => "checkgroups",
        }
    }

    /// `Content-Type` value of the signed article
    #[must_use]
    pub fn content_type(self, encoding: &str) -> String {
        match self {
            Self::NewGroup => format!("multipart/mixed; boundary=\"{MIME_BOUNDARY}\""),
            Self::Checkgroups => format!("application/news-checkgroups; charset={encoding}"),
            Self::RmGroup => format!("text/plain; charset={encoding}"),
        }
    }
}

impl std::fmt::Display for ArticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MIME boundary of newgroup articles
pub const MIME_BOUNDARY: &str = "signcontrol";

/// A request for one control article
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleRequest {
    /// `newgroup`
    NewGroup {
        /// Group to create
        group: NewsgroupName,
        /// Whether the group is moderated
        moderated: bool,
        /// Normalized description
        description: GroupDescription,
        /// Free-text explanation for the first MIME part
        message: String,
    },
    /// `rmgroup`
    RmGroup {
        /// Group to remove
        group: NewsgroupName,
        /// Free-text explanation
        message: String,
    },
    /// `checkgroups`
    Checkgroups {
        /// Hierarchy scope, e.g. `fr`
        scope: String,
        /// Administrative group the article is posted to
        admin_group: String,
        /// Revision of the day
        serial: Serial,
        /// Current list of groups
        groups: Checkgroups,
    },
}

impl ArticleRequest {
    /// Kind of article produced for this request
    #[must_use]
    pub const fn kind(&self) -> ArticleKind {
        match self {
            Self::NewGroup { .. } => ArticleKind::NewGroup,
            Self::RmGroup { .. } => ArticleKind::RmGroup,
            Self::Checkgroups { .. } => ArticleKind::Checkgroups,
        }
    }

    /// Group the request is about, if any
    #[must_use]
    pub const fn group(&self) -> Option<&NewsgroupName> {
        match self {
            Self::NewGroup { group, .. } | Self::RmGroup { group, .. } => Some(group),
            Self::Checkgroups { .. } => None,
        }
    }
}
