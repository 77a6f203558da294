//! Article drafting
//!
//! Turns an [`ArticleRequest`] into the [`UnsignedDraft`] handed to the
//! signer. The time of issue is passed in once per request so that `Date`,
//! `Injection-Date`, the Message-ID and the checkgroups revision all agree.

use chrono::{DateTime, FixedOffset};

use crate::core::models::{
    ArticleKind, ArticleRequest, MIME_BOUNDARY, SIGNED_HEADERS, UnsignedDraft, format_entry,
};

/// Placeholder replaced by the group name in message templates
pub const GROUP_PLACEHOLDER: &str = "$GROUP$";

/// Who issues the article and how it is encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Real name shown in `From:`
    pub name: String,
    /// Address shown in `From:` and `Approved:`
    pub mail: String,
    /// Right-hand side of generated Message-IDs
    pub host: String,
    /// Charset declared for text parts
    pub encoding: String,
}

impl Identity {
    /// Canonical `From:` value
    #[must_use]
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.name, self.mail)
    }
}

/// Replace `$GROUP$` in a message template
#[must_use]
pub fn expand_template(template: &str, group: &str) -> String {
    template.replace(GROUP_PLACEHOLDER, group)
}

/// Render a `Date:` value with the numeric offset of `at`
#[must_use]
pub fn format_date(at: &DateTime<FixedOffset>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Build a Message-ID of the form `<kind-[group-]epoch@host>`
#[must_use]
pub fn message_id(
    kind: ArticleKind,
    group: Option<&str>,
    at: &DateTime<FixedOffset>,
    host: &str,
) -> String {
    let epoch = at.timestamp();
    match group {
        Some(group) => format!("<{kind}-{group}-{epoch}@{host}>"),
        None => format!("<{kind}-{epoch}@{host}>"),
    }
}

/// Draft the unsigned article for `request`
#[must_use]
pub fn draft(
    request: &ArticleRequest,
    identity: &Identity,
    at: &DateTime<FixedOffset>,
) -> UnsignedDraft {
    let kind = request.kind();
    let group = request.group().map(|g| g.as_str());
    let epoch = at.timestamp();

    let (control, newsgroups, stem, body) = match request {
        ArticleRequest::NewGroup {
            group,
            moderated,
            description,
            message,
        } => {
            let control = if *moderated {
                format!("newgroup {group} moderated")
            } else {
                format!("newgroup {group}")
            };
            let body = newgroup_body(
                message,
                &format_entry(group.as_str(), description.as_str()),
                &identity.encoding,
            );
            (control, group.to_string(), format!("{group}-{epoch}"), body)
        },
        ArticleRequest::RmGroup { group, message } => (
            format!("rmgroup {group}"),
            group.to_string(),
            format!("{group}-{epoch}"),
            format!("{}\n", message.trim_end()),
        ),
        ArticleRequest::Checkgroups {
            scope,
            admin_group,
            serial,
            groups,
        } => (
            format!("checkgroups {scope} #{}", serial.revision(at)),
            admin_group.clone(),
            format!("checkgroups-{epoch}"),
            groups.to_text(),
        ),
    };

    let message_id = message_id(kind, group, at, &identity.host);
    let date = format_date(at);
    let values = [
        control.clone(),
        control,
        message_id.clone(),
        date.clone(),
        date,
        identity.from_header(),
    ];
    let headers = SIGNED_HEADERS
        .iter()
        .zip(values)
        .map(|(name, value)| ((*name).to_string(), value))
        .collect();

    UnsignedDraft {
        kind,
        stem,
        newsgroups,
        message_id,
        headers,
        body,
    }
}

fn newgroup_body(message: &str, groupinfo: &str, encoding: &str) -> String {
    format!(
        "This is a MIME NetNews control message.\n\
         --{MIME_BOUNDARY}\n\
         Content-Type: text/plain; charset={encoding}\n\
         \n\
         {message}\n\
         \n\
         --{MIME_BOUNDARY}\n\
         Content-Type: application/news-groupinfo; charset={encoding}\n\
         \n\
         For your newsgroups file:\n\
         {groupinfo}\n\
         \n\
         --{MIME_BOUNDARY}--\n",
        message = message.trim_end(),
    )
}
