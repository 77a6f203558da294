//! Rmgroup command - remove a newsgroup

use std::path::Path;

use anyhow::Context as _;
use chrono::Local;
use log::warn;

use super::{Context, explanation, finish, preview, sign};
use signcontrol::core::models::{ArticleRequest, NewsgroupName};
use signcontrol::core::ports::CheckgroupsStore;
use signcontrol::core::services::draft;

/// Generate a rmgroup article
pub fn rmgroup(
    ctx: &Context,
    group: &str,
    body_file: Option<&Path>,
    update_checkgroups: bool,
    dry_run: bool,
) -> anyhow::Result<()> {
    let name = NewsgroupName::parse(&group.to_lowercase())
        .with_context(|| format!("invalid newsgroup name {group:?}"))?;

    let store = ctx.store();
    let mut groups = ctx.load_groups(&store)?;
    if !groups.contains(name.as_str()) {
        warn!("{name} is not in the checkgroups file");
    }

    let message = explanation(body_file, &ctx.config.rmgroup_message, name.as_str())?;
    let request = ArticleRequest::RmGroup {
        group: name.clone(),
        message,
    };
    let unsigned = draft(&request, &ctx.config.identity(), &Local::now().fixed_offset());

    if dry_run {
        return preview(ctx, &unsigned);
    }

    let outcomes = sign(ctx, &unsigned)?;
    let updated = update_checkgroups && groups.remove(name.as_str()).is_some();
    if updated {
        store.save(&groups)?;
    }
    finish(ctx, &request, &outcomes, updated)
}
