//! Checkgroups command - publish the list of newsgroups

use chrono::Local;

use super::{Context, finish, preview, sign};
use signcontrol::core::models::{ArticleRequest, Serial};
use signcontrol::core::services::draft;

/// Generate a checkgroups article from the checkgroups file
pub fn checkgroups(ctx: &Context, serial: Serial, dry_run: bool) -> anyhow::Result<()> {
    let groups = ctx.load_groups(&ctx.store())?;

    let request = ArticleRequest::Checkgroups {
        scope: ctx.config.checkgroups_scope.clone(),
        admin_group: ctx.config.admin_group.clone(),
        serial,
        groups,
    };
    let unsigned = draft(&request, &ctx.config.identity(), &Local::now().fixed_offset());

    if dry_run {
        return preview(ctx, &unsigned);
    }

    let outcomes = sign(ctx, &unsigned)?;
    finish(ctx, &request, &outcomes, false)
}
