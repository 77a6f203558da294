//! Newgroup command - create or change a newsgroup

use std::path::PathBuf;

use anyhow::{Context as _, anyhow};
use chrono::Local;
use log::warn;

use super::{Context, explanation, finish, preview, sign};
use signcontrol::core::models::{ArticleRequest, GroupDescription, NewsgroupName};
use signcontrol::core::ports::CheckgroupsStore;
use signcontrol::core::services::draft;

/// Arguments of `signcontrol newgroup`
#[derive(Debug)]
pub struct NewgroupArgs {
    pub group: String,
    pub description: String,
    pub moderated: bool,
    pub body_file: Option<PathBuf>,
    pub force: bool,
    pub update_checkgroups: bool,
    pub dry_run: bool,
}

/// Generate a newgroup article
pub fn newgroup(ctx: &Context, args: &NewgroupArgs) -> anyhow::Result<()> {
    let group = NewsgroupName::parse(&args.group.to_lowercase())
        .with_context(|| format!("invalid newsgroup name {:?}", args.group))?;

    let description = GroupDescription::new(&args.description, args.moderated, args.force)
        .map_err(|issue| {
            if issue.is_overridable() {
                anyhow!("{issue}; use --force to keep it anyway")
            } else {
                anyhow!(issue)
            }
        })?;

    let store = ctx.store();
    let mut groups = ctx.load_groups(&store)?;
    if let Some(current) = groups.get(group.as_str()) {
        warn!("{group} already exists ({current}); the new settings will override it");
    }

    let template = ctx.config.newgroup_template(args.moderated);
    let message = explanation(args.body_file.as_deref(), template, group.as_str())?;

    let request = ArticleRequest::NewGroup {
        group: group.clone(),
        moderated: args.moderated,
        description: description.clone(),
        message,
    };
    let unsigned = draft(&request, &ctx.config.identity(), &Local::now().fixed_offset());

    if args.dry_run {
        return preview(ctx, &unsigned);
    }

    let outcomes = sign(ctx, &unsigned)?;
    if args.update_checkgroups {
        groups.insert(&group, &description);
        store.save(&groups)?;
    }
    finish(ctx, &request, &outcomes, args.update_checkgroups)
}
