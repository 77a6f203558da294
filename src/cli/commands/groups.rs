//! Groups command - list the checkgroups file

use super::Context;
use signcontrol::output::GroupListResult;

/// List the groups of the hierarchy
pub fn groups(ctx: &Context) -> anyhow::Result<()> {
    let groups = ctx.load_groups(&ctx.store())?;
    GroupListResult::from(&groups).render(ctx.mode);
    Ok(())
}
