use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth show`.
pub fn handle(args: &ShowArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let property = ctx.service.open_detail_raw(&args.id)?;
    output(&property, flags.format)
}
