use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth filters`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = ctx.service.filter_options().await?;
    output(&options, flags.format)
}
