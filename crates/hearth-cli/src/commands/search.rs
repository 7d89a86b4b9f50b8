use hearth_views::ViewKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::criteria::criteria_from_args;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::summary::{ListingSummary, MapPin};
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth search`.
pub fn handle_search(
    args: &SearchArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let criteria = criteria_from_args(args, ctx.config.filters.default_sort)?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let results = ctx.service.search(ViewKind::Browse, &criteria)?;

    let mut rows = results.items.iter().map(ListingSummary::from).collect::<Vec<_>>();
    apply_limit(&mut rows, limit);
    output(&rows, flags.format)
}

/// Handle `hearth map`.
pub fn handle_map(
    args: &SearchArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let criteria = criteria_from_args(args, ctx.config.filters.default_sort)?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let results = ctx.service.search(ViewKind::Map, &criteria)?;

    let mut pins = results.items.iter().map(MapPin::from).collect::<Vec<_>>();
    apply_limit(&mut pins, limit);
    output(&pins, flags.format)
}
