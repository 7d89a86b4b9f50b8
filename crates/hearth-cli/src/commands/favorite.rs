use hearth_core::{FilterCriteria, PropertyId};
use hearth_views::ViewKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FavoriteArgs;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::summary::ListingSummary;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteResponse {
    #[serde(rename = "Id")]
    id: PropertyId,
    title: String,
    favorite: bool,
    entries_updated: usize,
    entries_removed: usize,
}

/// Handle `hearth favorite`.
///
/// The browse and favorites views are opened first so the toggle is
/// reconciled into them the same way an interactive session would see it.
pub async fn handle_toggle(
    args: &FavoriteArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let id = args.id.parse::<PropertyId>()?;
    ctx.service.search(ViewKind::Browse, &FilterCriteria::default())?;
    ctx.service.load_favorites();

    let toggled = ctx.service.toggle_favorite(id).await?;
    output(
        &FavoriteResponse {
            id: toggled.property.id,
            title: toggled.property.title,
            favorite: toggled.property.is_favorite,
            entries_updated: toggled.report.updated,
            entries_removed: toggled.report.removed,
        },
        flags.format,
    )
}

/// Handle `hearth favorites`.
pub fn handle_list(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let favorites = ctx.service.load_favorites();

    let mut rows = favorites.items.iter().map(ListingSummary::from).collect::<Vec<_>>();
    apply_limit(&mut rows, limit);
    output(&rows, flags.format)
}
