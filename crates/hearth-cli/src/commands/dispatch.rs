use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => commands::search::handle_search(&args, ctx, flags),
        Commands::Map(args) => commands::search::handle_map(&args, ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Favorite(args) => commands::favorite::handle_toggle(&args, ctx, flags).await,
        Commands::Favorites => commands::favorite::handle_list(ctx, flags),
        Commands::Filters => commands::filters::handle(ctx, flags).await,
        Commands::Config => unreachable!("config is pre-dispatched in main"),
    }
}
