use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search listings with filters and a sort order.
    Search(SearchArgs),
    /// Listing pins (coordinates) for the same filters as search.
    Map(SearchArgs),
    /// Show one listing in full.
    Show(ShowArgs),
    /// Toggle the favorite flag of a listing.
    Favorite(FavoriteArgs),
    /// List favorited listings.
    Favorites,
    /// Price bounds and property types offered for filtering.
    Filters,
    /// Print the effective configuration as TOML.
    Config,
}

/// Filter arguments shared by `hearth search` and `hearth map`.
#[derive(Clone, Debug, Default, Args)]
pub struct SearchArgs {
    /// Minimum price (inclusive).
    #[arg(long)]
    pub min_price: Option<u64>,
    /// Maximum price (inclusive).
    #[arg(long)]
    pub max_price: Option<u64>,
    /// Property type to include; repeat for several.
    #[arg(short = 't', long = "type")]
    pub property_types: Vec<String>,
    /// Minimum number of bedrooms.
    #[arg(short, long)]
    pub bedrooms: Option<u32>,
    /// Case-insensitive address substring.
    #[arg(long)]
    pub location: Option<String>,
    /// Sort order: newest, price-low, price-high, bedrooms, none.
    #[arg(short, long)]
    pub sort: Option<String>,
}

/// Arguments for `hearth show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Listing id.
    pub id: String,
}

/// Arguments for `hearth favorite`.
#[derive(Clone, Debug, Args)]
pub struct FavoriteArgs {
    /// Listing id.
    pub id: String,
}
