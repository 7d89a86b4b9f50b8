//! # hearth-views
//!
//! Coordinates the listing store, the data backend and the result sets held by
//! each view (browse, map, favorites, detail).
//!
//! - [`ListingService`] owns the store and every held [`ResultList`]
//! - [`reconcile`] propagates a favorite flag change into held lists
//! - [`RequestTracker`] drops responses superseded by a newer search

pub mod error;
pub mod reconcile;
pub mod service;
pub mod ticket;
pub mod view;

pub use error::ViewError;
pub use reconcile::ReconcileReport;
pub use service::{FavoriteToggled, FilterOptions, ListingService};
pub use ticket::{RequestToken, RequestTracker};
pub use view::{ResultList, ViewKind};
