//! Listing service: the single owner of the store and of every view's result
//! set.
//!
//! The service loads the store from a [`PropertyBackend`], answers searches
//! from the store, and routes favorite toggles through the backend before
//! touching local state. A toggle follows this protocol:
//! 1. Read the current flag from the store
//! 2. Persist the inverted flag through the backend
//! 3. Write the flag into the store
//! 4. Reconcile every held result list
//!
//! A failure at step 1 or 2 leaves the store and all lists untouched.

use std::collections::{BTreeMap, HashMap};

use hearth_backend::PropertyBackend;
use hearth_core::{FilterCriteria, PriceRange, Property, PropertyId};
use hearth_store::PropertyStore;
use serde::Serialize;

use crate::error::ViewError;
use crate::reconcile::{self, ReconcileReport};
use crate::ticket::{RequestToken, RequestTracker};
use crate::view::{ResultList, ViewKind};

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteToggled {
    /// The listing as it now reads from the store.
    pub property: Property,
    pub report: ReconcileReport,
}

/// Sidebar choices reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub price_range: PriceRange,
    pub property_types: Vec<String>,
    /// Criteria a "clear filters" action resets to.
    pub defaults: FilterCriteria,
}

pub struct ListingService<B> {
    backend: B,
    store: PropertyStore,
    views: BTreeMap<ViewKind, ResultList>,
    tracker: RequestTracker,
}

impl<B: PropertyBackend> ListingService<B> {
    /// Service over an empty store. Call [`Self::reload`] to populate it.
    pub fn new(backend: B) -> Self {
        Self::with_store(backend, PropertyStore::new())
    }

    /// Service over an already-populated store.
    pub fn with_store(backend: B, store: PropertyStore) -> Self {
        Self {
            backend,
            store,
            views: BTreeMap::new(),
            tracker: RequestTracker::new(),
        }
    }

    /// Build the service and load the store with every listing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Backend`] if the bulk fetch fails, or
    /// [`ViewError::Core`] if the fetched listings share an id.
    pub async fn load(backend: B) -> Result<Self, ViewError> {
        let mut service = Self::new(backend);
        service.reload().await?;
        Ok(service)
    }

    /// Replace the store contents with a fresh bulk fetch. Held result lists
    /// are dropped and searches begun before the reload are no longer
    /// accepted, since both were computed from the old contents.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`]. On failure the previous contents are kept.
    pub async fn reload(&mut self) -> Result<usize, ViewError> {
        let properties = self.backend.fetch_all().await?;
        let store = PropertyStore::from_properties(properties)?;
        let count = store.len();
        self.store = store;
        self.views.clear();
        self.tracker.reset_all();
        tracing::info!(count, "listings loaded");
        Ok(count)
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Result list currently held by `kind`, if that view is open.
    pub fn view(&self, kind: ViewKind) -> Option<&ResultList> {
        self.views.get(&kind)
    }

    /// Close a view: drop its results and reject any response still in flight.
    pub fn close(&mut self, kind: ViewKind) {
        self.views.remove(&kind);
        self.tracker.reset(kind);
    }

    /// Price bounds, type list and default criteria, fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Backend`] if either fetch fails.
    pub async fn filter_options(&self) -> Result<FilterOptions, ViewError> {
        let (price_range, property_types) = tokio::join!(
            self.backend.fetch_price_range(),
            self.backend.fetch_property_types()
        );
        let price_range = price_range?;
        Ok(FilterOptions {
            price_range,
            property_types: property_types?,
            defaults: FilterCriteria::cleared(price_range),
        })
    }

    /// Start a search for `kind`. Only the token returned by the most recent
    /// call is accepted by [`Self::install_results`].
    pub fn begin_search(&mut self, kind: ViewKind) -> RequestToken {
        let token = self.tracker.begin(kind);
        tracing::trace!(view = %kind, %token, "search started");
        token
    }

    /// Install results for `kind` if `token` is still the latest request.
    /// Returns `false`, leaving the view unchanged, for a superseded token.
    ///
    /// Favorite flags are taken from the store at install time, so a toggle
    /// made while the search was in flight is not undone. Listings the store
    /// no longer holds are dropped, as are non-favorites in a view whose
    /// membership follows the flag.
    pub fn install_results(
        &mut self,
        kind: ViewKind,
        token: RequestToken,
        items: Vec<Property>,
    ) -> bool {
        if !self.tracker.is_current(kind, token) {
            tracing::warn!(view = %kind, %token, "discarding superseded results");
            return false;
        }
        let items = self.with_current_flags(kind, items);
        self.install(kind, token, items);
        true
    }

    fn with_current_flags(&self, kind: ViewKind, mut items: Vec<Property>) -> Vec<Property> {
        let flags: HashMap<PropertyId, bool> = self
            .store
            .as_slice()
            .iter()
            .map(|p| (p.id, p.is_favorite))
            .collect();
        let received = items.len();
        items.retain_mut(|item| match flags.get(&item.id) {
            Some(&favorite) => {
                item.is_favorite = favorite;
                favorite || !kind.membership_follows_favorite()
            }
            None => false,
        });
        if items.len() < received {
            tracing::debug!(
                view = %kind,
                dropped = received - items.len(),
                "dropped results that no longer belong in the view"
            );
        }
        items
    }

    fn install(&mut self, kind: ViewKind, token: RequestToken, items: Vec<Property>) -> &ResultList {
        let list = self
            .views
            .entry(kind)
            .or_insert_with(|| ResultList::empty(kind));
        list.replace(token, items);
        list
    }

    /// Run `criteria` against the store and install the results for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Core`] if the criteria are invalid.
    pub fn search(
        &mut self,
        kind: ViewKind,
        criteria: &FilterCriteria,
    ) -> Result<&ResultList, ViewError> {
        criteria.validate()?;
        let token = self.begin_search(kind);
        let items = self.store.search(criteria);
        Ok(self.install(kind, token, items))
    }

    /// Install the store's favorites, in store order, as the favorites view.
    pub fn load_favorites(&mut self) -> &ResultList {
        let token = self.begin_search(ViewKind::Favorites);
        let items = self.store.get_favorites();
        self.install(ViewKind::Favorites, token, items)
    }

    /// Open the detail view for a listing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Core`] with a not-found error for unknown ids.
    pub fn open_detail(&mut self, id: PropertyId) -> Result<Property, ViewError> {
        let property = self.store.get_by_id(id)?;
        let token = self.begin_search(ViewKind::Detail);
        self.install(ViewKind::Detail, token, vec![property.clone()]);
        Ok(property)
    }

    /// [`Self::open_detail`] for an id as typed or routed, e.g. `"7"`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for text that is not a known id.
    pub fn open_detail_raw(&mut self, raw: &str) -> Result<Property, ViewError> {
        let id = raw.parse::<PropertyId>()?;
        self.open_detail(id)
    }

    /// Invert the favorite flag of `id` everywhere.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for unknown ids, or [`ViewError::Backend`] if
    /// the change cannot be persisted. Nothing changes locally in either case.
    pub async fn toggle_favorite(&mut self, id: PropertyId) -> Result<FavoriteToggled, ViewError> {
        let current = self.store.get_by_id(id)?.is_favorite;
        self.set_favorite(id, !current).await
    }

    /// Set the favorite flag of `id` to `value` everywhere.
    ///
    /// # Errors
    ///
    /// Same as [`Self::toggle_favorite`].
    pub async fn set_favorite(
        &mut self,
        id: PropertyId,
        value: bool,
    ) -> Result<FavoriteToggled, ViewError> {
        self.store.get_by_id(id)?;
        self.backend.persist_favorite(id, value).await?;
        let property = self.store.set_favorite(id, value)?;
        let report = reconcile::apply_favorite(self.views.values_mut(), id, value);
        tracing::info!(
            %id,
            favorite = value,
            updated = report.updated,
            removed = report.removed,
            "favorite changed"
        );
        Ok(FavoriteToggled { property, report })
    }
}
