//! # hearth-store
//!
//! In-memory authoritative collection of listings for a session.
//!
//! A [`PropertyStore`] is built once (usually from a backend bulk load) and
//! handed to whoever needs it; there is no process-wide instance. Reads return
//! independent clones, so callers can never reach into the backing collection.
//! Mutations take `&mut self` and are visible to the next read.

use hearth_core::{CoreError, FilterCriteria, NewProperty, PriceRange, Property, PropertyId};

/// Identity handed to the first listing created in an empty store.
const FIRST_ID: PropertyId = PropertyId(1);

#[derive(Debug, Clone)]
pub struct PropertyStore {
    properties: Vec<Property>,
    next_id: PropertyId,
}

impl Default for PropertyStore {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

impl PropertyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a bulk load, keeping load order as store order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if two records share an id.
    pub fn from_properties(properties: Vec<Property>) -> Result<Self, CoreError> {
        let mut seen = std::collections::HashSet::with_capacity(properties.len());
        for property in &properties {
            if !seen.insert(property.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate property id {}",
                    property.id
                )));
            }
        }

        let next_id = properties
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(FIRST_ID, PropertyId::next);

        tracing::debug!(count = properties.len(), %next_id, "property store loaded");
        Ok(Self {
            properties,
            next_id,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Borrow the backing collection in store order.
    #[must_use]
    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    /// Snapshot of every listing.
    #[must_use]
    pub fn get_all(&self) -> Vec<Property> {
        self.properties.clone()
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no listing has `id`.
    pub fn get_by_id(&self, id: PropertyId) -> Result<Property, CoreError> {
        self.find(id).cloned().ok_or_else(|| CoreError::not_found(id))
    }

    /// Look up a listing by textual id (route parameters, CLI arguments).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the text is not an integer or no
    /// listing has that id.
    pub fn get_by_raw_id(&self, raw: &str) -> Result<Property, CoreError> {
        self.get_by_id(raw.parse()?)
    }

    /// Snapshot of listings flagged favorite, in store order.
    #[must_use]
    pub fn get_favorites(&self) -> Vec<Property> {
        self.properties
            .iter()
            .filter(|p| p.is_favorite)
            .cloned()
            .collect()
    }

    /// Set the favorite flag and return the updated listing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no listing has `id`.
    pub fn set_favorite(&mut self, id: PropertyId, value: bool) -> Result<Property, CoreError> {
        let property = self.find_mut(id).ok_or_else(|| CoreError::not_found(id))?;
        property.is_favorite = value;
        tracing::debug!(%id, favorite = value, "favorite flag set");
        Ok(property.clone())
    }

    /// Flip the favorite flag and return the updated listing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no listing has `id`.
    pub fn toggle_favorite(&mut self, id: PropertyId) -> Result<Property, CoreError> {
        let current = self.find(id).ok_or_else(|| CoreError::not_found(id))?.is_favorite;
        self.set_favorite(id, !current)
    }

    /// Append a new listing with a fresh id and no favorite flag.
    ///
    /// Ids are never reused, even after the highest one is deleted.
    pub fn create(&mut self, new: NewProperty) -> Property {
        let id = self.next_id;
        self.next_id = id.next();
        let property = Property::from_new(id, new);
        self.properties.push(property.clone());
        tracing::debug!(%id, "property created");
        property
    }

    /// Remove a listing and return it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no listing has `id`.
    pub fn delete(&mut self, id: PropertyId) -> Result<Property, CoreError> {
        let index = self
            .properties
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found(id))?;
        let removed = self.properties.remove(index);
        tracing::debug!(%id, "property deleted");
        Ok(removed)
    }

    /// Run the search engine over the current contents.
    #[must_use]
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<Property> {
        hearth_search::search(&self.properties, criteria)
    }

    /// Lowest and highest price held, or `None` when empty.
    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        hearth_search::facets::price_range(&self.properties)
    }

    /// Distinct property types in store order.
    #[must_use]
    pub fn property_types(&self) -> Vec<String> {
        hearth_search::facets::property_types(&self.properties)
    }

    fn find(&self, id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    fn find_mut(&mut self, id: PropertyId) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.id == id)
    }
}
