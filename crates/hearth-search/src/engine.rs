//! The filter/sort pipeline.

use std::cmp::Reverse;

use hearth_core::{FilterCriteria, Property, SortKey};

/// Whether `property` passes every active predicate in `criteria`.
///
/// Zero bounds and empty collections are inactive. `price_min > price_max`
/// is not rejected here; such criteria simply match nothing.
#[must_use]
pub fn matches(property: &Property, criteria: &FilterCriteria) -> bool {
    if criteria.price_min > 0 && property.price < criteria.price_min {
        return false;
    }
    if criteria.price_max > 0 && property.price > criteria.price_max {
        return false;
    }
    if !criteria.property_types.is_empty()
        && !criteria
            .property_types
            .iter()
            .any(|t| *t == property.property_type)
    {
        return false;
    }
    if criteria.bedrooms_min > 0 && property.bedrooms < criteria.bedrooms_min {
        return false;
    }
    if !criteria.location.is_empty() {
        let needle = criteria.location.to_lowercase();
        if !property.address.to_lowercase().contains(&needle) {
            return false;
        }
    }
    true
}

/// Stable in-place sort. Ties keep their relative order.
pub fn sort_in_place(properties: &mut [Property], sort_by: SortKey) {
    match sort_by {
        SortKey::PriceLow => properties.sort_by_key(|p| p.price),
        SortKey::PriceHigh => properties.sort_by_key(|p| Reverse(p.price)),
        SortKey::Bedrooms => properties.sort_by_key(|p| Reverse(p.bedrooms)),
        SortKey::Newest => properties.sort_by_key(|p| Reverse(p.year_built)),
        SortKey::Unsorted => {}
    }
}

/// Filter `properties` by `criteria` and order the survivors.
#[must_use]
pub fn search(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    let mut results: Vec<Property> = properties
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect();
    sort_in_place(&mut results, criteria.sort_by);

    tracing::debug!(
        scanned = properties.len(),
        matched = results.len(),
        sort = %criteria.sort_by,
        "search complete"
    );
    results
}
