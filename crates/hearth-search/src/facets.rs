//! Sidebar options derived from listing data.

use hearth_core::{PriceRange, Property};

/// Lowest and highest price in `properties`, or `None` when empty.
#[must_use]
pub fn price_range(properties: &[Property]) -> Option<PriceRange> {
    let min = properties.iter().map(|p| p.price).min()?;
    let max = properties.iter().map(|p| p.price).max()?;
    Some(PriceRange { min, max })
}

/// Distinct property types in first-seen order.
#[must_use]
pub fn property_types(properties: &[Property]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for property in properties {
        if !types.contains(&property.property_type) {
            types.push(property.property_type.clone());
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use hearth_core::{Coordinates, PropertyId};

    use super::*;

    fn listing(id: u64, price: u64, kind: &str) -> Property {
        Property {
            id: PropertyId(id),
            title: String::new(),
            price,
            address: String::new(),
            bedrooms: 0,
            bathrooms: 0,
            square_feet: 0,
            property_type: kind.to_string(),
            images: vec![],
            description: String::new(),
            features: vec![],
            coordinates: Coordinates::default(),
            year_built: 2000,
            is_favorite: false,
        }
    }

    #[test]
    fn price_range_spans_min_and_max() {
        let properties = vec![listing(1, 500, "House"), listing(2, 100, "Condo"), listing(3, 900, "House")];
        assert_eq!(price_range(&properties), Some(PriceRange { min: 100, max: 900 }));
    }

    #[test]
    fn price_range_of_nothing_is_none() {
        assert_eq!(price_range(&[]), None);
    }

    #[test]
    fn property_types_are_distinct_in_first_seen_order() {
        let properties = vec![listing(1, 1, "Villa"), listing(2, 1, "House"), listing(3, 1, "Villa")];
        assert_eq!(property_types(&properties), vec!["Villa", "House"]);
    }
}
