use anyhow::bail;
use hearth_core::{FilterCriteria, SortKey};

use crate::cli::root_commands::SearchArgs;

/// Parse a sort key, accepting `price_low` as well as `price-low`.
pub fn parse_sort(raw: &str) -> anyhow::Result<SortKey> {
    let normalized = raw.trim().to_ascii_lowercase().replace('_', "-");
    let Ok(key) = normalized.parse::<SortKey>();
    if key == SortKey::Unsorted && normalized != SortKey::Unsorted.as_str() {
        bail!("invalid sort '{raw}': expected newest, price-low, price-high, bedrooms or none");
    }
    Ok(key)
}

/// Build criteria from command-line filters. Omitted bounds stay unset.
pub fn criteria_from_args(
    args: &SearchArgs,
    default_sort: SortKey,
) -> anyhow::Result<FilterCriteria> {
    let sort_by = match args.sort.as_deref() {
        Some(raw) => parse_sort(raw)?,
        None => default_sort,
    };
    let criteria = FilterCriteria {
        price_min: args.min_price.unwrap_or(0),
        price_max: args.max_price.unwrap_or(0),
        property_types: args.property_types.clone(),
        bedrooms_min: args.bedrooms.unwrap_or(0),
        location: args.location.clone().unwrap_or_default(),
        sort_by,
    };
    criteria.validate()?;
    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sort_accepts_underscores_and_case() {
        assert_eq!(parse_sort("PRICE_HIGH").unwrap(), SortKey::PriceHigh);
        assert_eq!(parse_sort("none").unwrap(), SortKey::Unsorted);
    }

    #[test]
    fn unknown_sort_is_rejected() {
        let err = parse_sort("cheapest").unwrap_err();
        assert!(err.to_string().contains("invalid sort 'cheapest'"));
    }

    #[test]
    fn omitted_filters_stay_unset() {
        let criteria = criteria_from_args(&SearchArgs::default(), SortKey::Newest).unwrap();
        assert_eq!(
            criteria,
            FilterCriteria {
                sort_by: SortKey::Newest,
                ..FilterCriteria::default()
            }
        );
        assert!(!criteria.is_active());
    }

    #[test]
    fn explicit_filters_are_carried() {
        let args = SearchArgs {
            min_price: Some(150_000),
            property_types: vec!["Condo".into()],
            location: Some("austin".into()),
            sort: Some("bedrooms".into()),
            ..SearchArgs::default()
        };
        let criteria = criteria_from_args(&args, SortKey::Newest).unwrap();
        assert_eq!(criteria.price_min, 150_000);
        assert_eq!(criteria.property_types, vec!["Condo"]);
        assert_eq!(criteria.location, "austin");
        assert_eq!(criteria.sort_by, SortKey::Bedrooms);
    }

    #[test]
    fn inverted_price_bounds_fail() {
        let args = SearchArgs {
            min_price: Some(900_000),
            max_price: Some(100_000),
            ..SearchArgs::default()
        };
        assert!(criteria_from_args(&args, SortKey::Newest).is_err());
    }
}
