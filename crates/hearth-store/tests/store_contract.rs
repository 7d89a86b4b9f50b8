//! Store contract: snapshots, lookups, favorite flag, create/delete.

use hearth_core::{Coordinates, CoreError, NewProperty, Property, PropertyId, SortKey};
use hearth_store::PropertyStore;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

fn listing(id: u64, price: u64, favorite: bool) -> Property {
    Property {
        id: PropertyId(id),
        title: format!("Listing {id}"),
        price,
        address: format!("{id} Lake Drive"),
        bedrooms: 2,
        bathrooms: 1,
        square_feet: 1200,
        property_type: "House".into(),
        images: vec![],
        description: String::new(),
        features: vec![],
        coordinates: Coordinates::default(),
        year_built: 2000,
        is_favorite: favorite,
    }
}

fn new_listing(title: &str) -> NewProperty {
    NewProperty {
        title: title.into(),
        price: 200_000,
        address: "1 New Road".into(),
        bedrooms: 1,
        bathrooms: 1,
        square_feet: 600,
        property_type: "Apartment".into(),
        images: vec![],
        description: String::new(),
        features: vec![],
        coordinates: Coordinates::default(),
        year_built: 2024,
    }
}

#[fixture]
fn store() -> PropertyStore {
    PropertyStore::from_properties(vec![
        listing(1, 100_000, false),
        listing(2, 300_000, true),
        listing(3, 200_000, false),
    ])
    .expect("ids are unique")
}

#[rstest]
fn get_all_is_an_independent_snapshot(store: PropertyStore) {
    let mut snapshot = store.get_all();
    snapshot[0].title = "mutated".into();
    snapshot.clear();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get_by_id(PropertyId(1)).unwrap().title, "Listing 1");
}

#[rstest]
fn get_by_id_finds_listing(store: PropertyStore) {
    let property = store.get_by_id(PropertyId(3)).unwrap();
    assert_eq!(property.price, 200_000);
}

#[rstest]
fn get_by_id_missing_is_not_found(store: PropertyStore) {
    let err = store.get_by_id(PropertyId(99)).unwrap_err();
    assert!(matches!(err, CoreError::NotFound { ref id } if id == "99"));
}

#[rstest]
#[case("2", Some(2))]
#[case(" 3 ", Some(3))]
#[case("42", None)]
#[case("two", None)]
fn raw_ids_are_coerced(store: PropertyStore, #[case] raw: &str, #[case] expected: Option<u64>) {
    match (store.get_by_raw_id(raw), expected) {
        (Ok(property), Some(id)) => assert_eq!(property.id, PropertyId(id)),
        (Err(err), None) => assert!(err.is_not_found()),
        (other, _) => panic!("unexpected lookup result for {raw:?}: {other:?}"),
    }
}

#[rstest]
fn set_favorite_is_visible_immediately(mut store: PropertyStore) {
    let updated = store.set_favorite(PropertyId(1), true).unwrap();
    assert!(updated.is_favorite);
    assert!(store.get_by_id(PropertyId(1)).unwrap().is_favorite);
}

#[rstest]
fn toggling_twice_restores_the_original_flag(mut store: PropertyStore) {
    let original = store.get_by_id(PropertyId(2)).unwrap().is_favorite;
    store.toggle_favorite(PropertyId(2)).unwrap();
    assert_ne!(store.get_by_id(PropertyId(2)).unwrap().is_favorite, original);
    store.toggle_favorite(PropertyId(2)).unwrap();
    assert_eq!(store.get_by_id(PropertyId(2)).unwrap().is_favorite, original);
}

#[rstest]
fn set_favorite_on_missing_id_changes_nothing(mut store: PropertyStore) {
    let before = store.get_all();
    assert!(store.set_favorite(PropertyId(7), true).unwrap_err().is_not_found());
    assert_eq!(store.get_all(), before);
}

#[rstest]
fn favorites_follow_store_order(mut store: PropertyStore) {
    store.set_favorite(PropertyId(3), true).unwrap();
    let ids: Vec<u64> = store.get_favorites().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[rstest]
fn create_assigns_next_id_without_favorite(mut store: PropertyStore) {
    let created = store.create(new_listing("Fresh"));
    assert_eq!(created.id, PropertyId(4));
    assert!(!created.is_favorite);
    assert_eq!(store.get_by_id(PropertyId(4)).unwrap().title, "Fresh");
}

#[rstest]
fn ids_are_not_reused_after_delete(mut store: PropertyStore) {
    let created = store.create(new_listing("Temporary"));
    store.delete(created.id).unwrap();
    let next = store.create(new_listing("Replacement"));
    assert_eq!(next.id, PropertyId(5));
}

#[rstest]
fn delete_missing_is_not_found(mut store: PropertyStore) {
    assert!(store.delete(PropertyId(50)).unwrap_err().is_not_found());
    assert_eq!(store.len(), 3);
}

#[test]
fn empty_store_starts_ids_at_one() {
    let mut store = PropertyStore::new();
    assert!(store.is_empty());
    assert_eq!(store.create(new_listing("First")).id, PropertyId(1));
}

#[test]
fn duplicate_ids_are_rejected() {
    let result = PropertyStore::from_properties(vec![listing(1, 1, false), listing(1, 2, false)]);
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[rstest]
fn search_runs_against_current_contents(mut store: PropertyStore) {
    store.set_favorite(PropertyId(1), true).unwrap();
    let results = store.search(&hearth_core::FilterCriteria {
        sort_by: SortKey::PriceLow,
        ..hearth_core::FilterCriteria::default()
    });
    let ids: Vec<u64> = results.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1, 3, 2]);
    assert!(results[0].is_favorite);
}

#[rstest]
fn aggregates_cover_contents(store: PropertyStore) {
    let range = store.price_range().unwrap();
    assert_eq!((range.min, range.max), (100_000, 300_000));
    assert_eq!(store.property_types(), vec!["House"]);
    assert!(PropertyStore::new().price_range().is_none());
}
