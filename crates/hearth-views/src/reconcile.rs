//! Propagate a favorite flag change into held result lists.
//!
//! Views hold copies of listings, so a toggle made in one view has to be
//! pushed into every other view still displaying that listing. Lists whose
//! membership follows the flag ([`ViewKind::membership_follows_favorite`])
//! drop entries that are no longer favorites. Newly favorited listings are not
//! inserted; they appear on that view's next fetch.
//!
//! [`ViewKind::membership_follows_favorite`]: crate::ViewKind::membership_follows_favorite

use hearth_core::PropertyId;
use serde::Serialize;

use crate::view::ResultList;

/// What a reconciliation pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Entries whose flag was rewritten in place.
    pub updated: usize,
    /// Entries dropped from favorite-membership lists.
    pub removed: usize,
}

impl ReconcileReport {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.updated == 0 && self.removed == 0
    }
}

impl std::ops::AddAssign for ReconcileReport {
    fn add_assign(&mut self, rhs: Self) {
        self.updated += rhs.updated;
        self.removed += rhs.removed;
    }
}

/// Apply `value` to every entry with `id` in a single list.
///
/// Order of the remaining entries is preserved. Entries with other ids are
/// left untouched.
pub fn apply_to_list(list: &mut ResultList, id: PropertyId, value: bool) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    if list.kind.membership_follows_favorite() && !value {
        let before = list.items.len();
        list.items.retain(|p| p.id != id);
        report.removed = before - list.items.len();
        return report;
    }

    for property in list.items.iter_mut().filter(|p| p.id == id) {
        property.is_favorite = value;
        report.updated += 1;
    }
    report
}

/// Apply `value` for `id` across every held list.
pub fn apply_favorite<'a>(
    lists: impl IntoIterator<Item = &'a mut ResultList>,
    id: PropertyId,
    value: bool,
) -> ReconcileReport {
    let mut total = ReconcileReport::default();
    for list in lists {
        let report = apply_to_list(list, id, value);
        if !report.is_empty() {
            tracing::trace!(view = %list.kind, %id, ?report, "reconciled favorite");
        }
        total += report;
    }
    total
}

#[cfg(test)]
mod tests {
    use hearth_core::{Coordinates, Property};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::view::ViewKind;

    fn listing(id: u64, favorite: bool) -> Property {
        Property {
            id: PropertyId(id),
            title: format!("Listing {id}"),
            price: id * 100_000,
            address: String::new(),
            bedrooms: 1,
            bathrooms: 1,
            square_feet: 500,
            property_type: "House".into(),
            images: vec![],
            description: String::new(),
            features: vec![],
            coordinates: Coordinates::default(),
            year_built: 2000,
            is_favorite: favorite,
        }
    }

    fn list(kind: ViewKind, entries: &[(u64, bool)]) -> ResultList {
        ResultList::new(
            kind,
            entries.iter().map(|&(id, fav)| listing(id, fav)).collect(),
        )
    }

    #[test]
    fn browse_list_flag_is_rewritten_in_place() {
        let mut browse = list(ViewKind::Browse, &[(1, false), (2, false), (3, true)]);
        let report = apply_to_list(&mut browse, PropertyId(2), true);

        assert_eq!(report, ReconcileReport { updated: 1, removed: 0 });
        assert_eq!(browse.ids(), vec![PropertyId(1), PropertyId(2), PropertyId(3)]);
        assert!(browse.get(PropertyId(2)).unwrap().is_favorite);
        assert!(!browse.get(PropertyId(1)).unwrap().is_favorite);
    }

    #[test]
    fn unfavorite_drops_entry_from_favorites_list() {
        let mut favorites = list(ViewKind::Favorites, &[(2, true), (5, true), (7, true)]);
        let report = apply_to_list(&mut favorites, PropertyId(5), false);

        assert_eq!(report, ReconcileReport { updated: 0, removed: 1 });
        assert_eq!(favorites.ids(), vec![PropertyId(2), PropertyId(7)]);
    }

    #[test]
    fn favorite_does_not_insert_into_favorites_list() {
        let mut favorites = list(ViewKind::Favorites, &[(2, true)]);
        let before = favorites.clone();
        let report = apply_to_list(&mut favorites, PropertyId(9), true);

        assert!(report.is_empty());
        assert_eq!(favorites, before);
    }

    #[test]
    fn unfavorite_in_non_membership_list_keeps_entry() {
        let mut map = list(ViewKind::Map, &[(4, true)]);
        let report = apply_to_list(&mut map, PropertyId(4), false);

        assert_eq!(report.updated, 1);
        assert_eq!(map.len(), 1);
        assert!(!map.items[0].is_favorite);
    }

    #[test]
    fn apply_favorite_sums_across_lists() {
        let mut browse = list(ViewKind::Browse, &[(1, true), (2, false)]);
        let mut map = list(ViewKind::Map, &[(1, true)]);
        let mut favorites = list(ViewKind::Favorites, &[(1, true), (3, true)]);

        let report = apply_favorite(
            [&mut browse, &mut map, &mut favorites],
            PropertyId(1),
            false,
        );

        assert_eq!(report, ReconcileReport { updated: 2, removed: 1 });
        assert_eq!(favorites.ids(), vec![PropertyId(3)]);
    }
}
