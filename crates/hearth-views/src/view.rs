//! Views and the result sets they hold.

use std::fmt;

use hearth_core::{Property, PropertyId};
use serde::Serialize;

use crate::ticket::RequestToken;

/// A screen that holds listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Browse,
    Map,
    Favorites,
    Detail,
}

impl ViewKind {
    /// Whether list membership is defined by the favorite flag.
    #[must_use]
    pub const fn membership_follows_favorite(self) -> bool {
        matches!(self, Self::Favorites)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browse => "browse",
            Self::Map => "map",
            Self::Favorites => "favorites",
            Self::Detail => "detail",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listings currently displayed by one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultList {
    pub kind: ViewKind,
    /// Request that produced these items, if any.
    pub token: Option<RequestToken>,
    pub items: Vec<Property>,
}

impl ResultList {
    #[must_use]
    pub const fn empty(kind: ViewKind) -> Self {
        Self {
            kind,
            token: None,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub const fn new(kind: ViewKind, items: Vec<Property>) -> Self {
        Self {
            kind,
            token: None,
            items,
        }
    }

    pub(crate) fn replace(&mut self, token: RequestToken, items: Vec<Property>) {
        self.token = Some(token);
        self.items = items;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: PropertyId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    #[must_use]
    pub fn get(&self, id: PropertyId) -> Option<&Property> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<PropertyId> {
        self.items.iter().map(|p| p.id).collect()
    }
}
