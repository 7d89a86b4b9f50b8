//! # hearth-search
//!
//! Search orchestration for Hearth listings.
//!
//! A search is a narrowing pipeline over a property slice followed by an
//! optional stable sort:
//! - price floor and ceiling
//! - property type membership
//! - minimum bedrooms
//! - case-insensitive address substring
//! - ordering by [`SortKey`](hearth_core::SortKey)
//!
//! The engine never mutates its input and always allocates a fresh result.
//! [`facets`] derives sidebar options (price bounds, type list) from data.

pub mod engine;
pub mod facets;

pub use engine::{matches, search, sort_in_place};
