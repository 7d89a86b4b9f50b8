//! # hearth-core
//!
//! Core types, filter model, and error types for Hearth.
//!
//! This crate provides the foundational types shared across all Hearth crates:
//! - The `Property` listing entity and its identity newtype
//! - The `FilterCriteria` model with its sort keys and price-range bounds
//! - Decoding of loosely-shaped backend records into canonical properties
//! - Cross-cutting error types

pub mod decode;
pub mod entities;
pub mod errors;
pub mod filter;

pub use entities::{Coordinates, DEFAULT_PROPERTY_TYPES, NewProperty, Property, PropertyId};
pub use errors::CoreError;
pub use filter::{FilterCriteria, PriceRange, SortKey};
