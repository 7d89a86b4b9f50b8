//! Entity structs for Hearth listings.
//!
//! Field names serialize in camelCase with the identity field spelled `Id`,
//! matching the listing fixture schema. All structs derive `JsonSchema` so the
//! fixture can be validated against the Rust model.

mod property;

pub use property::{Coordinates, DEFAULT_PROPERTY_TYPES, NewProperty, Property, PropertyId};
