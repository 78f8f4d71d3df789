//! Catalog data model consumed by the presentation layer.
//!
//! This crate contains the read-only product/variant records and price
//! context types the storefront renders from. Lifecycle (creation, editing,
//! deletion) is managed by the surrounding application; everything here is
//! an immutable input to page rendering.

pub mod price_options;
pub mod product;

pub use price_options::{OptionValue, PriceOptions};
pub use product::{PriceEntry, Product, Variant};
