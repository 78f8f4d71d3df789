//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the domain error model, money, and the trusted-markup
//! string wrapper used by the presentation layer.

pub mod entity;
pub mod error;
pub mod id;
pub mod markup;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, VariantId};
pub use markup::HtmlSafe;
pub use money::{Currency, Money};
pub use value_object::ValueObject;
