//! `storefront-display` — presentation formatting for storefront pages.
//!
//! Stateless helpers that turn catalog records into display strings: variant
//! price rendering, paragraph-wrapped long-text fields, truncated plain-text
//! summaries, page cache keys, and availability labels.
//!
//! Everything here is a pure, per-request transformation over already-loaded
//! data. There is no shared mutable state; a [`Formatter`] borrows its
//! configuration, translator, and request context, and is safe to use from
//! any number of request handlers concurrently.

pub mod availability;
pub mod cache;
pub mod config;
pub mod context;
pub mod fields;
pub mod formatter;
pub mod i18n;
pub mod pricing;
pub mod text;

pub use config::DisplayConfig;
pub use context::RequestContext;
pub use fields::SUMMARY_MAX_CHARS;
pub use formatter::Formatter;
pub use i18n::{Locale, MessageKey, StaticCatalog, Translator};
