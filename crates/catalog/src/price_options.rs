//! Price context options (e.g. a selected size or delivery option).
//!
//! Price options disambiguate which price a page was rendered with, so they
//! participate in page cache keys. Iteration order must be deterministic for
//! cache-key stability: options are kept sorted by name, which (names being
//! unique) is exactly a stable sort on the (name, value) pairs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use storefront_core::ValueObject;

/// A single option value, optionally carrying its own cache token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    value: String,
    cache_key: Option<String>,
}

impl OptionValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            cache_key: None,
        }
    }

    /// An option value backed by a record with its own cache key.
    pub fn with_cache_key(value: impl Into<String>, cache_key: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            cache_key: Some(cache_key.into()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The token used in cache keys: the explicit cache key when present,
    /// otherwise the value itself.
    pub fn cache_token(&self) -> &str {
        self.cache_key.as_deref().unwrap_or(&self.value)
    }
}

impl ValueObject for OptionValue {}

/// An ordered name → value mapping of price context options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceOptions {
    options: BTreeMap<String, OptionValue>,
}

impl PriceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: OptionValue) {
        self.options.insert(name.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Entries in deterministic (name-sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl ValueObject for PriceOptions {}

impl FromIterator<(String, OptionValue)> for PriceOptions {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}
