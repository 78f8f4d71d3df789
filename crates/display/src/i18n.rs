//! Localization seam: message keys, the translator trait, and locales.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

/// Message identifiers the formatter looks up.
///
/// The string forms are external identifiers shared with existing
/// translation catalogs and must not change. This includes the historical
/// misspelling in `product_has_no_what_inculded`, which shipped catalogs
/// key on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    Add,
    Subtract,
    ProductHasNoDescription,
    ProductHasNoNeedToKnow,
    ProductHasNoAdditionalInformation,
    ProductHasNoWhatInculded,
    Discontinued,
    Deleted,
    Available,
    PendingSale,
    NoAvailableDateSet,
}

impl MessageKey {
    /// The external catalog key for this message.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::Add => "add",
            MessageKey::Subtract => "subtract",
            MessageKey::ProductHasNoDescription => "product_has_no_description",
            MessageKey::ProductHasNoNeedToKnow => "product_has_no_need_to_know",
            MessageKey::ProductHasNoAdditionalInformation => {
                "product_has_no_additional_information"
            }
            MessageKey::ProductHasNoWhatInculded => "product_has_no_what_inculded",
            MessageKey::Discontinued => "discontinued",
            MessageKey::Deleted => "deleted",
            MessageKey::Available => "available",
            MessageKey::PendingSale => "pending_sale",
            MessageKey::NoAvailableDateSet => "no_available_date_set",
        }
    }
}

impl core::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Localization lookup the formatter depends on.
///
/// Implemented by the application's translation service; [`StaticCatalog`]
/// provides the built-in English strings.
pub trait Translator {
    fn translate(&self, key: MessageKey) -> String;
}

/// Built-in English message catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl Translator for StaticCatalog {
    fn translate(&self, key: MessageKey) -> String {
        let message = match key {
            MessageKey::Add => "Add",
            MessageKey::Subtract => "Subtract",
            MessageKey::ProductHasNoDescription => "This product has no description",
            MessageKey::ProductHasNoNeedToKnow => "This product has no need to know",
            MessageKey::ProductHasNoAdditionalInformation => {
                "This product has no additional information"
            }
            MessageKey::ProductHasNoWhatInculded => "This product has no what's included",
            MessageKey::Discontinued => "Discontinued",
            MessageKey::Deleted => "Deleted",
            MessageKey::Available => "Available",
            MessageKey::PendingSale => "Pending Sale",
            MessageKey::NoAvailableDateSet => "No Available Date Set",
        };
        message.to_string()
    }
}

/// A locale tag such as `en` or `de-AT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::invalid_locale("empty tag"));
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(DomainError::invalid_locale(s));
        }
        Ok(Self(s.to_string()))
    }
}
