use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use storefront_core::{Currency, Entity, ProductId, VariantId};

/// A price entry for one currency.
///
/// `active` mirrors the store's per-currency activation: an inactive entry
/// is ignored when comparing variant prices for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub amount: Decimal,
    pub active: bool,
}

impl PriceEntry {
    pub fn active(amount: Decimal) -> Self {
        Self {
            amount,
            active: true,
        }
    }

    pub fn inactive(amount: Decimal) -> Self {
        Self {
            amount,
            active: false,
        }
    }
}

/// A purchasable variant of a product (e.g. one size/color combination).
///
/// Belongs to exactly one [`Product`]; the product owns its variants for
/// pricing-comparison purposes, lifecycle is managed externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    id: VariantId,
    prices: BTreeMap<Currency, PriceEntry>,
}

impl Variant {
    pub fn new(id: VariantId) -> Self {
        Self {
            id,
            prices: BTreeMap::new(),
        }
    }

    /// Add an active price in `currency`.
    pub fn with_price(mut self, currency: Currency, amount: Decimal) -> Self {
        self.prices.insert(currency, PriceEntry::active(amount));
        self
    }

    /// Add an inactive price in `currency` (present but not sellable).
    pub fn with_inactive_price(mut self, currency: Currency, amount: Decimal) -> Self {
        self.prices.insert(currency, PriceEntry::inactive(amount));
        self
    }

    pub fn id_typed(&self) -> VariantId {
        self.id
    }

    /// The variant's active amount in `currency`, if any.
    pub fn amount_in(&self, currency: Currency) -> Option<Decimal> {
        self.prices
            .get(&currency)
            .filter(|entry| entry.active)
            .map(|entry| entry.amount)
    }

    pub fn is_active_in(&self, currency: Currency) -> bool {
        self.prices
            .get(&currency)
            .is_some_and(|entry| entry.active)
    }
}

impl Entity for Variant {
    type Id = VariantId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A catalog product as the storefront renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    prices: BTreeMap<Currency, Decimal>,
    description: Option<String>,
    need_to_know: Option<String>,
    additional_information: Option<String>,
    whats_included: Option<String>,
    discontinued: bool,
    deleted: bool,
    available_on: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
    variants: Vec<Variant>,
    /// Opaque marker used only for cache-key uniqueness when promotions may
    /// apply to this product.
    promotion_marker: Option<String>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            prices: BTreeMap::new(),
            description: None,
            need_to_know: None,
            additional_information: None,
            whats_included: None,
            discontinued: false,
            deleted: false,
            available_on: None,
            updated_at,
            variants: Vec::new(),
            promotion_marker: None,
        }
    }

    pub fn with_price(mut self, currency: Currency, amount: Decimal) -> Self {
        self.prices.insert(currency, amount);
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_need_to_know(mut self, text: impl Into<String>) -> Self {
        self.need_to_know = Some(text.into());
        self
    }

    pub fn with_additional_information(mut self, text: impl Into<String>) -> Self {
        self.additional_information = Some(text.into());
        self
    }

    pub fn with_whats_included(mut self, text: impl Into<String>) -> Self {
        self.whats_included = Some(text.into());
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn with_available_on(mut self, available_on: DateTime<Utc>) -> Self {
        self.available_on = Some(available_on);
        self
    }

    pub fn discontinued(mut self) -> Self {
        self.discontinued = true;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub fn with_promotion_marker(mut self, marker: impl Into<String>) -> Self {
        self.promotion_marker = Some(marker.into());
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn need_to_know(&self) -> Option<&str> {
        self.need_to_know.as_deref()
    }

    pub fn additional_information(&self) -> Option<&str> {
        self.additional_information.as_deref()
    }

    pub fn whats_included(&self) -> Option<&str> {
        self.whats_included.as_deref()
    }

    pub fn is_discontinued(&self) -> bool {
        self.discontinued
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn available_on(&self) -> Option<DateTime<Utc>> {
        self.available_on
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn promotion_marker(&self) -> Option<&str> {
        self.promotion_marker.as_deref()
    }

    /// The product's display amount in `currency`, if priced in it.
    pub fn amount_in(&self, currency: Currency) -> Option<Decimal> {
        self.prices.get(&currency).copied()
    }

    /// Whether the product is available for sale at `now`.
    ///
    /// Availability requires a non-future `available_on` date and neither
    /// the discontinued nor the deleted flag.
    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        !self.discontinued
            && !self.deleted
            && self.available_on.is_some_and(|on| on <= now)
    }

    /// Variants with an active price in `currency`.
    pub fn active_variants(&self, currency: Currency) -> impl Iterator<Item = &Variant> {
        self.variants
            .iter()
            .filter(move |variant| variant.is_active_in(currency))
    }

    /// Content token an external page cache keys this product on.
    ///
    /// Changes whenever the record is touched, so stale cached pages expire.
    pub fn cache_token(&self) -> String {
        format!(
            "products/{}-{}",
            self.id,
            self.updated_at.format("%Y%m%d%H%M%S")
        )
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
