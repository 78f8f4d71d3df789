//! Per-request rendering context.
//!
//! The original helpers read the current locale, currency, and price options
//! from ambient per-request state. Here they travel as one immutable value
//! threaded through the formatter, with the request time injected explicitly
//! so rendering stays deterministic.

use chrono::{DateTime, Utc};

use storefront_catalog::PriceOptions;
use storefront_core::Currency;

use crate::i18n::Locale;

/// Immutable context for one page render.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    locale: Locale,
    currency: Currency,
    price_options: PriceOptions,
    now: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(locale: Locale, currency: Currency, now: DateTime<Utc>) -> Self {
        Self {
            locale,
            currency,
            price_options: PriceOptions::new(),
            now,
        }
    }

    pub fn with_price_options(mut self, price_options: PriceOptions) -> Self {
        self.price_options = price_options;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn price_options(&self) -> &PriceOptions {
        &self.price_options
    }

    /// The request time; "today" fallbacks and future-date checks use this.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
