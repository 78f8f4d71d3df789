//! HTTP page cache keys for product listing and detail pages.
//!
//! These functions only compute the key strings an external page cache keys
//! on; they store nothing. The correctness property is determinism: the same
//! (products, locale, currency, price options, page) must always produce the
//! same key, and any change to one of those must change it.

use chrono::{DateTime, Utc};

use storefront_catalog::Product;

use crate::formatter::Formatter;
use crate::i18n::Translator;

/// Timestamp token format, matching the catalog's per-product cache tokens.
const STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

fn join_parts<I: IntoIterator<Item = String>>(parts: I) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

impl<T: Translator> Formatter<'_, T> {
    /// Cache key for a product listing page.
    ///
    /// Shape: `<locale>/<currency>/<option tokens...>/products/all-<page>-<stamp>-<count>`
    /// where `stamp` is the newest `updated_at` in the scope, or today's
    /// date when the scope is empty.
    pub fn cache_key_for_product_list(&self, products: &[Product], page: Option<u32>) -> String {
        let count = products.len();
        let stamp = match products.iter().map(Product::updated_at).max() {
            Some(newest) => newest.format(STAMP_FORMAT).to_string(),
            None => {
                tracing::debug!("empty product scope, keying listing on today");
                today_stamp(self.ctx.now())
            }
        };
        let page = page.map(|p| p.to_string()).unwrap_or_default();
        let listing = format!("products/all-{page}-{stamp}-{count}");

        let key = join_parts(self.common_cache_key_parts().into_iter().chain([listing]));
        tracing::trace!(%key, count, "computed product listing cache key");
        key
    }

    /// Cache key for a single product page.
    ///
    /// Joins the common parts with the product's content token and its
    /// promotion marker (when set), dropping empty parts.
    pub fn cache_key_for_product(&self, product: &Product) -> String {
        let marker = product.promotion_marker().unwrap_or_default().to_string();
        let key = join_parts(
            self.common_cache_key_parts()
                .into_iter()
                .chain([product.cache_token(), marker]),
        );
        tracing::trace!(%key, "computed product cache key");
        key
    }

    /// The context-dependent prefix shared by all product cache keys:
    /// locale, currency, then the price-option tokens.
    pub fn common_cache_key_parts(&self) -> Vec<String> {
        let mut parts = vec![
            self.ctx.locale().to_string(),
            self.ctx.currency().to_string(),
        ];
        parts.extend(self.price_options_cache_tokens());
        parts
    }

    /// Price-option tokens in deterministic (name-sorted) pair order, each
    /// value contributing its cache token.
    pub fn price_options_cache_tokens(&self) -> Vec<String> {
        self.ctx
            .price_options()
            .iter()
            .map(|(_, value)| value.cache_token().to_string())
            .collect()
    }
}

fn today_stamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d").to_string()
}
