//! Variant price rendering.

use rust_decimal::Decimal;

use storefront_catalog::{Product, Variant};
use storefront_core::{HtmlSafe, Money};

use crate::formatter::Formatter;
use crate::i18n::{MessageKey, Translator};

impl<T: Translator> Formatter<'_, T> {
    /// The price shown next to a variant: its full price or its difference
    /// from the product price, depending on configuration.
    pub fn variant_price(&self, product: &Product, variant: &Variant) -> Option<HtmlSafe> {
        if self.config.show_variant_full_price {
            self.variant_full_price(product, variant)
        } else {
            self.variant_price_diff(product, variant)
        }
    }

    /// The variant's full price, shown only when at least one variant of
    /// the product is priced differently from the product itself.
    ///
    /// The rule is product-wide: one differing variant turns the display on
    /// for every variant of that product. When all active variants match
    /// the product price the caller shows nothing.
    pub fn variant_full_price(&self, product: &Product, variant: &Variant) -> Option<HtmlSafe> {
        let currency = self.ctx.currency();
        let product_amount = product.amount_in(currency);
        let all_match = product
            .active_variants(currency)
            .all(|v| v.amount_in(currency) == product_amount);
        if all_match {
            return None;
        }
        variant
            .amount_in(currency)
            .map(|amount| Money::new(amount, currency).to_html())
    }

    /// The variant's price as a difference from the product price, e.g.
    /// `(Add: $2.00)`.
    ///
    /// Returns `None` when either amount is missing or the two are equal.
    pub fn variant_price_diff(&self, product: &Product, variant: &Variant) -> Option<HtmlSafe> {
        let currency = self.ctx.currency();
        let variant_amount = variant.amount_in(currency)?;
        let product_amount = product.amount_in(currency)?;
        if variant_amount == product_amount {
            return None;
        }
        let diff = variant_amount - product_amount;
        let key = if diff > Decimal::ZERO {
            MessageKey::Add
        } else {
            MessageKey::Subtract
        };
        let label = HtmlSafe::escape(&self.t(key));
        let amount = Money::new(diff.abs(), currency).to_html();
        Some(HtmlSafe::trusted(format!("({label}: {amount})")))
    }
}
