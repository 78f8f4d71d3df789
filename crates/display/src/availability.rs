//! Availability labels.

use storefront_catalog::Product;

use crate::formatter::Formatter;
use crate::i18n::{MessageKey, Translator};

impl<T: Translator> Formatter<'_, T> {
    /// Human-readable availability label for a product.
    ///
    /// Pure classification over the product's flags at request time, first
    /// match wins: discontinued, deleted, available, pending sale (future
    /// `available_on`), no available date set.
    pub fn available_status(&self, product: &Product) -> String {
        if product.is_discontinued() {
            return self.t(MessageKey::Discontinued);
        }
        if product.is_deleted() {
            return self.t(MessageKey::Deleted);
        }

        let now = self.ctx.now();
        if product.is_available(now) {
            self.t(MessageKey::Available)
        } else if product.available_on().is_some_and(|on| on > now) {
            self.t(MessageKey::PendingSale)
        } else {
            self.t(MessageKey::NoAvailableDateSet)
        }
    }
}
