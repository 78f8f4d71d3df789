//! Long-text product fields: paragraph-wrapped HTML and plain-text summaries.
//!
//! The four free-text fields (description, need to know, additional
//! information, what's included) share one rendering rule, so the public
//! per-field helpers are thin wrappers that pin the right config flag and
//! message key.

use storefront_catalog::Product;
use storefront_core::HtmlSafe;

use crate::formatter::Formatter;
use crate::i18n::{MessageKey, Translator};
use crate::text;

/// Character budget for line-item summaries, ellipsis included.
pub const SUMMARY_MAX_CHARS: usize = 100;

impl<T: Translator> Formatter<'_, T> {
    /// Render a free-text field as display markup.
    ///
    /// With `show_raw` the stored text passes through untouched (trusted as
    /// pre-sanitized HTML — this is an explicit trust boundary; the text is
    /// admin-authored). Otherwise each blank-line-delimited run is wrapped
    /// in a paragraph tag. A blank result falls back to the localized
    /// `empty_key` message.
    pub fn long_text_field(
        &self,
        raw: Option<&str>,
        show_raw: bool,
        empty_key: MessageKey,
    ) -> HtmlSafe {
        let raw = raw.unwrap_or("");
        let rendered = if show_raw {
            raw.to_string()
        } else {
            text::wrap_paragraphs(raw)
        };
        if rendered.trim().is_empty() {
            HtmlSafe::escape(&self.t(empty_key))
        } else {
            HtmlSafe::trusted(rendered)
        }
    }

    pub fn product_description(&self, product: &Product) -> HtmlSafe {
        self.long_text_field(
            product.description(),
            self.config.show_raw_product_description,
            MessageKey::ProductHasNoDescription,
        )
    }

    pub fn product_need_to_know(&self, product: &Product) -> HtmlSafe {
        self.long_text_field(
            product.need_to_know(),
            self.config.show_raw_product_need_to_know,
            MessageKey::ProductHasNoNeedToKnow,
        )
    }

    pub fn product_additional_information(&self, product: &Product) -> HtmlSafe {
        self.long_text_field(
            product.additional_information(),
            self.config.show_raw_product_additional_information,
            MessageKey::ProductHasNoAdditionalInformation,
        )
    }

    pub fn product_whats_included(&self, product: &Product) -> HtmlSafe {
        self.long_text_field(
            product.whats_included(),
            self.config.show_raw_product_whats_included,
            MessageKey::ProductHasNoWhatInculded,
        )
    }

    /// Render a free-text field as a bounded plain-text summary.
    ///
    /// Strips markup, turns `&nbsp;` entities into spaces, collapses
    /// whitespace runs, and truncates to `max_chars` (ellipsis included).
    /// Absent or blank text falls back to the localized `empty_key` message.
    pub fn long_text_summary(
        &self,
        raw: Option<&str>,
        empty_key: MessageKey,
        max_chars: usize,
    ) -> String {
        let Some(raw) = raw.filter(|t| !t.trim().is_empty()) else {
            return self.t(empty_key);
        };
        let plain = text::strip_tags(raw).replace("&nbsp;", " ");
        text::truncate(&text::squish(&plain), max_chars)
    }

    pub fn line_item_description_text(&self, description: Option<&str>) -> String {
        self.long_text_summary(
            description,
            MessageKey::ProductHasNoDescription,
            SUMMARY_MAX_CHARS,
        )
    }

    pub fn line_item_need_to_know_text(&self, need_to_know: Option<&str>) -> String {
        self.long_text_summary(
            need_to_know,
            MessageKey::ProductHasNoNeedToKnow,
            SUMMARY_MAX_CHARS,
        )
    }

    pub fn line_item_additional_information_text(
        &self,
        additional_information: Option<&str>,
    ) -> String {
        self.long_text_summary(
            additional_information,
            MessageKey::ProductHasNoAdditionalInformation,
            SUMMARY_MAX_CHARS,
        )
    }

    pub fn line_item_whats_included_text(&self, whats_included: Option<&str>) -> String {
        self.long_text_summary(
            whats_included,
            MessageKey::ProductHasNoWhatInculded,
            SUMMARY_MAX_CHARS,
        )
    }
}
