//! Display configuration flags.
//!
//! Loaded once by the surrounding application and passed explicitly to the
//! formatter; there is no global configuration lookup.

use serde::{Deserialize, Serialize};

/// Boolean toggles controlling how product content is rendered.
///
/// The `show_raw_*` flags switch a long-text field from paragraph wrapping
/// to raw passthrough (trusting the stored text as pre-sanitized HTML).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show each variant's full price instead of its difference from the
    /// product price.
    pub show_variant_full_price: bool,
    pub show_raw_product_description: bool,
    pub show_raw_product_need_to_know: bool,
    pub show_raw_product_additional_information: bool,
    pub show_raw_product_whats_included: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_flags_off() {
        let config = DisplayConfig::default();
        assert!(!config.show_variant_full_price);
        assert!(!config.show_raw_product_description);
        assert!(!config.show_raw_product_whats_included);
    }

    #[test]
    fn partial_json_fills_missing_flags_with_defaults() {
        let config: DisplayConfig =
            serde_json::from_str(r#"{"show_variant_full_price": true}"#).unwrap();
        assert!(config.show_variant_full_price);
        assert!(!config.show_raw_product_description);
    }
}
