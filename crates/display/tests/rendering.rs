//! End-to-end rendering of a product page: configuration, catalog records,
//! and every formatter surface together.

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use storefront_catalog::{OptionValue, PriceOptions, Product, Variant};
use storefront_core::{Currency, ProductId, VariantId};
use storefront_display::{DisplayConfig, Formatter, Locale, RequestContext, StaticCatalog};

fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn catalog_product(id: ProductId) -> Product {
    let updated_at = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
    Product::new(id, "Field Jacket", updated_at)
        .with_price(Currency::Usd, usd(8000))
        .with_description("Waxed cotton shell.\n\nFits true to size.")
        .with_need_to_know("Dry clean only.")
        .with_available_on(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .with_promotion_marker("promos-2")
        .with_variant(Variant::new(VariantId::new()).with_price(Currency::Usd, usd(8000)))
        .with_variant(Variant::new(VariantId::new()).with_price(Currency::Usd, usd(8500)))
}

fn request_context() -> RequestContext {
    let mut options = PriceOptions::new();
    options.insert("size", OptionValue::new("medium"));
    RequestContext::new(
        Locale::default(),
        Currency::Usd,
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
    )
    .with_price_options(options)
}

#[test]
fn renders_a_complete_product_page() {
    let config: DisplayConfig =
        serde_json::from_str(r#"{"show_variant_full_price": false}"#).unwrap();
    let ctx = request_context();
    let formatter = Formatter::new(&config, &StaticCatalog, &ctx);

    let id = ProductId::new();
    let product = catalog_product(id);

    // Long-text fields.
    assert_eq!(
        formatter.product_description(&product).as_str(),
        "<p>Waxed cotton shell.</p><p>Fits true to size.</p>"
    );
    assert_eq!(
        formatter.product_need_to_know(&product).as_str(),
        "<p>Dry clean only.</p>"
    );
    assert_eq!(
        formatter.product_whats_included(&product).as_str(),
        "This product has no what's included"
    );

    // Variant pricing: base variant matches the product, the second differs,
    // so diff mode shows nothing for the first and a surcharge for the second.
    let variants = product.variants();
    assert!(formatter.variant_price(&product, &variants[0]).is_none());
    assert_eq!(
        formatter.variant_price(&product, &variants[1]).unwrap().as_str(),
        "(Add: $5.00)"
    );

    // Availability and summary.
    assert_eq!(formatter.available_status(&product), "Available");
    assert_eq!(
        formatter.line_item_description_text(product.description()),
        "Waxed cotton shell. Fits true to size."
    );

    // Cache keys carry the full render context.
    assert_eq!(
        formatter.cache_key_for_product(&product),
        format!("en/USD/medium/products/{id}-20240310093000/promos-2")
    );
    assert_eq!(
        formatter.cache_key_for_product_list(std::slice::from_ref(&product), Some(1)),
        "en/USD/medium/products/all-1-20240310093000-1"
    );
}

#[test]
fn full_price_mode_shows_every_variant_price() {
    let config = DisplayConfig {
        show_variant_full_price: true,
        ..DisplayConfig::default()
    };
    let ctx = request_context();
    let formatter = Formatter::new(&config, &StaticCatalog, &ctx);

    let product = catalog_product(ProductId::new());
    let rendered: Vec<String> = product
        .variants()
        .iter()
        .map(|v| formatter.variant_price(&product, v).unwrap().into_inner())
        .collect();
    assert_eq!(rendered, ["$80.00", "$85.00"]);
}

#[test]
fn pending_products_render_as_pending_sale() {
    let config = DisplayConfig::default();
    let ctx = request_context();
    let formatter = Formatter::new(&config, &StaticCatalog, &ctx);

    let product = Product::new(
        ProductId::new(),
        "Preorder Boot",
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
    )
    .with_available_on(ctx.now() + Duration::days(10));
    assert_eq!(formatter.available_status(&product), "Pending Sale");
}
