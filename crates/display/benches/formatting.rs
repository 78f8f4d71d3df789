use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use storefront_catalog::{Product, Variant};
use storefront_core::{Currency, ProductId, VariantId};
use storefront_display::{DisplayConfig, Formatter, Locale, RequestContext, StaticCatalog, text};

fn long_description(paragraphs: usize) -> String {
    let para = "A paragraph of product copy long enough to be representative of real catalog text.";
    vec![para; paragraphs].join("\n\n")
}

fn product_scope(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            Product::new(
                ProductId::new(),
                format!("Product {i}"),
                Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::seconds(i as i64),
            )
            .with_price(Currency::Usd, Decimal::new(1000 + i as i64, 2))
            .with_variant(
                Variant::new(VariantId::new())
                    .with_price(Currency::Usd, Decimal::new(1200 + i as i64, 2)),
            )
        })
        .collect()
}

fn bench_paragraph_wrapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_paragraphs");
    for paragraphs in [1usize, 8, 64] {
        let text_input = long_description(paragraphs);
        group.throughput(Throughput::Bytes(text_input.len() as u64));
        group.bench_function(format!("{paragraphs}_paragraphs"), |b| {
            b.iter(|| text::wrap_paragraphs(black_box(&text_input)))
        });
    }
    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let config = DisplayConfig::default();
    let ctx = RequestContext::new(
        Locale::default(),
        Currency::Usd,
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
    );
    let formatter = Formatter::new(&config, &StaticCatalog, &ctx);
    let markup = format!("<div><p>{}</p></div>", long_description(16));

    c.bench_function("line_item_summary", |b| {
        b.iter(|| formatter.line_item_description_text(black_box(Some(&markup))))
    });
}

fn bench_listing_cache_key(c: &mut Criterion) {
    let config = DisplayConfig::default();
    let ctx = RequestContext::new(
        Locale::default(),
        Currency::Usd,
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
    );
    let formatter = Formatter::new(&config, &StaticCatalog, &ctx);

    let mut group = c.benchmark_group("cache_key_for_product_list");
    for count in [10usize, 100, 1000] {
        let products = product_scope(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("{count}_products"), |b| {
            b.iter(|| formatter.cache_key_for_product_list(black_box(&products), Some(1)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_paragraph_wrapping,
    bench_summary,
    bench_listing_cache_key
);
criterion_main!(benches);
