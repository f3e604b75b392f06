use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use skuforge_variants::{
    AttributeSchema, calculate_variant_summary, generate_variant_combinations, merge_variants,
    validate_sku_uniqueness,
};

/// Schema with `axes` attributes of `width` values each (width^axes variants).
fn schema(axes: usize, width: usize) -> AttributeSchema {
    let mut schema = AttributeSchema::new();
    for a in 0..axes {
        schema.push_attribute(
            format!("Attr{a}"),
            (0..width).map(|v| format!("Value {v} & Co")),
        );
    }
    schema
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_variant_combinations");
    for (axes, width) in [(2, 5), (3, 8), (4, 8)] {
        let schema = schema(axes, width);
        group.throughput(Throughput::Elements(schema.combination_count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{axes}x{width}")),
            &schema,
            |b, schema| b.iter(|| generate_variant_combinations(black_box("BGC-1011"), schema, 0)),
        );
    }
    group.finish();
}

fn bench_merge_and_validate(c: &mut Criterion) {
    let schema = schema(3, 10);
    let existing = generate_variant_combinations("BGC-1011", &schema, 5);
    let fresh = generate_variant_combinations("BGC-1011", &schema, 0);

    c.bench_function("merge_variants/1000", |b| {
        b.iter(|| merge_variants(black_box(&existing), black_box(&fresh)))
    });
    c.bench_function("validate_sku_uniqueness/1000", |b| {
        b.iter(|| validate_sku_uniqueness(black_box(&fresh)))
    });
    c.bench_function("calculate_variant_summary/1000", |b| {
        b.iter(|| calculate_variant_summary(black_box(&existing), None))
    });
}

criterion_group!(benches, bench_generate, bench_merge_and_validate);
criterion_main!(benches);
