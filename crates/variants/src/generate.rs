//! Combination enumeration: expand an attribute schema into variants.

use crate::attribute::{AttributeSchema, AttributeValues};
use crate::sku::build_sku;
use crate::variant::Variant;

/// Generate one variant per combination of attribute values.
///
/// Attributes are enumerated in schema order and values in list order, with
/// the last attribute varying fastest. Blank values are skipped; the rest are
/// stored trimmed (canonicalization only happens inside the SKU). Every variant
/// gets `default_qty` and no price/cost overrides.
///
/// An empty schema, or any attribute without a usable value, yields no
/// variants.
pub fn generate_variant_combinations(
    article: &str,
    schema: &AttributeSchema,
    default_qty: u32,
) -> Vec<Variant> {
    if schema.is_empty() {
        return vec![];
    }

    let order: Vec<&str> = schema.names().collect();
    let axes: Vec<Vec<&str>> = schema
        .iter()
        .map(|(_, values)| {
            values
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .collect()
        })
        .collect();

    if axes.iter().any(Vec::is_empty) {
        return vec![];
    }

    let mut variants = Vec::with_capacity(schema.combination_count());
    // Odometer over the axes; the last index ticks fastest.
    let mut cursor = vec![0usize; axes.len()];
    loop {
        let attributes: AttributeValues = order
            .iter()
            .zip(&axes)
            .zip(&cursor)
            .map(|((name, values), &i)| (name.to_string(), values[i].to_string()))
            .collect();
        let sku = build_sku(article, &attributes, order.as_slice());
        variants.push(Variant::new(sku, attributes, default_qty));

        let mut axis = axes.len();
        loop {
            if axis == 0 {
                return variants;
            }
            axis -= 1;
            cursor[axis] += 1;
            if cursor[axis] < axes[axis].len() {
                break;
            }
            cursor[axis] = 0;
        }
    }
}
