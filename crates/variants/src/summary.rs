//! Stock summary over a variant collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::variant::Variant;

/// Aggregate stock figures for one product's variants.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSummary {
    pub total_units: u64,
    /// Σ qty × unit cost after, using the product's global cost where a
    /// variant has no override (0 when neither is set). Saturates at
    /// `Decimal::MAX` rather than overflowing.
    pub total_value: Decimal,
    pub variant_count: usize,
}

pub fn calculate_variant_summary(
    variants: &[Variant],
    global_cost_after: Option<Decimal>,
) -> VariantSummary {
    variants.iter().fold(
        VariantSummary {
            variant_count: variants.len(),
            ..VariantSummary::default()
        },
        |mut summary, variant| {
            let unit_cost = variant
                .cost_after
                .or(global_cost_after)
                .unwrap_or(Decimal::ZERO);
            summary.total_units += u64::from(variant.qty);
            // Clamps at Decimal::MAX / MIN instead of panicking.
            summary.total_value = summary
                .total_value
                .saturating_add(Decimal::from(variant.qty).saturating_mul(unit_cost));
            summary
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValues;
    use rust_decimal_macros::dec;

    fn variant(qty: u32, cost_after: Option<Decimal>) -> Variant {
        let mut v = Variant::new(format!("S-{qty}"), AttributeValues::new(), qty);
        v.cost_after = cost_after;
        v
    }

    #[test]
    fn override_and_inherited_costs_are_mixed() {
        let variants = vec![variant(2, Some(dec!(10))), variant(3, None)];
        let summary = calculate_variant_summary(&variants, Some(dec!(5)));

        assert_eq!(summary.total_units, 5);
        assert_eq!(summary.total_value, dec!(35));
        assert_eq!(summary.variant_count, 2);
    }

    #[test]
    fn missing_costs_count_as_zero() {
        let variants = vec![variant(4, None), variant(1, Some(dec!(2.50)))];
        let summary = calculate_variant_summary(&variants, None);

        assert_eq!(summary.total_units, 5);
        assert_eq!(summary.total_value, dec!(2.50));
    }

    #[test]
    fn zero_override_does_not_inherit() {
        let variants = vec![variant(10, Some(Decimal::ZERO))];
        let summary = calculate_variant_summary(&variants, Some(dec!(7)));
        assert_eq!(summary.total_value, Decimal::ZERO);
    }

    #[test]
    fn huge_costs_saturate_instead_of_overflowing() {
        let variants = vec![
            variant(1_000_000, Some(Decimal::MAX / dec!(10))),
            variant(3, None),
        ];
        let summary = calculate_variant_summary(&variants, Some(Decimal::MAX));

        assert_eq!(summary.total_units, 1_000_003);
        assert_eq!(summary.total_value, Decimal::MAX);
        assert_eq!(summary.variant_count, 2);
    }

    #[test]
    fn empty_collection() {
        assert_eq!(
            calculate_variant_summary(&[], Some(dec!(1))),
            VariantSummary::default()
        );
    }
}
