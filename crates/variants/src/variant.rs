//! Variant record: one sellable combination of attribute values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use skuforge_core::{DomainError, DomainResult};

use crate::attribute::AttributeValues;
use crate::pricing::{PriceField, ProductPricing, ResolvedPrice, ResolvedPricing};

/// A product variant.
///
/// `sku` is the natural key within one product. Price/cost fields are
/// overrides: `None` inherits the product's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub sku: String,
    #[serde(default)]
    pub attributes: AttributeValues,
    #[serde(default)]
    pub qty: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wholesale: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_before: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_after: Option<Decimal>,
}

impl Variant {
    /// A variant with no overrides (inherits every product value).
    pub fn new(sku: impl Into<String>, attributes: AttributeValues, qty: u32) -> Self {
        Self {
            sku: sku.into(),
            attributes,
            qty,
            wholesale: None,
            retail: None,
            club: None,
            cost_before: None,
            cost_after: None,
        }
    }

    pub fn override_for(&self, field: PriceField) -> Option<Decimal> {
        match field {
            PriceField::Wholesale => self.wholesale,
            PriceField::Retail => self.retail,
            PriceField::Club => self.club,
            PriceField::CostBefore => self.cost_before,
            PriceField::CostAfter => self.cost_after,
        }
    }

    pub fn has_override(&self, field: PriceField) -> bool {
        self.override_for(field).is_some()
    }

    /// Pin `field` to `value` for this variant. Negative values are rejected.
    pub fn set_override(&mut self, field: PriceField, value: Decimal) -> DomainResult<()> {
        if value < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "{field} override for {} cannot be negative",
                self.sku
            )));
        }
        *self.slot_mut(field) = Some(value);
        Ok(())
    }

    /// Go back to inheriting the product value for `field`.
    pub fn clear_override(&mut self, field: PriceField) {
        *self.slot_mut(field) = None;
    }

    /// Override if set, else the product's global value.
    pub fn effective(&self, field: PriceField, product: &ProductPricing) -> Option<Decimal> {
        self.override_for(field).or_else(|| product.get(field))
    }

    pub fn resolve_pricing(&self, product: &ProductPricing) -> ResolvedPricing {
        let resolve = |field: PriceField| ResolvedPrice {
            value: self.effective(field, product),
            overridden: self.has_override(field),
        };
        ResolvedPricing {
            sku: self.sku.clone(),
            wholesale: resolve(PriceField::Wholesale),
            retail: resolve(PriceField::Retail),
            club: resolve(PriceField::Club),
            cost_before: resolve(PriceField::CostBefore),
            cost_after: resolve(PriceField::CostAfter),
        }
    }

    fn slot_mut(&mut self, field: PriceField) -> &mut Option<Decimal> {
        match field {
            PriceField::Wholesale => &mut self.wholesale,
            PriceField::Retail => &mut self.retail,
            PriceField::Club => &mut self.club,
            PriceField::CostBefore => &mut self.cost_before,
            PriceField::CostAfter => &mut self.cost_after,
        }
    }
}
