//! Price/cost fields and override-vs-inherit resolution.
//!
//! A product carries global values for five price/cost fields. Each variant may
//! override any of them; an absent override tracks the product value, including
//! future changes to it. An override equal to the product value is still an
//! override.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use skuforge_core::ValueObject;

/// The price/cost fields a variant can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceField {
    Wholesale,
    Retail,
    Club,
    CostBefore,
    CostAfter,
}

impl PriceField {
    pub const ALL: [PriceField; 5] = [
        PriceField::Wholesale,
        PriceField::Retail,
        PriceField::Club,
        PriceField::CostBefore,
        PriceField::CostAfter,
    ];

    /// Wire name of the field (matches the serialized record keys).
    pub fn as_str(self) -> &'static str {
        match self {
            PriceField::Wholesale => "wholesale",
            PriceField::Retail => "retail",
            PriceField::Club => "club",
            PriceField::CostBefore => "costBefore",
            PriceField::CostAfter => "costAfter",
        }
    }
}

impl core::fmt::Display for PriceField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product-level (global) values for every price/cost field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPricing {
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

impl ProductPricing {
    pub fn get(&self, field: PriceField) -> Option<Decimal> {
        match field {
            PriceField::Wholesale => self.wholesale,
            PriceField::Retail => self.retail,
            PriceField::Club => self.club,
            PriceField::CostBefore => self.cost_before,
            PriceField::CostAfter => self.cost_after,
        }
    }

    pub fn with(mut self, field: PriceField, value: Decimal) -> Self {
        let slot = match field {
            PriceField::Wholesale => &mut self.wholesale,
            PriceField::Retail => &mut self.retail,
            PriceField::Club => &mut self.club,
            PriceField::CostBefore => &mut self.cost_before,
            PriceField::CostAfter => &mut self.cost_after,
        };
        *slot = Some(value);
        self
    }
}

impl ValueObject for ProductPricing {}

/// Effective value of one field for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPrice {
    /// Override if set, else the product value, else `None`.
    pub value: Option<Decimal>,
    /// Whether `value` came from the variant rather than the product.
    pub overridden: bool,
}

/// Effective values of every field for one variant, as shown on price lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPricing {
    pub sku: String,
    pub wholesale: ResolvedPrice,
    pub retail: ResolvedPrice,
    pub club: ResolvedPrice,
    pub cost_before: ResolvedPrice,
    pub cost_after: ResolvedPrice,
}

impl ResolvedPricing {
    pub fn get(&self, field: PriceField) -> ResolvedPrice {
        match field {
            PriceField::Wholesale => self.wholesale,
            PriceField::Retail => self.retail,
            PriceField::Club => self.club,
            PriceField::CostBefore => self.cost_before,
            PriceField::CostAfter => self.cost_after,
        }
    }

    /// Fields whose value is a variant-level override.
    pub fn overridden_fields(&self) -> Vec<PriceField> {
        PriceField::ALL
            .into_iter()
            .filter(|field| self.get(*field).overridden)
            .collect()
    }
}

impl ValueObject for ResolvedPricing {}
