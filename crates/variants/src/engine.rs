//! Regeneration facade used by product-editing screens.
//!
//! Every schema edit re-runs generation, substitutes already-edited records and
//! re-checks SKU uniqueness. The result also says which SKUs were kept, added or
//! dropped so the caller can show what the edit did.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeSchema;
use crate::generate::generate_variant_combinations;
use crate::merge::merge_variants;
use crate::validate::validate_sku_uniqueness;
use crate::variant::Variant;

/// Engine settings resolved by the caller (see the CLI for env handling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Quantity stamped onto newly generated variants.
    #[serde(default)]
    pub default_qty: u32,
}

/// Outcome of one regeneration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regeneration {
    /// The new working set (fresh order, edited records substituted).
    pub variants: Vec<Variant>,
    /// SKUs whose existing record was kept.
    pub retained: Vec<String>,
    /// SKUs that did not exist before.
    pub added: Vec<String>,
    /// Existing SKUs the schema no longer produces.
    pub dropped: Vec<String>,
    /// Uniqueness messages for the new working set.
    pub errors: Vec<String>,
}

impl Regeneration {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct VariantEngine {
    config: EngineConfig,
}

impl VariantEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn generate(&self, article: &str, schema: &AttributeSchema) -> Vec<Variant> {
        generate_variant_combinations(article, schema, self.config.default_qty)
    }

    pub fn regenerate(
        &self,
        article: &str,
        schema: &AttributeSchema,
        existing: &[Variant],
    ) -> Regeneration {
        let fresh = self.generate(article, schema);
        let variants = merge_variants(existing, &fresh);

        let known: HashSet<&str> = existing.iter().map(|v| v.sku.as_str()).collect();
        let produced: HashSet<&str> = fresh.iter().map(|v| v.sku.as_str()).collect();

        let mut retained = Vec::new();
        let mut added = Vec::new();
        let mut reported = HashSet::new();
        for variant in &fresh {
            if !reported.insert(variant.sku.as_str()) {
                continue;
            }
            if known.contains(variant.sku.as_str()) {
                retained.push(variant.sku.clone());
            } else {
                added.push(variant.sku.clone());
            }
        }

        let mut dropped = Vec::new();
        let mut seen = HashSet::new();
        for variant in existing {
            let sku = variant.sku.as_str();
            if !produced.contains(sku) && seen.insert(sku) {
                dropped.push(sku.to_string());
            }
        }

        let errors = validate_sku_uniqueness(&variants);

        tracing::debug!(
            article = article.trim(),
            attributes = schema.len(),
            variants = variants.len(),
            retained = retained.len(),
            added = added.len(),
            dropped = dropped.len(),
            duplicates = errors.len(),
            "variants regenerated"
        );

        Regeneration {
            variants,
            retained,
            added,
            dropped,
            errors,
        }
    }
}
