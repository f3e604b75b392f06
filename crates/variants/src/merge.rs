//! Merge-on-regenerate: keep edited records when the schema is re-expanded.

use std::collections::HashMap;

use crate::variant::Variant;

/// Substitute already-known variants into a freshly generated list.
///
/// The result has exactly `fresh`'s length and order. Each entry is the
/// existing variant with the same SKU when there is one (so hand-edited `qty`
/// and overrides survive), otherwise the fresh entry. Existing variants whose
/// SKU is no longer generated are dropped. If `existing` holds the same SKU
/// twice, the later record wins.
pub fn merge_variants(existing: &[Variant], fresh: &[Variant]) -> Vec<Variant> {
    let known: HashMap<&str, &Variant> = existing
        .iter()
        .map(|variant| (variant.sku.as_str(), variant))
        .collect();

    fresh
        .iter()
        .map(|candidate| {
            known
                .get(candidate.sku.as_str())
                .copied()
                .unwrap_or(candidate)
                .clone()
        })
        .collect()
}
