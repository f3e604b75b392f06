//! SKU uniqueness validation.
//!
//! Duplicates are reported, never resolved: the caller decides whether they
//! block a save or only highlight rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use skuforge_core::{DomainError, DomainResult};

use crate::variant::Variant;

/// A SKU that occurs more than once in a variant collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateSku {
    pub sku: String,
    pub count: usize,
}

impl core::fmt::Display for DuplicateSku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Duplicate SKU \"{}\" appears {} times", self.sku, self.count)
    }
}

/// Every SKU occurring more than once, in order of first occurrence.
pub fn find_duplicate_skus(variants: &[Variant]) -> Vec<DuplicateSku> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for variant in variants {
        let count = counts.entry(variant.sku.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(variant.sku.as_str());
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter_map(|sku| {
            let count = counts[sku];
            (count > 1).then(|| DuplicateSku {
                sku: sku.to_string(),
                count,
            })
        })
        .collect()
}

/// One human-readable message per duplicated SKU; empty when all are unique.
pub fn validate_sku_uniqueness(variants: &[Variant]) -> Vec<String> {
    find_duplicate_skus(variants)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Fail-fast form of [`validate_sku_uniqueness`] for callers that block saves.
pub fn ensure_unique_skus(variants: &[Variant]) -> DomainResult<()> {
    let errors = validate_sku_uniqueness(variants);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValues;

    fn skus(list: &[&str]) -> Vec<Variant> {
        list.iter()
            .map(|sku| Variant::new(*sku, AttributeValues::new(), 0))
            .collect()
    }

    #[test]
    fn reports_each_duplicate_once_with_count() {
        let errors = validate_sku_uniqueness(&skus(&["X", "X", "Y"]));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("\"X\""));
        assert!(errors[0].contains('2'));
        assert_eq!(errors[0], "Duplicate SKU \"X\" appears 2 times");
    }

    #[test]
    fn unique_skus_produce_no_errors() {
        assert!(validate_sku_uniqueness(&skus(&["X", "Y"])).is_empty());
        assert!(validate_sku_uniqueness(&[]).is_empty());
    }

    #[test]
    fn duplicates_are_ordered_by_first_occurrence() {
        let found = find_duplicate_skus(&skus(&["B", "A", "B", "A", "B", "C"]));
        assert_eq!(
            found,
            vec![
                DuplicateSku { sku: "B".to_string(), count: 3 },
                DuplicateSku { sku: "A".to_string(), count: 2 },
            ]
        );
    }

    #[test]
    fn validation_does_not_touch_input() {
        let list = skus(&["X", "X"]);
        let before = list.clone();
        let _ = validate_sku_uniqueness(&list);
        assert_eq!(list, before);
    }

    #[test]
    fn ensure_unique_joins_messages() {
        assert!(ensure_unique_skus(&skus(&["X", "Y"])).is_ok());

        match ensure_unique_skus(&skus(&["X", "X", "Y", "Y"])) {
            Err(DomainError::Validation(msg)) => {
                assert_eq!(
                    msg,
                    "Duplicate SKU \"X\" appears 2 times; Duplicate SKU \"Y\" appears 2 times"
                );
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
