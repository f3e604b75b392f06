//! Persistence collaborator for committed variant collections.
//!
//! The engine never persists anything itself. When a caller commits its working
//! set, the store assigns row identity, position, product foreign key and commit
//! timestamp, and guards concurrent edits with an optimistic version per
//! product.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use skuforge_core::{DomainError, Entity, ExpectedVersion, ProductId, VariantRowId};

use crate::validate::ensure_unique_skus;
use crate::variant::Variant;

/// A variant as persisted for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredVariant {
    pub id: VariantRowId,
    pub product_id: ProductId,
    /// Zero-based position in the committed list.
    pub position: usize,
    pub committed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub variant: Variant,
}

impl Entity for StoredVariant {
    type Id = VariantRowId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Variant store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("optimistic concurrency check failed: {0}")]
    Concurrency(String),

    #[error("variant collection rejected: {0}")]
    Validation(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Conflict(msg) => StoreError::Concurrency(msg),
            DomainError::Validation(msg) => StoreError::Validation(msg),
        }
    }
}

/// Product-scoped store of committed variant lists.
///
/// Implementations must:
/// - replace a product's whole list atomically
/// - check `expected_version` against the product's current version
/// - bump the version by one per successful replace (0 = never committed)
/// - return rows in committed order from `load_variants`
/// - give every returned row its own id, even when the list repeats a SKU
///   (uniqueness is checked by [`commit_variants`], not here)
pub trait VariantStore: Send + Sync {
    fn replace_variants(
        &self,
        product_id: ProductId,
        variants: Vec<Variant>,
        expected_version: ExpectedVersion,
    ) -> Result<Vec<StoredVariant>, StoreError>;

    /// Committed rows for a product (empty if never committed).
    fn load_variants(&self, product_id: ProductId) -> Result<Vec<StoredVariant>, StoreError>;

    fn version(&self, product_id: ProductId) -> Result<u64, StoreError>;
}

impl<S> VariantStore for Arc<S>
where
    S: VariantStore + ?Sized,
{
    fn replace_variants(
        &self,
        product_id: ProductId,
        variants: Vec<Variant>,
        expected_version: ExpectedVersion,
    ) -> Result<Vec<StoredVariant>, StoreError> {
        (**self).replace_variants(product_id, variants, expected_version)
    }

    fn load_variants(&self, product_id: ProductId) -> Result<Vec<StoredVariant>, StoreError> {
        (**self).load_variants(product_id)
    }

    fn version(&self, product_id: ProductId) -> Result<u64, StoreError> {
        (**self).version(product_id)
    }
}

/// Validate a working set and hand it to the store.
///
/// Duplicate SKUs block the write; nothing is persisted in that case.
pub fn commit_variants<S: VariantStore + ?Sized>(
    store: &S,
    product_id: ProductId,
    variants: Vec<Variant>,
    expected_version: ExpectedVersion,
) -> Result<Vec<StoredVariant>, StoreError> {
    if let Err(err) = ensure_unique_skus(&variants) {
        tracing::warn!(%product_id, error = %err, "refusing to commit variants");
        return Err(err.into());
    }

    let stored = store.replace_variants(product_id, variants, expected_version)?;
    tracing::info!(%product_id, variants = stored.len(), "variants committed");
    Ok(stored)
}

#[derive(Debug, Default)]
struct ProductRows {
    version: u64,
    rows: Vec<StoredVariant>,
}

/// In-memory variant store.
///
/// Intended for tests/dev. Row ids are kept for SKUs that survive a replace,
/// the way an upsert-by-SKU backend would behave.
#[derive(Debug, Default)]
pub struct InMemoryVariantStore {
    products: RwLock<HashMap<ProductId, ProductRows>>,
}

impl InMemoryVariantStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VariantStore for InMemoryVariantStore {
    fn replace_variants(
        &self,
        product_id: ProductId,
        variants: Vec<Variant>,
        expected_version: ExpectedVersion,
    ) -> Result<Vec<StoredVariant>, StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let entry = products.entry(product_id).or_default();
        expected_version.check(entry.version)?;

        let mut previous_ids: HashMap<String, VariantRowId> = entry
            .rows
            .iter()
            .map(|row| (row.variant.sku.clone(), row.id))
            .collect();

        let committed_at = Utc::now();
        let rows: Vec<StoredVariant> = variants
            .into_iter()
            .enumerate()
            .map(|(position, variant)| StoredVariant {
                // Taken, not copied: a repeated SKU gets a fresh id.
                id: previous_ids.remove(&variant.sku).unwrap_or_default(),
                product_id,
                position,
                committed_at,
                variant,
            })
            .collect();

        entry.rows = rows.clone();
        entry.version += 1;

        Ok(rows)
    }

    fn load_variants(&self, product_id: ProductId) -> Result<Vec<StoredVariant>, StoreError> {
        let products = self
            .products
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        Ok(products
            .get(&product_id)
            .map(|entry| entry.rows.clone())
            .unwrap_or_default())
    }

    fn version(&self, product_id: ProductId) -> Result<u64, StoreError> {
        let products = self
            .products
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        Ok(products.get(&product_id).map(|entry| entry.version).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValues;
    use rust_decimal_macros::dec;

    fn variant(sku: &str, qty: u32) -> Variant {
        Variant::new(sku, AttributeValues::new(), qty)
    }

    #[test]
    fn commit_assigns_identity_and_positions() {
        let store = InMemoryVariantStore::new();
        let product_id = ProductId::new();

        let stored = commit_variants(
            &store,
            product_id,
            vec![variant("A-1-RED", 1), variant("A-1-BLUE", 2)],
            ExpectedVersion::Exact(0),
        )
        .unwrap();

        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].position, 0);
        assert_eq!(stored[1].position, 1);
        assert!(stored.iter().all(|row| row.product_id == product_id));
        assert_ne!(stored[0].id(), stored[1].id());
        assert_eq!(store.version(product_id).unwrap(), 1);
        assert_eq!(store.load_variants(product_id).unwrap(), stored);
    }

    #[test]
    fn commit_rejects_duplicate_skus_without_writing() {
        let store = InMemoryVariantStore::new();
        let product_id = ProductId::new();

        let err = commit_variants(
            &store,
            product_id,
            vec![variant("X", 1), variant("X", 2)],
            ExpectedVersion::Any,
        )
        .unwrap_err();

        assert!(matches!(err, StoreError::Validation(ref msg) if msg.contains("\"X\"")));
        assert_eq!(store.version(product_id).unwrap(), 0);
        assert!(store.load_variants(product_id).unwrap().is_empty());
    }

    #[test]
    fn stale_version_is_a_concurrency_error() {
        let store = InMemoryVariantStore::new();
        let product_id = ProductId::new();
        commit_variants(&store, product_id, vec![variant("A", 1)], ExpectedVersion::Exact(0))
            .unwrap();

        let err = commit_variants(&store, product_id, vec![variant("A", 5)], ExpectedVersion::Exact(0))
            .unwrap_err();
        assert!(matches!(err, StoreError::Concurrency(_)));
        assert_eq!(store.load_variants(product_id).unwrap()[0].variant.qty, 1);
    }

    #[test]
    fn replace_keeps_row_ids_for_surviving_skus() {
        let store = InMemoryVariantStore::new();
        let product_id = ProductId::new();
        let first = store
            .replace_variants(
                product_id,
                vec![variant("A", 1), variant("B", 1)],
                ExpectedVersion::Any,
            )
            .unwrap();

        let second = store
            .replace_variants(
                product_id,
                vec![variant("B", 3), variant("C", 0)],
                ExpectedVersion::Exact(1),
            )
            .unwrap();

        assert_eq!(second[0].id, first[1].id);
        assert_ne!(second[1].id, first[0].id);
        assert_eq!(second[0].position, 0);
        assert_eq!(store.version(product_id).unwrap(), 2);
    }

    #[test]
    fn repeated_sku_rows_get_distinct_ids() {
        let store = InMemoryVariantStore::new();
        let product_id = ProductId::new();
        let first = store
            .replace_variants(product_id, vec![variant("X", 1)], ExpectedVersion::Any)
            .unwrap();

        let second = store
            .replace_variants(
                product_id,
                vec![variant("X", 1), variant("X", 2)],
                ExpectedVersion::Any,
            )
            .unwrap();

        assert_eq!(second[0].id, first[0].id);
        assert_ne!(second[0].id, second[1].id);
    }

    #[test]
    fn products_are_isolated() {
        let store = Arc::new(InMemoryVariantStore::new());
        let a = ProductId::new();
        let b = ProductId::new();
        store
            .replace_variants(a, vec![variant("A", 1)], ExpectedVersion::Any)
            .unwrap();

        assert!(store.load_variants(b).unwrap().is_empty());
        assert_eq!(store.version(b).unwrap(), 0);
    }

    #[test]
    fn stored_rows_serialize_flat() {
        let mut v = variant("A-1-RED", 2);
        v.retail = Some(dec!(12.5));
        let store = InMemoryVariantStore::new();
        let rows = store
            .replace_variants(ProductId::new(), vec![v], ExpectedVersion::Any)
            .unwrap();

        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["sku"], "A-1-RED");
        assert_eq!(json["qty"], 2);
        assert_eq!(json["retail"], "12.5");
        assert_eq!(json["position"], 0);
        assert!(json.get("productId").is_some());
        assert!(json.get("committedAt").is_some());
    }
}
