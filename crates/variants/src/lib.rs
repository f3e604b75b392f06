//! Product variants domain module.
//!
//! This crate contains the variant engine for products/catalog: attribute
//! combination expansion, canonical SKU derivation, merge-on-regenerate, SKU
//! uniqueness validation, stock summaries and per-variant price/cost override
//! resolution. The engine is deterministic domain logic (no IO, no HTTP, no
//! storage); the persistence collaborator and fixture loading live alongside it
//! behind their own modules.

pub mod attribute;
pub mod engine;
pub mod fixture;
pub mod generate;
pub mod merge;
pub mod pricing;
pub mod sku;
pub mod store;
pub mod summary;
pub mod validate;
pub mod variant;

pub use attribute::{AttributeSchema, AttributeValues};
pub use engine::{EngineConfig, Regeneration, VariantEngine};
pub use fixture::{FixtureError, ProductFixture};
pub use generate::generate_variant_combinations;
pub use merge::merge_variants;
pub use pricing::{PriceField, ProductPricing, ResolvedPrice, ResolvedPricing};
pub use sku::{build_sku, format_attribute_token};
pub use store::{InMemoryVariantStore, StoreError, StoredVariant, VariantStore, commit_variants};
pub use summary::{VariantSummary, calculate_variant_summary};
pub use validate::{DuplicateSku, ensure_unique_skus, find_duplicate_skus, validate_sku_uniqueness};
pub use variant::Variant;
