//! `skuforge-core` — shared building blocks for the catalog domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, strongly-typed identifiers and a few marker traits.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;
pub mod version;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, VariantRowId};
pub use value_object::ValueObject;
pub use version::ExpectedVersion;
