//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Persisted variant rows are entities (the store assigns their identity);
/// freshly generated variants are not, they are keyed by SKU only.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
