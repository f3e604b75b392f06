//! Attribute schema: the ordered axes of variation of a product.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use skuforge_core::ValueObject;

/// Attribute name → chosen raw value for one variant.
///
/// Iteration order is meaningful: generated variants list their attributes in
/// schema order.
pub type AttributeValues = IndexMap<String, String>;

/// Ordered attribute names, each with its ordered list of candidate values.
///
/// Name order determines SKU token order and enumeration order, so it is part
/// of the value: two schemas with the same entries in a different order are not
/// equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSchema {
    attributes: IndexMap<String, Vec<String>>,
}

impl AttributeSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`AttributeSchema::push_attribute`].
    pub fn with_attribute<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.push_attribute(name, values);
        self
    }

    /// Append an attribute with its candidate values.
    ///
    /// Re-declaring an existing name replaces its values and keeps its original
    /// position.
    pub fn push_attribute<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attributes
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }

    /// Build a schema from an ordered name list plus a name → values lookup.
    ///
    /// Names missing from `values` get an empty value list (and therefore yield
    /// no combinations); keys of `values` that are not in `names` are ignored.
    pub fn from_parts<S: AsRef<str>>(names: &[S], values: &IndexMap<String, Vec<String>>) -> Self {
        let mut schema = Self::new();
        for name in names {
            let name = name.as_ref();
            let candidates = values.get(name).cloned().unwrap_or_default();
            schema.push_attribute(name, candidates);
        }
        schema
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Candidate values for `name`, empty when the attribute is unknown.
    pub fn values_for(&self, name: &str) -> &[String] {
        self.attributes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.attributes
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of variants the schema expands to (blank values don't count).
    pub fn combination_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.attributes
            .values()
            .map(|values| values.iter().filter(|v| !v.trim().is_empty()).count())
            .fold(1usize, |acc, n| acc.saturating_mul(n))
    }
}

impl PartialEq for AttributeSchema {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order; ours must not.
        self.attributes.iter().eq(other.attributes.iter())
    }
}

impl Eq for AttributeSchema {}

impl ValueObject for AttributeSchema {}
