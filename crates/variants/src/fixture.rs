//! Product fixtures: sample catalog data loaded from JSON files.
//!
//! Demo and test data lives in files (see `tests/fixtures/`), never in code.

use std::io::Read;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attribute::AttributeSchema;
use crate::pricing::ProductPricing;
use crate::variant::Variant;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One product as the editing screen holds it: schema, global pricing and the
/// current working set of variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFixture {
    pub article: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Attribute names in SKU order.
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub attribute_values: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub default_qty: u32,
    #[serde(default)]
    pub pricing: ProductPricing,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl ProductFixture {
    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FixtureError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn schema(&self) -> AttributeSchema {
        AttributeSchema::from_parts(self.attributes.as_slice(), &self.attribute_values)
    }
}
