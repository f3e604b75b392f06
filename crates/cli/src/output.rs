//! Output formatting for command results.

use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use skuforge_variants::{AttributeValues, ResolvedPrice};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Rendered command result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub body: String,
    /// `false` makes the binary exit with status 1.
    pub success: bool,
}

impl CommandOutput {
    pub fn ok(body: String) -> Self {
        Self { body, success: true }
    }

    pub fn failed(body: String) -> Self {
        Self { body, success: false }
    }
}

pub fn format_json_pretty<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Build a table with a header row.
pub fn format_table<H, R, C>(header: H, rows: R) -> String
where
    H: IntoIterator,
    H::Item: Into<String>,
    R: IntoIterator<Item = Vec<C>>,
    C: Into<String>,
{
    let mut builder = Builder::default();
    builder.push_record(header.into_iter().map(Into::into).collect::<Vec<String>>());
    for row in rows {
        builder.push_record(row.into_iter().map(Into::into).collect::<Vec<String>>());
    }
    builder.build().with(Style::modern()).to_string()
}

/// `Size=10oz, Color=RED`
pub fn format_attributes(attributes: &AttributeValues) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Effective price, `*` marking a variant-level override, `-` when unset.
pub fn format_price(price: ResolvedPrice) -> String {
    match (price.value, price.overridden) {
        (Some(value), true) => format!("{value}*"),
        (Some(value), false) => value.to_string(),
        (None, _) => "-".to_string(),
    }
}
