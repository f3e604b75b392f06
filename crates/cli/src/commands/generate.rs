//! `skuforge generate`: regenerate a product's working set.

use std::path::PathBuf;

use clap::Args;

use skuforge_variants::{PriceField, Regeneration, VariantEngine};

use super::load_fixture;
use crate::config::Settings;
use crate::output::{CommandOutput, OutputFormat, format_attributes, format_json_pretty, format_table};

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Product fixture (JSON)
    pub fixture: PathBuf,
}

impl GenerateCommand {
    pub fn execute(&self, settings: &Settings, format: OutputFormat) -> anyhow::Result<CommandOutput> {
        let fixture = load_fixture(&self.fixture)?;
        let engine = VariantEngine::new(settings.engine_config(&fixture));
        let result = engine.regenerate(&fixture.article, &fixture.schema(), &fixture.variants);

        let body = match format {
            OutputFormat::Json => format_json_pretty(&result)?,
            OutputFormat::Table => format_regeneration(&result),
        };
        Ok(CommandOutput::ok(body))
    }
}

fn format_regeneration(result: &Regeneration) -> String {
    if result.variants.is_empty() {
        return "No variants (schema has no usable attribute values)".to_string();
    }

    let rows = result.variants.iter().map(|variant| {
        let overrides: Vec<&str> = PriceField::ALL
            .into_iter()
            .filter(|field| variant.has_override(*field))
            .map(PriceField::as_str)
            .collect();
        vec![
            variant.sku.clone(),
            format_attributes(&variant.attributes),
            variant.qty.to_string(),
            overrides.join(", "),
        ]
    });

    let mut out = format_table(["SKU", "Attributes", "Qty", "Overrides"], rows);
    out.push_str(&format!(
        "\n{} variants: {} retained, {} added, {} dropped",
        result.variants.len(),
        result.retained.len(),
        result.added.len(),
        result.dropped.len()
    ));
    if !result.dropped.is_empty() {
        out.push_str(&format!("\nDropped: {}", result.dropped.join(", ")));
    }
    for error in &result.errors {
        out.push_str(&format!("\n{error}"));
    }
    out
}
