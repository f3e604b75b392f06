//! `skuforge pricing`: effective prices per variant.

use std::path::PathBuf;

use clap::Args;

use skuforge_variants::{PriceField, ResolvedPricing};

use super::load_fixture;
use crate::output::{CommandOutput, OutputFormat, format_json_pretty, format_price, format_table};

#[derive(Debug, Args)]
pub struct PricingCommand {
    /// Product fixture (JSON)
    pub fixture: PathBuf,
}

impl PricingCommand {
    pub fn execute(&self, format: OutputFormat) -> anyhow::Result<CommandOutput> {
        let fixture = load_fixture(&self.fixture)?;
        let resolved: Vec<ResolvedPricing> = fixture
            .variants
            .iter()
            .map(|variant| variant.resolve_pricing(&fixture.pricing))
            .collect();

        let body = match format {
            OutputFormat::Json => format_json_pretty(&resolved)?,
            OutputFormat::Table if resolved.is_empty() => "No variants".to_string(),
            OutputFormat::Table => {
                let rows = resolved.iter().map(|pricing| {
                    let mut row = vec![pricing.sku.clone()];
                    row.extend(PriceField::ALL.into_iter().map(|f| format_price(pricing.get(f))));
                    row
                });
                format_table(
                    ["SKU", "Wholesale", "Retail", "Club", "Cost before", "Cost after"],
                    rows,
                )
            }
        };
        Ok(CommandOutput::ok(body))
    }
}
