//! `skuforge summary`: stock units and value.

use std::path::PathBuf;

use clap::Args;

use skuforge_variants::calculate_variant_summary;

use super::load_fixture;
use crate::output::{CommandOutput, OutputFormat, format_json_pretty, format_table};

#[derive(Debug, Args)]
pub struct SummaryCommand {
    /// Product fixture (JSON)
    pub fixture: PathBuf,
}

impl SummaryCommand {
    pub fn execute(&self, format: OutputFormat) -> anyhow::Result<CommandOutput> {
        let fixture = load_fixture(&self.fixture)?;
        let summary = calculate_variant_summary(&fixture.variants, fixture.pricing.cost_after);

        let body = match format {
            OutputFormat::Json => format_json_pretty(&summary)?,
            OutputFormat::Table => format_table(
                ["Variants", "Units", "Value"],
                [vec![
                    summary.variant_count.to_string(),
                    summary.total_units.to_string(),
                    summary.total_value.to_string(),
                ]],
            ),
        };
        Ok(CommandOutput::ok(body))
    }
}
