//! `skuforge validate`: duplicate-SKU check of a stored working set.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use skuforge_variants::{DuplicateSku, find_duplicate_skus};

use super::load_fixture;
use crate::output::{CommandOutput, OutputFormat, format_json_pretty};

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Product fixture (JSON)
    pub fixture: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport {
    article: String,
    variant_count: usize,
    duplicates: Vec<DuplicateSku>,
    errors: Vec<String>,
}

impl ValidateCommand {
    pub fn execute(&self, format: OutputFormat) -> anyhow::Result<CommandOutput> {
        let fixture = load_fixture(&self.fixture)?;
        let duplicates = find_duplicate_skus(&fixture.variants);
        let report = ValidationReport {
            article: fixture.article.clone(),
            variant_count: fixture.variants.len(),
            errors: duplicates.iter().map(ToString::to_string).collect(),
            duplicates,
        };

        let body = match format {
            OutputFormat::Json => format_json_pretty(&report)?,
            OutputFormat::Table if report.errors.is_empty() => format!(
                "{}: {} variants, all SKUs unique",
                report.article, report.variant_count
            ),
            OutputFormat::Table => report.errors.join("\n"),
        };

        if report.errors.is_empty() {
            Ok(CommandOutput::ok(body))
        } else {
            Ok(CommandOutput::failed(body))
        }
    }
}
