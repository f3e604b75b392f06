//! `skuforge` command-line front end.
//!
//! Runs the variant engine over JSON product fixtures: regenerate a working
//! set, check SKU uniqueness, summarize stock value and list resolved prices.

use clap::{Parser, Subcommand};

use commands::{
    generate::GenerateCommand, pricing::PricingCommand, summary::SummaryCommand,
    validate::ValidateCommand,
};
use config::Settings;
use output::{CommandOutput, OutputFormat};

pub mod commands;
pub mod config;
pub mod output;

/// skuforge - product variant generation and SKU tooling
#[derive(Debug, Parser)]
#[command(name = "skuforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate variants from the fixture's attribute schema
    #[command(name = "generate")]
    Generate(GenerateCommand),

    /// Check the fixture's variants for duplicate SKUs
    #[command(name = "validate")]
    Validate(ValidateCommand),

    /// Stock units and value of the fixture's variants
    #[command(name = "summary")]
    Summary(SummaryCommand),

    /// Effective prices per variant (overrides marked with *)
    #[command(name = "pricing")]
    Pricing(PricingCommand),
}

impl Cli {
    pub fn run(self, settings: &Settings) -> anyhow::Result<CommandOutput> {
        match self.command {
            Command::Generate(cmd) => cmd.execute(settings, self.format),
            Command::Validate(cmd) => cmd.execute(self.format),
            Command::Summary(cmd) => cmd.execute(self.format),
            Command::Pricing(cmd) => cmd.execute(self.format),
        }
    }
}
