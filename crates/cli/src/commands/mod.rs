//! Subcommand implementations. Each one loads a product fixture and renders
//! an engine result.

pub mod generate;
pub mod pricing;
pub mod summary;
pub mod validate;

use std::path::Path;

use anyhow::Context;

use skuforge_variants::ProductFixture;

pub(crate) fn load_fixture(path: &Path) -> anyhow::Result<ProductFixture> {
    let fixture = ProductFixture::from_path(path)
        .with_context(|| format!("loading product fixture {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        article = %fixture.article,
        variants = fixture.variants.len(),
        "fixture loaded"
    );
    Ok(fixture)
}

#[cfg(test)]
pub(crate) fn sample_fixture(name: &str) -> std::path::PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "..", "variants", "tests", "fixtures", name]
        .iter()
        .collect()
}
