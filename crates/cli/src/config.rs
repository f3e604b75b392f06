//! Runtime settings read from the environment.

use skuforge_variants::{EngineConfig, ProductFixture};

/// Overrides the fixture's `defaultQty` for newly generated variants.
pub const DEFAULT_QTY_ENV: &str = "SKUFORGE_DEFAULT_QTY";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub default_qty: Option<u32>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (the process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_qty = lookup(DEFAULT_QTY_ENV).and_then(|raw| match raw.trim().parse::<u32>() {
            Ok(qty) => Some(qty),
            Err(err) => {
                tracing::warn!(
                    value = %raw,
                    error = %err,
                    "SKUFORGE_DEFAULT_QTY is not a non-negative integer; using fixture default"
                );
                None
            }
        });

        Self { default_qty }
    }

    pub fn engine_config(&self, fixture: &ProductFixture) -> EngineConfig {
        EngineConfig {
            default_qty: self.default_qty.unwrap_or(fixture.default_qty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(default_qty: u32) -> ProductFixture {
        let mut fixture = ProductFixture::from_json_str(r#"{"article":"A-1"}"#).unwrap();
        fixture.default_qty = default_qty;
        fixture
    }

    #[test]
    fn env_value_overrides_fixture_default() {
        let settings = Settings::from_lookup(|key| (key == DEFAULT_QTY_ENV).then(|| " 6 ".to_string()));
        assert_eq!(settings.default_qty, Some(6));
        assert_eq!(settings.engine_config(&fixture(2)).default_qty, 6);
    }

    #[test]
    fn unset_env_falls_back_to_fixture() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.engine_config(&fixture(3)).default_qty, 3);
    }

    #[test]
    fn invalid_env_value_is_ignored() {
        for raw in ["-1", "lots", ""] {
            let settings = Settings::from_lookup(|_| Some(raw.to_string()));
            assert_eq!(settings.default_qty, None, "{raw:?} should be ignored");
        }
    }
}
