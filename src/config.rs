use anyhow::{ensure, Context};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_ADJACENTS: u64 = 1;

pub const DEFAULT_ITEM_LIMIT: u64 = 10;

/// Defaults applied when a paginator is built without explicit values.
///
/// ```toml
/// adjacents = 2
/// item_limit = 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Builder)]
#[serde(default)]
#[builder(default)]
pub struct PaginatorConfig {
    /// page numbers shown on each side of the current page
    pub adjacents: u64,
    pub item_limit: u64,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            adjacents: DEFAULT_ADJACENTS,
            item_limit: DEFAULT_ITEM_LIMIT,
        }
    }
}

impl PaginatorConfig {
    pub fn builder() -> PaginatorConfigBuilder {
        PaginatorConfigBuilder::default()
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, anyhow::Error> {
        let config: Self = toml::from_str(raw).context("parse paginator config")?;
        ensure!(config.item_limit > 0, "item_limit must be greater than zero");
        debug!(config = ?config, "paginator config loaded");
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read paginator config {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_from_toml() {
        let config = PaginatorConfig::from_toml_str("adjacents = 2\nitem_limit = 20").unwrap();
        assert_eq!(config.adjacents, 2);
        assert_eq!(config.item_limit, 20);

        // missing keys fall back to defaults
        let config = PaginatorConfig::from_toml_str("adjacents = 3").unwrap();
        assert_eq!(config.item_limit, DEFAULT_ITEM_LIMIT);
        assert_eq!(PaginatorConfig::from_toml_str("").unwrap(), PaginatorConfig::default());
    }

    #[test_log::test]
    fn test_rejects_zero_item_limit() {
        let err = PaginatorConfig::from_toml_str("item_limit = 0").unwrap_err();
        assert!(err.to_string().contains("item_limit"));
        assert!(PaginatorConfig::from_toml_str("adjacents = \"one\"").is_err());
    }

    #[test]
    fn test_builder() {
        let config = PaginatorConfig::builder().adjacents(2).build().unwrap();
        assert_eq!(config.adjacents, 2);
        assert_eq!(config.item_limit, DEFAULT_ITEM_LIMIT);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PaginatorConfig::load("/nonexistent/paginator.toml").unwrap_err();
        assert!(err.to_string().contains("read paginator config"));
    }
}
