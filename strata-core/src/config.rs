//! Catalog configuration, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{StrataError, StrataResult};

/// Configuration for a catalog instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Number of read connections in the pool (clamped to 1..=8).
    pub read_pool_size: usize,
    /// Busy timeout applied to every connection (milliseconds).
    pub busy_timeout_ms: u64,
    /// Page count per incremental vacuum pass.
    pub incremental_vacuum_pages: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            read_pool_size: constants::DEFAULT_READ_POOL_SIZE,
            busy_timeout_ms: constants::DEFAULT_BUSY_TIMEOUT_MS,
            incremental_vacuum_pages: constants::DEFAULT_INCREMENTAL_VACUUM_PAGES,
        }
    }
}

impl CatalogConfig {
    /// Parse a configuration from a TOML document. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> StrataResult<Self> {
        toml::from_str(s).map_err(|e| StrataError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_keys() {
        let config = CatalogConfig::from_toml_str("read_pool_size = 2").unwrap();
        assert_eq!(config.read_pool_size, 2);
        assert_eq!(config.busy_timeout_ms, constants::DEFAULT_BUSY_TIMEOUT_MS);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = CatalogConfig::from_toml_str("read_pool_size = ").unwrap_err();
        assert!(matches!(err, StrataError::InvalidConfig { .. }));
    }
}
