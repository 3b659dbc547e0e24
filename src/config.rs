//! Environment-driven configuration.
//!
//! Values come from `LIVECATALOG_*` variables. The default catalog path is
//! baked in by `build.rs` so binaries run out of a checkout without any setup.
//! Reading goes through a lookup closure so tests never touch the process
//! environment.

use std::env;
use std::path::PathBuf;

pub const CATALOG_ENV: &str = "LIVECATALOG_CATALOG";
pub const LABELS_ENV: &str = "LIVECATALOG_LABELS";
pub const LOG_ENV: &str = "LIVECATALOG_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";
const FALLBACK_CATALOG: &str = "fixtures/catalog.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub labels_path: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            catalog_path: get(CATALOG_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(default_catalog_path),
            labels_path: get(LABELS_ENV).map(PathBuf::from),
            log_filter: get(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

/// Catalog bundled with the crate, as recorded at build time.
pub fn default_catalog_path() -> PathBuf {
    option_env!("LIVECATALOG_CATALOG_HINT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(FALLBACK_CATALOG))
}
