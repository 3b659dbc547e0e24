//! Display labels for facet values.
//!
//! The facet filter only uses labels to order options; rendering them is the
//! presentation layer's job. `CatalogLabels` reads a flat `key → text` JSON
//! object (the shape exported by the translation files) and falls back to the
//! raw id whenever a key is missing.

use crate::catalog::Network;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const CATEGORY_KEY_PREFIX: &str = "platform.catalog.category.";
const NO_NETWORK_KEY: &str = "platform.catalog.noNetwork";
const NO_NETWORK_FALLBACK: &str = "No network";

/// Maps category and network ids to display labels.
pub trait LabelSource {
    fn category_label(&self, category: &str) -> String;
    fn network_label(&self, network: &Network) -> String;
    fn no_network_label(&self) -> String;
}

/// Labels every value with its own id.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityLabels;

impl LabelSource for IdentityLabels {
    fn category_label(&self, category: &str) -> String {
        category.to_string()
    }

    fn network_label(&self, network: &Network) -> String {
        network.as_str().to_string()
    }

    fn no_network_label(&self) -> String {
        NO_NETWORK_FALLBACK.to_string()
    }
}

/// Translation-table backed labels.
#[derive(Debug, Default, Clone)]
pub struct CatalogLabels {
    translations: BTreeMap<String, String>,
}

impl CatalogLabels {
    pub fn new(translations: BTreeMap<String, String>) -> Self {
        Self { translations }
    }

    /// Read a flat JSON object of translation keys.
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let translations: BTreeMap<String, String> = serde_json::from_str(&data)
            .with_context(|| format!("parsing labels {}", path.display()))?;
        Ok(Self::new(translations))
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.translations
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }
}

impl LabelSource for CatalogLabels {
    fn category_label(&self, category: &str) -> String {
        self.lookup(&format!("{CATEGORY_KEY_PREFIX}{category}"))
            .unwrap_or(category)
            .to_string()
    }

    fn network_label(&self, network: &Network) -> String {
        network
            .currency_name()
            .unwrap_or_else(|| network.as_str())
            .to_string()
    }

    fn no_network_label(&self) -> String {
        self.lookup(NO_NETWORK_KEY)
            .unwrap_or(NO_NETWORK_FALLBACK)
            .to_string()
    }
}
