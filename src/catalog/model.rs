//! Deserializable representation of a platform catalog document.
//!
//! A catalog carries the app manifests shown on the platform screen plus the
//! descriptive metadata (supercategory, supported networks) keyed by the same
//! ids. Fields the filter does not interpret are kept verbatim in `extra` so a
//! filtered catalog re-serializes without losing data. Use `CatalogIndex` for
//! validation and id lookup.

use crate::catalog::identity::{AppId, Network};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Full catalog document as fetched by the catalog loader.
pub struct PlatformCatalog {
    pub schema_version: String,
    pub manifests: Vec<AppManifest>,
    #[serde(
        rename = "catalogMetadata",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub metadata: Option<CatalogMetadata>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
/// Metadata section of the catalog.
pub struct CatalogMetadata {
    #[serde(rename = "appsMetadata", default)]
    pub apps_metadata: Vec<AppMetadata>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One live app as listed in the catalog. Only `id` matters for filtering.
pub struct AppManifest {
    pub id: AppId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Descriptive record for the manifest with the same id.
pub struct AppMetadata {
    pub id: AppId,
    pub supercategory: String,
    /// Empty (or `null` in the source) means the app is network agnostic.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub networks: Vec<Network>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl AppManifest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: AppId(id.into()),
            name: None,
            extra: BTreeMap::new(),
        }
    }
}

impl AppMetadata {
    pub fn new(id: impl Into<String>, supercategory: impl Into<String>, networks: &[&str]) -> Self {
        Self {
            id: AppId(id.into()),
            supercategory: supercategory.into(),
            networks: networks.iter().map(|n| Network::from_id(n)).collect(),
            extra: BTreeMap::new(),
        }
    }
}

impl PlatformCatalog {
    /// Metadata records, empty when the catalog ships without a metadata section.
    pub fn apps_metadata(&self) -> &[AppMetadata] {
        self.metadata
            .as_ref()
            .map(|meta| meta.apps_metadata.as_slice())
            .unwrap_or(&[])
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Network>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Network>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read and parse a platform catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<PlatformCatalog> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog: PlatformCatalog =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(catalog)
}
