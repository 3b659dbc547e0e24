//! Indexed view of a platform catalog instance.
//!
//! The index enforces the expected catalog schema version and provides fast
//! lookup of app metadata by id. Duplicate ids are rejected outright; a
//! manifest without metadata is tolerated here and reported by
//! `metadata_validation` instead, since the filter excludes such apps anyway.

use crate::catalog::load_catalog_from_path;
use crate::catalog::{AppId, AppManifest, AppMetadata, PlatformCatalog};
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The only catalog layout this crate understands.
pub const CATALOG_SCHEMA_VERSION: &str = "platform_catalog_v1";

const CATALOG_SCHEMA: &str = include_str!("../../schema/platform_catalog.schema.json");

#[derive(Debug, Clone)]
/// Platform catalog plus a derived metadata lookup keyed by app id.
pub struct CatalogIndex {
    catalog: PlatformCatalog,
    by_id: BTreeMap<AppId, AppMetadata>,
}

impl CatalogIndex {
    /// Load and validate the catalog from disk.
    ///
    /// Validates against the bundled JSON Schema, checks the schema version,
    /// rejects duplicate ids, and builds a deterministic BTreeMap lookup.
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;

        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_catalog(catalog).with_context(|| format!("indexing {}", path.display()))
    }

    /// Index an in-memory catalog. Skips the JSON Schema pass but applies the
    /// same structural checks as [`CatalogIndex::load`].
    pub fn from_catalog(catalog: PlatformCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        validate_manifest_ids(&catalog.manifests)?;
        let by_id = build_index(catalog.apps_metadata())?;
        tracing::debug!(
            manifests = catalog.manifests.len(),
            metadata = by_id.len(),
            "indexed platform catalog"
        );
        Ok(Self { catalog, by_id })
    }

    /// Resolve metadata by app id.
    ///
    /// Returns `None` instead of erroring; callers decide whether a missing
    /// record is worth a warning.
    pub fn metadata(&self, id: &AppId) -> Option<&AppMetadata> {
        self.by_id.get(id)
    }

    pub fn metadata_by_id(&self) -> &BTreeMap<AppId, AppMetadata> {
        &self.by_id
    }

    /// Manifests in catalog order.
    pub fn manifests(&self) -> &[AppManifest] {
        &self.catalog.manifests
    }

    /// Metadata records in catalog order.
    pub fn apps_metadata(&self) -> &[AppMetadata] {
        self.catalog.apps_metadata()
    }

    pub fn catalog(&self) -> &PlatformCatalog {
        &self.catalog
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }
    if schema_version != CATALOG_SCHEMA_VERSION {
        bail!(
            "schema_version '{}' not supported (expected '{}')",
            schema_version,
            CATALOG_SCHEMA_VERSION
        );
    }
    Ok(())
}

fn validate_manifest_ids(manifests: &[AppManifest]) -> Result<()> {
    let mut seen: BTreeSet<&AppId> = BTreeSet::new();
    for manifest in manifests {
        if manifest.id.0.trim().is_empty() {
            bail!("encountered manifest with no id");
        }
        if !seen.insert(&manifest.id) {
            bail!("duplicate manifest id {}", manifest.id);
        }
    }
    Ok(())
}

fn build_index(apps_metadata: &[AppMetadata]) -> Result<BTreeMap<AppId, AppMetadata>> {
    let mut map = BTreeMap::new();
    for meta in apps_metadata {
        if meta.id.0.trim().is_empty() {
            bail!("encountered app metadata with no id");
        }
        if meta.supercategory.trim().is_empty() {
            bail!("app metadata {} has an empty supercategory", meta.id);
        }
        if map.contains_key(&meta.id) {
            bail!("duplicate app metadata id {}", meta.id);
        }
        map.insert(meta.id.clone(), meta.clone());
    }
    Ok(map)
}

fn validate_against_schema(catalog_path: &Path) -> Result<()> {
    let catalog_file = File::open(catalog_path)
        .with_context(|| format!("opening catalog {}", catalog_path.display()))?;
    let catalog_value: Value = serde_json::from_reader(BufReader::new(catalog_file))
        .with_context(|| format!("parsing catalog {}", catalog_path.display()))?;

    let schema_value: Value =
        serde_json::from_str(CATALOG_SCHEMA).context("parsing bundled catalog schema")?;
    let schema = JSONSchema::compile(&schema_value)
        .map_err(|err| anyhow!("compiling bundled catalog schema: {err}"))?;

    if let Err(errors) = schema.validate(&catalog_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "platform catalog {} failed schema validation:\n{}",
            catalog_path.display(),
            details
        );
    }
    Ok(())
}
