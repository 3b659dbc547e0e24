//! Application context for the catalog screen.
//!
//! Built once at startup from an `AppConfig` and handed to dependents by
//! reference. Owns the loaded catalog, the label source and the facet
//! selection; `shutdown` consumes it.

use crate::catalog::{AppManifest, CatalogIndex};
use crate::config::AppConfig;
use crate::facets::FacetSelection;
use crate::labels::{CatalogLabels, IdentityLabels, LabelSource};
use crate::metadata_validation::{orphaned_metadata, validate_manifest_metadata};
use anyhow::{Context, Result};

pub struct AppContext {
    config: AppConfig,
    index: CatalogIndex,
    labels: Box<dyn LabelSource>,
    selection: FacetSelection,
}

impl AppContext {
    pub fn init(config: AppConfig) -> Result<Self> {
        let index = CatalogIndex::load(&config.catalog_path)
            .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?;
        let labels: Box<dyn LabelSource> = match &config.labels_path {
            Some(path) => Box::new(CatalogLabels::load(path)?),
            None => Box::new(IdentityLabels),
        };
        report_integrity(&index);
        let selection = FacetSelection::new(index.apps_metadata(), labels.as_ref());
        tracing::info!(
            catalog = %config.catalog_path.display(),
            manifests = index.manifests().len(),
            "catalog context ready"
        );
        Ok(Self {
            config,
            index,
            labels,
            selection,
        })
    }

    /// Re-read the catalog file. The selection keeps its checked flags.
    pub fn reload_catalog(&mut self) -> Result<bool> {
        let index = CatalogIndex::load(&self.config.catalog_path).with_context(|| {
            format!("reloading catalog {}", self.config.catalog_path.display())
        })?;
        report_integrity(&index);
        let recomputed = self
            .selection
            .refresh(index.apps_metadata(), self.labels.as_ref());
        self.index = index;
        Ok(recomputed)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn labels(&self) -> &dyn LabelSource {
        self.labels.as_ref()
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut FacetSelection {
        &mut self.selection
    }

    /// Manifests matching the current selection, in catalog order.
    pub fn visible_manifests(&self) -> Vec<&AppManifest> {
        self.selection
            .apply(self.index.manifests(), self.index.metadata_by_id())
    }

    pub fn shutdown(self) {
        tracing::info!(
            catalog = %self.config.catalog_path.display(),
            active_filter = self.selection.has_active_filter(),
            "catalog context shut down"
        );
    }
}

fn report_integrity(index: &CatalogIndex) {
    for problem in validate_manifest_metadata(index) {
        tracing::warn!("{problem}");
    }
    let orphans = orphaned_metadata(index);
    if !orphans.is_empty() {
        tracing::debug!(count = orphans.len(), "metadata without a manifest");
    }
}
