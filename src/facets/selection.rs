//! Selection state owned by the catalog screen.
//!
//! Derived facets are cached together with a fingerprint of the metadata set
//! they came from. `refresh` recomputes only when that fingerprint changes and
//! carries the user's `checked` flags across the recomputation; only `reset`
//! puts everything back to checked.

use crate::catalog::{AppId, AppManifest, AppMetadata};
use crate::facets::derive::{Facets, derive_facets};
use crate::facets::filter::filter_manifests;
use crate::labels::LabelSource;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{DefaultHasher, Hash, Hasher};

#[derive(Clone, Debug)]
pub struct FacetSelection {
    facets: Facets,
    fingerprint: u64,
}

impl FacetSelection {
    /// Derive facets from `metadata` with every option checked.
    pub fn new(metadata: &[AppMetadata], labels: &dyn LabelSource) -> Self {
        Self {
            facets: derive_facets(metadata, labels),
            fingerprint: metadata_fingerprint(metadata),
        }
    }

    /// Recompute facets if the metadata set changed since the last derivation.
    ///
    /// Options whose value survives keep their `checked` flag; new values start
    /// checked. Returns whether a recomputation happened.
    pub fn refresh(&mut self, metadata: &[AppMetadata], labels: &dyn LabelSource) -> bool {
        let fingerprint = metadata_fingerprint(metadata);
        if fingerprint == self.fingerprint {
            return false;
        }
        let mut facets = derive_facets(metadata, labels);
        facets
            .supercategories
            .inherit_checked(&self.facets.supercategories);
        facets.networks.inherit_checked(&self.facets.networks);
        tracing::debug!(
            supercategories = facets.supercategories.len(),
            networks = facets.networks.len(),
            "recomputed catalog facets"
        );
        self.facets = facets;
        self.fingerprint = fingerprint;
        true
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn toggle_network(&mut self, value: &str) -> bool {
        self.facets.networks.toggle(value)
    }

    pub fn toggle_supercategory(&mut self, value: &str) -> bool {
        self.facets.supercategories.toggle(value)
    }

    /// Uncheck a network value. Unlike `toggle_network`, naming it again keeps
    /// it unchecked.
    pub fn disable_network(&mut self, value: &str) -> bool {
        self.facets.networks.uncheck(value)
    }

    pub fn disable_supercategory(&mut self, value: &str) -> bool {
        self.facets.supercategories.uncheck(value)
    }

    pub fn reset(&mut self) {
        self.facets.reset();
    }

    pub fn has_active_filter(&self) -> bool {
        self.facets.has_active_filter()
    }

    pub fn enabled_networks(&self) -> BTreeSet<String> {
        self.facets.networks.enabled_values()
    }

    pub fn enabled_supercategories(&self) -> BTreeSet<String> {
        self.facets.supercategories.enabled_values()
    }

    /// Filter `manifests` against the current selection.
    pub fn apply<'a>(
        &self,
        manifests: &'a [AppManifest],
        metadata_by_id: &BTreeMap<AppId, AppMetadata>,
    ) -> Vec<&'a AppManifest> {
        filter_manifests(
            manifests,
            metadata_by_id,
            &self.enabled_supercategories(),
            &self.enabled_networks(),
        )
    }
}

/// Content hash of the fields facets are derived from, in input order.
///
/// App ids are left out: derivation never reads them, so renaming an app does
/// not force a recomputation.
pub fn metadata_fingerprint(metadata: &[AppMetadata]) -> u64 {
    let mut hasher = DefaultHasher::new();
    metadata.len().hash(&mut hasher);
    for meta in metadata {
        meta.supercategory.hash(&mut hasher);
        meta.networks.hash(&mut hasher);
    }
    hasher.finish()
}
