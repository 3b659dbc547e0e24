//! Referential-integrity checks between manifests and their metadata.
//!
//! The catalog loader is expected to ship one metadata record per manifest.
//! These helpers report violations without failing so the caller can log them
//! and keep serving the apps that do resolve.

use crate::catalog::{AppId, CatalogIndex};
use std::collections::BTreeSet;

pub fn validate_manifest_metadata(index: &CatalogIndex) -> Vec<String> {
    // Collect every problem instead of short-circuiting so one log pass shows
    // the whole extent of a broken catalog.
    let mut errors = Vec::new();
    for manifest in index.manifests() {
        if index.metadata(&manifest.id).is_none() {
            errors.push(format!(
                "manifest '{}' has no entry in catalogMetadata.appsMetadata",
                manifest.id
            ));
        }
    }
    errors
}

/// Metadata ids that no manifest references, in id order.
pub fn orphaned_metadata(index: &CatalogIndex) -> Vec<AppId> {
    let referenced: BTreeSet<&AppId> = index.manifests().iter().map(|m| &m.id).collect();
    index
        .metadata_by_id()
        .keys()
        .filter(|id| !referenced.contains(id))
        .cloned()
        .collect()
}
