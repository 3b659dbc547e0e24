use crate::catalog::{AppId, AppManifest, AppMetadata, NO_NETWORK_FACET};
use std::collections::{BTreeMap, BTreeSet};

/// Keep the manifests whose metadata matches the enabled facet values.
///
/// A manifest passes when its supercategory is enabled and it either shares a
/// network with `enabled_networks` or declares no network while `"none"` is
/// enabled. Input order is preserved. Manifests without metadata are excluded
/// and logged.
pub fn filter_manifests<'a>(
    manifests: &'a [AppManifest],
    metadata_by_id: &BTreeMap<AppId, AppMetadata>,
    enabled_supercategories: &BTreeSet<String>,
    enabled_networks: &BTreeSet<String>,
) -> Vec<&'a AppManifest> {
    manifests
        .iter()
        .filter(|manifest| {
            let Some(meta) = metadata_by_id.get(&manifest.id) else {
                tracing::warn!(
                    app_id = %manifest.id,
                    "manifest has no catalog metadata; excluding it"
                );
                return false;
            };
            matches_selection(meta, enabled_supercategories, enabled_networks)
        })
        .collect()
}

/// Inclusion predicate for a single metadata record.
pub fn matches_selection(
    meta: &AppMetadata,
    enabled_supercategories: &BTreeSet<String>,
    enabled_networks: &BTreeSet<String>,
) -> bool {
    if !enabled_supercategories.contains(&meta.supercategory) {
        return false;
    }
    if meta.networks.is_empty() {
        return enabled_networks.contains(NO_NETWORK_FACET);
    }
    meta.networks
        .iter()
        .any(|network| enabled_networks.contains(network.as_str()))
}
