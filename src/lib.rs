//! Data core of the platform "live apps" catalog screen.
//!
//! The crate loads a platform catalog (app manifests plus per-app metadata),
//! derives the network and supercategory facets the screen offers, tracks
//! which facet options are checked, and filters the manifest list against
//! that selection. Rendering is someone else's job: everything here returns
//! plain data. The NFT viewer and market helpers cover the two other screens
//! that only need data shaping.

pub mod catalog;
pub mod config;
pub mod context;
pub mod facets;
pub mod labels;
pub mod logging;
pub mod market;
pub mod metadata_validation;
pub mod nft;

pub use catalog::{
    AppId, AppManifest, AppMetadata, CatalogIndex, CatalogMetadata, NO_NETWORK_FACET, Network,
    PlatformCatalog, load_catalog_from_path,
};
pub use config::AppConfig;
pub use context::AppContext;
pub use facets::{
    FacetGroup, FacetOption, FacetSelection, Facets, derive_facets, enabled_values,
    filter_manifests, has_active_filter, initialize_selection, toggle_option,
};
pub use labels::{CatalogLabels, IdentityLabels, LabelSource};
pub use metadata_validation::{orphaned_metadata, validate_manifest_metadata};

/// Split comma- or whitespace-delimited lists into tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_accepts_commas_and_spaces() {
        assert_eq!(
            split_list("ethereum, polygon  none,,"),
            vec!["ethereum", "polygon", "none"]
        );
        assert!(split_list(" , ").is_empty());
    }
}
