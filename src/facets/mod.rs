//! Catalog facet filter.
//!
//! Derives the network and supercategory facets from catalog metadata, keeps
//! per-option checked state, and filters manifests against it. Everything here
//! is pure except `FacetSelection`, which the owning screen mutates through
//! toggles and resets.

pub mod derive;
pub mod filter;
pub mod option;
pub mod selection;

pub use derive::{Facets, derive_facets, has_active_filter};
pub use filter::{filter_manifests, matches_selection};
pub use option::{FacetGroup, FacetOption, enabled_values, initialize_selection, toggle_option};
pub use selection::{FacetSelection, metadata_fingerprint};
