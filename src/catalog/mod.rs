//! Platform catalog wiring.
//!
//! This module wraps the JSON catalog document (app manifests plus the
//! `catalogMetadata.appsMetadata` section) so callers can load a validated
//! snapshot and look metadata up by app id. Callers use `CatalogIndex` for
//! lookups; the raw model types are exposed for building catalogs in memory.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{AppId, NO_NETWORK_FACET, Network};
pub use index::{CATALOG_SCHEMA_VERSION, CatalogIndex};
pub use model::{AppManifest, AppMetadata, CatalogMetadata, PlatformCatalog};

pub use model::load_catalog_from_path;
