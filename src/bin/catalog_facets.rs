//! Print the facets and filtered manifests of a platform catalog.
//!
//! Loads a catalog (and optionally a labels file), unchecks the requested
//! network/category facet values, and prints the resulting facet groups plus
//! the manifests that survive the filter as pretty JSON.

use anyhow::{Context, Result, bail};
use livecatalog::logging::init_tracing;
use livecatalog::{
    AppConfig, CatalogIndex, CatalogLabels, FacetSelection, IdentityLabels, LabelSource,
    split_list, validate_manifest_metadata,
};
use serde_json::json;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config.log_filter);
    let args = CliArgs::parse()?;

    let catalog_path = args.catalog.unwrap_or(config.catalog_path);
    let index = CatalogIndex::load(&catalog_path)?;
    for problem in validate_manifest_metadata(&index) {
        tracing::warn!("{problem}");
    }

    let labels: Box<dyn LabelSource> = match args.labels.or(config.labels_path) {
        Some(path) => Box::new(
            CatalogLabels::load(&path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => Box::new(IdentityLabels),
    };

    let mut selection = FacetSelection::new(index.apps_metadata(), labels.as_ref());
    for value in &args.disabled_networks {
        if !selection.disable_network(value) {
            bail!("unknown network facet '{value}'");
        }
    }
    for value in &args.disabled_categories {
        if !selection.disable_supercategory(value) {
            bail!("unknown category facet '{value}'");
        }
    }

    let mut output = json!({
        "facets": selection.facets(),
        "has_active_filter": selection.has_active_filter(),
    });
    if !args.facets_only {
        let manifests = selection.apply(index.manifests(), index.metadata_by_id());
        output["manifests"] = serde_json::to_value(&manifests)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

struct CliArgs {
    catalog: Option<PathBuf>,
    labels: Option<PathBuf>,
    disabled_networks: Vec<String>,
    disabled_categories: Vec<String>,
    facets_only: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut parsed = CliArgs {
            catalog: None,
            labels: None,
            disabled_networks: Vec::new(),
            disabled_categories: Vec::new(),
            facets_only: false,
        };

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--catalog" => {
                    parsed.catalog = Some(PathBuf::from(next_value(&mut args, "--catalog")?));
                }
                "--labels" => {
                    parsed.labels = Some(PathBuf::from(next_value(&mut args, "--labels")?));
                }
                "--disable-network" => {
                    let raw = next_value(&mut args, "--disable-network")?;
                    parsed.disabled_networks.extend(split_list(&raw));
                }
                "--disable-category" => {
                    let raw = next_value(&mut args, "--disable-category")?;
                    parsed.disabled_categories.extend(split_list(&raw));
                }
                "--facets-only" => parsed.facets_only = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            }
        }

        Ok(parsed)
    }
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: catalog-facets [--catalog PATH] [--labels PATH] [--disable-network LIST] [--disable-category LIST] [--facets-only]\n\
Prints the catalog's network/category facets and the manifests matching the selection as JSON.\n\
LIST is comma- or space-separated; the network value 'none' stands for apps without networks.\n"
}
