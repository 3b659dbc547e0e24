use crate::catalog::{AppMetadata, NO_NETWORK_FACET, Network};
use crate::facets::option::{FacetGroup, FacetOption};
use crate::labels::LabelSource;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Both facet groups derived from one metadata set.
pub struct Facets {
    pub supercategories: FacetGroup,
    pub networks: FacetGroup,
}

impl Facets {
    /// True when at least one option in either group is unchecked.
    pub fn has_active_filter(&self) -> bool {
        has_active_filter(&self.supercategories, &self.networks)
    }

    pub fn reset(&mut self) {
        self.supercategories.check_all();
        self.networks.check_all();
    }
}

/// Derive the supercategory and network facets from a metadata set.
///
/// Distinct values are collected in first-seen order, then stably sorted by
/// label. The network group always starts with the synthetic `"none"` option.
/// All options come back checked.
pub fn derive_facets(metadata: &[AppMetadata], labels: &dyn LabelSource) -> Facets {
    let mut supercategories: Vec<&str> = Vec::new();
    let mut networks: Vec<&Network> = Vec::new();
    for meta in metadata {
        if !supercategories.contains(&meta.supercategory.as_str()) {
            supercategories.push(&meta.supercategory);
        }
        for network in &meta.networks {
            if !networks.contains(&network) {
                networks.push(network);
            }
        }
    }

    let mut category_options: Vec<FacetOption> = supercategories
        .into_iter()
        .map(|category| FacetOption::new(category, labels.category_label(category)))
        .collect();
    category_options.sort_by(|a, b| a.label.cmp(&b.label));

    let mut network_options: Vec<FacetOption> = networks
        .into_iter()
        .map(|network| FacetOption::new(network.as_str(), labels.network_label(network)))
        .collect();
    network_options.sort_by(|a, b| a.label.cmp(&b.label));

    let none = FacetOption::new(NO_NETWORK_FACET, labels.no_network_label());

    Facets {
        supercategories: FacetGroup::new(category_options),
        networks: FacetGroup::new(std::iter::once(none).chain(network_options)),
    }
}

/// Whether the consumer should offer a "reset filters" action.
pub fn has_active_filter(supercategories: &FacetGroup, networks: &FacetGroup) -> bool {
    supercategories.has_unchecked() || networks.has_unchecked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{CatalogLabels, IdentityLabels};
    use std::collections::BTreeSet;

    fn values(group: &FacetGroup) -> Vec<&str> {
        group.options().iter().map(|o| o.value.as_str()).collect()
    }

    fn sample() -> Vec<AppMetadata> {
        vec![
            AppMetadata::new("paraswap", "exchange", &["polygon", "ethereum"]),
            AppMetadata::new("lido", "defi", &["ethereum", "polkadot"]),
            AppMetadata::new("wyre", "exchange", &[]),
            AppMetadata::new("rainbow", "nft", &["ethereum"]),
        ]
    }

    #[test]
    fn derive_collects_distinct_sorted_values() {
        let facets = derive_facets(&sample(), &IdentityLabels);
        assert_eq!(
            values(&facets.supercategories),
            vec!["defi", "exchange", "nft"]
        );
        assert_eq!(
            values(&facets.networks),
            vec!["none", "ethereum", "polkadot", "polygon"]
        );
        assert!(!facets.has_active_filter());
    }

    #[test]
    fn derive_sorts_by_label_not_value() {
        let facets = derive_facets(
            &[
                AppMetadata::new("a", "x", &["bsc"]),
                AppMetadata::new("b", "x", &["bitcoin"]),
            ],
            &CatalogLabels::default(),
        );
        // "Binance Smart Chain" < "Bitcoin"
        assert_eq!(values(&facets.networks), vec!["none", "bsc", "bitcoin"]);
        assert_eq!(facets.networks.options()[0].label, "No network");
    }

    #[test]
    fn none_option_present_without_networkless_apps() {
        let facets = derive_facets(
            &[AppMetadata::new("a", "exchange", &["ethereum"])],
            &IdentityLabels,
        );
        assert_eq!(values(&facets.networks), vec!["none", "ethereum"]);

        let empty = derive_facets(&[], &IdentityLabels);
        assert_eq!(values(&empty.networks), vec!["none"]);
        assert!(empty.supercategories.is_empty());
    }

    /// Every ordering of `items`.
    fn permutations(items: &[AppMetadata]) -> Vec<Vec<AppMetadata>> {
        if items.is_empty() {
            return vec![Vec::new()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head.clone());
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn derived_facets_hold_for_every_ordering_and_subset() {
        let mut pool = sample();
        pool.push(AppMetadata::new("dup", "exchange", &["ethereum", "ethereum"]));
        pool.push(AppMetadata::new("odd", "defi", &["none"]));

        let mut cases = 0;
        for len in 0..=pool.len().min(5) {
            for ordering in permutations(&pool[..len]) {
                for metadata in [ordering.clone(), [ordering.clone(), ordering].concat()] {
                    let facets = derive_facets(&metadata, &IdentityLabels);
                    for group in [&facets.supercategories, &facets.networks] {
                        let unique: BTreeSet<&str> = values(group).into_iter().collect();
                        assert_eq!(unique.len(), group.len());
                        assert!(group.options().iter().all(|o| o.checked));
                    }
                    assert_eq!(facets.networks.options()[0].value, NO_NETWORK_FACET);

                    let categories: BTreeSet<&str> =
                        metadata.iter().map(|m| m.supercategory.as_str()).collect();
                    let derived: BTreeSet<&str> =
                        values(&facets.supercategories).into_iter().collect();
                    assert_eq!(derived, categories);
                    cases += 1;
                }
            }
        }
        assert!(cases > 100);
    }

    #[test]
    fn reset_clears_active_filter() {
        let mut facets = derive_facets(&sample(), &IdentityLabels);
        facets.networks.toggle("none");
        assert!(facets.has_active_filter());
        facets.reset();
        assert!(!facets.has_active_filter());
    }
}
