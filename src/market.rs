//! Market coin screen helpers: starred coins and buy/swap availability.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Coin ids the user starred, in the order they were starred.
pub struct StarredCoins {
    ids: Vec<String>,
}

impl StarredCoins {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        let mut starred = Self::default();
        for id in ids {
            starred.star(&id);
        }
        starred
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_starred(&self, id: &str) -> bool {
        self.ids.iter().any(|starred| starred == id)
    }

    pub fn star(&mut self, id: &str) {
        if !self.is_starred(id) {
            self.ids.push(id.to_string());
        }
    }

    pub fn unstar(&mut self, id: &str) {
        self.ids.retain(|starred| starred != id);
    }

    /// Flip the star on `id` and return whether it is now starred.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_starred(id) {
            self.unstar(id);
            false
        } else {
            self.star(id);
            true
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPair {
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapProvider {
    pub provider: String,
    #[serde(default)]
    pub pairs: Vec<SwapPair>,
}

/// Every currency id that appears on either side of a provider pair.
pub fn swap_available_ids(providers: &[SwapProvider]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for pair in providers.iter().flat_map(|p| &p.pairs) {
        for id in [&pair.from, &pair.to] {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
    }
    ids
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CoinActions {
    pub buy: bool,
    pub swap: bool,
}

/// Which trade buttons the coin screen shows.
///
/// Coins without an internal currency (market-only listings) get none.
pub fn coin_actions(
    coin_id: &str,
    has_internal_currency: bool,
    buy_supported: impl Fn(&str) -> bool,
    swap_ids: &[String],
) -> CoinActions {
    if !has_internal_currency {
        return CoinActions::default();
    }
    CoinActions {
        buy: buy_supported(coin_id),
        swap: swap_ids.iter().any(|id| id == coin_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut starred = StarredCoins::new(["bitcoin".to_string()]);
        assert!(starred.toggle("ethereum"));
        assert!(starred.is_starred("ethereum"));
        assert!(!starred.toggle("ethereum"));
        assert_eq!(starred.ids(), ["bitcoin".to_string()]);
    }

    #[test]
    fn swap_ids_are_flattened_and_unique() {
        let providers = vec![
            SwapProvider {
                provider: "changelly".into(),
                pairs: vec![
                    SwapPair { from: "bitcoin".into(), to: "ethereum".into() },
                    SwapPair { from: "ethereum".into(), to: "bitcoin".into() },
                ],
            },
            SwapProvider {
                provider: "wyre".into(),
                pairs: vec![SwapPair { from: "ethereum".into(), to: "tezos".into() }],
            },
        ];
        assert_eq!(
            swap_available_ids(&providers),
            vec!["bitcoin", "ethereum", "tezos"]
        );
    }

    #[test]
    fn actions_require_internal_currency() {
        let swap_ids = vec!["bitcoin".to_string()];
        let actions = coin_actions("bitcoin", true, |id| id == "bitcoin", &swap_ids);
        assert_eq!(actions, CoinActions { buy: true, swap: true });

        let listing_only = coin_actions("bitcoin", false, |_| true, &swap_ids);
        assert_eq!(listing_only, CoinActions::default());

        let no_swap = coin_actions("dogecoin", true, |_| false, &swap_ids);
        assert!(!no_swap.buy && !no_swap.swap);
    }
}
