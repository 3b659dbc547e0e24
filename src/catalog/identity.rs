use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Facet value standing for apps that declare no network at all.
pub const NO_NETWORK_FACET: &str = "none";

/// Stable identifier shared by a manifest and its metadata record.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub String);

impl AppId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        AppId(value.to_string())
    }
}

/// Network (currency family) an app can operate on.
///
/// Known variants carry a currency display name used for sorting; `Other`
/// preserves ids from catalogs that list networks this crate does not know.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Network {
    Ethereum,
    Polygon,
    Bsc,
    Bitcoin,
    Solana,
    Cosmos,
    Tezos,
    Polkadot,
    Algorand,
    Tron,
    Other(String),
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_id(&value))
    }
}

impl Network {
    pub fn as_str(&self) -> &str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Polygon => "polygon",
            Network::Bsc => "bsc",
            Network::Bitcoin => "bitcoin",
            Network::Solana => "solana",
            Network::Cosmos => "cosmos",
            Network::Tezos => "tezos",
            Network::Polkadot => "polkadot",
            Network::Algorand => "algorand",
            Network::Tron => "tron",
            Network::Other(value) => value.as_str(),
        }
    }

    pub fn from_id(value: &str) -> Self {
        match value {
            "ethereum" => Network::Ethereum,
            "polygon" => Network::Polygon,
            "bsc" => Network::Bsc,
            "bitcoin" => Network::Bitcoin,
            "solana" => Network::Solana,
            "cosmos" => Network::Cosmos,
            "tezos" => Network::Tezos,
            "polkadot" => Network::Polkadot,
            "algorand" => Network::Algorand,
            "tron" => Network::Tron,
            other => Network::Other(other.to_string()),
        }
    }

    /// Currency name shown next to the network, if the network is known.
    pub fn currency_name(&self) -> Option<&'static str> {
        match self {
            Network::Ethereum => Some("Ethereum"),
            Network::Polygon => Some("Polygon"),
            Network::Bsc => Some("Binance Smart Chain"),
            Network::Bitcoin => Some("Bitcoin"),
            Network::Solana => Some("Solana"),
            Network::Cosmos => Some("Cosmos"),
            Network::Tezos => Some("Tezos"),
            Network::Polkadot => Some("Polkadot"),
            Network::Algorand => Some("Algorand"),
            Network::Tron => Some("Tron"),
            Network::Other(_) => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_round_trips_known_and_unknown() {
        let known = Network::Polygon;
        let json = serde_json::to_string(&known).unwrap();
        assert_eq!(json, "\"polygon\"");
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, known);

        let parsed: Network = serde_json::from_str("\"arbitrum\"").unwrap();
        assert_eq!(parsed, Network::Other("arbitrum".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"arbitrum\"");
        assert_eq!(parsed.currency_name(), None);
    }

    #[test]
    fn none_facet_is_not_a_known_network() {
        assert!(matches!(Network::from_id(NO_NETWORK_FACET), Network::Other(_)));
    }

    #[test]
    fn app_id_is_transparent() {
        let id = AppId::from("paraswap");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"paraswap\"");
        assert_eq!(id.to_string(), "paraswap");
    }
}
