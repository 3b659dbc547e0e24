//! "Open in external viewer" actions for an NFT.
//!
//! Which marketplaces and explorer an NFT can be opened in depends on its
//! network. Only the networks in `NftNetwork` have viewers; every other
//! network gets an empty action list.

use crate::catalog::Network;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

const OPENSEA_VIEWER: &str = "Opensea.io";
const RARIBLE_VIEWER: &str = "Rarible";
const EXPLORER_VIEWER: &str = "Explorer";

/// Networks with known NFT viewers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NftNetwork {
    Ethereum,
    Polygon,
}

impl NftNetwork {
    pub fn from_network(network: &Network) -> Option<Self> {
        match network {
            Network::Ethereum => Some(NftNetwork::Ethereum),
            Network::Polygon => Some(NftNetwork::Polygon),
            _ => None,
        }
    }

    fn explorer(self, links: &NftLinks) -> Option<(ViewerKey, &str)> {
        match self {
            NftNetwork::Ethereum => links
                .etherscan
                .as_deref()
                .map(|url| (ViewerKey::Etherscan, url)),
            NftNetwork::Polygon => links
                .polygonscan
                .as_deref()
                .map(|url| (ViewerKey::Polygonscan, url)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// External links returned by the NFT metadata service.
pub struct NftLinks {
    #[serde(default)]
    pub opensea: Option<String>,
    #[serde(default)]
    pub rarible: Option<String>,
    #[serde(default)]
    pub etherscan: Option<String>,
    #[serde(default)]
    pub polygonscan: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NftMetadataStatus {
    Queued,
    Loading,
    Loaded,
    Error,
}

impl NftMetadataStatus {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "queued" => Ok(Self::Queued),
            "loading" => Ok(Self::Loading),
            "loaded" => Ok(Self::Loaded),
            "error" => Ok(Self::Error),
            other => bail!("unknown metadata status '{other}' (expected queued|loading|loaded|error)"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerKey {
    Opensea,
    Rarible,
    Etherscan,
    Polygonscan,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewerAction {
    External {
        key: ViewerKey,
        viewer: String,
        url: String,
    },
    Separator,
}

impl ViewerAction {
    fn external(key: ViewerKey, viewer: &str, url: &str) -> Self {
        ViewerAction::External {
            key,
            viewer: viewer.to_string(),
            url: url.to_string(),
        }
    }
}

/// Build the viewer menu for an NFT on `network`.
///
/// Empty until metadata has loaded, and always empty for networks without
/// viewers. Otherwise: marketplaces first, a separator, then the explorer;
/// links the metadata does not provide are left out.
pub fn viewer_actions(
    network: &Network,
    status: NftMetadataStatus,
    links: &NftLinks,
) -> Vec<ViewerAction> {
    if status != NftMetadataStatus::Loaded {
        return Vec::new();
    }
    let Some(nft_network) = NftNetwork::from_network(network) else {
        tracing::debug!(%network, "no NFT viewers for network");
        return Vec::new();
    };

    let mut actions = Vec::new();
    if let Some(url) = links.opensea.as_deref() {
        actions.push(ViewerAction::external(ViewerKey::Opensea, OPENSEA_VIEWER, url));
    }
    if let Some(url) = links.rarible.as_deref() {
        actions.push(ViewerAction::external(ViewerKey::Rarible, RARIBLE_VIEWER, url));
    }
    actions.push(ViewerAction::Separator);
    if let Some((key, url)) = nft_network.explorer(links) {
        actions.push(ViewerAction::external(key, EXPLORER_VIEWER, url));
    }
    actions
}
