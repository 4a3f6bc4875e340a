// ── Out-of-box snapshot ──
//
// The networks and base assets every fresh install starts with.
// Built-in records are keyed by well-known name so re-seeding is
// naturally idempotent; everything user-created gets a UUID instead.

use std::sync::Arc;

use url::Url;

use super::data_store::DataStore;
use crate::model::{Asset, AssetKind, EntityId, Network};

/// The snapshot a fresh install boots from: built-in networks, their
/// base assets, default settings, no password.
pub fn seeded() -> DataStore {
    DataStore {
        networks: Arc::new(vec![
            network("ethereum", "Ethereum", 1, "eth", "https://ethereum-rpc.publicnode.com", false),
            network("sepolia", "Sepolia", 11_155_111, "sepolia-eth", "https://ethereum-sepolia-rpc.publicnode.com", true),
        ]),
        assets: Arc::new(vec![
            base_asset("eth", "Ether", "ETH", "ethereum"),
            base_asset("sepolia-eth", "Sepolia Ether", "ETH", "sepolia"),
        ]),
        ..DataStore::default()
    }
}

fn network(
    id: &str,
    name: &str,
    chain_id: u64,
    base_asset_id: &str,
    rpc: &str,
    is_testnet: bool,
) -> Network {
    Network {
        id: EntityId::Named(id.to_owned()),
        name: name.to_owned(),
        chain_id,
        base_asset_id: EntityId::Named(base_asset_id.to_owned()),
        rpc_urls: vec![Url::parse(rpc).expect("hard-coded RPC URL is valid")],
        explorer_url: None,
        is_testnet,
        is_custom: false,
    }
}

fn base_asset(id: &str, name: &str, ticker: &str, network_id: &str) -> Asset {
    Asset {
        uuid: EntityId::Named(id.to_owned()),
        name: name.to_owned(),
        ticker: ticker.to_owned(),
        network_id: EntityId::Named(network_id.to_owned()),
        kind: AssetKind::Base,
        contract_address: None,
        decimals: Some(18),
        coingecko_id: None,
        is_custom: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Identified;

    #[test]
    fn every_seeded_network_has_its_base_asset() {
        let store = seeded();
        for net in store.networks.iter() {
            let base = store.asset(&net.base_asset_id);
            assert!(base.is_some(), "missing base asset for {}", net.name);
        }
    }

    #[test]
    fn seeded_ids_are_unique() {
        let store = seeded();
        for (i, a) in store.assets.iter().enumerate() {
            for b in store.assets.iter().skip(i + 1) {
                assert_ne!(a.entity_id(), b.entity_id());
            }
        }
    }
}
