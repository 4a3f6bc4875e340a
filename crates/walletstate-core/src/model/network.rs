// ── Network domain types ──

use serde::{Deserialize, Serialize};
use url::Url;

use super::Identified;
use super::entity_id::EntityId;

/// A chain the wallet can talk to.
///
/// Built-in networks are keyed by well-known name
/// (`EntityId::Named("ethereum")`); user-added ones get a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: EntityId,
    pub name: String,
    pub chain_id: u64,
    /// Id of the network's native currency in the assets collection.
    pub base_asset_id: EntityId,
    pub rpc_urls: Vec<Url>,
    pub explorer_url: Option<Url>,
    pub is_testnet: bool,
    pub is_custom: bool,
}

impl Identified for Network {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}
