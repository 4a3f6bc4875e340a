// ── Asset domain types ──

use serde::{Deserialize, Serialize};

use super::Identified;
use super::entity_id::{Address, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// The network's native currency.
    Base,
    Erc20,
}

/// A currency or token known to the wallet.
///
/// Optional fields may be absent both locally (a user-added token with
/// no metadata yet) and in external API payloads; the merge rules in
/// [`Asset::merged_with_api`] reconcile the two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub uuid: EntityId,
    pub name: String,
    pub ticker: String,
    pub network_id: EntityId,
    pub kind: AssetKind,
    pub contract_address: Option<Address>,
    pub decimals: Option<u8>,
    pub coingecko_id: Option<String>,
    pub is_custom: bool,
}

impl Asset {
    /// Merge an external API payload into this locally-known asset.
    ///
    /// Field-level, not whole-record: the payload wins where it carries a
    /// value, locally-known optional fields survive where it does not,
    /// and `is_custom` is local bookkeeping the API never sees.
    pub fn merged_with_api(&self, incoming: Asset) -> Asset {
        Asset {
            contract_address: incoming
                .contract_address
                .or_else(|| self.contract_address.clone()),
            decimals: incoming.decimals.or(self.decimals),
            coingecko_id: incoming.coingecko_id.or_else(|| self.coingecko_id.clone()),
            is_custom: self.is_custom,
            ..incoming
        }
    }
}

impl Identified for Asset {
    fn entity_id(&self) -> &EntityId {
        &self.uuid
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn local_dai() -> Asset {
        Asset {
            uuid: EntityId::from("dai"),
            name: "Dai".into(),
            ticker: "DAI".into(),
            network_id: EntityId::from("ethereum"),
            kind: AssetKind::Erc20,
            contract_address: Some(Address::new("0x6b175474e89094c44da98b954eedeac495271d0f")),
            decimals: Some(18),
            coingecko_id: None,
            is_custom: true,
        }
    }

    #[test]
    fn api_merge_fills_unset_fields_and_keeps_local_ones() {
        let local = local_dai();
        let incoming = Asset {
            name: "Dai Stablecoin".into(),
            contract_address: None,
            decimals: None,
            coingecko_id: Some("dai".into()),
            is_custom: false,
            ..local_dai()
        };

        let merged = local.merged_with_api(incoming);
        assert_eq!(merged.name, "Dai Stablecoin");
        assert_eq!(merged.coingecko_id.as_deref(), Some("dai"));
        // Locally-known fields the payload left unset survive.
        assert_eq!(merged.decimals, Some(18));
        assert!(merged.contract_address.is_some());
        // Local bookkeeping is never taken from the API.
        assert!(merged.is_custom);
    }

    #[test]
    fn api_merge_prefers_payload_values_when_present() {
        let local = local_dai();
        let incoming = Asset {
            decimals: Some(6),
            ..local_dai()
        };

        let merged = local.merged_with_api(incoming);
        assert_eq!(merged.decimals, Some(6));
    }
}
