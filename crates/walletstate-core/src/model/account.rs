// ── Account domain types ──

use serde::{Deserialize, Serialize};

use super::Identified;
use super::entity_id::{Address, EntityId};

/// How the account's keys are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum WalletKind {
    /// Watch-only: no signing capability.
    ViewOnly,
    Mnemonic,
    PrivateKey,
    Ledger,
    Trezor,
}

/// Balance of one asset held by an account.
///
/// Balances are base-unit integers kept as decimal strings; they can
/// exceed u128 for exotic tokens and are never used for arithmetic here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBalance {
    pub asset_id: EntityId,
    pub balance: String,
}

/// A tracked wallet account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub uuid: EntityId,
    pub label: String,
    pub address: Address,
    pub network_id: EntityId,
    pub wallet: WalletKind,
    /// Derivation path for hardware / mnemonic wallets.
    pub dpath: Option<String>,
    pub asset_balances: Vec<AssetBalance>,
    pub favorite: bool,
}

impl Identified for Account {
    fn entity_id(&self) -> &EntityId {
        &self.uuid
    }
}
