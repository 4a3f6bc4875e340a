// ── Wallet domain model ──
//
// Every type in this module is the canonical in-memory representation of
// a wallet entity. Sequence entities (accounts, assets, networks,
// notifications, contacts) carry a stable `EntityId`; settings and the
// vault password are singleton slots with no id.

pub mod entity_id;

pub mod account;
pub mod asset;
pub mod contact;
pub mod network;
pub mod notification;
pub mod password;
pub mod settings;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use walletstate_core::model::*` gives you everything.

// Core identity
pub use entity_id::{Address, EntityId};

// Sequence entities
pub use account::{Account, AssetBalance, WalletKind};
pub use asset::{Asset, AssetKind};
pub use contact::Contact;
pub use network::Network;
pub use notification::{Notification, NotificationKind};

// Singleton slots
pub use password::Password;
pub use settings::{FiatCurrency, Settings};

/// Implemented by every sequence entity: the stable id that is the sole
/// key for create/update/delete resolution and deduplication. Two
/// entities are "the same" iff their ids match, whatever their other
/// fields say.
pub trait Identified {
    fn entity_id(&self) -> &EntityId;
}
