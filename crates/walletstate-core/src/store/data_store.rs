// ── Store snapshot and payload types ──
//
// A DataStore is one immutable snapshot of everything the wallet knows.
// Collections are Arc'd so cloning a snapshot is a handful of refcount
// bumps and an untouched collection stays reference-equal across
// reductions (structural sharing, observable via `Arc::ptr_eq`).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::{
    Account, Asset, Contact, EntityId, Identified, Network, Notification, Password, Settings,
};

// ── ModelKey ────────────────────────────────────────────────────────

/// Closed enumeration of every collection in the store. Generic actions
/// address their target through this key; the wire spelling matches the
/// persisted legacy snapshot format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModelKey {
    Accounts,
    Assets,
    Networks,
    Notifications,
    Contacts,
    Settings,
    Password,
}

impl ModelKey {
    /// Whether this key addresses an ordered entity sequence, as opposed
    /// to a singleton slot.
    pub fn is_sequence(self) -> bool {
        !matches!(self, Self::Settings | Self::Password)
    }
}

// ── Item / Entry payloads ───────────────────────────────────────────

/// Payload of a single-entity operation. Only sequence entities appear
/// here: the singleton slots have no item-granular writes, by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Account(Account),
    Asset(Asset),
    Network(Network),
    Notification(Notification),
    Contact(Contact),
}

impl Item {
    /// The collection this payload belongs to.
    pub fn model(&self) -> ModelKey {
        match self {
            Self::Account(_) => ModelKey::Accounts,
            Self::Asset(_) => ModelKey::Assets,
            Self::Network(_) => ModelKey::Networks,
            Self::Notification(_) => ModelKey::Notifications,
            Self::Contact(_) => ModelKey::Contacts,
        }
    }

    pub fn entity_id(&self) -> &EntityId {
        match self {
            Self::Account(a) => a.entity_id(),
            Self::Asset(a) => a.entity_id(),
            Self::Network(n) => n.entity_id(),
            Self::Notification(n) => n.entity_id(),
            Self::Contact(c) => c.entity_id(),
        }
    }
}

/// Payload of a whole-slot replacement. One variant per model key, each
/// carrying that key's complete collection or slot value — the only
/// sanctioned write path for the singleton slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    Accounts(Vec<Account>),
    Assets(Vec<Asset>),
    Networks(Vec<Network>),
    Notifications(Vec<Notification>),
    Contacts(Vec<Contact>),
    Settings(Settings),
    Password(Password),
}

impl Entry {
    pub fn model(&self) -> ModelKey {
        match self {
            Self::Accounts(_) => ModelKey::Accounts,
            Self::Assets(_) => ModelKey::Assets,
            Self::Networks(_) => ModelKey::Networks,
            Self::Notifications(_) => ModelKey::Notifications,
            Self::Contacts(_) => ModelKey::Contacts,
            Self::Settings(_) => ModelKey::Settings,
            Self::Password(_) => ModelKey::Password,
        }
    }
}

// ── DataStore ───────────────────────────────────────────────────────

/// One immutable snapshot of the wallet's normalized entity store.
///
/// Invariant: a sequence collection holds at most one entity per id.
/// Insertion order is preserved for display but carries no lookup
/// meaning. Snapshots round-trip through serde for external loaders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataStore {
    pub accounts: Arc<Vec<Account>>,
    pub assets: Arc<Vec<Asset>>,
    pub networks: Arc<Vec<Network>>,
    pub notifications: Arc<Vec<Notification>>,
    pub contacts: Arc<Vec<Contact>>,
    pub settings: Arc<Settings>,
    pub password: Arc<Password>,
}

impl DataStore {
    // ── Single-entity lookups ────────────────────────────────────────

    pub fn account(&self, id: &EntityId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.entity_id() == id)
    }

    pub fn asset(&self, id: &EntityId) -> Option<&Asset> {
        self.assets.iter().find(|a| a.entity_id() == id)
    }

    pub fn network(&self, id: &EntityId) -> Option<&Network> {
        self.networks.iter().find(|n| n.entity_id() == id)
    }

    pub fn contact(&self, id: &EntityId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.entity_id() == id)
    }
}
