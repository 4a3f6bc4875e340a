// ── Store action protocol ──
//
// Every state-changing intent is one Action value. Generic operations
// address a collection through a ModelKey; family operations carry their
// own payloads and are routed to the owning sub-reducer untouched. The
// two vocabularies live in disjoint variants, so an action can never be
// both.

use serde::{Deserialize, Serialize};

use super::account::AccountAction;
use super::asset::AssetAction;
use super::data_store::{DataStore, Entry, Item, ModelKey};
use super::network::NetworkAction;
use super::notification::NotificationAction;
use super::password::PasswordAction;
use crate::model::EntityId;

/// The store's full action vocabulary.
///
/// Display renders the legacy SCREAMING_SNAKE discriminant (`ADD_ITEM`,
/// `RESET`, ...) for logs. `non_exhaustive` keeps room for new
/// operations without breaking downstream matchers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Action {
    /// Insert a single entity unless its id is already present.
    /// Rejected for the singleton slots.
    AddItem { model: ModelKey, item: Item },

    /// Remove the entity with this id; absent ids are a no-op.
    /// Rejected for the singleton slots.
    DeleteItem { model: ModelKey, id: EntityId },

    /// Id-keyed upsert: replace the match wholesale or insert.
    /// Rejected for the singleton slots.
    UpdateItem { model: ModelKey, item: Item },

    /// Replace a whole collection or slot. The only sanctioned write
    /// path for settings, also used for bulk replaces.
    AddEntry(Entry),

    /// Replace the entire store with this snapshot (initialization and
    /// hard resets).
    Reset(DataStore),

    // ── Delegated family operations ──────────────────────────────────
    Account(AccountAction),
    Asset(AssetAction),
    Network(NetworkAction),
    Notification(NotificationAction),
    Password(PasswordAction),
}
