// ── Normalized entity store ──
//
// Immutable snapshots, a pure root reducer, and per-family
// sub-reducers. The `Store` handle owns the current snapshot and
// broadcasts replacements to subscribers.

mod account;
mod action;
mod asset;
mod data_store;
mod handle;
mod merge;
mod network;
mod notification;
mod password;
mod reducer;
pub mod seed;

pub use account::AccountAction;
pub use action::Action;
pub use asset::AssetAction;
pub use data_store::{DataStore, Entry, Item, ModelKey};
pub use handle::Store;
pub use merge::{insert_absent, remove_by_id, replace_existing, same_id, upsert_by_id};
pub use network::NetworkAction;
pub use notification::NotificationAction;
pub use password::PasswordAction;
pub use reducer::apply;
