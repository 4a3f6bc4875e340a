//! Normalized entity store for the walletstate wallet.
//!
//! This crate owns the in-memory data layer the UI renders from: typed
//! collections of wallet entities, a pure reducer over a tagged action
//! protocol, and a handle that broadcasts fresh snapshots to
//! subscribers.
//!
//! - **[`DataStore`]** — One immutable snapshot of everything the wallet
//!   knows. Collections are `Arc`'d, so clones are cheap and a
//!   collection an action did not touch stays reference-equal across
//!   reductions.
//!
//! - **[`Action`]** — The full mutation vocabulary: generic collection
//!   operations addressed by [`ModelKey`] (`AddItem`, `DeleteItem`,
//!   `UpdateItem`, `AddEntry`, `Reset`) plus fine-grained family
//!   operations ([`AccountAction`], [`AssetAction`], [`NetworkAction`],
//!   [`NotificationAction`], [`PasswordAction`]) that route to their
//!   owning sub-reducer.
//!
//! - **[`apply`]** — The root reducer: `(snapshot, action) -> snapshot`,
//!   pure and total except for protocol violations ([`StoreError`]).
//!
//! - **[`Store`]** — Explicitly constructed handle owning the current
//!   snapshot. `dispatch` requires `&mut`, making single-writer
//!   dispatch a compile-time property; subscribers get a
//!   `watch::Receiver<DataStore>`.
//!
//! - **Domain model** ([`model`]) — Canonical entity types (`Account`,
//!   `Asset`, `Network`, `Notification`, `Contact`, singleton
//!   `Settings` and vault `Password`) keyed by [`EntityId`].

pub mod error;
pub mod model;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::StoreError;
pub use store::{
    AccountAction, Action, AssetAction, DataStore, Entry, Item, ModelKey, NetworkAction,
    NotificationAction, PasswordAction, Store, apply,
};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Account,
    Address,
    Asset,
    AssetBalance,
    AssetKind,
    Contact,
    EntityId,
    FiatCurrency,
    Identified,
    Network,
    Notification,
    NotificationKind,
    Password,
    Settings,
    WalletKind,
};
