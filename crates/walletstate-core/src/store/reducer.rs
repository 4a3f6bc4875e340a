// ── Root store reducer ──
//
// `apply` is the single transition function: one snapshot plus one
// action in, a fresh snapshot out. The input is never mutated, and every
// collection the action does not touch is carried over as the same Arc.
// Generic operations are interpreted here; family operations pass
// through verbatim to the owning sub-reducer, which replaces exactly one
// collection.

use std::sync::Arc;

use super::data_store::{DataStore, Entry, Item, ModelKey};
use super::merge;
use super::{Action, account, asset, network, notification, password};
use crate::error::StoreError;
use crate::model::{EntityId, Identified};

/// Apply one action to a snapshot. `Err` is reserved for protocol
/// violations; absent-id deletes/updates and duplicate adds are no-ops.
pub fn apply(state: &DataStore, action: Action) -> Result<DataStore, StoreError> {
    match action {
        Action::AddItem { model, item } => apply_item(state, model, item, SeqOp::Insert),
        Action::UpdateItem { model, item } => apply_item(state, model, item, SeqOp::Upsert),
        Action::DeleteItem { model, id } => delete_item(state, model, &id),
        Action::AddEntry(entry) => Ok(add_entry(state, entry)),
        Action::Reset(snapshot) => Ok(snapshot),

        // ── Delegated: replace one collection, share the rest ────────
        Action::Account(action) => Ok(DataStore {
            accounts: account::reduce(&state.accounts, action),
            ..state.clone()
        }),
        Action::Asset(action) => Ok(DataStore {
            assets: asset::reduce(&state.assets, action),
            ..state.clone()
        }),
        Action::Network(action) => Ok(DataStore {
            networks: network::reduce(&state.networks, action),
            ..state.clone()
        }),
        Action::Notification(action) => Ok(DataStore {
            notifications: notification::reduce(&state.notifications, action),
            ..state.clone()
        }),
        Action::Password(action) => Ok(DataStore {
            password: password::reduce(&state.password, action),
            ..state.clone()
        }),
    }
}

/// The two item-granular write shapes the generic protocol knows.
#[derive(Debug, Clone, Copy)]
enum SeqOp {
    /// Strict add: duplicate ids are silently ignored.
    Insert,
    /// Replace-or-append by id.
    Upsert,
}

impl SeqOp {
    fn name(self) -> &'static str {
        match self {
            Self::Insert => "ADD_ITEM",
            Self::Upsert => "UPDATE_ITEM",
        }
    }

    fn run<T: Identified + Clone>(self, collection: &Arc<Vec<T>>, item: T) -> Arc<Vec<T>> {
        match self {
            Self::Insert => merge::insert_absent(collection, item),
            Self::Upsert => merge::upsert_by_id(collection, item),
        }
    }
}

fn apply_item(
    state: &DataStore,
    model: ModelKey,
    item: Item,
    op: SeqOp,
) -> Result<DataStore, StoreError> {
    match (model, item) {
        // Singleton slots reject item-granular writes outright; a
        // miskeyed action must fail loudly instead of corrupting them.
        (ModelKey::Settings, _) => Err(StoreError::SettingsItemOp { op: op.name() }),
        (ModelKey::Password, _) => Err(StoreError::PasswordItemOp { op: op.name() }),

        (ModelKey::Accounts, Item::Account(account)) => Ok(DataStore {
            accounts: op.run(&state.accounts, account),
            ..state.clone()
        }),
        (ModelKey::Assets, Item::Asset(asset)) => Ok(DataStore {
            assets: op.run(&state.assets, asset),
            ..state.clone()
        }),
        (ModelKey::Networks, Item::Network(net)) => Ok(DataStore {
            networks: op.run(&state.networks, net),
            ..state.clone()
        }),
        (ModelKey::Notifications, Item::Notification(note)) => Ok(DataStore {
            notifications: op.run(&state.notifications, note),
            ..state.clone()
        }),
        (ModelKey::Contacts, Item::Contact(contact)) => Ok(DataStore {
            contacts: op.run(&state.contacts, contact),
            ..state.clone()
        }),

        (model, item) => Err(StoreError::ModelMismatch {
            model,
            payload: item.model(),
        }),
    }
}

fn delete_item(state: &DataStore, model: ModelKey, id: &EntityId) -> Result<DataStore, StoreError> {
    match model {
        ModelKey::Settings => Err(StoreError::SettingsItemOp { op: "DELETE_ITEM" }),
        ModelKey::Password => Err(StoreError::PasswordItemOp { op: "DELETE_ITEM" }),

        ModelKey::Accounts => Ok(DataStore {
            accounts: merge::remove_by_id(&state.accounts, id),
            ..state.clone()
        }),
        ModelKey::Assets => Ok(DataStore {
            assets: merge::remove_by_id(&state.assets, id),
            ..state.clone()
        }),
        ModelKey::Networks => Ok(DataStore {
            networks: merge::remove_by_id(&state.networks, id),
            ..state.clone()
        }),
        ModelKey::Notifications => Ok(DataStore {
            notifications: merge::remove_by_id(&state.notifications, id),
            ..state.clone()
        }),
        ModelKey::Contacts => Ok(DataStore {
            contacts: merge::remove_by_id(&state.contacts, id),
            ..state.clone()
        }),
    }
}

/// Whole-slot replacement. The Entry variant *is* the model key, so this
/// can never be miskeyed and never fails.
fn add_entry(state: &DataStore, entry: Entry) -> DataStore {
    match entry {
        Entry::Accounts(accounts) => DataStore {
            accounts: Arc::new(accounts),
            ..state.clone()
        },
        Entry::Assets(assets) => DataStore {
            assets: Arc::new(assets),
            ..state.clone()
        },
        Entry::Networks(networks) => DataStore {
            networks: Arc::new(networks),
            ..state.clone()
        },
        Entry::Notifications(notifications) => DataStore {
            notifications: Arc::new(notifications),
            ..state.clone()
        },
        Entry::Contacts(contacts) => DataStore {
            contacts: Arc::new(contacts),
            ..state.clone()
        },
        Entry::Settings(settings) => DataStore {
            settings: Arc::new(settings),
            ..state.clone()
        },
        Entry::Password(password) => DataStore {
            password: Arc::new(password),
            ..state.clone()
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{
        Account, Address, Asset, AssetKind, Contact, Password, Settings, WalletKind,
    };
    use crate::store::AccountAction;
    use pretty_assertions::assert_eq;

    fn account(id: &str, balance: &str) -> Account {
        Account {
            uuid: EntityId::from(id),
            label: "savings".to_owned(),
            address: Address::new("0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"),
            network_id: EntityId::from("ethereum"),
            wallet: WalletKind::Mnemonic,
            dpath: Some("m/44'/60'/0'/0/0".to_owned()),
            asset_balances: vec![crate::model::AssetBalance {
                asset_id: EntityId::from("eth"),
                balance: balance.to_owned(),
            }],
            favorite: false,
        }
    }

    fn asset(id: &str) -> Asset {
        Asset {
            uuid: EntityId::from(id),
            name: id.to_owned(),
            ticker: id.to_uppercase(),
            network_id: EntityId::from("ethereum"),
            kind: AssetKind::Erc20,
            contract_address: None,
            decimals: Some(18),
            coingecko_id: None,
            is_custom: false,
        }
    }

    fn contact(id: &str) -> Contact {
        Contact {
            uuid: EntityId::from(id),
            label: "exchange".to_owned(),
            address: Address::new("0x281055afc982d96fab65b3a49cac8b878184cb16"),
            network_id: EntityId::from("ethereum"),
            notes: None,
        }
    }

    fn populated() -> DataStore {
        DataStore {
            accounts: Arc::new(vec![account("a1", "1000")]),
            assets: Arc::new(vec![asset("eth")]),
            contacts: Arc::new(vec![contact("c1")]),
            ..DataStore::default()
        }
    }

    // ── Generic operations ───────────────────────────────────────────

    #[test]
    fn update_item_replaces_by_id_keeping_length() {
        let store = populated();
        let next = apply(
            &store,
            Action::UpdateItem {
                model: ModelKey::Accounts,
                item: Item::Account(account("a1", "2500")),
            },
        )
        .unwrap();

        assert_eq!(next.accounts.len(), 1);
        assert_eq!(next.accounts[0].asset_balances[0].balance, "2500");
    }

    #[test]
    fn delete_then_double_add_scenario() {
        let store = populated();

        let deleted = apply(
            &store,
            Action::DeleteItem {
                model: ModelKey::Accounts,
                id: EntityId::from("a1"),
            },
        )
        .unwrap();
        assert!(deleted.accounts.is_empty());

        let added = apply(
            &deleted,
            Action::AddItem {
                model: ModelKey::Accounts,
                item: Item::Account(account("a1", "1000")),
            },
        )
        .unwrap();
        let added_again = apply(
            &added,
            Action::AddItem {
                model: ModelKey::Accounts,
                item: Item::Account(account("a1", "1000")),
            },
        )
        .unwrap();
        assert_eq!(added_again.accounts.len(), 1);
    }

    #[test]
    fn add_item_with_same_id_but_new_fields_is_still_ignored() {
        let store = populated();
        let next = apply(
            &store,
            Action::AddItem {
                model: ModelKey::Accounts,
                item: Item::Account(account("a1", "999999")),
            },
        )
        .unwrap();

        assert_eq!(next.accounts.len(), 1);
        assert_eq!(next.accounts[0].asset_balances[0].balance, "1000");
    }

    #[test]
    fn delete_item_is_idempotent() {
        let store = populated();
        let delete = |s: &DataStore| {
            apply(
                s,
                Action::DeleteItem {
                    model: ModelKey::Contacts,
                    id: EntityId::from("c1"),
                },
            )
            .unwrap()
        };

        let once = delete(&store);
        let twice = delete(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn update_item_inserts_when_absent_and_converges() {
        let store = populated();
        let update = |s: &DataStore| {
            apply(
                s,
                Action::UpdateItem {
                    model: ModelKey::Assets,
                    item: Item::Asset(asset("dai")),
                },
            )
            .unwrap()
        };

        let once = update(&store);
        assert_eq!(once.assets.len(), 2);
        let twice = update(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn add_entry_bulk_replaces_a_collection() {
        let store = populated();
        let next = apply(
            &store,
            Action::AddEntry(Entry::Assets(vec![asset("dai"), asset("usdc")])),
        )
        .unwrap();

        assert_eq!(next.assets.len(), 2);
        // Untouched collections are shared, not copied.
        assert!(Arc::ptr_eq(&store.accounts, &next.accounts));
    }

    #[test]
    fn add_entry_is_the_settings_write_path() {
        let store = populated();
        let settings = Settings {
            demo_mode: true,
            ..Settings::default()
        };
        let next = apply(&store, Action::AddEntry(Entry::Settings(settings))).unwrap();
        assert!(next.settings.demo_mode);
    }

    #[test]
    fn reset_discards_everything_for_the_snapshot() {
        let store = populated();
        let snapshot = DataStore {
            password: Arc::new(Password::new("digest")),
            ..DataStore::default()
        };

        let next = apply(&store, Action::Reset(snapshot.clone())).unwrap();
        assert_eq!(next, snapshot);
    }

    // ── Protocol violations ──────────────────────────────────────────

    #[test]
    fn settings_rejects_every_item_op() {
        let store = populated();
        let item_ops = [
            Action::AddItem {
                model: ModelKey::Settings,
                item: Item::Asset(asset("dai")),
            },
            Action::UpdateItem {
                model: ModelKey::Settings,
                item: Item::Asset(asset("dai")),
            },
            Action::DeleteItem {
                model: ModelKey::Settings,
                id: EntityId::from("anything"),
            },
        ];

        for action in item_ops {
            let err = apply(&store, action).unwrap_err();
            assert!(matches!(err, StoreError::SettingsItemOp { .. }));
        }
        // And the store is observably untouched.
        assert_eq!(store, populated());
    }

    #[test]
    fn password_slot_rejects_item_ops() {
        let store = populated();
        let err = apply(
            &store,
            Action::DeleteItem {
                model: ModelKey::Password,
                id: EntityId::from("anything"),
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::PasswordItemOp { .. }));
    }

    #[test]
    fn mismatched_payload_kind_is_rejected() {
        let store = populated();
        let err = apply(
            &store,
            Action::AddItem {
                model: ModelKey::Accounts,
                item: Item::Asset(asset("dai")),
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            StoreError::ModelMismatch {
                model: ModelKey::Accounts,
                payload: ModelKey::Assets,
            }
        );
    }

    // ── Delegation ───────────────────────────────────────────────────

    #[test]
    fn delegated_actions_touch_exactly_one_collection() {
        let store = populated();
        let next = apply(
            &store,
            Action::Account(AccountAction::Create(account("a2", "7"))),
        )
        .unwrap();

        assert_eq!(next.accounts.len(), 2);
        assert!(Arc::ptr_eq(&store.assets, &next.assets));
        assert!(Arc::ptr_eq(&store.networks, &next.networks));
        assert!(Arc::ptr_eq(&store.notifications, &next.notifications));
        assert!(Arc::ptr_eq(&store.contacts, &next.contacts));
        assert!(Arc::ptr_eq(&store.settings, &next.settings));
        assert!(Arc::ptr_eq(&store.password, &next.password));
    }

    #[test]
    fn noop_actions_preserve_reference_equality() {
        let store = populated();
        let next = apply(
            &store,
            Action::Account(AccountAction::Destroy(EntityId::from("ghost"))),
        )
        .unwrap();
        assert!(Arc::ptr_eq(&store.accounts, &next.accounts));
    }
}
