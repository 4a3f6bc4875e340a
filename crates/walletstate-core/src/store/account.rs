// ── Account family sub-reducer ──

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::merge;
use crate::model::{Account, EntityId};

/// Fine-grained mutations owned by the account family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AccountAction {
    Create(Account),
    CreateMany(Vec<Account>),
    Update(Account),
    UpdateMany(Vec<Account>),
    Destroy(EntityId),
}

pub(crate) fn reduce(accounts: &Arc<Vec<Account>>, action: AccountAction) -> Arc<Vec<Account>> {
    match action {
        AccountAction::Create(account) => merge::insert_absent(accounts, account),
        AccountAction::CreateMany(batch) => batch
            .into_iter()
            .fold(Arc::clone(accounts), |acc, account| {
                merge::insert_absent(&acc, account)
            }),
        AccountAction::Update(account) => merge::replace_existing(accounts, account),
        AccountAction::UpdateMany(batch) => batch
            .into_iter()
            .fold(Arc::clone(accounts), |acc, account| {
                merge::replace_existing(&acc, account)
            }),
        AccountAction::Destroy(id) => merge::remove_by_id(accounts, &id),
    }
}
