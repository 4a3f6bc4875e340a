// ── Contact (address book) domain types ──

use serde::{Deserialize, Serialize};

use super::Identified;
use super::entity_id::{Address, EntityId};

/// A saved address-book entry. Contacts have no family sub-reducer;
/// they are maintained through the generic item operations only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub uuid: EntityId,
    pub label: String,
    pub address: Address,
    pub network_id: EntityId,
    pub notes: Option<String>,
}

impl Identified for Contact {
    fn entity_id(&self) -> &EntityId {
        &self.uuid
    }
}
