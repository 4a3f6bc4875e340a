// ── Network family sub-reducer ──

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::merge;
use crate::model::{EntityId, Network};

/// Fine-grained mutations owned by the network family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NetworkAction {
    Create(Network),
    CreateMany(Vec<Network>),
    Update(Network),
    UpdateMany(Vec<Network>),
    Destroy(EntityId),
}

pub(crate) fn reduce(networks: &Arc<Vec<Network>>, action: NetworkAction) -> Arc<Vec<Network>> {
    match action {
        NetworkAction::Create(network) => merge::insert_absent(networks, network),
        NetworkAction::CreateMany(batch) => batch
            .into_iter()
            .fold(Arc::clone(networks), |acc, network| {
                merge::insert_absent(&acc, network)
            }),
        NetworkAction::Update(network) => merge::replace_existing(networks, network),
        NetworkAction::UpdateMany(batch) => batch
            .into_iter()
            .fold(Arc::clone(networks), |acc, network| {
                merge::replace_existing(&acc, network)
            }),
        NetworkAction::Destroy(id) => merge::remove_by_id(networks, &id),
    }
}
