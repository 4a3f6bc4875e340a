// ── Asset family sub-reducer ──
//
// Same shape as the other families plus AddFromApi: a batch upsert from
// the token-metadata API that merges field-by-field instead of replacing
// whole records, so locally-known data survives a sparse payload.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::merge;
use crate::model::{Asset, EntityId};

/// Fine-grained mutations owned by the asset family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AssetAction {
    Create(Asset),
    CreateMany(Vec<Asset>),
    Update(Asset),
    UpdateMany(Vec<Asset>),
    Destroy(EntityId),
    /// Batch upsert from the external token-metadata API.
    AddFromApi(Vec<Asset>),
}

pub(crate) fn reduce(assets: &Arc<Vec<Asset>>, action: AssetAction) -> Arc<Vec<Asset>> {
    match action {
        AssetAction::Create(asset) => merge::insert_absent(assets, asset),
        AssetAction::CreateMany(batch) => batch
            .into_iter()
            .fold(Arc::clone(assets), |acc, asset| {
                merge::insert_absent(&acc, asset)
            }),
        AssetAction::Update(asset) => merge::replace_existing(assets, asset),
        AssetAction::UpdateMany(batch) => batch
            .into_iter()
            .fold(Arc::clone(assets), |acc, asset| {
                merge::replace_existing(&acc, asset)
            }),
        AssetAction::Destroy(id) => merge::remove_by_id(assets, &id),
        AssetAction::AddFromApi(batch) => batch
            .into_iter()
            .fold(Arc::clone(assets), |acc, asset| upsert_from_api(&acc, asset)),
    }
}

/// Upsert one API asset: unknown ids are inserted as-is, known ids are
/// merged field-by-field (see `Asset::merged_with_api`).
fn upsert_from_api(assets: &Arc<Vec<Asset>>, incoming: Asset) -> Arc<Vec<Asset>> {
    let mut next = assets.as_ref().clone();
    match next.iter_mut().find(|existing| merge::same_id(*existing, &incoming)) {
        Some(existing) => {
            let merged = existing.merged_with_api(incoming);
            *existing = merged;
        }
        None => next.push(incoming),
    }
    Arc::new(next)
}
