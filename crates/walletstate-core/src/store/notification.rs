// ── Notification family sub-reducer ──

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::merge;
use crate::model::{EntityId, Notification};

/// Fine-grained mutations owned by the notification family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NotificationAction {
    Create(Notification),
    CreateMany(Vec<Notification>),
    Update(Notification),
    UpdateMany(Vec<Notification>),
    Destroy(EntityId),
}

pub(crate) fn reduce(
    notifications: &Arc<Vec<Notification>>,
    action: NotificationAction,
) -> Arc<Vec<Notification>> {
    match action {
        NotificationAction::Create(notification) => merge::insert_absent(notifications, notification),
        NotificationAction::CreateMany(batch) => batch
            .into_iter()
            .fold(Arc::clone(notifications), |acc, notification| {
                merge::insert_absent(&acc, notification)
            }),
        NotificationAction::Update(notification) => {
            merge::replace_existing(notifications, notification)
        }
        NotificationAction::UpdateMany(batch) => batch
            .into_iter()
            .fold(Arc::clone(notifications), |acc, notification| {
                merge::replace_existing(&acc, notification)
            }),
        NotificationAction::Destroy(id) => merge::remove_by_id(notifications, &id),
    }
}
