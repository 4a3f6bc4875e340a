// ── Notification domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;
use super::entity_id::EntityId;

/// The closed set of in-app notification templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NotificationKind {
    WalletCreated,
    WalletAdded,
    SaveSettings,
    GetHardwareWallet,
    OnboardingReminder,
}

/// One in-app notification shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub uuid: EntityId,
    pub kind: NotificationKind,
    /// When the notification was first shown to the user.
    pub first_displayed: DateTime<Utc>,
    pub dismissed: bool,
    pub dismissed_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Mark as dismissed at the given instant.
    pub fn dismiss(self, at: DateTime<Utc>) -> Self {
        Self {
            dismissed: true,
            dismissed_at: Some(at),
            ..self
        }
    }
}

impl Identified for Notification {
    fn entity_id(&self) -> &EntityId {
        &self.uuid
    }
}
