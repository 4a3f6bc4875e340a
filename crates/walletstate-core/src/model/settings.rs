// ── User settings (singleton slot) ──
//
// Settings never live in a sequence collection and are never touched by
// the item-granular store operations; the whole value is replaced at
// once through AddEntry.

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FiatCurrency {
    Usd,
    Eur,
    Gbp,
    Jpy,
}

/// The wallet's user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub fiat_currency: FiatCurrency,
    /// Accounts pinned to the dashboard.
    pub dashboard_account_ids: Vec<EntityId>,
    /// Assets hidden from balance views.
    pub excluded_asset_ids: Vec<EntityId>,
    pub language: String,
    pub demo_mode: bool,
    /// Auto-lock after this many seconds of inactivity.
    pub inactivity_lock_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fiat_currency: FiatCurrency::Usd,
            dashboard_account_ids: Vec::new(),
            excluded_asset_ids: Vec::new(),
            language: "en".to_owned(),
            demo_mode: false,
            inactivity_lock_secs: 900,
        }
    }
}
