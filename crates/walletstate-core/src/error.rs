// ── Store error types ──
//
// Protocol violations only. Everything else the reducer absorbs: an
// absent id on delete/update and a duplicate id on add are no-ops, so
// idempotent retries stay safe.

use thiserror::Error;

use crate::store::ModelKey;

/// A store action the reducer refuses to apply. The store is left
/// untouched; recovery is the dispatching layer's problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Item-granular operations cannot address the settings slot; the
    /// whole value must be replaced through `AddEntry`.
    #[error("{op} cannot modify settings -- replace them wholesale with ADD_ENTRY")]
    SettingsItemOp { op: &'static str },

    /// Same guard for the vault password slot, which is written only by
    /// the password family action (or an `AddEntry` bulk replace).
    #[error("{op} cannot modify the vault password -- use the password action")]
    PasswordItemOp { op: &'static str },

    /// The payload's entity kind disagrees with the targeted model key,
    /// e.g. an asset sent to the accounts collection.
    #[error("payload kind {payload} does not match target collection {model}")]
    ModelMismatch { model: ModelKey, payload: ModelKey },
}
