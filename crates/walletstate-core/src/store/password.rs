// ── Password slot sub-reducer ──
//
// The narrowest family: the slot holds a single value and the only
// mutation is a whole-value replace.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::Password;

/// Mutations owned by the password family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PasswordAction {
    Set(Password),
}

pub(crate) fn reduce(_current: &Arc<Password>, action: PasswordAction) -> Arc<Password> {
    match action {
        PasswordAction::Set(next) => Arc::new(next),
    }
}
