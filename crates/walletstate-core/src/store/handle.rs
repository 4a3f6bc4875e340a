// ── Store handle ──
//
// The one place a DataStore lives between reductions. Explicitly
// constructed and passed around by the host app; mutation requires
// `&mut`, which makes the single-dispatcher model a compile-time fact
// instead of a convention. Subscribers get snapshots over a `watch`
// channel and diff collections by `Arc::ptr_eq`.

use tokio::sync::watch;
use tracing::{debug, warn};

use super::data_store::DataStore;
use super::{Action, reducer};
use crate::error::StoreError;

/// Owns the current snapshot and broadcasts replacements.
#[derive(Debug)]
pub struct Store {
    current: watch::Sender<DataStore>,
}

impl Store {
    /// Install an initial snapshot (default, seeded, or one an external
    /// loader deserialized from persisted state).
    pub fn new(initial: DataStore) -> Self {
        let (current, _) = watch::channel(initial);
        Self { current }
    }

    /// The current snapshot (a handful of Arc bumps, not a deep copy).
    pub fn snapshot(&self) -> DataStore {
        self.current.borrow().clone()
    }

    /// Subscribe to snapshot replacements. Receivers observe only the
    /// latest value; intermediate snapshots may be skipped.
    pub fn subscribe(&self) -> watch::Receiver<DataStore> {
        self.current.subscribe()
    }

    /// Apply one action and broadcast the resulting snapshot.
    ///
    /// Protocol violations leave the current snapshot installed and
    /// nothing is broadcast.
    pub fn dispatch(&mut self, action: Action) -> Result<DataStore, StoreError> {
        let name = action.to_string();
        debug!(action = %name, "dispatching store action");

        let applied = {
            let current = self.current.borrow();
            reducer::apply(&current, action)
        };
        match applied {
            Ok(next) => {
                self.current.send_replace(next.clone());
                Ok(next)
            }
            Err(err) => {
                warn!(action = %name, error = %err, "store action rejected");
                Err(err)
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DataStore::default())
    }
}
