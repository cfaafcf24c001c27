use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::notify::NotifyHub;

/// Key under which the table collection is persisted.
pub const TABLES_KEY: &str = "venue_tables";

/// Key under which the booking collection is persisted.
pub const BOOKINGS_KEY: &str = "venue_bookings";

/// Snapshot persistence behind the registries.
///
/// `begin` is the transaction boundary: a registry operation holds the
/// guard for its whole read-modify-write sequence. Because the guard lives
/// in the store, any number of registry instances sharing one store
/// serialize against each other.
pub trait Store: Send + Sync {
    /// Cloned bytes currently stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Replace the bytes under `key`, durable before return. Observers are
    /// notified only when the bytes actually changed.
    fn set(&self, key: &str, bytes: Vec<u8>);

    /// Serialize a read-modify-write sequence against this store.
    fn begin(&self) -> MutexGuard<'_, ()>;
}

/// In-process store: one shared key space plus a change broadcast.
pub struct MemoryStore {
    entries: DashMap<String, Vec<u8>>,
    txn: Mutex<()>,
    notify: Arc<NotifyHub>,
}

impl MemoryStore {
    pub fn new(notify: Arc<NotifyHub>) -> Self {
        Self {
            entries: DashMap::new(),
            txn: Mutex::new(()),
            notify,
        }
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|e| e.value().clone())
    }

    fn set(&self, key: &str, bytes: Vec<u8>) {
        let changed = match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut e) => {
                if e.get() == &bytes {
                    false
                } else {
                    e.insert(bytes);
                    true
                }
            }
            Entry::Vacant(e) => {
                e.insert(bytes);
                true
            }
        };
        if changed {
            tracing::debug!("store change: {key}");
            self.notify.send(key);
        }
    }

    fn begin(&self) -> MutexGuard<'_, ()> {
        self.txn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
