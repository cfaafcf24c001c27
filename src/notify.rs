use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 256;

/// A store key whose bytes changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub key: String,
}

/// Broadcast hub for store-change notifications. One channel for the whole
/// store: every session subscribes once and rerenders on whatever keys it
/// cares about. The registries never touch this directly; only the store
/// signals it, and only on a real change.
pub struct NotifyHub {
    tx: broadcast::Sender<StoreChange>,
}

impl NotifyHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.tx.subscribe()
    }

    /// Send a change notification. No-op if nobody is listening.
    pub fn send(&self, key: &str) {
        let _ = self.tx.send(StoreChange { key: key.to_string() });
    }
}

impl Default for NotifyHub {
    fn default() -> Self {
        Self::new()
    }
}
