mod bookings;
mod conflict;
mod error;
mod tables;

pub use bookings::BookingRegistry;
pub use error::EngineError;
pub use tables::TableRegistry;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::Store;

/// Decode a persisted collection. A missing key is an empty collection;
/// bytes that fail to decode are a store-level fault.
fn load_slice<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Result<Vec<T>, EngineError> {
    match store.get(key) {
        Some(bytes) => bincode::deserialize(&bytes)
            .map_err(|e| EngineError::Internal(format!("corrupt snapshot under {key}: {e}"))),
        None => Ok(Vec::new()),
    }
}

/// Encode a collection and hand it to the store.
fn save_slice<T: Serialize>(store: &dyn Store, key: &str, items: &[T]) -> Result<(), EngineError> {
    let bytes = bincode::serialize(items)
        .map_err(|e| EngineError::Internal(format!("encode snapshot under {key}: {e}")))?;
    store.set(key, bytes);
    Ok(())
}
