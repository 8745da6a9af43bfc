//! Local persistence
//!
//! A string-keyed key-value store stands in for the browser's local storage;
//! the cart log lives in a single fixed slot.

use std::sync::{Arc, Mutex, PoisonError};

use mockall::automock;
use rustc_hash::FxHashMap;

use crate::cart::CartLog;

/// Slot the cart log is persisted under.
const CART_KEY: &str = "cart";

/// A durable local key-value store.
///
/// Writes replace the whole value, so every mutation of a slot is a single
/// atomic read-modify-write from the caller's point of view.
#[automock]
pub trait KeyValueStore: Send + Sync {
    /// Read a slot; `None` when it was never written or has been removed.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite a slot.
    fn set(&self, key: &str, value: &str);

    /// Delete a slot. A no-op when absent.
    fn remove(&self, key: &str);
}

/// In-memory [`KeyValueStore`], used in tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// The cart's persistence slot.
#[derive(Clone)]
pub struct CartStore {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").finish_non_exhaustive()
    }
}

impl CartStore {
    /// Wrap a key-value store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the persisted log.
    ///
    /// A missing or malformed slot loads as the empty log.
    pub fn load(&self) -> CartLog {
        self.store
            .get(CART_KEY)
            .map(|raw| CartLog::from_json(&raw))
            .unwrap_or_default()
    }

    /// Persist the log, replacing the slot's previous contents.
    pub fn save(&self, log: &CartLog) {
        self.store.set(CART_KEY, &log.to_json());
    }

    /// Remove the slot entirely, as on successful checkout.
    pub fn clear(&self) {
        self.store.remove(CART_KEY);
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::ProductId;

    use super::*;

    #[test]
    fn load_missing_slot_gives_empty_log() {
        let cart = CartStore::new(Arc::new(MemoryStore::new()));

        assert!(cart.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let cart = CartStore::new(Arc::new(MemoryStore::new()));
        let log = CartLog::from_entries([ProductId(5), ProductId(5), ProductId(3)]);

        cart.save(&log);

        assert_eq!(cart.load(), log);
    }

    #[test]
    fn malformed_slot_loads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(CART_KEY, "{broken");

        let cart = CartStore::new(store);

        assert!(cart.load().is_empty());
    }

    #[test]
    fn clear_removes_the_slot() {
        let store = Arc::new(MemoryStore::new());
        let cart = CartStore::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);

        cart.save(&CartLog::from_entries([ProductId(1)]));
        cart.clear();

        assert_eq!(store.get(CART_KEY), None);
    }
}
