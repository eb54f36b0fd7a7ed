//! Key/value storage contract and the persisted auth keys

use crate::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Storage keys written by the console and its collaborators
pub mod keys {
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
    pub const CURRENT_USER: &str = "currentUser";
    pub const CURRENT_USER_ID: &str = "currentUserId";
    pub const AUTH_TOKEN: &str = "auth_token";
    pub const ADMIN_INFO: &str = "admin_info";
    pub const CURRENT_HOTEL_ID: &str = "currentHotelId";
    pub const USER_PROFILE: &str = "user_profile";
    pub const HOTEL_ADMINS: &str = "hotel_admins";
}

/// Every key that carries authentication data
pub const AUTH_STORAGE_KEYS: [&str; 8] = [
    keys::IS_AUTHENTICATED,
    keys::CURRENT_USER,
    keys::CURRENT_USER_ID,
    keys::AUTH_TOKEN,
    keys::ADMIN_INFO,
    keys::CURRENT_HOTEL_ID,
    keys::USER_PROFILE,
    keys::HOTEL_ADMINS,
];

/// String key/value storage with the semantics of the browser Web Storage API.
///
/// Methods take `&self` because browser storage handles are shared and
/// mutate through the host.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// In-memory store, used in tests and outside the browser
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// Result of [`clear_auth_keys`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// All keys were visited; `failures` counts removals the store rejected
    Cleared { failures: usize },
    /// No storage was available to clear
    Unavailable,
}

/// Remove every key in [`AUTH_STORAGE_KEYS`] from `store`.
///
/// Keys are removed unconditionally whether or not they are present. A
/// failed removal is logged and the sweep carries on with the next key.
pub fn clear_auth_keys(store: Option<&dyn KeyValueStore>) -> ClearOutcome {
    let Some(store) = store else {
        warn!("Local storage not available, nothing to clear");
        return ClearOutcome::Unavailable;
    };

    let mut failures = 0;
    for key in AUTH_STORAGE_KEYS {
        if let Err(e) = store.remove(key) {
            warn!(key, error = %e, "Failed to remove auth key");
            failures += 1;
        }
    }

    info!(
        failures,
        "All authentication data cleared, refresh the page to start from login"
    );
    ClearOutcome::Cleared { failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::storage("read-only"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(Error::storage("read-only"))
        }

        fn clear(&self) -> Result<()> {
            Err(Error::storage("read-only"))
        }
    }

    #[test]
    fn test_clear_auth_keys_removes_all_eight() {
        let store = MemoryStore::new();
        for key in AUTH_STORAGE_KEYS {
            store.set(key, "value").unwrap();
        }
        store.set("theme", "\"Dark\"").unwrap();

        let outcome = clear_auth_keys(Some(&store));

        assert_eq!(outcome, ClearOutcome::Cleared { failures: 0 });
        for key in AUTH_STORAGE_KEYS {
            assert!(!store.contains(key), "{key} should be removed");
        }
        // Unrelated keys survive
        assert!(store.contains("theme"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_auth_keys_on_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(
            clear_auth_keys(Some(&store)),
            ClearOutcome::Cleared { failures: 0 }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_auth_keys_without_storage() {
        assert_eq!(clear_auth_keys(None), ClearOutcome::Unavailable);
    }

    #[test]
    fn test_clear_auth_keys_counts_failures() {
        assert_eq!(
            clear_auth_keys(Some(&ReadOnlyStore)),
            ClearOutcome::Cleared { failures: 8 }
        );
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("currentHotelId", "H1").unwrap();
        assert_eq!(store.get("currentHotelId").unwrap().as_deref(), Some("H1"));

        store.remove("currentHotelId").unwrap();
        assert!(store.is_empty());
    }
}
