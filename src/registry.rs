//! Shared registry: the Singleton pattern, Rust-flavored.
//!
//! The registry is an ordinary value you can construct and inject
//! (`Registry::new`), and the process-wide instance is just one of those
//! pinned behind a `OnceLock` (`Registry::shared`). Code under test takes a
//! `&Registry`; only code that genuinely wants the global goes through
//! `shared()`.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use serde_json::Value;

/// A name-to-value map with interior mutability.
///
/// Values are `serde_json::Value` so any scalar (or structured) payload can
/// be stored without the registry caring about its shape.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Mutex<HashMap<String, Value>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance. Every call returns the same registry.
    pub fn shared() -> &'static Registry {
        static SHARED: OnceLock<Registry> = OnceLock::new();
        SHARED.get_or_init(Registry::new)
    }

    /// Insert or replace an entry.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.lock().insert(key.into(), value.into());
    }

    /// Current value for `key`, or `None` if it was never set.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned lock only means a writer panicked mid-insert; the map
    // itself is still a valid HashMap, so recover the guard.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_get() {
        let registry = Registry::new();
        registry.set("key", "value");
        assert_eq!(registry.get("key"), Some(json!("value")));
    }

    #[test]
    fn get_missing_key() {
        let registry = Registry::new();
        assert_eq!(registry.get("nothing"), None);
        assert!(!registry.contains("nothing"));
    }

    #[test]
    fn set_replaces_existing() {
        let registry = Registry::new();
        registry.set("key", 1);
        registry.set("key", 2);
        assert_eq!(registry.get("key"), Some(json!(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn arbitrary_scalar_values() {
        let registry = Registry::new();
        registry.set("string", "text");
        registry.set("int", 42);
        registry.set("float", 2.5);
        registry.set("flag", true);
        assert_eq!(registry.get("int"), Some(json!(42)));
        assert_eq!(registry.get("flag"), Some(json!(true)));
    }

    #[test]
    fn shared_returns_same_instance() {
        let first = Registry::shared();
        let second = Registry::shared();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn shared_write_visible_through_fresh_handle() {
        Registry::shared().set("shared-key", "shared-value");
        // A freshly obtained handle observes the earlier write.
        assert_eq!(
            Registry::shared().get("shared-key"),
            Some(json!("shared-value"))
        );
    }

    #[test]
    fn shared_write_visible_across_threads() {
        Registry::shared().set("cross-thread", "v");
        let handle = std::thread::spawn(|| Registry::shared().get("cross-thread"));
        assert_eq!(handle.join().unwrap(), Some(json!("v")));
    }
}
