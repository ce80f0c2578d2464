use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::watch;

/// Shared, observable filter criteria for a list
///
/// Clones share the same underlying value. Writes that change the value,
/// including nested fields, notify subscribers; writes that leave it equal do
/// not.
#[derive(Debug, Clone)]
pub struct Filter {
    sender: Arc<watch::Sender<Map<String, Value>>>,
}

impl Filter {
    pub fn new() -> Self {
        Self::from_map(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        let (sender, _) = watch::channel(map);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Current criteria
    pub fn get(&self) -> Map<String, Value> {
        self.sender.borrow().clone()
    }

    /// Set one field, returning whether the filter changed
    pub fn set<K: Into<String>, V: Into<Value>>(&self, key: K, value: V) -> bool {
        let key = key.into();
        let value = value.into();
        self.update(move |map| {
            map.insert(key, value);
        })
    }

    /// Remove one field, returning whether the filter changed
    pub fn remove(&self, key: &str) -> bool {
        self.update(|map| {
            map.remove(key);
        })
    }

    /// Replace all criteria, returning whether the filter changed
    pub fn replace(&self, criteria: Map<String, Value>) -> bool {
        self.update(move |map| *map = criteria)
    }

    /// Apply an arbitrary, possibly nested, mutation
    ///
    /// Subscribers are notified only if the resulting value differs from the
    /// previous one.
    pub fn update<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        self.sender.send_if_modified(|map| {
            let before = map.clone();
            mutate(map);
            *map != before
        })
    }

    /// Receiver notified after each change; the current value counts as seen
    pub fn subscribe(&self) -> watch::Receiver<Map<String, Value>> {
        self.sender.subscribe()
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Map<String, Value>> for Filter {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}
