//! Concurrent desired-state map
//!
//! Key → Resource, safe for concurrent mutation from any caller task. All
//! operations are total: there is no error path, and `snapshot` never
//! observes a torn state. Entries declared after a snapshot is taken are
//! picked up by the next reconciliation pass, not the current one.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::resource::{OwnerId, Resource, ResourceKey};

/// Thread-safe map of declared resources.
#[derive(Debug, Default)]
pub struct DesiredStateStore {
    entries: RwLock<HashMap<ResourceKey, Resource>>,
}

impl DesiredStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a declaration under its own key.
    pub fn put(&self, resource: Resource) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(resource.key().clone(), resource);
    }

    /// Compare-and-remove by structural value.
    ///
    /// The entry is removed only if the stored value is the same definition
    /// as `resource`. A concurrently submitted newer value under the same
    /// key therefore survives a stale withdraw. Returns whether an entry was
    /// removed.
    pub fn remove_if_same(&self, resource: &Resource) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        match entries.get(resource.key()) {
            Some(current) if current.same_definition(resource) => {
                entries.remove(resource.key());
                true
            }
            _ => false,
        }
    }

    /// Drain every entry, returning the removed resources.
    pub fn remove_all(&self) -> Vec<Resource> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.drain().map(|(_, resource)| resource).collect()
    }

    /// Drain every entry matching `owner`, returning the removed resources.
    pub fn remove_where_owner(&self, owner: OwnerId) -> Vec<Resource> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let keys: Vec<ResourceKey> = entries
            .iter()
            .filter(|(_, resource)| resource.owner() == owner)
            .map(|(key, _)| key.clone())
            .collect();
        keys.iter().filter_map(|key| entries.remove(key)).collect()
    }

    /// Point-in-time clone of the map, safe against concurrent mutation.
    pub fn snapshot(&self) -> HashMap<ResourceKey, Resource> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.clone()
    }

    /// Stored declaration for `key`, if any.
    pub fn get(&self, key: &ResourceKey) -> Option<Resource> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    /// Number of declared entries.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    /// Whether no entries are declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
