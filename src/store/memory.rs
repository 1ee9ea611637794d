use super::client::{HashStore, StoreCommand};
use crate::error::{MapError, Result};

use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Process-local `HashStore`.
///
/// Each hash object is a `DashMap` of field -> value, created on first write and
/// dropped when its last field goes (mirroring how Redis discards empty hashes).
/// Clones share state, so a test can keep a handle and inspect what an adapter
/// sent through another one.
#[derive(Clone, Default)]
pub struct InMemoryHashStore {
    objects: Arc<DashMap<String, DashMap<String, String>>>,
    journal: Arc<Mutex<Vec<StoreCommand>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryHashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far, in arrival order.
    pub fn commands(&self) -> Vec<StoreCommand> {
        self.journal().clone()
    }

    pub fn clear_commands(&self) {
        self.journal().clear();
    }

    // A panic elsewhere while holding the lock must not drop recorded commands.
    fn journal(&self) -> MutexGuard<'_, Vec<StoreCommand>> {
        self.journal.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// While set, every command fails with `MapError::Unavailable`.
    /// Failed commands are still journaled.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Whether the named object currently holds any field.
    pub fn object_exists(&self, object: &str) -> bool {
        self.objects.contains_key(object)
    }

    fn issue(&self, command: StoreCommand) -> Result<()> {
        tracing::debug!("memory: {}", command);
        let text = command.to_string();
        self.journal().push(command);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(MapError::Unavailable(format!("store offline, {} not sent", text)));
        }
        Ok(())
    }
}

impl HashStore for InMemoryHashStore {
    async fn field_get(&self, object: &str, field: &str) -> Result<Option<String>> {
        self.issue(StoreCommand::FieldGet {
            object: object.to_string(),
            field: field.to_string(),
        })?;

        Ok(self
            .objects
            .get(object)
            .and_then(|hash| hash.get(field).map(|value| value.value().clone())))
    }

    async fn field_set(&self, object: &str, field: &str, value: &str) -> Result<()> {
        self.issue(StoreCommand::FieldSet {
            object: object.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        })?;

        self.objects
            .entry(object.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn field_delete(&self, object: &str, field: &str) -> Result<()> {
        self.issue(StoreCommand::FieldDelete {
            object: object.to_string(),
            field: field.to_string(),
        })?;

        if let Some(hash) = self.objects.get(object) {
            hash.remove(field);
        }
        self.objects.remove_if(object, |_, hash| hash.is_empty());
        Ok(())
    }

    async fn field_exists(&self, object: &str, field: &str) -> Result<bool> {
        self.issue(StoreCommand::FieldExists {
            object: object.to_string(),
            field: field.to_string(),
        })?;

        Ok(self
            .objects
            .get(object)
            .map(|hash| hash.contains_key(field))
            .unwrap_or(false))
    }

    async fn field_count(&self, object: &str) -> Result<usize> {
        self.issue(StoreCommand::FieldCount {
            object: object.to_string(),
        })?;

        Ok(self.objects.get(object).map(|hash| hash.len()).unwrap_or(0))
    }

    async fn list_fields(&self, object: &str) -> Result<HashSet<String>> {
        self.issue(StoreCommand::ListFields {
            object: object.to_string(),
        })?;

        Ok(self
            .objects
            .get(object)
            .map(|hash| hash.iter().map(|entry| entry.key().clone()).collect())
            .unwrap_or_default())
    }

    async fn list_values(&self, object: &str) -> Result<Vec<String>> {
        self.issue(StoreCommand::ListValues {
            object: object.to_string(),
        })?;

        Ok(self
            .objects
            .get(object)
            .map(|hash| hash.iter().map(|entry| entry.value().clone()).collect())
            .unwrap_or_default())
    }

    async fn list_all(&self, object: &str) -> Result<HashMap<String, String>> {
        self.issue(StoreCommand::ListAll {
            object: object.to_string(),
        })?;

        Ok(self
            .objects
            .get(object)
            .map(|hash| {
                hash.iter()
                    .map(|entry| (entry.key().clone(), entry.value().clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn delete_object(&self, object: &str) -> Result<()> {
        self.issue(StoreCommand::DeleteObject {
            object: object.to_string(),
        })?;

        self.objects.remove(object);
        Ok(())
    }
}
