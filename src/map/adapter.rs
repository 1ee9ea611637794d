use super::types::{Entry, IntMap, REDIS_HASH_NAME};
use crate::error::{Result, parse_value};
use crate::store::HashStore;

use std::collections::HashSet;

/// `IntMap` over the `REDIS_HASH_NAME` hash of a remote store.
///
/// Stateless apart from the store handle: nothing is cached and nothing is
/// locked, so ordering between concurrent callers is whatever the store's
/// per-command execution gives. Multi-step operations (`remove`, `put_all`)
/// are not atomic.
pub struct RedisMap<S> {
    store: S,
}

impl<S: HashStore> RedisMap<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: HashStore> IntMap for RedisMap<S> {
    async fn size(&self) -> Result<usize> {
        self.store.field_count(REDIS_HASH_NAME).await
    }

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.size().await? == 0)
    }

    async fn get(&self, key: &str) -> Result<Option<i32>> {
        match self.store.field_get(REDIS_HASH_NAME, key).await? {
            Some(raw) => parse_value(&raw).map(Some),
            None => Ok(None),
        }
    }

    async fn contains_key(&self, key: &str) -> Result<bool> {
        self.store.field_exists(REDIS_HASH_NAME, key).await
    }

    async fn contains_value(&self, value: i32) -> Result<bool> {
        // Full HVALS scan on every call; there is no reverse index.
        let encoded = value.to_string();
        let values = self.store.list_values(REDIS_HASH_NAME).await?;

        // Validate every value before comparing, so a malformed field fails
        // the call wherever HVALS happens to place it.
        for raw in &values {
            parse_value(raw)?;
        }
        Ok(values.iter().any(|raw| *raw == encoded))
    }

    async fn put(&self, key: &str, value: i32) -> Result<i32> {
        // Write-only: the replaced value is never read.
        self.store
            .field_set(REDIS_HASH_NAME, key, &value.to_string())
            .await?;
        Ok(value)
    }

    async fn put_all<I>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, i32)> + Send,
        I::IntoIter: Send,
    {
        let mut written = 0usize;
        for (key, value) in entries {
            self.put(&key, value).await?;
            written += 1;
        }
        tracing::debug!("put_all wrote {} fields to {}", written, REDIS_HASH_NAME);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<Option<i32>> {
        let previous = self.get(key).await?;
        // Issued even when the key is absent; HDEL is a no-op then.
        self.store.field_delete(REDIS_HASH_NAME, key).await?;
        Ok(previous)
    }

    async fn clear(&self) -> Result<()> {
        self.store.delete_object(REDIS_HASH_NAME).await
    }

    async fn keys(&self) -> Result<HashSet<String>> {
        self.store.list_fields(REDIS_HASH_NAME).await
    }

    async fn values(&self) -> Result<Vec<i32>> {
        self.store
            .list_values(REDIS_HASH_NAME)
            .await?
            .iter()
            .map(|raw| parse_value(raw))
            .collect()
    }

    async fn entries(&self) -> Result<HashSet<Entry>> {
        self.store
            .list_all(REDIS_HASH_NAME)
            .await?
            .into_iter()
            .map(|(key, raw)| Ok(Entry::new(key, parse_value(&raw)?)))
            .collect()
    }
}
