use super::types::{Entry, IntMap};
use crate::error::Result;

use dashmap::DashMap;
use std::collections::HashSet;

/// Store-less `IntMap`, for substituting the Redis adapter in tests.
///
/// Mirrors `RedisMap`'s observable results, including `put` returning the
/// written value. It never fails.
#[derive(Default)]
pub struct InMemoryMap {
    data: DashMap<String, i32>,
}

impl InMemoryMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IntMap for InMemoryMap {
    async fn size(&self) -> Result<usize> {
        Ok(self.data.len())
    }

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.data.is_empty())
    }

    async fn get(&self, key: &str) -> Result<Option<i32>> {
        Ok(self.data.get(key).map(|value| *value))
    }

    async fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.data.contains_key(key))
    }

    async fn contains_value(&self, value: i32) -> Result<bool> {
        Ok(self.data.iter().any(|entry| *entry.value() == value))
    }

    async fn put(&self, key: &str, value: i32) -> Result<i32> {
        self.data.insert(key.to_string(), value);
        Ok(value)
    }

    async fn put_all<I>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, i32)> + Send,
        I::IntoIter: Send,
    {
        for (key, value) in entries {
            self.data.insert(key, value);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<Option<i32>> {
        Ok(self.data.remove(key).map(|(_, value)| value))
    }

    async fn clear(&self) -> Result<()> {
        self.data.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<HashSet<String>> {
        Ok(self.data.iter().map(|entry| entry.key().clone()).collect())
    }

    async fn values(&self) -> Result<Vec<i32>> {
        Ok(self.data.iter().map(|entry| *entry.value()).collect())
    }

    async fn entries(&self) -> Result<HashSet<Entry>> {
        Ok(self
            .data
            .iter()
            .map(|entry| Entry::new(entry.key().clone(), *entry.value()))
            .collect())
    }
}
