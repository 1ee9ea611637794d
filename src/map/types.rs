use crate::error::Result;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::future::Future;

/// Name of the single hash object backing the map.
pub const REDIS_HASH_NAME: &str = "redisMap";

/// One key/value pair of the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: i32,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: i32) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Mutable associative container with string keys and `i32` values.
///
/// Behaves like a map with two documented exceptions:
/// - `put` returns the value it just wrote, never the value it replaced.
/// - `contains_value` scans every value on each call.
pub trait IntMap: Send + Sync {
    /// Number of entries.
    fn size(&self) -> impl Future<Output = Result<usize>> + Send;

    /// `size() == 0`, at the cost of the same round trip.
    fn is_empty(&self) -> impl Future<Output = Result<bool>> + Send;

    /// The value for `key`, or `None` if the key is not present.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<i32>>> + Send;

    fn contains_key(&self, key: &str) -> impl Future<Output = Result<bool>> + Send;

    fn contains_value(&self, value: i32) -> impl Future<Output = Result<bool>> + Send;

    /// Writes `value` under `key` and returns `value`.
    fn put(&self, key: &str, value: i32) -> impl Future<Output = Result<i32>> + Send;

    /// Applies `put` to each pair in iteration order. Not atomic: a failure
    /// leaves the earlier pairs written.
    fn put_all<I>(&self, entries: I) -> impl Future<Output = Result<()>> + Send
    where
        I: IntoIterator<Item = (String, i32)> + Send,
        I::IntoIter: Send;

    /// Removes `key`, returning the value it held. Removing an absent key
    /// returns `None` and changes nothing.
    fn remove(&self, key: &str) -> impl Future<Output = Result<Option<i32>>> + Send;

    fn clear(&self) -> impl Future<Output = Result<()>> + Send;

    fn keys(&self) -> impl Future<Output = Result<HashSet<String>>> + Send;

    fn values(&self) -> impl Future<Output = Result<Vec<i32>>> + Send;

    fn entries(&self) -> impl Future<Output = Result<HashSet<Entry>>> + Send;
}
