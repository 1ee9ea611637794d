//! Startup Demo Runner
//!
//! Walks a map through every operation once at process start and logs what comes
//! back. Leaves the map empty (the last step clears it).

use anyhow::{Context, Result};

use crate::map::IntMap;

/// Results observed by a demo run, in the order they were produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub key1_value: Option<i32>,
    pub size: usize,
    pub contains_key1: bool,
    pub contains_value2: bool,
    pub removed: Option<i32>,
    pub key1_after_removal: Option<i32>,
    pub empty_after_removal: bool,
    pub size_after_clear: usize,
}

pub async fn run_demo<M: IntMap>(map: &M) -> Result<DemoReport> {
    tracing::info!("Adding key1 with value 1");
    map.put("key1", 1).await.context("put key1")?;
    tracing::info!("Adding key2 with value 2");
    map.put("key2", 2).await.context("put key2")?;

    let key1_value = map.get("key1").await.context("get key1")?;
    tracing::info!("Value for key1: {:?}", key1_value);
    let size = map.size().await.context("size")?;
    tracing::info!("Map size: {}", size);

    let entries = map.entries().await.context("entries")?;
    tracing::info!("Entries: {:?}", entries);
    let keys = map.keys().await.context("keys")?;
    tracing::info!("Keys: {:?}", keys);
    let values = map.values().await.context("values")?;
    tracing::info!("Values: {:?}", values);

    let contains_key1 = map.contains_key("key1").await.context("contains_key")?;
    tracing::info!("Contains key 'key1': {}", contains_key1);
    let contains_value2 = map.contains_value(2).await.context("contains_value")?;
    tracing::info!("Contains value 2: {}", contains_value2);

    tracing::info!("Removing key1");
    let removed = map.remove("key1").await.context("remove key1")?;
    let key1_after_removal = map.get("key1").await.context("get key1")?;
    tracing::info!("Value for key1 after removal: {:?}", key1_after_removal);
    let empty_after_removal = map.is_empty().await.context("is_empty")?;
    tracing::info!("Is map empty: {}", empty_after_removal);

    map.clear().await.context("clear")?;
    let size_after_clear = map.size().await.context("size")?;
    tracing::info!("Map size after clearing: {}", size_after_clear);

    Ok(DemoReport {
        key1_value,
        size,
        contains_key1,
        contains_value2,
        removed,
        key1_after_removal,
        empty_after_removal,
        size_after_clear,
    })
}
