//! HTTP Module Tests
//!
//! Calls the handlers directly with extracted arguments, the way axum would.
//!
//! ## Test Scopes
//! - **Pass-through**: each handler returns exactly what the map returned.
//! - **Status mapping**: store outages -> 503, malformed data -> 500.
//!
//! *Note: routing and wire encoding are covered by the integration test in `tests/`.*

#[cfg(test)]
mod tests {
    use crate::http::handlers::*;
    use crate::http::protocol::{PutAllRequest, PutParams};
    use crate::map::{Entry, InMemoryMap, IntMap, REDIS_HASH_NAME, RedisMap};
    use crate::store::{HashStore, InMemoryHashStore};
    use axum::Json;
    use axum::extract::{Extension, Path, Query};
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn memory_map() -> Arc<InMemoryMap> {
        Arc::new(InMemoryMap::new())
    }

    // ============================================================
    // PASS-THROUGH
    // ============================================================

    #[tokio::test]
    async fn test_put_then_get_through_handlers() {
        let map = memory_map();

        let Json(written) = handle_put(
            Extension(map.clone()),
            Query(PutParams {
                key: "key1".to_string(),
                value: 5,
            }),
        )
        .await
        .unwrap();
        assert_eq!(written, 5);

        let Json(value) = handle_get(Extension(map.clone()), Path("key1".to_string()))
            .await
            .unwrap();
        assert_eq!(value, Some(5));

        let Json(missing) = handle_get(Extension(map), Path("nope".to_string()))
            .await
            .unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_put_handler_returns_new_value_on_overwrite() {
        let map = memory_map();
        map.put("k", 1).await.unwrap();

        let Json(written) = handle_put(
            Extension(map),
            Query(PutParams {
                key: "k".to_string(),
                value: 2,
            }),
        )
        .await
        .unwrap();

        assert_eq!(written, 2);
    }

    #[tokio::test]
    async fn test_put_all_then_collections() {
        let map = memory_map();

        let status = handle_put_all(
            Extension(map.clone()),
            Json(PutAllRequest(vec![
                ("a".to_string(), 1),
                ("b".to_string(), 2),
            ])),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let Json(size) = handle_size(Extension(map.clone())).await.unwrap();
        assert_eq!(size, 2);

        let Json(keys) = handle_keys(Extension(map.clone())).await.unwrap();
        assert!(keys.contains("a") && keys.contains("b"));

        let Json(mut values) = handle_values(Extension(map.clone())).await.unwrap();
        values.sort();
        assert_eq!(values, vec![1, 2]);

        let Json(entries) = handle_entries(Extension(map.clone())).await.unwrap();
        assert!(entries.contains(&Entry::new("a", 1)));
        assert!(entries.contains(&Entry::new("b", 2)));

        let Json(has_key) = handle_contains_key(Extension(map.clone()), Path("a".to_string()))
            .await
            .unwrap();
        assert!(has_key);

        let Json(has_value) = handle_contains_value(Extension(map.clone()), Path(2))
            .await
            .unwrap();
        assert!(has_value);

        let Json(has_value) = handle_contains_value(Extension(map), Path(3)).await.unwrap();
        assert!(!has_value);
    }

    #[tokio::test]
    async fn test_remove_and_clear_handlers() {
        let map = memory_map();
        map.put("a", 1).await.unwrap();
        map.put("b", 2).await.unwrap();

        let Json(removed) = handle_remove(Extension(map.clone()), Path("a".to_string()))
            .await
            .unwrap();
        assert_eq!(removed, Some(1));

        let Json(removed) = handle_remove(Extension(map.clone()), Path("a".to_string()))
            .await
            .unwrap();
        assert_eq!(removed, None);

        let Json(empty) = handle_is_empty(Extension(map.clone())).await.unwrap();
        assert!(!empty);

        assert_eq!(
            handle_clear(Extension(map.clone())).await,
            StatusCode::NO_CONTENT
        );

        let Json(empty) = handle_is_empty(Extension(map)).await.unwrap();
        assert!(empty);
    }

    // ============================================================
    // STATUS MAPPING
    // ============================================================

    #[tokio::test]
    async fn test_store_outage_maps_to_service_unavailable() {
        let store = InMemoryHashStore::new();
        let map = Arc::new(RedisMap::new(store.clone()));
        store.set_unavailable(true);

        assert_eq!(
            handle_size(Extension(map.clone())).await.unwrap_err(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            handle_clear(Extension(map.clone())).await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            handle_put_all(
                Extension(map),
                Json(PutAllRequest(vec![("a".to_string(), 1)]))
            )
            .await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_malformed_value_maps_to_internal_error() {
        let store = InMemoryHashStore::new();
        store
            .field_set(REDIS_HASH_NAME, "bad", "x1")
            .await
            .unwrap();
        let map = Arc::new(RedisMap::new(store));

        assert_eq!(
            handle_get(Extension(map.clone()), Path("bad".to_string()))
                .await
                .unwrap_err(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            handle_values(Extension(map.clone())).await.unwrap_err(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        // Key-level endpoints still work on the same data
        let Json(has_key) = handle_contains_key(Extension(map), Path("bad".to_string()))
            .await
            .unwrap();
        assert!(has_key);
    }
}
