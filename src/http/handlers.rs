use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
};
use std::collections::HashSet;
use std::sync::Arc;

use super::protocol::{PutAllRequest, PutParams};
use crate::error::MapError;
use crate::map::{Entry, IntMap};

/// Logs a failed map call and picks the status the client sees.
fn failure(operation: &str, err: MapError) -> StatusCode {
    tracing::error!("{} failed: {}", operation, err);
    if err.is_connectivity() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub async fn handle_size<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
) -> Result<Json<usize>, StatusCode> {
    match map.size().await {
        Ok(size) => Ok(Json(size)),
        Err(e) => Err(failure("size", e)),
    }
}

pub async fn handle_entries<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
) -> Result<Json<HashSet<Entry>>, StatusCode> {
    match map.entries().await {
        Ok(entries) => Ok(Json(entries)),
        Err(e) => Err(failure("entries", e)),
    }
}

pub async fn handle_keys<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
) -> Result<Json<HashSet<String>>, StatusCode> {
    match map.keys().await {
        Ok(keys) => Ok(Json(keys)),
        Err(e) => Err(failure("keys", e)),
    }
}

pub async fn handle_values<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
) -> Result<Json<Vec<i32>>, StatusCode> {
    match map.values().await {
        Ok(values) => Ok(Json(values)),
        Err(e) => Err(failure("values", e)),
    }
}

pub async fn handle_clear<M: IntMap>(Extension(map): Extension<Arc<M>>) -> StatusCode {
    match map.clear().await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => failure("clear", e),
    }
}

pub async fn handle_contains_key<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
    Path(key): Path<String>,
) -> Result<Json<bool>, StatusCode> {
    map.contains_key(&key)
        .await
        .map(Json)
        .map_err(|e| failure("contains_key", e))
}

pub async fn handle_contains_value<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
    Path(value): Path<i32>,
) -> Result<Json<bool>, StatusCode> {
    map.contains_value(value)
        .await
        .map(Json)
        .map_err(|e| failure("contains_value", e))
}

/// `null` when the key is absent.
pub async fn handle_get<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
    Path(key): Path<String>,
) -> Result<Json<Option<i32>>, StatusCode> {
    map.get(&key)
        .await
        .map(Json)
        .map_err(|e| failure("get", e))
}

pub async fn handle_is_empty<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
) -> Result<Json<bool>, StatusCode> {
    map.is_empty()
        .await
        .map(Json)
        .map_err(|e| failure("is_empty", e))
}

/// Responds with the value just written, not the one it replaced.
pub async fn handle_put<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
    Query(params): Query<PutParams>,
) -> Result<Json<i32>, StatusCode> {
    match map.put(&params.key, params.value).await {
        Ok(written) => {
            tracing::debug!("PUT {} = {}", params.key, written);
            Ok(Json(written))
        }
        Err(e) => Err(failure("put", e)),
    }
}

pub async fn handle_put_all<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
    Json(req): Json<PutAllRequest>,
) -> StatusCode {
    let count = req.0.len();
    match map.put_all(req.0).await {
        Ok(()) => {
            tracing::debug!("PUT-ALL wrote {} entries", count);
            StatusCode::NO_CONTENT
        }
        Err(e) => failure("put_all", e),
    }
}

/// `null` when the key was absent.
pub async fn handle_remove<M: IntMap>(
    Extension(map): Extension<Arc<M>>,
    Path(key): Path<String>,
) -> Result<Json<Option<i32>>, StatusCode> {
    map.remove(&key)
        .await
        .map(Json)
        .map_err(|e| failure("remove", e))
}
