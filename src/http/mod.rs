//! HTTP Facade Module
//!
//! A pass-through REST surface over any `IntMap`, mounted at `/api/redis-map`.
//! Handlers hold no logic beyond extracting arguments and translating failures into
//! status codes (store trouble -> 503, malformed stored data -> 500).
//!
//! ## Submodules
//! - **`handlers`**: one axum handler per map operation, generic over the map type.
//! - **`protocol`**: route constants and request DTOs.

pub mod handlers;
pub mod protocol;

use axum::{
    Extension, Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::map::IntMap;
use handlers::*;
use protocol::*;

/// Builds the router for `map`, with every route under `BASE_PATH`.
pub fn router<M: IntMap + 'static>(map: Arc<M>) -> Router {
    let api = Router::new()
        .route(ENDPOINT_SIZE, get(handle_size::<M>))
        .route(ENDPOINT_ENTRIES, get(handle_entries::<M>))
        .route(ENDPOINT_KEYS, get(handle_keys::<M>))
        .route(ENDPOINT_VALUES, get(handle_values::<M>))
        .route(ENDPOINT_CLEAR, delete(handle_clear::<M>))
        .route(ENDPOINT_CONTAINS_KEY, get(handle_contains_key::<M>))
        .route(ENDPOINT_CONTAINS_VALUE, get(handle_contains_value::<M>))
        .route(ENDPOINT_GET, get(handle_get::<M>))
        .route(ENDPOINT_IS_EMPTY, get(handle_is_empty::<M>))
        .route(ENDPOINT_PUT, post(handle_put::<M>))
        .route(ENDPOINT_PUT_ALL, post(handle_put_all::<M>))
        .route(ENDPOINT_REMOVE, delete(handle_remove::<M>));

    Router::new()
        .nest(BASE_PATH, api)
        .layer(Extension(map))
}

#[cfg(test)]
mod tests;
