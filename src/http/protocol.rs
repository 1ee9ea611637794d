//! REST Protocol
//!
//! Routes and request types of the `/api/redis-map` surface. Responses are plain
//! JSON scalars and collections, so only the inputs need dedicated types.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

// --- API Endpoints ---

/// Prefix every map route is mounted under.
pub const BASE_PATH: &str = "/api/redis-map";

pub const ENDPOINT_SIZE: &str = "/size";
pub const ENDPOINT_ENTRIES: &str = "/entries";
pub const ENDPOINT_KEYS: &str = "/keys";
pub const ENDPOINT_VALUES: &str = "/values";
pub const ENDPOINT_CLEAR: &str = "/clear";
pub const ENDPOINT_CONTAINS_KEY: &str = "/contains-key/:key";
pub const ENDPOINT_CONTAINS_VALUE: &str = "/contains-value/:value";
pub const ENDPOINT_GET: &str = "/get/:key";
pub const ENDPOINT_IS_EMPTY: &str = "/is-empty";
/// Takes `key` and `value` as query parameters.
pub const ENDPOINT_PUT: &str = "/put";
pub const ENDPOINT_PUT_ALL: &str = "/put-all";
pub const ENDPOINT_REMOVE: &str = "/remove/:key";

// --- Data Transfer Objects ---

/// Query string of `POST /put`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutParams {
    pub key: String,
    pub value: i32,
}

/// Body of `POST /put-all`: a JSON object of key -> integer.
///
/// Pairs are kept in document order so they are written in the order the
/// client sent them.
#[derive(Debug, Default, PartialEq)]
pub struct PutAllRequest(pub Vec<(String, i32)>);

impl<'de> Deserialize<'de> for PutAllRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedEntries;

        impl<'de> Visitor<'de> for OrderedEntries {
            type Value = PutAllRequest;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping keys to integers")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, i32>()? {
                    entries.push((key, value));
                }
                Ok(PutAllRequest(entries))
            }
        }

        deserializer.deserialize_map(OrderedEntries)
    }
}
