//! Error types shared by the store client and the map adapter.
//!
//! Missing keys are never errors: lookups return `Option`. Everything here is a
//! failure that the adapter surfaces to its caller unchanged.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    /// Connectivity or protocol failure reported by the Redis client.
    #[error("Remote store error: {0}")]
    Store(#[from] redis::RedisError),

    /// The store could not be reached (raised by the in-memory store when it
    /// simulates an outage).
    #[error("Remote store unavailable: {0}")]
    Unavailable(String),

    /// A field value that does not parse as a base-10 `i32`.
    #[error("Stored value {raw:?} is not a base-10 integer")]
    MalformedValue {
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

impl MapError {
    /// True for failures caused by the remote store rather than stored data.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, MapError::Store(_) | MapError::Unavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, MapError>;

/// Parses a stored field value, keeping the raw text on failure.
pub fn parse_value(raw: &str) -> Result<i32> {
    raw.parse::<i32>().map_err(|source| MapError::MalformedValue {
        raw: raw.to_string(),
        source,
    })
}
