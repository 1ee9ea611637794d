//! Map Adapter Module
//!
//! Exposes one remote hash object through a mutable-map contract (`IntMap`):
//! string keys, `i32` values.
//!
//! ## Core Concepts
//! - **Fixed object**: every operation targets the hash named `REDIS_HASH_NAME`.
//! - **No local state**: the adapter caches nothing. Each call is one or more remote
//!   round trips, issued strictly in sequence.
//! - **Encoding**: values travel as base-10 strings. A stored value that does not parse
//!   back fails the call with `MapError::MalformedValue`.
//! - **Substitution**: `InMemoryMap` honors the same contract without a store, so the
//!   HTTP layer and callers can be tested in isolation.

pub mod adapter;
pub mod memory;
pub mod types;

pub use adapter::RedisMap;
pub use memory::InMemoryMap;
pub use types::{Entry, IntMap, REDIS_HASH_NAME};
