//! Redis-backed Map Library
//!
//! Presents one Redis hash as a mutable map of string keys to `i32` values and
//! serves it over HTTP. The binary (`main.rs`) wires these modules together.
//!
//! ## Modules
//! - **`store`**: The remote store client. A `HashStore` trait with the hash-field
//!   primitives (HGET, HSET, HDEL, ...), implemented over Redis and in memory.
//! - **`map`**: The adapter. `RedisMap` maps every map operation onto those primitives
//!   against the fixed `redisMap` object; `InMemoryMap` is a store-less substitute.
//! - **`http`**: The REST facade under `/api/redis-map`, generic over any `IntMap`.
//! - **`runner`**: The startup demo that exercises each operation once.
//! - **`config`**: Environment and command-line settings.
//! - **`error`**: `MapError`, shared by the store and the adapter.

pub mod config;
pub mod error;
pub mod http;
pub mod map;
pub mod runner;
pub mod store;
