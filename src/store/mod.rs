//! Remote Store Client
//!
//! The primitive hash-object command set the map adapter is built on.
//!
//! ## Implementations
//! - **`RedisHashStore`**: talks to a Redis server over one multiplexed async connection.
//!   The handle is cloned per command and shared by every caller; there is no local lock.
//! - **`InMemoryHashStore`**: a process-local stand-in keeping one `DashMap` per hash object.
//!   It records every command it receives and can simulate an unreachable store.

pub mod client;
pub mod memory;
pub mod remote;

pub use client::{HashStore, StoreCommand};
pub use memory::InMemoryHashStore;
pub use remote::RedisHashStore;
