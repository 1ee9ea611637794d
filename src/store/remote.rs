use super::client::{HashStore, StoreCommand};
use crate::error::Result;

use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use std::collections::{HashMap, HashSet};

/// Redis-backed `HashStore`.
///
/// Holds a single multiplexed connection. Every command runs on a clone of it,
/// so concurrent callers pipeline over the same socket without a local lock.
/// Timeouts and reconnection are whatever the `redis` client does.
#[derive(Clone)]
pub struct RedisHashStore {
    connection: MultiplexedConnection,
}

impl RedisHashStore {
    /// Opens a connection to `url` (`redis://host:port/`).
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let connection = client.get_multiplexed_async_connection().await?;
        tracing::info!("Connected to Redis at {}", url);
        Ok(Self { connection })
    }

    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.connection.clone();
        let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
        tracing::debug!("PING -> {}", reply);
        Ok(())
    }
}

impl HashStore for RedisHashStore {
    async fn field_get(&self, object: &str, field: &str) -> Result<Option<String>> {
        log_command(StoreCommand::FieldGet {
            object: object.to_string(),
            field: field.to_string(),
        });
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.hget(object, field).await?;
        Ok(value)
    }

    async fn field_set(&self, object: &str, field: &str, value: &str) -> Result<()> {
        log_command(StoreCommand::FieldSet {
            object: object.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        });
        let mut conn = self.connection.clone();
        let _: i64 = conn.hset(object, field, value).await?;
        Ok(())
    }

    async fn field_delete(&self, object: &str, field: &str) -> Result<()> {
        log_command(StoreCommand::FieldDelete {
            object: object.to_string(),
            field: field.to_string(),
        });
        let mut conn = self.connection.clone();
        let _: i64 = conn.hdel(object, field).await?;
        Ok(())
    }

    async fn field_exists(&self, object: &str, field: &str) -> Result<bool> {
        log_command(StoreCommand::FieldExists {
            object: object.to_string(),
            field: field.to_string(),
        });
        let mut conn = self.connection.clone();
        let exists: bool = conn.hexists(object, field).await?;
        Ok(exists)
    }

    async fn field_count(&self, object: &str) -> Result<usize> {
        log_command(StoreCommand::FieldCount {
            object: object.to_string(),
        });
        let mut conn = self.connection.clone();
        let count: usize = conn.hlen(object).await?;
        Ok(count)
    }

    async fn list_fields(&self, object: &str) -> Result<HashSet<String>> {
        log_command(StoreCommand::ListFields {
            object: object.to_string(),
        });
        let mut conn = self.connection.clone();
        let fields: HashSet<String> = conn.hkeys(object).await?;
        Ok(fields)
    }

    async fn list_values(&self, object: &str) -> Result<Vec<String>> {
        log_command(StoreCommand::ListValues {
            object: object.to_string(),
        });
        let mut conn = self.connection.clone();
        let values: Vec<String> = conn.hvals(object).await?;
        Ok(values)
    }

    async fn list_all(&self, object: &str) -> Result<HashMap<String, String>> {
        log_command(StoreCommand::ListAll {
            object: object.to_string(),
        });
        let mut conn = self.connection.clone();
        let pairs: HashMap<String, String> = conn.hgetall(object).await?;
        Ok(pairs)
    }

    async fn delete_object(&self, object: &str) -> Result<()> {
        log_command(StoreCommand::DeleteObject {
            object: object.to_string(),
        });
        let mut conn = self.connection.clone();
        let _: i64 = conn.del(object).await?;
        Ok(())
    }
}

fn log_command(command: StoreCommand) {
    tracing::debug!("redis: {}", command);
}
