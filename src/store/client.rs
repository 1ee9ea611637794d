use crate::error::Result;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::future::Future;

/// The hash-object primitives of a remote key/value service.
///
/// Every method addresses one hash object by name and performs exactly one
/// round trip. Implementations must not retry, batch or cache.
pub trait HashStore: Send + Sync {
    /// `HGET`: the field's value, or `None` when the field (or object) is absent.
    fn field_get(
        &self,
        object: &str,
        field: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;

    /// `HSET`: creates the object implicitly on first write.
    fn field_set(
        &self,
        object: &str,
        field: &str,
        value: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// `HDEL`: a no-op when the field is absent.
    fn field_delete(&self, object: &str, field: &str) -> impl Future<Output = Result<()>> + Send;

    /// `HEXISTS`
    fn field_exists(&self, object: &str, field: &str)
    -> impl Future<Output = Result<bool>> + Send;

    /// `HLEN`
    fn field_count(&self, object: &str) -> impl Future<Output = Result<usize>> + Send;

    /// `HKEYS`
    fn list_fields(&self, object: &str) -> impl Future<Output = Result<HashSet<String>>> + Send;

    /// `HVALS`, in the order the store returns them.
    fn list_values(&self, object: &str) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// `HGETALL`
    fn list_all(&self, object: &str)
    -> impl Future<Output = Result<HashMap<String, String>>> + Send;

    /// `DEL`: removes the whole object.
    fn delete_object(&self, object: &str) -> impl Future<Output = Result<()>> + Send;
}

/// One primitive command as issued against a hash object.
///
/// Rendered in Redis command syntax for logging; the in-memory store keeps a
/// journal of these so callers can check exactly what was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    FieldGet { object: String, field: String },
    FieldSet { object: String, field: String, value: String },
    FieldDelete { object: String, field: String },
    FieldExists { object: String, field: String },
    FieldCount { object: String },
    ListFields { object: String },
    ListValues { object: String },
    ListAll { object: String },
    DeleteObject { object: String },
}

impl StoreCommand {
    pub fn object(&self) -> &str {
        match self {
            StoreCommand::FieldGet { object, .. }
            | StoreCommand::FieldSet { object, .. }
            | StoreCommand::FieldDelete { object, .. }
            | StoreCommand::FieldExists { object, .. }
            | StoreCommand::FieldCount { object }
            | StoreCommand::ListFields { object }
            | StoreCommand::ListValues { object }
            | StoreCommand::ListAll { object }
            | StoreCommand::DeleteObject { object } => object,
        }
    }

    /// The Redis command name, e.g. `HGET`.
    pub fn name(&self) -> &'static str {
        match self {
            StoreCommand::FieldGet { .. } => "HGET",
            StoreCommand::FieldSet { .. } => "HSET",
            StoreCommand::FieldDelete { .. } => "HDEL",
            StoreCommand::FieldExists { .. } => "HEXISTS",
            StoreCommand::FieldCount { .. } => "HLEN",
            StoreCommand::ListFields { .. } => "HKEYS",
            StoreCommand::ListValues { .. } => "HVALS",
            StoreCommand::ListAll { .. } => "HGETALL",
            StoreCommand::DeleteObject { .. } => "DEL",
        }
    }
}

impl fmt::Display for StoreCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.object())?;
        match self {
            StoreCommand::FieldGet { field, .. }
            | StoreCommand::FieldDelete { field, .. }
            | StoreCommand::FieldExists { field, .. } => write!(f, " {}", field),
            StoreCommand::FieldSet { field, value, .. } => write!(f, " {} {}", field, value),
            _ => Ok(()),
        }
    }
}
