use crate::error::StoreError;

/// Key-value persistence adapter - abstraction over local persistent
/// storage (files, in-memory).
///
/// Deliberately synchronous: values are small serialized records written
/// as a side effect after in-memory mutations, and callers treat failures
/// as log-and-continue rather than failing the logical operation.
pub trait KeyValueStore: Send + Sync {
    /// Persist a serialized value under a key, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Load the value stored under a key, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
}
