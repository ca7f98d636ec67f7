use async_trait::async_trait;
use serde_json::Value;

use crate::error::GatewayError;

/// Equality filter on a document field.
#[derive(Debug, Clone)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Sort order for a query.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub field: String,
    pub descending: bool,
}

impl OrderBy {
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }
}

/// Remote document-store client - the live side of the data layer.
///
/// Records cross this boundary as raw JSON values; the facade owns the
/// mapping to domain types. Documents returned by `query` and `get`
/// carry their id as an `id` field; inserted records do not include
/// one, the store assigns it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Run a filtered, ordered, limited query against a collection.
    async fn query(
        &self,
        collection: &str,
        filters: &[Filter],
        order: Option<OrderBy>,
        limit: Option<usize>,
    ) -> Result<Vec<Value>, GatewayError>;

    /// Fetch a single document. Fails with `NotFound` if absent.
    async fn get(&self, collection: &str, id: &str) -> Result<Value, GatewayError>;

    /// Insert a document, returning the store-assigned id.
    async fn insert(&self, collection: &str, record: Value) -> Result<String, GatewayError>;

    /// Partially update a document. Fails with `NotFound` if absent.
    async fn update(&self, collection: &str, id: &str, partial: Value)
    -> Result<(), GatewayError>;

    /// Delete a document. Fails with `NotFound` if absent.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), GatewayError>;
}

/// Remote-procedure client - named server-side functions.
#[async_trait]
pub trait RemoteProcedures: Send + Sync {
    /// Invoke a named procedure with a JSON payload.
    async fn invoke(&self, name: &str, payload: Value) -> Result<Value, GatewayError>;
}
