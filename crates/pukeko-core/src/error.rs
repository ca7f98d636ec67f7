//! Error taxonomy for the data-access layer.

use thiserror::Error;

/// Errors surfaced by the logical data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Remote backend unreachable: {0}")]
    Unreachable(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DataError {
    pub fn post_not_found(id: impl Into<String>) -> Self {
        DataError::NotFound {
            entity: "post",
            id: id.into(),
        }
    }
}

/// Errors raised by the remote document-store and functions clients.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Document not found")]
    NotFound,

    #[error("Gateway call failed: {0}")]
    Unreachable(String),
}

impl GatewayError {
    /// Map a gateway failure onto the operation-level taxonomy.
    ///
    /// `id` names the document the failed call addressed, for NotFound
    /// reporting; collection-level calls pass the collection name.
    pub fn into_data_error(self, entity: &'static str, id: &str) -> DataError {
        match self {
            GatewayError::NotFound => DataError::NotFound {
                entity,
                id: id.to_string(),
            },
            GatewayError::Unreachable(msg) => DataError::Unreachable(msg),
        }
    }
}

/// Errors raised by the key-value persistence adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
