//! # Pukeko Infrastructure
//!
//! Concrete implementations of the ports defined in `pukeko-core`, plus
//! the dual-mode `ApiService` facade that routes between them.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network dependencies, mock engine and local storage only
//! - `remote` - HTTP document-store and functions gateway via reqwest

pub mod api;
pub mod events;
pub mod mock;
pub mod storage;

#[cfg(feature = "remote")]
pub mod remote;

// Re-exports - facade and mock engine
pub use api::{ApiService, FailurePolicy, Operation};
pub use events::TracingEventTracker;
pub use mock::{MockDataEngine, MockEngineConfig};
pub use storage::{InMemoryStore, JsonFileStore};

// Re-exports - remote gateway
#[cfg(feature = "remote")]
pub use remote::{HttpDocumentStore, HttpFunctions};
