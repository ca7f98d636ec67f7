//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod events;
mod gateway;
mod store;

pub use events::EventTracker;
pub use gateway::{DocumentStore, Filter, OrderBy, RemoteProcedures};
pub use store::KeyValueStore;
