//! Data access facade - the mock/live mode switch.

mod policy;
mod service;

pub use policy::{FailurePolicy, Operation};
pub use service::ApiService;
