//! Mock data engine - the local stand-in for the remote backend.

mod engine;
mod seed;

pub use engine::{MockDataEngine, MockEngineConfig};
