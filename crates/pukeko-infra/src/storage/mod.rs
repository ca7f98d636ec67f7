//! Key-value store implementations - in-memory and JSON files on disk.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;
