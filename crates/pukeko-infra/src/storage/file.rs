//! File-backed key-value store - one JSON document per key under a data
//! directory. This is the persistent analog of browser local storage: small
//! values, whole-file replacement on every save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pukeko_core::error::StoreError;
use pukeko_core::ports::KeyValueStore;

/// Key-value store persisting each key as `<data_dir>/<key>.json`.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`. The directory is created on
    /// first save, not here, so construction cannot fail.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StoreError::Io(e.to_string()))?;

        let path = self.path_for(key);
        write_atomically(&path, value).map_err(|e| StoreError::Io(e.to_string()))?;

        tracing::debug!(key = %key, path = %path.display(), "Value persisted");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }
}

/// Write via a temp file and rename; readers never observe a partial
/// write.
fn write_atomically(path: &Path, value: &str) -> io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, value)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.save("mock_posts", "[]").unwrap();
        assert_eq!(store.load("mock_posts").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.load("absent").unwrap(), None);
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();

        JsonFileStore::new(dir.path())
            .save("use_mock_api", "true")
            .unwrap();

        let reopened = JsonFileStore::new(dir.path());
        assert_eq!(
            reopened.load("use_mock_api").unwrap(),
            Some("true".to_string())
        );
    }
}
