use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::KeyValueStore;
use crate::Result;

const STORAGE_FILE: &str = "storage.json";

/// Key-value store persisted as a single JSON object on disk.
///
/// Every `set`/`remove` rewrites the file (temp file + rename), so what is on
/// disk always matches what the caller last wrote.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `storage.json` inside `data_dir`, creating the directory if needed.
    pub fn open(data_dir: &Path) -> Result<Self> {
        tato_core::ensure_dir(data_dir)?;
        Self::open_file(data_dir.join(STORAGE_FILE))
    }

    fn open_file(path: PathBuf) -> Result<Self> {
        let values = if path.exists() {
            let content = std::fs::read(&path)?;
            match serde_json::from_slice(&content) {
                Ok(values) => values,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "ignoring unreadable storage file");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = values.len(), "opened storage");
        Ok(Self { path, values })
    }

    fn flush(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_reopen() -> Result<()> {
        let temp_dir = TempDir::new()?;

        let mut store = FileStore::open(temp_dir.path())?;
        store.set("tato_cart", "[]")?;
        store.set("other", "x")?;
        store.remove("other")?;
        drop(store);

        let store = FileStore::open(temp_dir.path())?;
        assert_eq!(store.get("tato_cart")?.as_deref(), Some("[]"));
        assert_eq!(store.get("other")?, None);
        Ok(())
    }

    #[test]
    fn test_open_creates_data_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let data_dir = temp_dir.path().join("fresh");

        let mut store = FileStore::open(&data_dir)?;
        store.set("k", "v")?;

        assert!(data_dir.join(STORAGE_FILE).is_file());
        Ok(())
    }

    #[test]
    fn test_unreadable_file_starts_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join(STORAGE_FILE), "not json at all")?;

        let mut store = FileStore::open(temp_dir.path())?;
        assert_eq!(store.get("tato_cart")?, None);

        // The next write replaces the broken file
        store.set("tato_cart", "[]")?;
        let reopened = FileStore::open(temp_dir.path())?;
        assert_eq!(reopened.get("tato_cart")?.as_deref(), Some("[]"));
        Ok(())
    }

    #[test]
    fn test_non_utf8_file_starts_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join(STORAGE_FILE), [0xff, 0xfe, b'{', b'}'])?;

        let store = FileStore::open(temp_dir.path())?;
        assert_eq!(store.get("tato_cart")?, None);
        Ok(())
    }
}
