// ============================================================================
// File Store
// Directory-backed key-value store, one `<key>.json` file per key
// ============================================================================

use crate::interfaces::{KeyValueStore, StoreError, StoreResult};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Directory name used under the platform data directory
pub const APP_DIR_NAME: &str = "calculator-engine";

/// Store that keeps each key in its own file inside `dir`.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| {
            StoreError::Io(format!("failed to create store directory {}: {}", dir.display(), err))
        })?;
        Ok(Self { dir })
    }

    /// `<data dir>/calculator-engine`, if the platform has a data directory
    pub fn default_location() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Open the store at [`FileStore::default_location`]
    pub fn open_default() -> StoreResult<Self> {
        let dir = Self::default_location()
            .ok_or_else(|| StoreError::Io("no data directory on this platform".to_string()))?;
        Self::open(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Io(format!("invalid store key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        {
            let mut tmp_file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&tmp_path)?;
            tmp_file.write_all(value.as_bytes())?;
            tmp_file.sync_all()?;
        }

        fs::rename(&tmp_path, &path)?;
        tracing::trace!(key, path = %path.display(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).unwrap();

        assert_eq!(store.get("calc_theme").unwrap(), None);

        store.set("calc_theme", "light").unwrap();
        assert_eq!(store.get("calc_theme").unwrap().as_deref(), Some("light"));
        assert!(temp.path().join("calc_theme.json").exists());
        assert!(!temp.path().join("calc_theme.json.tmp").exists());

        store.set("calc_theme", "dark").unwrap();
        assert_eq!(store.get("calc_theme").unwrap().as_deref(), Some("dark"));

        store.remove("calc_theme").unwrap();
        store.remove("calc_theme").unwrap();
        assert!(!store.contains("calc_theme").unwrap());
    }

    #[test]
    fn test_open_creates_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        FileStore::open(temp.path())
            .unwrap()
            .set("calc_settings_v1", r#"{"roundBankers":true,"precision":4}"#)
            .unwrap();

        let reopened = FileStore::open(temp.path()).unwrap();
        assert_eq!(
            reopened.get("calc_settings_v1").unwrap().as_deref(),
            Some(r#"{"roundBankers":true,"precision":4}"#)
        );
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).unwrap();

        assert!(matches!(store.set("../escape", "x"), Err(StoreError::Io(_))));
        assert!(matches!(store.get(""), Err(StoreError::Io(_))));
    }
}
