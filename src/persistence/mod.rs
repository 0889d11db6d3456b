// ============================================================================
// Persistence Module
// Typed load/save of settings, history and theme over a key-value store
// ============================================================================
//
// Loads never fail: missing, unreadable or corrupt values log a warning and
// fall back to the default. Saves return the store error to the caller.

mod file_store;
mod handler;

pub use file_store::{FileStore, APP_DIR_NAME};
pub use handler::PersistingEventHandler;

use crate::domain::{HistoryEntry, HistoryLog, Settings, Theme, HISTORY_CAPACITY};
use crate::interfaces::{KeyValueStore, StoreError, StoreResult};
use serde::de::DeserializeOwned;

/// Theme token (`"dark"` / `"light"`, stored as plain text)
pub const THEME_KEY: &str = "calc_theme";

/// Settings object `{"roundBankers": bool, "precision": int}`
pub const SETTINGS_KEY: &str = "calc_settings_v1";

/// History array of `{"expr", "result"}`, oldest first
pub const HISTORY_KEY: &str = "calc_history_v1";

/// Typed access to the persisted calculator values
#[derive(Debug)]
pub struct Persistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Saved settings, or the defaults when absent or invalid
    pub fn load_settings(&self) -> Settings {
        let settings: Settings = self.load_json(SETTINGS_KEY).unwrap_or_default();
        match settings.validate() {
            Ok(()) => settings,
            Err(reason) => {
                tracing::warn!(%reason, "ignoring persisted settings");
                Settings::default()
            },
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> StoreResult<()> {
        self.save_json(SETTINGS_KEY, settings)
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Saved history (most recent entries only), or an empty log
    pub fn load_history(&self) -> HistoryLog {
        let entries: Vec<HistoryEntry> = self.load_json(HISTORY_KEY).unwrap_or_default();
        HistoryLog::from_entries(entries)
    }

    /// Write the log oldest-first; an empty log removes the key
    pub fn save_history(&self, history: &HistoryLog) -> StoreResult<()> {
        if history.is_empty() {
            return self.store.remove(HISTORY_KEY);
        }

        let entries = history.to_vec();
        let start = entries.len().saturating_sub(HISTORY_CAPACITY);
        self.save_json(HISTORY_KEY, &entries[start..])
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Saved theme; `None` when nothing (or an unknown token) was saved
    pub fn load_theme(&self) -> Option<Theme> {
        let token = match self.store.get(THEME_KEY) {
            Ok(token) => token?,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read theme");
                return None;
            },
        };

        let theme = Theme::from_token(token.trim());
        if theme.is_none() {
            tracing::warn!(%token, "ignoring unknown theme token");
        }
        theme
    }

    pub fn save_theme(&self, theme: Theme) -> StoreResult<()> {
        self.store.set(THEME_KEY, theme.token())
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.store.get(key) {
            Ok(text) => text?,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read persisted value");
                return None;
            },
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring corrupt persisted value");
                None
            },
        }
    }

    fn save_json<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let text = serde_json::to_string(value)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        self.store.set(key, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::MemoryStore;

    fn persistence() -> Persistence<MemoryStore> {
        Persistence::new(MemoryStore::new())
    }

    #[test]
    fn test_settings_roundtrip() {
        let persistence = persistence();
        assert_eq!(persistence.load_settings(), Settings::default());

        let settings = Settings::bankers().with_precision(4);
        persistence.save_settings(&settings).unwrap();

        assert_eq!(
            persistence.store().get(SETTINGS_KEY).unwrap().as_deref(),
            Some(r#"{"roundBankers":true,"precision":4}"#)
        );
        assert_eq!(persistence.load_settings(), settings);
    }

    #[test]
    fn test_corrupt_settings_fall_back() {
        let persistence = persistence();

        persistence.store().set(SETTINGS_KEY, "not json").unwrap();
        assert_eq!(persistence.load_settings(), Settings::default());

        persistence
            .store()
            .set(SETTINGS_KEY, r#"{"roundBankers":true,"precision":99}"#)
            .unwrap();
        assert_eq!(persistence.load_settings(), Settings::default());

        persistence.store().set(SETTINGS_KEY, r#"{"precision":3}"#).unwrap();
        assert_eq!(persistence.load_settings(), Settings::standard().with_precision(3));
    }

    #[test]
    fn test_history_layout() {
        let persistence = persistence();
        let mut log = HistoryLog::new();
        log.push(HistoryEntry::new("2 + 3", "5"));
        log.push(HistoryEntry::new("5 + 3", "8"));

        persistence.save_history(&log).unwrap();
        assert_eq!(
            persistence.store().get(HISTORY_KEY).unwrap().as_deref(),
            Some(r#"[{"expr":"2 + 3","result":"5"},{"expr":"5 + 3","result":"8"}]"#)
        );
        assert_eq!(persistence.load_history(), log);
    }

    #[test]
    fn test_empty_history_removes_key() {
        let persistence = persistence();
        let mut log = HistoryLog::new();
        log.push(HistoryEntry::new("1 + 1", "2"));
        persistence.save_history(&log).unwrap();
        assert!(persistence.store().contains(HISTORY_KEY).unwrap());

        log.clear();
        persistence.save_history(&log).unwrap();
        assert!(!persistence.store().contains(HISTORY_KEY).unwrap());
        assert!(persistence.load_history().is_empty());
    }

    #[test]
    fn test_history_load_is_capped() {
        let persistence = persistence();
        let entries: Vec<HistoryEntry> = (0..40)
            .map(|i| HistoryEntry::new(format!("{} + 0", i), i.to_string()))
            .collect();
        persistence
            .store()
            .set(HISTORY_KEY, &serde_json::to_string(&entries).unwrap())
            .unwrap();

        let log = persistence.load_history();
        assert_eq!(log.len(), HISTORY_CAPACITY);
        assert_eq!(log.latest(), Some(&HistoryEntry::new("39 + 0", "39")));
    }

    #[test]
    fn test_non_array_history_is_empty() {
        let persistence = persistence();
        persistence.store().set(HISTORY_KEY, r#"{"expr":"1"}"#).unwrap();
        assert!(persistence.load_history().is_empty());
    }

    #[test]
    fn test_theme() {
        let persistence = persistence();
        assert_eq!(persistence.load_theme(), None);

        persistence.save_theme(Theme::Light).unwrap();
        assert_eq!(persistence.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(persistence.load_theme(), Some(Theme::Light));

        persistence.store().set(THEME_KEY, "solarized").unwrap();
        assert_eq!(persistence.load_theme(), None);
    }
}
