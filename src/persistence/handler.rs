// ============================================================================
// Persisting Event Handler
// Keeps the history log and writes history/settings changes to a store
// ============================================================================

use super::Persistence;
use crate::domain::{HistoryEntry, HistoryLog, Settings, Theme};
use crate::interfaces::{CalculatorEvent, EventHandler, KeyValueStore, StoreResult};
use parking_lot::Mutex;

/// Event handler backing the history panel and the settings/theme toggles.
///
/// Failed writes are logged and otherwise ignored; the in-memory log stays
/// authoritative for the running session.
pub struct PersistingEventHandler<S: KeyValueStore> {
    persistence: Persistence<S>,
    history: Mutex<HistoryLog>,
}

impl<S: KeyValueStore> PersistingEventHandler<S> {
    /// Wrap a store, loading the persisted history
    pub fn new(store: S) -> Self {
        let persistence = Persistence::new(store);
        let history = persistence.load_history();
        tracing::debug!(entries = history.len(), "history loaded");

        Self {
            persistence,
            history: Mutex::new(history),
        }
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Persisted settings (defaults when absent or invalid)
    pub fn settings(&self) -> Settings {
        self.persistence.load_settings()
    }

    /// Snapshot of the history, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.lock().to_vec()
    }

    /// Snapshot of the history in render order, most recent first
    pub fn recent_history(&self) -> Vec<HistoryEntry> {
        self.history.lock().iter_recent_first().cloned().collect()
    }

    /// Empty the log and remove the persisted key
    pub fn clear_history(&self) -> StoreResult<()> {
        let mut history = self.history.lock();
        history.clear();
        self.persistence.save_history(&history)
    }

    /// Current theme; dark unless light was saved
    pub fn theme(&self) -> Theme {
        self.persistence.load_theme().unwrap_or_default()
    }

    /// Switch theme and persist the new token
    pub fn toggle_theme(&self) -> StoreResult<Theme> {
        let next = self.theme().toggle();
        self.persistence.save_theme(next)?;
        tracing::debug!(theme = %next, "theme toggled");
        Ok(next)
    }

    fn append_history(&self, entry: HistoryEntry) {
        let mut history = self.history.lock();
        history.push(entry);
        if let Err(err) = self.persistence.save_history(&history) {
            tracing::warn!(error = %err, "failed to persist history");
        }
    }
}

impl<S: KeyValueStore> EventHandler for PersistingEventHandler<S> {
    fn on_event(&self, event: CalculatorEvent) {
        match event {
            CalculatorEvent::HistoryAppended { entry } => self.append_history(entry),
            CalculatorEvent::SettingsChanged { settings } => {
                if let Err(err) = self.persistence.save_settings(&settings) {
                    tracing::warn!(error = %err, "failed to persist settings");
                }
            },
            CalculatorEvent::MemoryChanged { value } => {
                tracing::trace!(value, "memory register is not persisted");
            },
        }
    }
}
