// ============================================================================
// Event Handler Interface
// Defines the contract for reacting to calculator events
// ============================================================================

use crate::domain::{HistoryEntry, Settings};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// An equals (or repeat-equals) press produced a history record
    HistoryAppended { entry: HistoryEntry },

    /// The memory register changed (clear, add, subtract)
    MemoryChanged { value: f64 },

    /// Rounding settings were replaced
    SettingsChanged { settings: Settings },
}

/// Event handler trait for processing calculator events
/// Implementations can persist history, render it, log, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Keeps every event in arrival order; useful for headless front ends and tests
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculatorEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events
    pub fn events(&self) -> Vec<CalculatorEvent> {
        self.events.lock().clone()
    }

    /// Only the history records, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                CalculatorEvent::HistoryAppended { entry } => Some(entry.clone()),
                _ => None,
            })
            .collect()
    }

    /// Remove and return the recorded events
    pub fn take(&self) -> Vec<CalculatorEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        self.events.lock().push(event);
    }
}
