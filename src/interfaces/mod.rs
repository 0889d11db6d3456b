// ============================================================================
// Interfaces Module
// Contains the contracts the engine uses to reach its collaborators
// ============================================================================

mod event_handler;
mod store;

pub use event_handler::{
    CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};
pub use store::{KeyValueStore, MemoryStore, StoreError, StoreResult};
