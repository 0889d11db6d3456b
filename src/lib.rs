// ============================================================================
// Calculator Engine Library
// Keypad calculator state machine with configurable rounding and history
// ============================================================================

//! # Calculator Engine
//!
//! The input/operator state machine behind a four-function keypad calculator.
//!
//! ## Features
//!
//! - **Keystroke-level state machine**: digit entry, chained operators,
//!   repeat-equals, contextual percent, sign inversion and backspace
//! - **Configurable rounding**: standard half-up or bankers' half-to-even,
//!   applied to every computed value at a fixed precision
//! - **Memory register** that survives clearing
//! - **History log** emitted through an injected [`interfaces::EventHandler`]
//! - **Persistence** of settings, history and theme over a pluggable
//!   key-value store (feature `serde`)
//! - **Bounded display formatting** with scientific fallback
//!
//! ## Example
//!
//! ```rust
//! use calculator_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let history = Arc::new(RecordingEventHandler::new());
//! let mut calc = Calculator::new(Settings::default(), history.clone());
//!
//! // 200 + 10% =
//! for key in ["2", "0", "0", "+", "1", "0", "%", "Enter"] {
//!     calc.dispatch_key(key);
//! }
//! assert_eq!(calc.display_text(), "220");
//!
//! // Repeat the last operation
//! calc.dispatch(Action::Equals);
//! assert_eq!(calc.display_text(), "240");
//!
//! assert_eq!(history.history().len(), 2);
//! ```

pub mod domain;
pub mod engine;
pub mod input;
pub mod interfaces;
pub mod numeric;
#[cfg(feature = "serde")]
pub mod persistence;
#[cfg(feature = "logging")]
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculatorState, DisplaySize, HistoryEntry, HistoryLog, Operand, Operator, Settings, Theme,
    };
    #[cfg(feature = "serde")]
    pub use crate::engine::create_from_store;
    pub use crate::engine::{create_from_settings, Calculator, CalculatorBuilder};
    pub use crate::input::{action_for_key, Action, ActionParseError};
    pub use crate::interfaces::{
        CalculatorEvent, EventHandler, KeyValueStore, LoggingEventHandler, MemoryStore,
        NoOpEventHandler, RecordingEventHandler, StoreError,
    };
    pub use crate::numeric::{format_number, parse_entry, RoundingMode, ERROR_TOKEN};
    #[cfg(feature = "serde")]
    pub use crate::persistence::{FileStore, PersistingEventHandler};
}
