// ============================================================================
// Domain Models Module
// Contains the calculator state and the values exchanged with collaborators
// ============================================================================

pub mod config;
pub mod history;
pub mod operand;
pub mod operator;
pub mod state;
pub mod theme;

pub use config::{Settings, DEFAULT_PRECISION, MAX_PRECISION};
pub use history::{HistoryEntry, HistoryLog, HISTORY_CAPACITY};
pub use operand::Operand;
pub use operator::Operator;
pub use state::CalculatorState;
pub use theme::{DisplaySize, Theme};
