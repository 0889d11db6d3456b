// ============================================================================
// Engine Module
// Contains the calculator state machine and its construction
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::{Calculator, MAX_ENTRY_LEN};
#[cfg(feature = "serde")]
pub use factory::create_from_store;
pub use factory::{create_from_settings, CalculatorBuilder};
