// ============================================================================
// Utilities Module
// Helper functions for applications embedding the calculator
// ============================================================================

mod logging;

pub use logging::init_logging;
