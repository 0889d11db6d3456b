// ============================================================================
// Calculator Factory
// Creates calculators with validated settings and wired collaborators
// ============================================================================

use crate::domain::{CalculatorState, Settings};
use crate::engine::Calculator;
use crate::interfaces::EventHandler;
use std::sync::Arc;

#[cfg(feature = "serde")]
use crate::interfaces::KeyValueStore;
#[cfg(feature = "serde")]
use crate::persistence::PersistingEventHandler;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from settings
///
/// # Arguments
/// * `settings` - Rounding configuration
/// * `event_handler` - Receiver for history, memory and settings events
///
/// # Returns
/// * `Result<Calculator, String>` - Ready calculator or validation error
///
/// # Example
/// ```
/// use calculator_engine::prelude::*;
/// use calculator_engine::engine::factory::create_from_settings;
/// use std::sync::Arc;
///
/// let calc = create_from_settings(Settings::bankers(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calc.display_text(), "0");
/// ```
pub fn create_from_settings(
    settings: Settings,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    settings.validate()?;
    Ok(Calculator::new(settings, event_handler))
}

/// Creates a calculator wired to a store.
///
/// Settings and history are loaded from `store`; history records and
/// settings changes are written back through the returned handler, which
/// also serves the history panel and the theme toggle.
#[cfg(feature = "serde")]
pub fn create_from_store<S>(store: S) -> (Calculator, Arc<PersistingEventHandler<S>>)
where
    S: KeyValueStore + 'static,
{
    let handler = Arc::new(PersistingEventHandler::new(store));
    let settings = handler.settings();
    tracing::debug!(?settings, "calculator restored from store");

    let calculator = Calculator::new(settings, handler.clone());
    (calculator, handler)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use calculator_engine::prelude::*;
/// use calculator_engine::engine::factory::CalculatorBuilder;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new()
///     .bankers_rounding(true)
///     .with_precision(2)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(calc.settings(), Settings::new(true, 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    settings: Settings,
    state: Option<CalculatorState>,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Rounding Configuration
    // ========================================================================

    /// Replace all settings at once
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Enable or disable round-half-to-even
    pub fn bankers_rounding(mut self, enabled: bool) -> Self {
        self.settings.round_bankers = enabled;
        self
    }

    /// Decimal places for every computed value
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.settings.precision = precision;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    pub fn standard() -> Self {
        Self::new().with_settings(Settings::standard())
    }

    pub fn bankers() -> Self {
        Self::new().with_settings(Settings::bankers())
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Resume from a captured state instead of a cleared one
    pub fn with_state(mut self, state: CalculatorState) -> Self {
        self.state = Some(state);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        self.settings.validate()?;
        Ok(match self.state {
            Some(state) => Calculator::from_state(state, self.settings, event_handler),
            None => Calculator::new(self.settings, event_handler),
        })
    }

    /// Get the settings without building (for inspection)
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }
}
