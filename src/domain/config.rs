// ============================================================================
// Calculator Settings
// Persisted rounding configuration applied to every computed value
// ============================================================================

use crate::numeric::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal places used when nothing else is configured.
pub const DEFAULT_PRECISION: u8 = 10;

/// Largest precision accepted by [`Settings::validate`].
///
/// Past 15 decimal places the `10^precision` scale no longer fits the
/// significand of an f64 and rounding stops having any effect.
pub const MAX_PRECISION: u8 = 15;

// ============================================================================
// Settings
// ============================================================================

/// Rounding configuration.
///
/// Serialized as `{"roundBankers": bool, "precision": int}`; missing fields
/// fall back to their defaults so older persisted objects still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Settings {
    /// Use round-half-to-even instead of standard half-up rounding
    pub round_bankers: bool,

    /// Decimal places applied to every intermediate and memory result
    pub precision: u8,
}

impl Settings {
    /// Create settings with explicit values
    pub fn new(round_bankers: bool, precision: u8) -> Self {
        Self {
            round_bankers,
            precision,
        }
    }

    /// Builder method: Enable or disable bankers' rounding
    pub fn with_bankers_rounding(mut self, enabled: bool) -> Self {
        self.round_bankers = enabled;
        self
    }

    /// Builder method: Set decimal places
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Rounding policy selected by these settings
    #[inline]
    pub fn rounding_mode(&self) -> RoundingMode {
        RoundingMode::from_bankers(self.round_bankers)
    }

    /// Round a value using the configured policy and precision
    #[inline]
    pub fn round(&self, x: f64) -> f64 {
        self.rounding_mode().apply(x, self.precision)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.precision > MAX_PRECISION {
            return Err(format!(
                "Precision must be at most {} decimal places, got {}",
                MAX_PRECISION, self.precision
            ));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl Settings {
    /// Standard half-up rounding at the default precision
    pub fn standard() -> Self {
        Self::new(false, DEFAULT_PRECISION)
    }

    /// Bankers' rounding at the default precision
    pub fn bankers() -> Self {
        Self::new(true, DEFAULT_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.round_bankers);
        assert_eq!(settings.precision, DEFAULT_PRECISION);
        assert_eq!(settings.rounding_mode(), RoundingMode::HalfUp);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let settings = Settings::standard()
            .with_bankers_rounding(true)
            .with_precision(2);

        assert_eq!(settings, Settings::new(true, 2));
        assert_eq!(settings.rounding_mode(), RoundingMode::HalfEven);
        assert_eq!(settings.round(0.125), 0.12);
    }

    #[test]
    fn test_validation() {
        assert!(Settings::standard().with_precision(MAX_PRECISION).validate().is_ok());
        assert!(Settings::standard().with_precision(16).validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert!(Settings::bankers().round_bankers);
        assert!(!Settings::standard().round_bankers);
        assert_eq!(Settings::bankers().round(2.5), 2.5);
        assert_eq!(Settings::bankers().with_precision(0).round(2.5), 2.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_names_and_defaults() {
        let json = serde_json::to_string(&Settings::bankers()).unwrap();
        assert_eq!(json, r#"{"roundBankers":true,"precision":10}"#);

        let partial: Settings = serde_json::from_str(r#"{"roundBankers":true}"#).unwrap();
        assert_eq!(partial, Settings::bankers());

        let empty: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Settings::standard());
    }
}
