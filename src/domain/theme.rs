// ============================================================================
// Theme and Display Hints
// Values the renderer persists or derives; the engine never reads them
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colour theme, persisted as a bare text token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn token(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Unknown tokens are treated as "no saved theme".
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Font-size class for the display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySize {
    Normal,
    /// 11 to 15 characters
    Long,
    /// 16 characters or more
    VeryLong,
}

impl DisplaySize {
    pub fn for_text(text: &str) -> Self {
        match text.chars().count() {
            0..=10 => DisplaySize::Normal,
            11..=15 => DisplaySize::Long,
            _ => DisplaySize::VeryLong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_tokens() {
        assert_eq!(Theme::from_token("light"), Some(Theme::Light));
        assert_eq!(Theme::from_token("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_token("solarized"), None);
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_display_size_thresholds() {
        assert_eq!(DisplaySize::for_text("0"), DisplaySize::Normal);
        assert_eq!(DisplaySize::for_text("1234567890"), DisplaySize::Normal);
        assert_eq!(DisplaySize::for_text("12345678901"), DisplaySize::Long);
        assert_eq!(DisplaySize::for_text("123456789012345"), DisplaySize::Long);
        assert_eq!(DisplaySize::for_text("1234567890123456"), DisplaySize::VeryLong);
    }
}
