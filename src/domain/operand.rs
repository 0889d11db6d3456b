// ============================================================================
// Operand Domain Model
// Entry buffer (raw text) vs committed operand (parsed number)
// ============================================================================

use crate::numeric::{format_number, parse_entry};

/// The left operand of the calculator.
///
/// While the user is typing, the operand is kept as the raw keypad text so
/// that partial input such as `"1."` or `"-0"` survives between keystrokes.
/// It is converted to a number only when it is committed (operator chosen,
/// equals pressed, result computed).
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Text being typed
    Entry(String),
    /// Committed numeric value
    Value(f64),
}

impl Operand {
    /// Numeric value of the operand (unparseable text is NaN).
    pub fn value(&self) -> f64 {
        match self {
            Operand::Entry(text) => parse_entry(text),
            Operand::Value(value) => *value,
        }
    }

    /// Text form: the raw buffer while typing, the formatted value once committed.
    pub fn text(&self) -> String {
        match self {
            Operand::Entry(text) => text.clone(),
            Operand::Value(value) => format_number(*value),
        }
    }

    /// Convert an entry buffer into a committed value.
    pub fn commit(self) -> Operand {
        match self {
            Operand::Entry(text) => Operand::Value(parse_entry(&text)),
            committed @ Operand::Value(_) => committed,
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, Operand::Entry(_))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_keeps_raw_text() {
        let operand = Operand::Entry("1.".to_string());
        assert_eq!(operand.text(), "1.");
        assert_eq!(operand.value(), 1.0);
        assert!(operand.is_entry());
    }

    #[test]
    fn test_commit() {
        let committed = Operand::Entry("12,5".to_string()).commit();
        assert_eq!(committed, Operand::Value(12.5));
        assert_eq!(committed.text(), "12.5");
        assert!(!committed.is_entry());

        assert_eq!(Operand::from(3.0).commit(), Operand::Value(3.0));
    }

    #[test]
    fn test_committed_non_finite_renders_error() {
        let operand = Operand::Value(f64::INFINITY);
        assert_eq!(operand.text(), crate::numeric::ERROR_TOKEN);
    }
}
