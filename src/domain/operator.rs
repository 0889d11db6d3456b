// ============================================================================
// Operator Domain Model
// The four binary operations offered by the keypad
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pending binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Add,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Subtract,
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Multiply,
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol used on the keypad and in history expressions.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operation without rounding.
    ///
    /// Division by zero (either sign) yields positive infinity rather than
    /// failing; the display turns it into the error token.
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b == 0.0 {
                    f64::INFINITY
                } else {
                    a / b
                }
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_symbol(s.trim()).ok_or_else(|| format!("Unknown operator '{}'", s))
    }
}
