// ============================================================================
// Calculator Actions
// The operations an input source can dispatch to the calculator
// ============================================================================

use crate::domain::Operator;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One user input, already decoded from a click or key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Digit key, always `0..=9`
    Digit(u8),
    Dot,
    Clear,
    Delete,
    Invert,
    Percent,
    Operator(Operator),
    Equals,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
}

/// Errors produced while decoding a named action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    /// The operation name is not known
    UnknownAction(String),
    /// The operation needs an argument that was not supplied
    MissingArgument(&'static str),
    /// Digit argument is not a single character `0`-`9`
    InvalidDigit(String),
    /// Operator argument is not one of `+ - * /`
    InvalidOperator(String),
}

impl fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionParseError::UnknownAction(name) => write!(f, "unknown action '{}'", name),
            ActionParseError::MissingArgument(name) => {
                write!(f, "action '{}' requires an argument", name)
            },
            ActionParseError::InvalidDigit(arg) => write!(f, "invalid digit '{}'", arg),
            ActionParseError::InvalidOperator(arg) => write!(f, "invalid operator '{}'", arg),
        }
    }
}

impl std::error::Error for ActionParseError {}

/// Result type alias for action decoding
pub type ActionResult<T> = Result<T, ActionParseError>;

impl Action {
    /// Decode an operation name plus optional argument.
    ///
    /// Accepts the canonical names (`digit`, `operator`, `memoryAdd`, ...) and
    /// the keypad button aliases `MC`, `MR`, `Mplus`, `Mminus`.
    ///
    /// # Example
    /// ```
    /// use calculator_engine::input::Action;
    /// use calculator_engine::domain::Operator;
    ///
    /// assert_eq!(Action::from_name("digit", Some("7")), Ok(Action::Digit(7)));
    /// assert_eq!(Action::from_name("operator", Some("*")), Ok(Action::Operator(Operator::Multiply)));
    /// assert_eq!(Action::from_name("Mplus", None), Ok(Action::MemoryAdd));
    /// ```
    pub fn from_name(name: &str, arg: Option<&str>) -> ActionResult<Action> {
        match name {
            "digit" => {
                let arg = arg.ok_or(ActionParseError::MissingArgument("digit"))?;
                Action::digit_from_str(arg)
            },
            "operator" => {
                let arg = arg.ok_or(ActionParseError::MissingArgument("operator"))?;
                Operator::from_symbol(arg)
                    .map(Action::Operator)
                    .ok_or_else(|| ActionParseError::InvalidOperator(arg.to_string()))
            },
            "dot" => Ok(Action::Dot),
            "clear" => Ok(Action::Clear),
            "delete" => Ok(Action::Delete),
            "invert" => Ok(Action::Invert),
            "percent" => Ok(Action::Percent),
            "equals" => Ok(Action::Equals),
            "memoryClear" | "MC" => Ok(Action::MemoryClear),
            "memoryRecall" | "MR" => Ok(Action::MemoryRecall),
            "memoryAdd" | "Mplus" => Ok(Action::MemoryAdd),
            "memorySubtract" | "Mminus" => Ok(Action::MemorySubtract),
            other => Err(ActionParseError::UnknownAction(other.to_string())),
        }
    }

    fn digit_from_str(arg: &str) -> ActionResult<Action> {
        let mut chars = arg.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => Ok(Action::Digit(c as u8 - b'0')),
            _ => Err(ActionParseError::InvalidDigit(arg.to_string())),
        }
    }

    /// Canonical operation name
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Digit(_) => "digit",
            Action::Dot => "dot",
            Action::Clear => "clear",
            Action::Delete => "delete",
            Action::Invert => "invert",
            Action::Percent => "percent",
            Action::Operator(_) => "operator",
            Action::Equals => "equals",
            Action::MemoryClear => "memoryClear",
            Action::MemoryRecall => "memoryRecall",
            Action::MemoryAdd => "memoryAdd",
            Action::MemorySubtract => "memorySubtract",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Digit(d) => write!(f, "digit({})", d),
            Action::Operator(op) => write!(f, "operator({})", op),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_actions() {
        assert_eq!(Action::from_name("dot", None), Ok(Action::Dot));
        assert_eq!(Action::from_name("clear", None), Ok(Action::Clear));
        assert_eq!(Action::from_name("delete", None), Ok(Action::Delete));
        assert_eq!(Action::from_name("invert", None), Ok(Action::Invert));
        assert_eq!(Action::from_name("percent", None), Ok(Action::Percent));
        assert_eq!(Action::from_name("equals", None), Ok(Action::Equals));
    }

    #[test]
    fn test_parse_memory_aliases() {
        assert_eq!(Action::from_name("MC", None), Ok(Action::MemoryClear));
        assert_eq!(Action::from_name("memoryRecall", None), Ok(Action::MemoryRecall));
        assert_eq!(Action::from_name("Mminus", None), Ok(Action::MemorySubtract));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(Action::from_name("digit", Some("0")), Ok(Action::Digit(0)));
        assert_eq!(
            Action::from_name("operator", Some("/")),
            Ok(Action::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Action::from_name("digit", None),
            Err(ActionParseError::MissingArgument("digit"))
        );
        assert_eq!(
            Action::from_name("digit", Some("12")),
            Err(ActionParseError::InvalidDigit("12".to_string()))
        );
        assert_eq!(
            Action::from_name("operator", Some("^")),
            Err(ActionParseError::InvalidOperator("^".to_string()))
        );
        assert_eq!(
            Action::from_name("sqrt", None),
            Err(ActionParseError::UnknownAction("sqrt".to_string()))
        );
        assert_eq!(
            ActionParseError::MissingArgument("operator").to_string(),
            "action 'operator' requires an argument"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Digit(4).to_string(), "digit(4)");
        assert_eq!(Action::Operator(Operator::Add).to_string(), "operator(+)");
        assert_eq!(Action::MemoryAdd.to_string(), "memoryAdd");
    }
}
