// ============================================================================
// Keyboard Map
// Translates key names (as reported by the front end) into actions
// ============================================================================

use super::Action;
use crate::domain::Operator;

/// Map a key name to an action.
///
/// Key names follow the usual `KeyboardEvent.key` spelling: single
/// characters for printable keys, `Enter`, `Backspace`, `Delete`, `Escape`
/// for the rest. Letters are matched case-insensitively. Unmapped keys
/// return `None` so the front end can let them through.
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "Enter" => return Some(Action::Equals),
        "Backspace" => return Some(Action::Delete),
        "Delete" | "Escape" => return Some(Action::Clear),
        _ => {},
    }

    let mut chars = key.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return None,
    };

    match c.to_ascii_lowercase() {
        '0'..='9' => Some(Action::Digit(c as u8 - b'0')),
        '.' | ',' => Some(Action::Dot),
        '+' => Some(Action::Operator(Operator::Add)),
        '-' => Some(Action::Operator(Operator::Subtract)),
        '*' | 'x' => Some(Action::Operator(Operator::Multiply)),
        '/' => Some(Action::Operator(Operator::Divide)),
        '%' => Some(Action::Percent),
        '=' => Some(Action::Equals),
        'r' => Some(Action::MemoryRecall),
        'c' => Some(Action::MemoryClear),
        'p' => Some(Action::MemoryAdd),
        'm' => Some(Action::MemorySubtract),
        _ => None,
    }
}
