// ============================================================================
// Input Module
// Decoding of clicks and key presses into calculator actions
// ============================================================================

mod action;
mod keymap;

pub use action::{Action, ActionParseError, ActionResult};
pub use keymap::action_for_key;
