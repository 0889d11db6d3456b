// ============================================================================
// Numeric Module
// Text <-> number conversion, rounding policies and display formatting
// ============================================================================
//
// This module provides:
// - parse_entry: keypad text to f64 (soft failure to NaN)
// - format_number: f64 to bounded-width display text
// - round / RoundingMode: half-up and half-to-even rounding
//
// Design principles:
// - No panics and no Result: non-finite values are data, not errors
// - Rounding is applied by the engine to every intermediate result
// - Display width is a hard contract (MAX_DISPLAY_LEN characters)

mod format;
mod rounding;

pub use format::{
    format_number, is_error_token, parse_entry, ERROR_TOKEN, FRACTION_DIGITS, MAX_DISPLAY_LEN,
    SCIENTIFIC_DIGITS,
};
pub use rounding::{round, round_half_to_even, round_half_up, RoundingMode};
