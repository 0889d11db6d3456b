// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator_engine::prelude::*;
use std::sync::Arc;

fn run(calc: &mut Calculator, keys: &str) {
    for key in keys.split_whitespace() {
        calc.dispatch_key(key);
    }
    println!("  {:<28} -> {}", keys, calc.display_text());
}

fn main() {
    println!("=== Calculator Engine Example ===\n");

    let history = Arc::new(RecordingEventHandler::new());
    let mut calc = Calculator::new(Settings::default(), history.clone());

    println!("Keystrokes:");
    run(&mut calc, "2 0 0 + 1 0 % Enter");
    run(&mut calc, "Enter Enter");
    run(&mut calc, "Escape 1 / 3 =");
    run(&mut calc, "Escape 7 / 0 =");
    run(&mut calc, "Escape 1 2 , 5 p * 4 =");
    run(&mut calc, "Escape r");

    println!("\nMemory: {}", format_number(calc.memory()));

    println!("\nBankers' rounding at 0 places:");
    calc.set_settings(Settings::bankers().with_precision(0))
        .unwrap_or_else(|err| eprintln!("invalid settings: {}", err));
    run(&mut calc, "Escape 5 / 2 =");
    run(&mut calc, "Escape 7 / 2 =");

    println!("\n=== History (most recent first) ===");
    for entry in history.history().iter().rev() {
        println!("  {} = {}", entry.expression, entry.result);
    }

    #[cfg(feature = "serde")]
    persisted_session();
}

#[cfg(feature = "serde")]
fn persisted_session() {
    println!("\n=== Persisted Session ===");

    let store = MemoryStore::new();
    let (mut calc, handler) = create_from_store(store);
    run(&mut calc, "6 * 7 =");

    match handler.toggle_theme() {
        Ok(theme) => println!("  theme: {}", theme),
        Err(err) => eprintln!("  failed to save theme: {}", err),
    }

    for entry in handler.recent_history() {
        println!("  saved: {} = {}", entry.expression, entry.result);
    }
}
