// ============================================================================
// Logging Setup
// Global tracing subscriber for binaries and demos embedding the engine
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a formatted tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g.
/// `"calculator_engine=debug"`) is used. Calling this a second time, or after
/// another subscriber was installed, returns an error instead of panicking.
pub fn init_logging(default_directive: &str) -> Result<(), String> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .map_err(|err| format!("invalid log directive '{}': {}", default_directive, err))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| format!("failed to install tracing subscriber: {}", err))
}
