//! Tracing subscriber initialization

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Environment;

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` when set; otherwise defaults to `info`. Production
/// output is compact without ANSI colors, development output is pretty.
/// Calling this twice is a no-op rather than a panic so tests can share it.
pub fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if environment.is_production() {
        builder.with_ansi(false).compact().try_init()
    } else {
        builder.pretty().try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
}
