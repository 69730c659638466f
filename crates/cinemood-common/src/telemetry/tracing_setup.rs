//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.
//! `RUST_LOG` controls the filter (default "info"); setting `LOG_FORMAT=json`
//! switches to structured JSON output for log shippers.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize the tracing subscriber
///
/// Safe to call more than once; later calls return an error instead of
/// panicking, which keeps test binaries that share a process happy.
pub fn try_init_tracing() -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(fmt::layer().json().with_file(true).with_line_number(true))
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        registry
            .with(fmt::layer().with_file(true).with_line_number(true))
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
