//! Diagnostic logging setup.
//!
//! Diagnostics are written to stderr so stdout stays reserved for the
//! report. The filter comes from LOG_LEVEL / RUST_LOG via
//! [`crate::config::LoggingConfig`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the global tracing subscriber.
///
/// Call once at startup, before any tracing macros fire.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::new(&config.filter);

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}
