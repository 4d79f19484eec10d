//! Tracing subscriber initialization.
//!
//! # Usage
//!
//! ```no_run
//! use coursesmith_observe::{LogFormat, init_tracing};
//!
//! // Human-readable output for local development
//! init_tracing(LogFormat::Plain).unwrap();
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Output format for the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output for local development.
    Plain,
    /// Newline-delimited JSON for log aggregation.
    Json,
}

/// Initialize the global tracing subscriber.
///
/// Installs a `fmt` layer with target visibility in the requested format and
/// respects `RUST_LOG` via `EnvFilter::from_default_env()`.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::from_default_env();

    match format {
        LogFormat::Plain => {
            let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
