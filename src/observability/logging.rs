//! Structured logging.
//!
//! Logs go to stderr through `tracing-subscriber`; stdout is reserved for
//! the startup banner. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "isolated_serve=info,tower_http=info";

/// Initialize the global tracing subscriber.
///
/// Calling this twice is a no-op, which keeps tests that share a process
/// from panicking.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
