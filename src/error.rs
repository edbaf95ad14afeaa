//! Fatal error taxonomy.
//!
//! Per-request failures (missing files, traversal attempts) never show up
//! here: they are answered with an HTTP error response and the server keeps
//! listening. Everything in [`ServeError`] aborts startup or the accept loop.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The command line described an unusable configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The listening socket could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed after the socket was bound.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
