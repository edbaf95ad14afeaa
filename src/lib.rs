//! Static file server for cross-origin isolated development.
//!
//! Serves a directory over HTTP/1.1 and stamps every response with
//! `Cross-Origin-Opener-Policy: same-origin` and
//! `Cross-Origin-Embedder-Policy: require-corp`, which browsers require
//! before enabling `SharedArrayBuffer` and threaded WebAssembly.
//!
//! ```text
//!   client ──▶ listener ──▶ isolation headers ──▶ trace ──▶ traversal guard
//!                                                              │
//!                                                              ▼
//!                                               ServeDir / directory listing
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::{Cli, ServerConfig};
pub use error::ServeError;
pub use http::HttpServer;
pub use lifecycle::{shutdown_channel, Server, ShutdownSignal, ShutdownTrigger};
