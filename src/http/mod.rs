//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, accept loop)
//!     → traversal.rs (reject paths escaping the root)
//!     → static_files.rs (ServeDir, index files, method check)
//!     → listing.rs (directories without an index file)
//!     → isolation.rs (COOP/COEP on every response)
//!     → Send to client
//! ```

pub mod isolation;
pub mod listing;
pub mod server;
pub mod static_files;
pub mod traversal;

pub use server::{AppState, HttpServer};
