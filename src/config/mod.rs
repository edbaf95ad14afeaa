//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line
//!     → cli.rs (clap parse, port range check)
//!     → validation.rs (bind address syntax, served root checks)
//!     → ServerConfig (validated, immutable)
//!     → owned by the server lifecycle
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; there is no reload
//! - Every check runs before a socket is opened
//! - No environment variables feed into the config

pub mod cli;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::ServerConfig;
pub use validation::ConfigError;
