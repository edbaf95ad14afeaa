//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → Bind listener → Print banner → Serve
//!
//! Signals (signals.rs):
//!     Handlers installed before bind
//!     SIGTERM/SIGINT → ShutdownTrigger::fire → accept loop dropped → Exit 0
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - No draining: in-flight requests may be abandoned on shutdown

pub mod signals;
pub mod startup;

pub use signals::{shutdown_channel, ShutdownSignal, ShutdownTrigger};
pub use startup::Server;
