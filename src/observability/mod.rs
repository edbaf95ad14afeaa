//! Observability subsystem.
//!
//! Structured `tracing` events from every subsystem, plus one span per
//! request from `tower_http::trace::TraceLayer`.

pub mod logging;
