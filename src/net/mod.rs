//! Network layer subsystem.
//!
//! Connections themselves are owned by hyper once accepted; this layer only
//! binds the socket the accept loop runs on.

pub mod listener;
