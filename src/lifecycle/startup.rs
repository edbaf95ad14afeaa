//! Startup orchestration.
//!
//! ```text
//! Unstarted ──bind()──▶ Listening ──signal / accept error──▶ Terminated
//! ```
//!
//! Configuration has been validated before a [`Server`] exists, and
//! `bind` either returns a listening server or nothing at all.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServeError;
use crate::http::HttpServer;
use crate::lifecycle::ShutdownSignal;
use crate::net::listener;

/// A server in the Listening state.
pub struct Server {
    http: HttpServer,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Bind the configured address. Fails fast on any bind error.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServeError> {
        let listener = listener::bind(&config).await?;
        Self::from_listener(config, listener)
    }

    /// Wrap an already-bound listener.
    pub fn from_listener(config: ServerConfig, listener: TcpListener) -> Result<Self, ServeError> {
        let local_addr = listener.local_addr()?;
        Ok(Self {
            http: HttpServer::new(config),
            listener,
            local_addr,
        })
    }

    /// Address actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn config(&self) -> &ServerConfig {
        self.http.config()
    }

    /// Line printed to stdout once the socket is bound.
    pub fn banner(&self) -> String {
        format!(
            "Serving at http://{}:{}",
            self.config().host_for_url(),
            self.local_addr.port()
        )
    }

    /// Serve until `shutdown` fires.
    pub async fn run(self, shutdown: ShutdownSignal) -> Result<(), ServeError> {
        self.http.run(self.listener, shutdown).await?;
        Ok(())
    }
}
