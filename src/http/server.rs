//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router: static handler, traversal guard, tracing
//! - Wrap everything in the cross-origin isolation layer
//! - Drive the accept loop until shutdown
//!
//! # Layer order (outermost first)
//! ```text
//! isolation headers → TraceLayer → reject_traversal → static_files::serve
//! ```

use std::future::IntoFuture;
use std::path::Path;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::{isolation, static_files, traversal};
use crate::lifecycle::ShutdownSignal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Canonical served root.
    pub root: Arc<Path>,
}

/// HTTP server for one served root.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            root: Arc::from(config.served_root()),
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        let router = Router::new()
            .fallback(static_files::serve)
            .with_state(state)
            .layer(middleware::from_fn(traversal::reject_traversal))
            .layer(TraceLayer::new_for_http());

        isolation::with_cross_origin_isolation(router)
    }

    /// Router with every layer applied, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve connections from `listener` until `shutdown` fires.
    ///
    /// Each connection runs on its own task. On shutdown the accept loop is
    /// dropped and in-flight requests are abandoned.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            root = %self.config.served_root().display(),
            "HTTP server starting"
        );

        let serve = axum::serve(listener, self.router).into_future();

        tokio::select! {
            result = serve => result?,
            () = shutdown.wait() => {
                tracing::info!("Shutdown signal received");
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
