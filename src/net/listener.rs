//! TCP listener setup.
//!
//! # Responsibilities
//! - Resolve the configured host (IP literal or hostname)
//! - Bind the listening socket
//! - Turn bind failures into a fatal [`ServeError::Bind`]

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServeError;

/// Bind to the configured address.
///
/// Nothing is left listening when this fails.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServeError> {
    let address = format!("{}:{}", config.host_for_url(), config.port());

    let listener = TcpListener::bind((config.bind_address(), config.port()))
        .await
        .map_err(|source| ServeError::Bind {
            address: address.clone(),
            source,
        })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ServeError::Bind { address, source })?;

    tracing::info!(address = %local_addr, "Listener bound");

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn second_bind_on_same_port_fails() {
        let dir = tempfile::tempdir().unwrap();
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = occupied.local_addr().unwrap().port();

        let config = ServerConfig::new("127.0.0.1", port, dir.path()).unwrap();
        let err = bind(&config).await.unwrap_err();
        match err {
            ServeError::Bind { address, source } => {
                assert_eq!(address, format!("127.0.0.1:{port}"));
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn binds_hostnames() {
        let dir = tempfile::tempdir().unwrap();
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let config = ServerConfig::new("localhost", port, dir.path()).unwrap();
        let listener = bind(&config).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), port);
    }
}
