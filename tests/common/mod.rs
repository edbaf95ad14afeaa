//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;

use isolated_serve::{shutdown_channel, Server, ServerConfig, ShutdownTrigger};
use reqwest::header::HeaderMap;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A running server and the handle that stops it.
pub struct TestServer {
    pub addr: SocketAddr,
    trigger: Option<ShutdownTrigger>,
    pub root: tempfile::TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(trigger) = self.trigger.take() {
            trigger.fire();
        }
    }
}

/// Fill a served root with the files the tests expect.
pub fn populate(root: &Path) {
    std::fs::write(root.join("sample.parquet"), sample_bytes()).unwrap();
    std::fs::write(root.join("index.js"), b"import init from './pkg/app.js';").unwrap();
    std::fs::create_dir(root.join("pkg")).unwrap();
    std::fs::write(root.join("pkg/app_bg.wasm"), b"\0asm\x01\0\0\0").unwrap();
    std::fs::create_dir(root.join("demo")).unwrap();
    std::fs::write(root.join("demo/index.html"), b"<!doctype html><title>demo</title>").unwrap();
}

/// Bytes of the sample parquet file, including non-UTF-8 content.
pub fn sample_bytes() -> Vec<u8> {
    let mut bytes = b"PAR1".to_vec();
    bytes.extend((0..=255u8).cycle().take(4096));
    bytes.extend_from_slice(b"PAR1");
    bytes
}

/// Start a server on an ephemeral port over a fresh, populated root.
pub async fn start_server() -> TestServer {
    let root = tempfile::tempdir().unwrap();
    populate(root.path());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = ServerConfig::new("127.0.0.1", addr.port(), root.path()).unwrap();
    let server = Server::from_listener(config, listener).unwrap();

    let (trigger, shutdown) = shutdown_channel();
    tokio::spawn(async move {
        let _ = server.run(shutdown).await;
    });

    TestServer {
        addr,
        trigger: Some(trigger),
        root,
    }
}

/// Send `path` verbatim, bypassing client-side URL normalisation.
///
/// Returns the status code and the raw response text.
pub async fn raw_get(addr: SocketAddr, path: &str) -> (u16, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    let text = String::from_utf8_lossy(&response).into_owned();

    let status = text
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    (status, text)
}

/// Case-insensitive header lookup in a raw response.
pub fn raw_header<'a>(response: &'a str, name: &str) -> Option<&'a str> {
    let head = response.split("\r\n\r\n").next()?;
    head.lines().skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim().eq_ignore_ascii_case(name).then(|| value.trim())
    })
}

/// True when both isolation headers are present exactly once with the
/// required values.
pub fn is_cross_origin_isolated(headers: &HeaderMap) -> bool {
    let single = |name: &str, expected: &str| {
        let mut values = headers.get_all(name).iter();
        values.next().is_some_and(|v| v == expected) && values.next().is_none()
    };
    single("cross-origin-opener-policy", "same-origin")
        && single("cross-origin-embedder-policy", "require-corp")
}
