//! Command line surface.

use std::path::PathBuf;

use clap::Parser;

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default interface address.
pub const DEFAULT_BIND: &str = "127.0.0.1";

#[derive(Debug, Clone, Parser)]
#[command(name = "isolated-serve", version)]
#[command(
    about = "Serve a directory over HTTP with Cross-Origin-Opener-Policy and Cross-Origin-Embedder-Policy set",
    long_about = None
)]
pub struct Cli {
    /// TCP port to listen on (1-65535)
    #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Interface address to bind
    #[arg(short, long, default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Directory to serve
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,
}
