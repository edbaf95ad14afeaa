//! Validated server configuration.

use std::path::{Path, PathBuf};

use crate::config::cli::Cli;
use crate::config::validation::{validate_bind_address, validate_port, validate_served_root, ConfigError};

/// Everything the server needs to start. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    bind_address: String,
    port: u16,
    served_root: PathBuf,
}

impl ServerConfig {
    /// Validate the parts and build a config.
    ///
    /// `served_root` is canonicalized, so later path checks compare against
    /// the real location of the directory.
    pub fn new(
        bind_address: impl Into<String>,
        port: u16,
        served_root: impl AsRef<Path>,
    ) -> Result<Self, ConfigError> {
        let bind_address: String = bind_address.into();
        let bind_address = validate_bind_address(&bind_address)?;
        validate_port(port)?;
        let served_root = validate_served_root(served_root.as_ref())?;

        Ok(Self {
            bind_address,
            port,
            served_root,
        })
    }

    /// Build a config from parsed command line arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::new(cli.bind.clone(), cli.port, &cli.directory)
    }

    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn served_root(&self) -> &Path {
        &self.served_root
    }

    /// Host part formatted for use in an authority (IPv6 literals bracketed).
    pub fn host_for_url(&self) -> String {
        if self.bind_address.contains(':') {
            format!("[{}]", self.bind_address)
        } else {
            self.bind_address.clone()
        }
    }

    /// Base URL announced at startup.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host_for_url(), self.port)
    }
}
