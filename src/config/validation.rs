//! Configuration validation.
//!
//! # Responsibilities
//! - Bind address syntax (IP literal or hostname)
//! - Port range
//! - Served root exists, is a directory, and can be listed
//!
//! Each check is a pure function over its input, except the served root
//! checks which have to ask the filesystem.

use std::io::ErrorKind;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Longest hostname accepted, per RFC 1035.
const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Reasons a configuration is rejected before startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address '{0}': expected an IP address or hostname")]
    InvalidBindAddress(String),

    #[error("invalid port {0}: must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("served root '{}' does not exist", path.display())]
    RootMissing { path: PathBuf },

    #[error("served root '{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("served root '{}' is not readable: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check a bind address and return it in the form handed to the resolver.
///
/// Bracketed IPv6 literals (`[::1]`) are unwrapped.
pub fn validate_bind_address(address: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidBindAddress(address.to_string());

    if let Some(inner) = address.strip_prefix('[').and_then(|a| a.strip_suffix(']')) {
        return match inner.parse::<IpAddr>() {
            Ok(IpAddr::V6(_)) => Ok(inner.to_string()),
            _ => Err(invalid()),
        };
    }

    if address.parse::<IpAddr>().is_ok() || is_hostname(address) {
        Ok(address.to_string())
    } else {
        Err(invalid())
    }
}

fn is_hostname(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    // All-numeric names are malformed IPv4 literals, not hostnames.
    if name.split('.').all(|label| label.chars().all(|c| c.is_ascii_digit())) {
        return false;
    }

    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Reject port 0; the CLI already refuses it but library callers might not.
pub fn validate_port(port: u16) -> Result<(), ConfigError> {
    if port == 0 {
        Err(ConfigError::InvalidPort(port))
    } else {
        Ok(())
    }
}

/// Check the served root and return its canonical path.
pub fn validate_served_root(path: &Path) -> Result<PathBuf, ConfigError> {
    let canonical = path.canonicalize().map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::RootMissing {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if !canonical.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_dir(&canonical).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(canonical)
}
