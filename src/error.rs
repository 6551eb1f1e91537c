use std::fmt;
use std::io;

use crate::config::LogConfig;

/// Construction-time failures. Dispatch-time write failures are never
/// surfaced; logging is best-effort and must not fail the caller.
#[derive(Debug)]
pub enum ConfigError {
    /// The config names a backend outside the known set.
    UnknownBackend(LogConfig),
    /// The config's severity string does not parse.
    InvalidSeverity(LogConfig),
    /// The backend's sink handle could not be created.
    Backend { config: LogConfig, source: io::Error },
    /// A configuration file could not be read.
    Read { path: String, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            UnknownBackend(config) => write!(f, "unknown logger: {config}"),
            InvalidSeverity(config) => write!(f, "invalid severity: {config}"),
            Backend { config, source } => write!(f, "failed to open {config}: {source}"),
            Read { path, source } => write!(f, "failed to read config {path}: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Backend { source, .. } | ConfigError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
