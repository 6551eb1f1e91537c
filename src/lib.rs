//! logchain is a minimal multi-backend logging façade.
//!
//! A [`LoggerRegistry`] holds an ordered chain of logger backends (console,
//! syslog, UDP), each with its own minimum severity. One log call fans out to
//! every backend in the chain: each backend is asked for a sink at the
//! message's severity and, if it offers one, receives its own formatted
//! rendition of the message. Logging is best-effort throughout; a failing or
//! filtered backend never affects the caller or the rest of the chain.
//!
//! ```no_run
//! use logchain::{log_info, LogConfig, LoggerRegistry};
//!
//! # fn main() -> Result<(), logchain::ConfigError> {
//! let mut registry = LoggerRegistry::new();
//! registry.init_with_config(&[
//!     LogConfig::new("console", "info"),
//!     LogConfig::new("udp", "error"),
//! ])?;
//!
//! log_info!(registry, "listening on {}", 9000);
//! # Ok(())
//! # }
//! ```

/// Captures file/line/function of the log call site.
pub mod caller;
/// Backend configuration and INI-style config file loading.
pub mod config;
/// Console stream backend.
pub mod console;
/// Construction-time error types.
pub mod error;
/// Builds backends from configurations.
pub mod factory;
/// Leveled, feature-gated logging macros.
pub mod log_macros;
/// The capability contract every backend implements.
pub mod logger;
/// The ordered backend chain and its dispatcher.
pub mod registry;
/// Ordered log severities and their string forms.
pub mod severity;
/// Writable sink abstraction over console, syslog, and datagram handles.
pub mod sink;
/// Platform system log backend.
pub mod syslog;
/// UDP datagram backend.
pub mod udp;

mod time;

pub use caller::CallerInfo;
pub use config::{
    load_configs, BackendKind, LogConfig, CONSOLE_LOGGER_NAME, SYSLOG_LOGGER_NAME, UDP_LOGGER_NAME,
};
pub use console::{ConsoleLogger, ConsoleStream};
pub use error::ConfigError;
pub use factory::new_logger;
pub use logger::Logger;
pub use registry::LoggerRegistry;
pub use severity::{ParseSeverityError, Severity};
pub use sink::{BufferSink, Sink};
pub use syslog::SysLogger;
pub use udp::{UdpLogger, DEFAULT_UDP_ADDR};
