use crate::config::{BackendKind, LogConfig};
use crate::console::ConsoleLogger;
use crate::error::ConfigError;
use crate::logger::Logger;
use crate::syslog::SysLogger;
use crate::udp::UdpLogger;

/// Makes a proper logger from the given configuration.
///
/// The name is mapped onto the closed [`BackendKind`] set and matched
/// exhaustively; an unrecognized name or malformed severity fails with an
/// error carrying the offending config.
pub fn new_logger(config: &LogConfig) -> Result<Box<dyn Logger>, ConfigError> {
    let Some(kind) = BackendKind::from_name(&config.name) else {
        return Err(ConfigError::UnknownBackend(config.clone()));
    };

    match kind {
        BackendKind::Console => Ok(Box::new(ConsoleLogger::new(config)?)),
        BackendKind::Syslog => Ok(Box::new(SysLogger::new(config)?)),
        BackendKind::Udp => Ok(Box::new(UdpLogger::new(config)?)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn known_backends_construct_with_canonical_identities() {
        let logger = new_logger(&LogConfig::new("console", "info")).unwrap();
        assert_eq!(logger.identity(), "consoleLogger(INFO)");

        let logger = new_logger(&LogConfig::new("syslog", "warn")).unwrap();
        assert_eq!(logger.identity(), "sysLogger(WARN)");

        let logger = new_logger(&LogConfig::new("udp", "error")).unwrap();
        assert_eq!(logger.identity(), "udpLogger(ERROR)");
    }

    #[test]
    fn unknown_backend_name_is_an_error() {
        let err = new_logger(&LogConfig::new("SuperDuperLogger", "info")).expect_err("must fail");
        match err {
            ConfigError::UnknownBackend(config) => {
                assert_eq!(config.name, "SuperDuperLogger");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_severity_is_an_error_for_every_backend() {
        for name in ["console", "syslog", "udp"] {
            let err = new_logger(&LogConfig::new(name, "noisy")).expect_err("must fail");
            match err {
                ConfigError::InvalidSeverity(config) => assert_eq!(config.name, name),
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
