use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::severity::Severity;

/// Configuration of an individual logger backend.
///
/// `name` selects the backend kind and `severity` its minimum level; both are
/// parsed at construction time, and an invalid value fails construction
/// rather than defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub name: String,
    pub severity: String,
}

impl LogConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, severity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity: severity.into(),
        }
    }

    /// Parses the configured minimum severity, failing construction on a
    /// malformed string instead of defaulting.
    pub fn min_severity(&self) -> Result<Severity, ConfigError> {
        self.severity
            .parse()
            .map_err(|_| ConfigError::InvalidSeverity(self.clone()))
    }
}

impl fmt::Display for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LogConfig(name={}, severity={})",
            self.name, self.severity
        )
    }
}

/// The closed set of known backend kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Console,
    Syslog,
    Udp,
}

/// Exact literal token for the console backend in configuration input.
pub const CONSOLE_LOGGER_NAME: &str = "console";
/// Exact literal token for the syslog backend in configuration input.
pub const SYSLOG_LOGGER_NAME: &str = "syslog";
/// Exact literal token for the UDP backend in configuration input.
pub const UDP_LOGGER_NAME: &str = "udp";

impl BackendKind {
    /// Maps a configuration name onto the closed backend set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            CONSOLE_LOGGER_NAME => Some(BackendKind::Console),
            SYSLOG_LOGGER_NAME => Some(BackendKind::Syslog),
            UDP_LOGGER_NAME => Some(BackendKind::Udp),
            _ => None,
        }
    }
}

/// Loads logger configurations from the `[logging]` section of an INI-style
/// file, one `name = severity` line per backend.
///
/// File order is preserved: it becomes registry insertion order, which in
/// turn fixes dispatch order. Comments (`#`) and blank lines are skipped, as
/// are lines outside the `[logging]` section.
pub fn load_configs(path: impl AsRef<Path>) -> Result<Vec<LogConfig>, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut configs = Vec::new();
    let mut in_logging = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_logging = line[1..line.len() - 1].trim() == "logging";
            continue;
        }

        if !in_logging {
            continue;
        }

        if let Some(pos) = line.find('=') {
            let name = line[..pos].trim().to_string();
            let severity = line[pos + 1..].trim().trim_matches('"').to_string();
            configs.push(LogConfig { name, severity });
        }
    }

    Ok(configs)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("logchain-{}-{}", std::process::id(), name));
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn backend_kind_covers_the_closed_name_set() {
        assert_eq!(BackendKind::from_name("console"), Some(BackendKind::Console));
        assert_eq!(BackendKind::from_name("syslog"), Some(BackendKind::Syslog));
        assert_eq!(BackendKind::from_name("udp"), Some(BackendKind::Udp));
        assert_eq!(BackendKind::from_name("Console"), None);
        assert_eq!(BackendKind::from_name("file"), None);
    }

    #[test]
    fn min_severity_fails_fast_on_malformed_strings() {
        assert_eq!(
            LogConfig::new("console", "WARN").min_severity().unwrap(),
            Severity::Warning
        );
        let err = LogConfig::new("console", "loudest")
            .min_severity()
            .expect_err("should fail");
        match err {
            ConfigError::InvalidSeverity(config) => assert_eq!(config.severity, "loudest"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn config_display_is_diagnostic_friendly() {
        let config = LogConfig::new("console", "info");
        assert_eq!(config.to_string(), "LogConfig(name=console, severity=info)");
    }

    #[test]
    fn load_configs_preserves_file_order() {
        let path = write_temp(
            "order.ini",
            "# chain definition\n\
             [logging]\n\
             console = info\n\
             syslog = \"warn\"\n\
             udp = error\n",
        );
        let configs = load_configs(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            configs,
            vec![
                LogConfig::new("console", "info"),
                LogConfig::new("syslog", "warn"),
                LogConfig::new("udp", "error"),
            ]
        );
    }

    #[test]
    fn load_configs_ignores_other_sections() {
        let path = write_temp(
            "sections.ini",
            "[network]\n\
             port = 9000\n\
             [logging]\n\
             console = error\n\
             [video]\n\
             udp = info\n",
        );
        let configs = load_configs(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(configs, vec![LogConfig::new("console", "error")]);
    }

    #[test]
    fn load_configs_missing_file_is_an_error() {
        let err = load_configs("/definitely/not/here.ini").expect_err("should fail");
        match err {
            ConfigError::Read { path, .. } => assert!(path.contains("not/here.ini")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
