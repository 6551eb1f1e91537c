use std::fmt;
use std::io::{self, Write};

use crate::caller::CallerInfo;
use crate::config::LogConfig;
use crate::error::ConfigError;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::sink::Sink;

/// Which console stream a [`ConsoleLogger`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Sink over a process console stream. The stream handles are internally
/// locked, so `&self` writes are safe from any thread.
#[derive(Debug)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl Sink for ConsoleSink {
    fn write_message(&self, message: &str) -> io::Result<()> {
        match self.stream {
            ConsoleStream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(message.as_bytes())?;
                out.flush()
            }
            ConsoleStream::Stderr => io::stderr().lock().write_all(message.as_bytes()),
        }
    }
}

/// Backend that writes the minimal `"<SEV> <message>\n"` form to a console
/// stream (stderr unless constructed otherwise).
#[derive(Debug)]
pub struct ConsoleLogger {
    min: Severity,
    sink: ConsoleSink,
}

impl ConsoleLogger {
    pub fn new(config: &LogConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_min(config.min_severity()?))
    }

    #[must_use]
    pub fn with_min(min: Severity) -> Self {
        Self {
            min,
            sink: ConsoleSink {
                stream: ConsoleStream::Stderr,
            },
        }
    }

    #[must_use]
    pub fn with_stream(min: Severity, stream: ConsoleStream) -> Self {
        Self {
            min,
            sink: ConsoleSink { stream },
        }
    }
}

impl Logger for ConsoleLogger {
    fn sink(&self, severity: Severity) -> Option<&dyn Sink> {
        (severity >= self.min).then_some(&self.sink as &dyn Sink)
    }

    fn format_message(
        &self,
        severity: Severity,
        _caller: &CallerInfo,
        args: fmt::Arguments<'_>,
    ) -> String {
        format!("{severity} {args}\n")
    }

    fn identity(&self) -> String {
        format!("consoleLogger({})", self.min)
    }
}
