//! Backend that submits to the local syslog daemon through the POSIX
//! `syslog(3)` API. On platforms without syslog the backend still constructs,
//! but it exposes no sink and formats nothing: a structural no-op.

use std::fmt;
#[cfg(unix)]
use std::ffi::CString;
#[cfg(unix)]
use std::io;

use crate::caller::CallerInfo;
use crate::config::LogConfig;
use crate::error::ConfigError;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::sink::Sink;

/// Sink bound to one syslog priority. `syslog(3)` is thread-safe per POSIX,
/// so `&self` writes need no extra locking.
#[cfg(unix)]
#[derive(Debug)]
struct SyslogSink {
    priority: libc::c_int,
}

#[cfg(unix)]
impl Sink for SyslogSink {
    fn write_message(&self, message: &str) -> io::Result<()> {
        let line = message.trim_end_matches('\n');
        let text =
            CString::new(line).map_err(|_| io::Error::other("log message contains NUL"))?;
        unsafe {
            libc::syslog(self.priority, c"%s".as_ptr(), text.as_ptr());
        }
        Ok(())
    }
}

/// Backend for the platform system log.
#[derive(Debug)]
pub struct SysLogger {
    min: Severity,
    // One pre-mapped sink per severity, mirroring the syslog priority scale.
    #[cfg(unix)]
    sinks: [SyslogSink; 4],
}

impl SysLogger {
    pub fn new(config: &LogConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_min(config.min_severity()?))
    }

    #[must_use]
    pub fn with_min(min: Severity) -> Self {
        Self {
            min,
            #[cfg(unix)]
            sinks: [
                SyslogSink {
                    priority: libc::LOG_DEBUG,
                },
                SyslogSink {
                    priority: libc::LOG_INFO,
                },
                SyslogSink {
                    priority: libc::LOG_WARNING,
                },
                SyslogSink {
                    priority: libc::LOG_ERR,
                },
            ],
        }
    }
}

impl Logger for SysLogger {
    #[cfg(unix)]
    fn sink(&self, severity: Severity) -> Option<&dyn Sink> {
        if severity < self.min {
            return None;
        }
        let sink = match severity {
            Severity::Debug => &self.sinks[0],
            Severity::Info => &self.sinks[1],
            Severity::Warning => &self.sinks[2],
            Severity::Error => &self.sinks[3],
        };
        Some(sink as &dyn Sink)
    }

    #[cfg(not(unix))]
    fn sink(&self, _severity: Severity) -> Option<&dyn Sink> {
        None
    }

    #[cfg(unix)]
    fn format_message(
        &self,
        severity: Severity,
        caller: &CallerInfo,
        args: fmt::Arguments<'_>,
    ) -> String {
        // The daemon adds its own timestamp; we only add severity and caller.
        format!("{severity} {caller} {args}\n")
    }

    #[cfg(not(unix))]
    fn format_message(
        &self,
        _severity: Severity,
        _caller: &CallerInfo,
        _args: fmt::Arguments<'_>,
    ) -> String {
        String::new()
    }

    fn identity(&self) -> String {
        format!("sysLogger({})", self.min)
    }
}
