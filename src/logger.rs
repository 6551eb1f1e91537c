use std::fmt;

use crate::caller::CallerInfo;
use crate::severity::Severity;
use crate::sink::Sink;

/// Capability contract implemented by every backend wishing to participate in
/// a logger chain.
///
/// The registry drives backends through `sink` + `format_message` directly;
/// the provided `info`/`warning`/`error` methods exist for direct use of a
/// single backend without a registry.
pub trait Logger: Send + Sync {
    /// Returns a writable sink if `severity` is at or above this backend's
    /// configured minimum, `None` otherwise.
    ///
    /// Absence is the filtering mechanism, not an error condition.
    fn sink(&self, severity: Severity) -> Option<&dyn Sink>;

    /// Renders the final line for this backend. Pure; performs no I/O.
    fn format_message(
        &self,
        severity: Severity,
        caller: &CallerInfo,
        args: fmt::Arguments<'_>,
    ) -> String;

    /// Human-readable descriptor for diagnostics and tests,
    /// e.g. `consoleLogger(INFO)`.
    fn identity(&self) -> String;

    /// Formats and writes one message at `severity`, if a sink is available.
    /// Write failures are dropped; logging never fails the caller.
    fn log_at(&self, severity: Severity, caller: &CallerInfo, args: fmt::Arguments<'_>) {
        if let Some(sink) = self.sink(severity) {
            let message = self.format_message(severity, caller, args);
            let _ = sink.write_message(&message);
        }
    }

    #[track_caller]
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Info, &CallerInfo::capture(), args);
    }

    #[track_caller]
    fn warning(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Warning, &CallerInfo::capture(), args);
    }

    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Error, &CallerInfo::capture(), args);
    }
}

impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity())
    }
}
