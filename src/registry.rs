use std::fmt;

use crate::caller::CallerInfo;
use crate::config::LogConfig;
use crate::error::ConfigError;
use crate::factory::new_logger;
use crate::logger::Logger;
use crate::severity::Severity;

/// Ordered chain of logger backends with an explicit lifecycle: build it,
/// register backends, dispatch, shut down.
///
/// Mutation takes `&mut self` and dispatch takes `&self`, so the borrow
/// checker enforces init-before-concurrent-logging; a populated registry can
/// be shared across threads behind `Arc` (backends are `Send + Sync`).
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: Vec<Box<dyn Logger>>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one backend to the chain.
    pub fn register(&mut self, logger: Box<dyn Logger>) {
        self.loggers.push(logger);
    }

    /// Appends the given backends, preserving call order.
    pub fn init(&mut self, loggers: impl IntoIterator<Item = Box<dyn Logger>>) {
        for logger in loggers {
            self.register(logger);
        }
    }

    /// Instantiates backends from the configs and appends them in order.
    ///
    /// On the first construction failure the error is returned immediately;
    /// backends built from earlier configs in the same call stay registered.
    /// There is no rollback.
    pub fn init_with_config(&mut self, configs: &[LogConfig]) -> Result<(), ConfigError> {
        for config in configs {
            let logger = new_logger(config)?;
            self.register(logger);
        }
        Ok(())
    }

    /// Fans one message out to every backend in insertion order.
    ///
    /// Per backend: ask for a sink at `severity`; if absent, skip (that is
    /// the filter, not a failure); if present, format and write. Write errors
    /// are dropped, and no backend can block delivery to the ones after it.
    pub fn dispatch(&self, severity: Severity, caller: &CallerInfo, args: fmt::Arguments<'_>) {
        for logger in &self.loggers {
            if let Some(sink) = logger.sink(severity) {
                let message = logger.format_message(severity, caller, args);
                let _ = sink.write_message(&message);
            }
        }
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Severity::Debug, &CallerInfo::capture(), args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Severity::Info, &CallerInfo::capture(), args);
    }

    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Severity::Warning, &CallerInfo::capture(), args);
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.dispatch(Severity::Error, &CallerInfo::capture(), args);
    }

    /// Drops every backend and its sink handle. The registry can be
    /// re-populated afterwards.
    pub fn shutdown(&mut self) {
        self.loggers.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Backends in insertion order, for diagnostics and tests.
    pub fn loggers(&self) -> impl Iterator<Item = &dyn Logger> {
        self.loggers.iter().map(|logger| logger.as_ref())
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.loggers.iter().map(|l| l.identity()))
            .finish()
    }
}
