//! Leveled logging macros for a [`LoggerRegistry`](crate::LoggerRegistry).
//!
//! # Feature Flags
//! Specific log levels are controlled by cargo features:
//! `log-debug`, `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macro expands to `()`, removing
//! all formatting and allocation overhead at compile time.
//!
//! Unlike the registry's plain dispatch methods, the macros capture the full
//! call site (`file!()`, `line!()`, `module_path!()`).

/// Worker macro: dispatches one message at an explicit severity.
#[macro_export]
macro_rules! registry_log {
    ($registry:expr, $lvl:expr, $($arg:tt)*) => {{
        $registry.dispatch(
            $lvl,
            &$crate::CallerInfo::new(file!(), line!(), Some(module_path!())),
            format_args!($($arg)*),
        );
    }};
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug { ($registry:expr, $($arg:tt)*) => { $crate::registry_log!($registry, $crate::Severity::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info { ($registry:expr, $($arg:tt)*) => { $crate::registry_log!($registry, $crate::Severity::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warn { ($registry:expr, $($arg:tt)*) => { $crate::registry_log!($registry, $crate::Severity::Warning, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error { ($registry:expr, $($arg:tt)*) => { $crate::registry_log!($registry, $crate::Severity::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}
