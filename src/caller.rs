use std::fmt;
use std::panic::Location;

/// Snapshot of the log call site, consumed by a single `format_message` call.
///
/// The `log_*!` macros fill all three fields (`file!()`, `line!()`,
/// `module_path!()`); the registry's plain dispatch methods recover file and
/// line through `#[track_caller]`, where the enclosing function is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerInfo {
    /// Source file of the call site.
    pub file: &'static str,
    /// Line number of the call site.
    pub line: u32,
    /// Module path of the call site, when captured by a macro.
    pub function: Option<&'static str>,
}

impl CallerInfo {
    #[must_use]
    pub fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Builds a `CallerInfo` from the nearest non-`#[track_caller]` frame.
    ///
    /// Wrapping code that wants its own caller reported instead should mark
    /// itself `#[track_caller]`, which moves the reported location one frame up.
    #[track_caller]
    #[must_use]
    pub fn capture() -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
            function: None,
        }
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
