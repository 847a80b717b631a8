// ============================================================================
// microcut-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses the core error type and adds context (which file, which
// command) on the way up to main.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - CliErrorContext: Operation context and detector input attribution
// - cli_error!: Ad-hoc OperationFailed errors

// ---- Internal crate imports ----
use microcut_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// ERROR CONTEXT
// ============================================================================

/// Attaches CLI context to failures from the core or std.
pub trait CliErrorContext<T> {
    /// Prefixes the failure with what the CLI was doing, e.g. writing a file.
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Names the detector input a failure came from.
    ///
    /// Parse errors stay `CoreError::Parse` with their line number; anything
    /// else becomes `OperationFailed` prefixed with the input name.
    fn for_input(self, input: &str) -> CliResult<T>;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", f(), core_error))
        })
    }

    fn for_input(self, input: &str) -> CliResult<T> {
        self.map_err(|e| match Into::<CoreError>::into(e) {
            CoreError::Parse { line, message } => CoreError::Parse {
                line,
                message: format!("{message} (in {input})"),
            },
            other => CoreError::OperationFailed(format!("{input}: {other}")),
        })
    }
}

/// Creates a CLI error with a formatted message.
#[macro_export]
macro_rules! cli_error {
    ($($arg:tt)*) => {
        ::microcut_core::CoreError::OperationFailed(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn context_wraps_io_errors() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = result
            .cli_with_context(|| "Failed to read points.txt")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Operation failed: Failed to read points.txt: I/O error: gone"
        );
    }

    #[test]
    fn parse_errors_keep_line_and_name_input() {
        let result: CliResult<()> = Err(CoreError::Parse {
            line: 3,
            message: "`x` is not a time value".to_string(),
        });
        let err = result.for_input("scenes.txt").unwrap_err();
        assert!(matches!(err, CoreError::Parse { line: 3, .. }));
        assert_eq!(
            err.to_string(),
            "Parse error on line 3: `x` is not a time value (in scenes.txt)"
        );
    }

    #[test]
    fn other_errors_are_prefixed_with_input() {
        let result: CliResult<()> = Err(CoreError::InvalidInterval("gap".to_string()));
        let err = result.for_input("stdin").unwrap_err();
        assert_eq!(err.to_string(), "Operation failed: stdin: Invalid interval: gap");
    }

    #[test]
    fn macro_builds_operation_failed() {
        let err = cli_error!("{} segment(s) out of range", 2);
        assert!(matches!(err, CoreError::OperationFailed(message) if message == "2 segment(s) out of range"));
    }
}
