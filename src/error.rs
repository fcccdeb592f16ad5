/// Parsing errors.
///
/// Defines the errors raised before evaluation starts: malformed lines,
/// oversized literals and unbalanced parentheses found by the postfix
/// converter.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence, such as undefined variables, division by zero or overflow.
pub mod runtime_error;

use std::path::PathBuf;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error produced while reading or running a program.
pub enum Error {
    /// The line could not be converted to postfix order.
    Parse(ParseError),
    /// The postfix sequence could not be evaluated.
    Runtime(RuntimeError),
    /// The program file could not be read.
    Io {
        /// The path that was being read.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

impl Error {
    /// Gets the source line the error was raised on, if it belongs to one.
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => Some(e.line_number()),
            Self::Runtime(e) => Some(e.line_number()),
            Self::Io { .. } => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io { path, source } => write!(f,
                                                "Failed to read the input file '{}': {source}",
                                                path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}
