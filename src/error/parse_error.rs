#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting a line, classifying
/// its words, or converting it to postfix order.
pub enum ParseError {
    /// A `(` without a matching `)`, or a `)` without a matching `(`.
    UnbalancedParentheses {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The line contains more than one `=`, or nothing at all.
    MalformedAssignment {
        /// How many `=`-separated segments the line split into.
        segments: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The left-hand side of an assignment is not a legal identifier.
    InvalidAssignmentTarget {
        /// The text found before the `=`.
        target: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// One side of the line has no tokens to evaluate.
    EmptyExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A digit string does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The offending literal.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Gets the source line the error was raised on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnbalancedParentheses { line }
            | Self::MalformedAssignment { line, .. }
            | Self::InvalidAssignmentTarget { line, .. }
            | Self::EmptyExpression { line }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses { line } => {
                write!(f, "Error on line {line}: Unbalanced parentheses.")
            },
            Self::MalformedAssignment { segments, line } => write!(f,
                                                                   "Error on line {line}: Malformed assignment, expected at most one '=' but the line has {segments} segments."),
            Self::InvalidAssignmentTarget { target, line } => write!(f,
                                                                     "Error on line {line}: Cannot assign to '{target}', it is not a valid identifier."),
            Self::EmptyExpression { line } => {
                write!(f, "Error on line {line}: Expected an expression but found nothing.")
            },
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
