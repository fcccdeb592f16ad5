#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was reached with fewer than two operands available.
    StackUnderflow {
        /// The operator that could not be applied.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division or modulus by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to raise a value to a negative power.
    InvalidExponent {
        /// The negative exponent.
        exponent: i64,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Evaluation finished with a number of values other than one.
    MalformedExpression {
        /// How many values were left on the operand stack.
        remaining: usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the source line the error was raised on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::StackUnderflow { line, .. }
            | Self::DivisionByZero { line }
            | Self::InvalidExponent { line, .. }
            | Self::MalformedExpression { line, .. }
            | Self::Overflow { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::StackUnderflow { operator, line } => write!(f,
                                                              "Error on line {line}: Operator '{operator}' is missing an operand."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::InvalidExponent { exponent, line } => write!(f,
                                                               "Error on line {line}: Exponent {exponent} is negative."),
            Self::MalformedExpression { remaining, line } => write!(f,
                                                                    "Error on line {line}: Malformed expression, {remaining} values remain after evaluation."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
