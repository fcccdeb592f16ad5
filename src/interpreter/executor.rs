use tracing::{debug, instrument};

use crate::{
    error::{Error, ParseError},
    interpreter::{
        environment::Environment,
        lexer::{is_identifier, tokenize},
        postfix::{render, to_postfix},
    },
    source::split_words,
};

/// The outcome of one successfully executed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// The 1-based source line number.
    pub line:    usize,
    /// The line as written.
    pub text:    String,
    /// The computed value of the expression.
    pub value:   i64,
    /// The variable that received `value`, for assignment lines.
    pub binding: Option<String>,
}

impl std::fmt::Display for LineReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.text, self.value)
    }
}

impl Environment {
    /// Executes one line of a program.
    ///
    /// The line is split on `=`. A single segment is a bare expression that is
    /// evaluated and reported. Two segments form an assignment `name = expr`:
    /// `expr` is evaluated and, only if that succeeds, bound to `name`.
    ///
    /// # Parameters
    /// - `text`: The source line.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `MalformedAssignment` if the line has more than one `=`.
    /// - `InvalidAssignmentTarget` if the text before `=` is not an identifier.
    /// - Any error from [`Environment::evaluate`]. The environment is left
    ///   unchanged when an error is returned.
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// let report = env.execute_line("x = 5", 1).unwrap();
    /// assert_eq!(report.to_string(), "x = 5 = 5");
    ///
    /// let report = env.execute_line("x * 2", 2).unwrap();
    /// assert_eq!(report.value, 10);
    ///
    /// assert!(env.execute_line("1 + 1 = 5", 3).is_err());
    /// assert!(env.execute_line("z = 4 / 0", 4).is_err());
    /// assert_eq!(env.get("z"), None);
    /// ```
    #[instrument(level = "debug", skip(self))]
    pub fn execute_line(&mut self, text: &str, line: usize) -> Result<LineReport, Error> {
        let segments: Vec<&str> = text.split('=').map(str::trim).collect();

        let (binding, value) = match segments.as_slice() {
            [expr] => (None, self.evaluate(expr, line)?),
            [target, expr] => {
                if !is_identifier(target) {
                    return Err(ParseError::InvalidAssignmentTarget { target: (*target).to_string(),
                                                                     line }.into());
                }
                let value = self.evaluate(expr, line)?;
                self.assign(target, value);
                (Some((*target).to_string()), value)
            },
            _ => {
                return Err(ParseError::MalformedAssignment { segments: segments.len(),
                                                             line }.into());
            },
        };

        debug!(value, ?binding, "line executed");
        Ok(LineReport { line,
                        text: text.to_string(),
                        value,
                        binding })
    }

    /// Evaluates an infix expression without modifying the environment.
    ///
    /// The text is split into words, classified, converted to postfix order
    /// and evaluated.
    ///
    /// # Errors
    /// - `EmptyExpression` if `text` has no words.
    /// - Any error from tokenizing, conversion or evaluation.
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::environment::Environment;
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.evaluate("2 + 3 * 4", 1).unwrap(), 14);
    /// assert_eq!(env.evaluate("(2 + 3) * 4", 1).unwrap(), 20);
    /// assert_eq!(env.evaluate("4 - 3 - 1", 1).unwrap(), 0);
    /// ```
    pub fn evaluate(&self, text: &str, line: usize) -> Result<i64, Error> {
        let words = split_words(text);
        if words.is_empty() {
            return Err(ParseError::EmptyExpression { line }.into());
        }

        let infix = tokenize(&words, line)?;
        let postfix = to_postfix(&infix, line)?;
        debug!(postfix = %render(&postfix), "converted to postfix");

        Ok(self.eval_postfix(&postfix, line)?)
    }
}
