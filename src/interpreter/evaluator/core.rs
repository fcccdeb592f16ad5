use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{environment::Environment, lexer::Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Environment {
    /// Evaluates a postfix token sequence and returns its single result.
    ///
    /// Numbers are pushed as they are, identifiers are replaced by their bound
    /// value, and each operator pops its right operand, then its left operand,
    /// and pushes the result. The environment is only read; storing the result
    /// is up to the caller.
    ///
    /// # Parameters
    /// - `postfix`: Tokens in postfix order, as produced by
    ///   [`to_postfix`](crate::interpreter::postfix::to_postfix).
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `UndefinedVariable` for an identifier that has no binding.
    /// - `StackUnderflow` for an operator with fewer than two operands.
    /// - `MalformedExpression` if anything but exactly one value remains.
    /// - Any error raised by [`Operator::apply`](crate::interpreter::operator::Operator::apply).
    ///
    /// # Example
    /// ```
    /// use catlang::interpreter::{
    ///     environment::Environment,
    ///     lexer::tokenize,
    ///     postfix::to_postfix,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", 5);
    ///
    /// let postfix = to_postfix(&tokenize(&["x", "*", "(", "4", "-", "1", ")"], 1).unwrap(), 1).unwrap();
    /// assert_eq!(env.eval_postfix(&postfix, 1).unwrap(), 15);
    /// ```
    pub fn eval_postfix(&self, postfix: &[Token], line: usize) -> EvalResult<i64> {
        let mut stack: Vec<i64> = Vec::with_capacity(postfix.len());

        for token in postfix {
            match token {
                Token::Number(n) => stack.push(*n),
                Token::Identifier(name) => {
                    let value =
                        self.get(name)
                            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                             line })?;
                    stack.push(value);
                },
                Token::Operator(op) => {
                    let underflow = || RuntimeError::StackUnderflow { operator: op.to_string(),
                                                                      line };
                    let rhs = stack.pop().ok_or_else(underflow)?;
                    let lhs = stack.pop().ok_or_else(underflow)?;
                    stack.push(op.apply(lhs, rhs, line)?);
                },
                Token::LParen | Token::RParen => {
                    return Err(RuntimeError::MalformedExpression { remaining: stack.len(),
                                                                   line });
                },
            }
            trace!(%token, ?stack, "evaluated token");
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(RuntimeError::MalformedExpression { remaining: stack.len(),
                                                         line }),
        }
    }
}
