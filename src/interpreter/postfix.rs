use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, operator::Operator},
};

/// Result type used by the lexer and the postfix converter.
///
/// Either a value of type `T` or a `ParseError` describing why the line could
/// not be turned into a postfix sequence.
pub type ParseResult<T> = Result<T, ParseError>;

/// An entry on the converter's holding stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    LParen,
}

/// Converts an infix token sequence to postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm. Operands go straight to the output,
/// operators wait on a stack until an operator that binds no tighter arrives,
/// and parentheses are consumed. The result never contains `(` or `)`.
///
/// Equal-precedence ties follow [`Operator::yields_to`], which makes `^`
/// group to the right and every other operator group to the left.
///
/// # Parameters
/// - `tokens`: The infix tokens of one expression.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `UnbalancedParentheses` if a `)` has no matching `(` or a `(` is never
/// closed.
///
/// # Example
/// ```
/// use catlang::interpreter::{lexer::tokenize, postfix::{render, to_postfix}};
///
/// let infix = tokenize(&["2", "^", "3", "^", "2"], 1).unwrap();
/// assert_eq!(render(&to_postfix(&infix, 1).unwrap()), "2 3 2 ^ ^");
///
/// let infix = tokenize(&["(", "2", "+", "3", ")", "*", "4"], 1).unwrap();
/// assert_eq!(render(&to_postfix(&infix, 1).unwrap()), "2 3 + 4 *");
/// ```
pub fn to_postfix(tokens: &[Token], line: usize) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token.clone()),
            Token::LParen => stack.push(Pending::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                    Some(Pending::LParen) => break,
                    None => return Err(ParseError::UnbalancedParentheses { line }),
                }
            },
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top)) = stack.last()
                      && op.yields_to(top)
                {
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(Pending::Operator(*op));
            },
        }
        trace!(%token, depth = stack.len(), "shunted token");
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::LParen => return Err(ParseError::UnbalancedParentheses { line }),
        }
    }

    Ok(output)
}

/// Renders a token sequence as space separated text, e.g. `2 3 + 4 *`.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
