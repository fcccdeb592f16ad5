use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{operator::Operator, postfix::ParseResult},
};

/// Represents a lexical token of one expression.
///
/// Tokens are produced from words that have already been split out of a line,
/// so each word maps to exactly one token. The logos patterns below decide the
/// kind of a word; a word no pattern covers completely is an identifier.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Non-negative integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// One of `+ - * / % ^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("%", |_| Operator::Mod)]
    #[token("^", |_| Operator::Pow)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the digits do not fit in an `i64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Classifies a single word without looking at its neighbours.
///
/// All-digit words become numbers, the six operator symbols become operators,
/// `(` and `)` become parentheses and everything else is an identifier.
///
/// # Errors
/// - `LiteralTooLarge` if the word is all digits but overflows `i64`.
/// - `EmptyExpression` if the word is empty.
///
/// # Example
/// ```
/// use catlang::interpreter::{
///     lexer::{Token, classify},
///     operator::Operator,
/// };
///
/// assert_eq!(classify("42", 1).unwrap(), Token::Number(42));
/// assert_eq!(classify("^", 1).unwrap(), Token::Operator(Operator::Pow));
/// assert_eq!(classify("rate", 1).unwrap(), Token::Identifier("rate".to_string()));
/// assert_eq!(classify("3x", 1).unwrap(), Token::Identifier("3x".to_string()));
/// assert!(classify("99999999999999999999", 1).is_err());
/// ```
pub fn classify(word: &str, line: usize) -> ParseResult<Token> {
    let mut lexer = Token::lexer(word);

    match lexer.next() {
        Some(Ok(token)) if lexer.span().end == word.len() => Ok(token),
        Some(Err(())) if word.bytes().all(|b| b.is_ascii_digit()) => {
            Err(ParseError::LiteralTooLarge { literal: word.to_string(),
                                              line })
        },
        Some(_) => Ok(Token::Identifier(word.to_string())),
        None => Err(ParseError::EmptyExpression { line }),
    }
}

/// Classifies every word of one expression, in order.
///
/// # Errors
/// Propagates the first error from [`classify`].
///
/// # Example
/// ```
/// use catlang::interpreter::{lexer::{Token, tokenize}, operator::Operator};
///
/// let tokens = tokenize(&["(", "x", "+", "1", ")"], 1).unwrap();
/// assert_eq!(tokens[2], Token::Operator(Operator::Add));
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize<S: AsRef<str>>(words: &[S], line: usize) -> ParseResult<Vec<Token>> {
    words.iter().map(|word| classify(word.as_ref(), line)).collect()
}

/// Whether `text` is a legal variable name: a letter or underscore followed
/// by letters, digits or underscores.
///
/// # Example
/// ```
/// use catlang::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("_count2"));
/// assert!(!is_identifier("1 + 1"));
/// assert!(!is_identifier("2x"));
/// ```
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let mut lexer = Token::lexer(text);
    matches!(lexer.next(), Some(Ok(Token::Identifier(_))) if lexer.span().end == text.len())
}
