/// The variable environment shared by all lines of a program.
///
/// Holds the name to value bindings for the lifetime of one run. Evaluation
/// only reads it; successful assignment lines write to it.
pub mod environment;
/// The evaluator module computes results from postfix sequences.
///
/// It scans a postfix sequence with an operand stack, resolves identifiers
/// against the environment and applies checked integer arithmetic.
///
/// # Responsibilities
/// - Evaluates postfix sequences to a single integer.
/// - Reports undefined variables, missing operands and leftover values.
/// - Reports division by zero, negative exponents and overflow.
pub mod evaluator;
/// Execution of single lines: bare expressions and `name = expression`
/// assignments.
pub mod executor;
/// The lexer module classifies words into tokens.
///
/// Each word of a line is mapped to exactly one token: a number, an
/// identifier, an operator or a parenthesis.
pub mod lexer;
/// The operator table: symbols, precedence and associativity.
pub mod operator;
/// Infix to postfix conversion with the shunting-yard algorithm.
///
/// # Responsibilities
/// - Reorders operators according to precedence and associativity.
/// - Removes parentheses, reporting any that are unbalanced.
pub mod postfix;
/// Runs whole programs line by line under a configurable error policy.
pub mod runner;
