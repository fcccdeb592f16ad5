use std::fs;

use catlang::{
    config::{ErrorPolicy, RunConfig},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        lexer::{Token, tokenize},
        postfix::to_postfix,
    },
    run_file, run_source,
};
use clap::ValueEnum;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("programs").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "nya"))
    {
        count += 1;
        let path = entry.path();
        if let Err(e) = run_file(path, RunConfig::default()) {
            panic!("Program {path:?} failed:\nError: {e}");
        }
    }

    assert!(count > 0, "No sample programs found in programs/");
}

fn eval(src: &str) -> i64 {
    match run_source(src, RunConfig::default()) {
        Ok(report) => *report.values().last().expect("no line was evaluated"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn failure(src: &str) -> Error {
    match run_source(src, RunConfig::default()) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("1 + 2"), 3);
    assert_eq!(eval("7 * 9"), 63);
    assert_eq!(eval("8 - 5"), 3);
    assert_eq!(eval("10 / 2"), 5);
    assert_eq!(eval("10 / 3"), 3);
    assert_eq!(eval("17 % 5"), 2);
    assert_eq!(eval("2 ^ 10"), 1024);
    assert_eq!(eval("7 ^ 0"), 1);
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(eval("(0 - 7) / 2"), -3);
    assert_eq!(eval("(0 - 7) % 2"), -1);
    assert_eq!(eval("7 % (0 - 2)"), 1);
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(eval("2 ^ 3 ^ 2"), 512);
    assert_eq!(eval("4 - 3 - 1"), 0);
    assert_eq!(eval("64 / 4 / 2"), 8);
    assert_eq!(eval("2 + 3 * 4"), 14);
    assert_eq!(eval("(2 + 3) * 4"), 20);
    assert_eq!(eval("2 * 3 ^ 2"), 18);
    assert_eq!(eval("100 % 7 * 2"), 4);
}

#[test]
fn operators_do_not_need_spaces() {
    assert_eq!(eval("(2+3)*4"), 20);
    assert_eq!(eval("x = 3\nx^2-1"), 8);
}

#[test]
fn assignments_persist_across_lines() {
    let report = run_source("x = 5\ny = x + 2\nx + y", RunConfig::default()).unwrap();

    assert_eq!(report.values(), vec![5, 7, 12]);
    assert_eq!(report.environment.sorted(), vec![("x", 5), ("y", 7)]);
    assert_eq!(report.lines[0].binding.as_deref(), Some("x"));
    assert_eq!(report.lines[2].binding, None);
}

#[test]
fn reassignment_overwrites() {
    let report = run_source("x = 1\nx = x + 41", RunConfig::default()).unwrap();
    assert_eq!(report.environment.get("x"), Some(42));
    assert_eq!(report.environment.len(), 1);
}

#[test]
fn variables_are_case_sensitive() {
    let e = failure("x = 1\nX + 1");
    assert!(matches!(e, Error::Runtime(RuntimeError::UndefinedVariable { ref name, line: 2 }) if name == "X"));
}

#[test]
fn line_reports_render_line_and_value() {
    let report = run_source("x = 2 ^ 5\nx - 2", RunConfig::default()).unwrap();
    let rendered: Vec<String> = report.lines.iter().map(ToString::to_string).collect();

    assert_eq!(rendered, vec!["x = 2 ^ 5 = 32", "x - 2 = 30"]);
    assert_eq!(report.environment.to_string(), "x = 32\n");
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(failure("4 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
    assert!(matches!(failure("4 % (2 - 2)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn failed_assignment_leaves_environment_unchanged() {
    let mut env = Environment::new();
    env.execute_line("z = 1", 1).unwrap();

    assert!(env.execute_line("z = 4 / 0", 2).is_err());
    assert_eq!(env.get("z"), Some(1));

    assert!(env.execute_line("w = 4 / 0", 3).is_err());
    assert_eq!(env.get("w"), None);
    assert_eq!(env.len(), 1);
}

#[test]
fn undefined_variable_is_error() {
    let e = failure("w + 1");
    assert!(matches!(e, Error::Runtime(RuntimeError::UndefinedVariable { ref name, .. }) if name == "w"));
    assert!(e.to_string().contains("'w'"));
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert!(matches!(failure("(1 + 2"),
                     Error::Parse(ParseError::UnbalancedParentheses { line: 1 })));
    assert!(matches!(failure("1 + 2)"),
                     Error::Parse(ParseError::UnbalancedParentheses { line: 1 })));
    assert!(matches!(failure(")("), Error::Parse(ParseError::UnbalancedParentheses { .. })));
}

#[test]
fn missing_operands_are_stack_underflow() {
    assert!(matches!(failure("+"),
                     Error::Runtime(RuntimeError::StackUnderflow { ref operator, line: 1 }) if operator == "+"));
    assert!(matches!(failure("1 +"), Error::Runtime(RuntimeError::StackUnderflow { .. })));
    assert!(matches!(failure("- 5"), Error::Runtime(RuntimeError::StackUnderflow { .. })));
    assert!(matches!(failure("x = * 2"),
                     Error::Runtime(RuntimeError::StackUnderflow { .. })));
}

#[test]
fn leftover_operands_are_malformed() {
    assert!(matches!(failure("1 2"),
                     Error::Runtime(RuntimeError::MalformedExpression { remaining: 2, .. })));
    assert!(matches!(failure("()"),
                     Error::Runtime(RuntimeError::MalformedExpression { remaining: 0, .. })));
}

#[test]
fn negative_exponent_is_error() {
    assert!(matches!(failure("2 ^ (0 - 1)"),
                     Error::Runtime(RuntimeError::InvalidExponent { exponent: -1, .. })));
}

#[test]
fn overflow_is_error() {
    assert!(matches!(failure("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(failure("2 ^ 63"), Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(failure("99999999999999999999"),
                     Error::Parse(ParseError::LiteralTooLarge { .. })));
    assert_eq!(eval("1 ^ 9999999999"), 1);
}

#[test]
fn min_divided_by_minus_one_overflows() {
    let min = "m = 0 - 9223372036854775807 - 1\n";

    assert!(matches!(failure(&format!("{min}m / (0 - 1)")),
                     Error::Runtime(RuntimeError::Overflow { line: 2 })));
    assert!(matches!(failure(&format!("{min}m % (0 - 1)")),
                     Error::Runtime(RuntimeError::Overflow { line: 2 })));
    assert_eq!(eval(&format!("{min}m / 1")), i64::MIN);
}

#[test]
fn minus_one_accepts_huge_exponents() {
    assert_eq!(eval("(0 - 1) ^ 9999999999"), -1);
    assert_eq!(eval("(0 - 1) ^ 10000000000"), 1);
    assert_eq!(eval("0 ^ 10000000000"), 0);
    assert!(matches!(failure("2 ^ 10000000000"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn malformed_assignments_are_errors() {
    assert!(matches!(failure("a = b = 3"),
                     Error::Parse(ParseError::MalformedAssignment { segments: 3, .. })));
    assert!(matches!(failure("1 + 1 = 5"),
                     Error::Parse(ParseError::InvalidAssignmentTarget { .. })));
    assert!(matches!(failure("= 5"),
                     Error::Parse(ParseError::InvalidAssignmentTarget { .. })));
    assert!(matches!(failure("x ="), Error::Parse(ParseError::EmptyExpression { .. })));
}

#[test]
fn errors_carry_source_line_numbers() {
    let e = failure("x = 1\n\n   \ny = x / 0\n");
    assert_eq!(e.line_number(), Some(4));
    assert_eq!(e.to_string(), "Error on line 4: Division by zero.");
}

#[test]
fn abort_stops_at_first_error() {
    let e = failure("x = 1\ny = q\nz = 3");
    assert_eq!(e.line_number(), Some(2));
}

#[test]
fn skip_reports_failures_and_continues() {
    let report = run_source("x = 1\ny = q\nz = x / 0\nx + 1", RunConfig::skip()).unwrap();

    assert_eq!(report.values(), vec![1, 2]);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].line_number(), Some(2));
    assert_eq!(report.failures[1].line_number(), Some(3));
    assert_eq!(report.environment.sorted(), vec![("x", 1)]);
    assert!(!report.is_clean());
}

#[test]
fn postfix_written_input_still_evaluates() {
    // The converter does not check operand/operator order; `1 2 +` passes
    // through unchanged and evaluates like `1 + 2`.
    let infix = tokenize(&["1", "2", "+"], 1).unwrap();
    assert_eq!(to_postfix(&infix, 1).unwrap(), infix);
    assert_eq!(eval("1 2 +"), 3);
}

#[test]
fn error_policy_parses_from_command_line_values() {
    assert_eq!(ErrorPolicy::from_str("skip", false), Ok(ErrorPolicy::Skip));
    assert_eq!(ErrorPolicy::from_str("abort", false), Ok(ErrorPolicy::Abort));
    assert_eq!(ErrorPolicy::from_str("SKIP", true), Ok(ErrorPolicy::Skip));
    assert!(ErrorPolicy::from_str("retry", false).is_err());
    assert_eq!(ErrorPolicy::default(), ErrorPolicy::Abort);
    assert_eq!(RunConfig::default().on_error, ErrorPolicy::Abort);
    assert_eq!(RunConfig::skip().on_error, ErrorPolicy::Skip);
}

#[test]
fn single_operand_conversion_is_unchanged() {
    let infix = tokenize(&["5"], 1).unwrap();
    assert_eq!(to_postfix(&infix, 1).unwrap(), vec![Token::Number(5)]);

    let infix = tokenize(&["x"], 1).unwrap();
    assert_eq!(to_postfix(&infix, 1).unwrap(), infix);
}

#[test]
fn missing_file_is_io_error() {
    let e = run_file("programs/does_not_exist.nya", RunConfig::default()).unwrap_err();
    assert!(matches!(e, Error::Io { .. }));
    assert_eq!(e.line_number(), None);
}

#[test]
fn variables_program_final_environment() {
    let script = fs::read_to_string("programs/variables.nya").expect("missing file");
    let report = run_source(&script, RunConfig::default()).unwrap();

    assert_eq!(report.values(), vec![5, 7, 12, 50, 1]);
    assert_eq!(report.environment.sorted(),
               vec![("total_2", 1), ("x", 50), ("y", 7)]);
    assert_eq!(report.lines[3].line, 5);
}

#[test]
fn compound_interest_program() {
    let report = run_file("programs/compound_interest.nya", RunConfig::default()).unwrap();
    assert_eq!(report.environment.get("balance"), Some(1157));
    assert_eq!(report.environment.get("gain"), Some(157));
}
