//! # catlang
//!
//! catlang is a small line-oriented integer arithmetic language written in
//! Rust. Every line is either an expression such as `2 ^ 3 ^ 2` or an
//! assignment such as `total = price * count`. Expressions are converted to
//! postfix order with the shunting-yard algorithm and evaluated on an operand
//! stack against the variables assigned by earlier lines.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::path::Path;

use crate::{
    config::RunConfig,
    error::Error,
    interpreter::runner::{RunReport, Runner},
    source::{program_lines, read_program},
};

/// Run configuration.
///
/// Declares the settings that control a program run, most importantly
/// whether a failing line aborts the run or is skipped and reported.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while splitting,
/// converting or evaluating a line, plus the I/O failure of reading a
/// program. Every line-level error carries the line number it occurred on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (conversion, evaluation, I/O).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together the lexer, the operator table, the postfix
/// converter, the evaluator and the variable environment, and exposes the line
/// executor and program runner built on top of them.
///
/// # Responsibilities
/// - Coordinates tokenizing, conversion and evaluation of each line.
/// - Applies assignments to the environment only after success.
/// - Runs programs line by line, reporting each result.
pub mod interpreter;
/// Reading program text and splitting lines into words.
pub mod source;

/// Runs a program given as text.
///
/// Blank lines are ignored; every other line is executed in order against a
/// fresh environment.
///
/// # Errors
/// Returns the first failing line's error when `config` aborts on errors.
///
/// # Examples
/// ```
/// use catlang::{config::RunConfig, run_source};
///
/// let report = run_source("x = 5\ny = x + 2\n\nx + y", RunConfig::default()).unwrap();
/// assert_eq!(report.values(), vec![5, 7, 12]);
///
/// // `w` was never assigned.
/// assert!(run_source("w + 1", RunConfig::default()).is_err());
///
/// // Skipping keeps going past the bad line.
/// let report = run_source("w + 1\n2 * 3", RunConfig::skip()).unwrap();
/// assert_eq!(report.values(), vec![6]);
/// assert_eq!(report.failures.len(), 1);
/// ```
pub fn run_source(source: &str, config: RunConfig) -> Result<RunReport, Error> {
    Runner::new(config).run(&program_lines(source))
}

/// Reads a program file and runs it.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read, or the first failing line's
/// error when `config` aborts on errors.
pub fn run_file<P: AsRef<Path>>(path: P, config: RunConfig) -> Result<RunReport, Error> {
    Runner::new(config).run(&read_program(path)?)
}
