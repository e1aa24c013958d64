//! # plank
//!
//! plank is an interpreter for a small imperative scripting language written
//! in Rust. Programs are sequences of `if`, `loop`, `set` and `print`
//! statements over integers and strings:
//!
//! ```text
//! set greeting "ab" * 2
//! if 1 begin
//!     print greeting + "!"
//! end
//! ```
//!
//! Source text is tokenized, parsed into an abstract syntax tree and then
//! executed by a tree-walking evaluator.

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
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context,
        lexer::TokenStream,
        parser::core::{ParseOutcome, Parser},
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the statement and expression types that represent a
/// program as a tree. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines a closed set of statement and expression variants.
/// - Attaches source line numbers to every node for diagnostics.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse errors are line-tagged diagnostics that are collected while parsing
/// continues. Runtime errors are fatal and stop evaluation at once.
///
/// # Responsibilities
/// - Defines one variant per diagnostic and per runtime failure.
/// - Renders the exact user-facing messages through `Display`.
pub mod error;
/// Orchestrates lexing, parsing, evaluation and values.
///
/// # Responsibilities
/// - Turns source text into tokens and tokens into a syntax tree.
/// - Executes the tree against a symbol table and an output sink.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// The result of running a program to completion.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The program parsed and every statement was executed.
    Completed,
    /// The program was rejected by the parser and nothing was executed.
    ///
    /// Holds every diagnostic in the order it was reported. The diagnostics
    /// have already been written to the output sink.
    Rejected(Vec<ParseError>),
}

/// Parses a program without executing it.
///
/// # Example
/// ```
/// use plank::parse;
///
/// let outcome = parse("set x 1\nprint x\n");
/// assert!(outcome.diagnostics.is_empty());
/// assert_eq!(outcome.program.unwrap().statements.len(), 2);
/// ```
#[must_use]
pub fn parse(source: &str) -> ParseOutcome {
    Parser::new(TokenStream::new(source)).parse_program()
}

/// Parses and executes a program, writing all output to `out`.
///
/// Output produced by `print` statements is written without any separators.
/// If the parser rejects the program, each diagnostic is written on its own
/// line as `<line>: <message>` and nothing is evaluated.
///
/// # Errors
/// Returns the first [`RuntimeError`] raised during evaluation. Statements
/// after the failing one are never executed.
///
/// # Examples
/// ```
/// use plank::{Outcome, run};
///
/// let mut out = Vec::new();
/// let outcome = run("set x 5\nprint x * \"ab\"\n", &mut out).unwrap();
/// assert_eq!(outcome, Outcome::Completed);
/// assert_eq!(String::from_utf8(out).unwrap(), "ababababab");
///
/// // Division by zero stops the program.
/// let mut out = Vec::new();
/// let err = run("print 5/0\n", &mut out).unwrap_err();
/// assert_eq!(err.to_string(), "Cannot divide by 0");
/// ```
pub fn run<W: Write>(source: &str, mut out: W) -> Result<Outcome, RuntimeError> {
    let outcome = parse(source);

    let Some(program) = outcome.program else {
        for diagnostic in &outcome.diagnostics {
            writeln!(out, "{diagnostic}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                              line:    diagnostic.line(), })?;
        }
        return Ok(Outcome::Rejected(outcome.diagnostics));
    };

    let mut context = Context::new(out);
    context.eval_sequence(&program)?;
    context.flush(program.line)?;

    Ok(Outcome::Completed)
}
