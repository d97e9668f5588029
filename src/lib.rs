//! # expreval
//!
//! expreval is a small arithmetic expression interpreter written in Rust.
//! It tokenizes, parses, and evaluates a single expression built from
//! integer and decimal literals, the four binary operators `+ - * /`,
//! unary `+`/`-`, and parenthesized grouping, reporting either a numeric
//! result or a precisely located error.
//!
//! The pipeline runs in three batch stages, each consuming the previous
//! stage's output in full: tokenizer, recursive-descent parser, and
//! tree-walking evaluator. Every token, AST node, and error carries a
//! 0-indexed line/column position in the source text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
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

use crate::interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the three expression node kinds as a closed tagged union.
/// - Attaches source spans to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during tokenizing,
/// parsing, or evaluating an expression. Every error carries the 0-indexed
/// line and column of the offending input and renders as
/// `"{message} [{line}:{col}]"`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Provides the unified `Error` returned by the full pipeline.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, and the runtime
/// value type to provide a complete pipeline for a single expression.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, and value
///   type.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// Source positions.
///
/// Declares the `Span` type locating tokens and AST nodes in source text
/// as 0-indexed line/column pairs.
pub mod span;
/// General utilities for safe numeric conversion.
///
/// Provides checked conversions between integer and floating-point types
/// without silent data loss, used wherever an integer is promoted to a
/// real.
pub mod util;

/// Evaluates a source string and returns the final numeric result.
///
/// Runs the full pipeline (tokenize, parse, evaluate), stopping at the
/// first error. Each stage owns its output outright and hands it to the
/// next; no cursor state crosses a stage boundary.
///
/// # Parameters
/// - `source`: A single expression as flat text.
///
/// # Returns
/// The computed [`Number`](interpreter::value::Number), or the first error
/// from any stage.
///
/// # Errors
/// Returns an error if tokenizing, parsing, or evaluation fails; see
/// [`error::ParseError`] and [`error::RuntimeError`] for the possible
/// failures.
///
/// # Examples
/// ```
/// use expreval::evaluate_source;
///
/// // Multiplication binds tighter than addition.
/// let result = evaluate_source("2 + 3 * 4").unwrap();
/// assert_eq!(result.to_string(), "14");
///
/// // Division always yields a real.
/// let result = evaluate_source("4 / 2").unwrap();
/// assert_eq!(result.to_string(), "2.0");
///
/// // Errors carry the position of the offending token.
/// let err = evaluate_source("1 / 0").unwrap_err();
/// assert_eq!(err.to_string(), "Division by zero [0:0]");
/// ```
pub fn evaluate_source(source: &str) -> Result<interpreter::value::Number, error::Error> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens)?;
    let result = evaluate(&ast)?;

    Ok(result)
}
