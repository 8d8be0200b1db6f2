//! # repol
//!
//! repol is a postfix (reverse Polish notation) expression interpreter
//! written in Rust. It reads whitespace-separated tokens, builds a parse
//! tree by stack-based reduction, renders the equivalent fully
//! parenthesized infix form, and evaluates the tree against a mutable
//! variable table.

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

use crate::interpreter::{
    evaluator::Context, lexer::tokenize, parser::parse, printer::render_infix,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `Operator` type that
/// represent one postfix expression as a tree. The tree is built by the
/// parser, rendered by the printer, and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines leaf and interior node types for all language constructs.
/// - Attaches source line numbers to nodes for error reporting.
/// - Carries the canonical operator symbols used when printing.
pub mod ast;
/// Provides unified error types for parsing, evaluation, and bootstrap.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating an expression, and while reading a symbol table
/// bootstrap file. It standardizes error reporting and carries source
/// line numbers for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   bootstrap).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression interpretation.
///
/// This module ties together lexing, parsing, evaluation, printing, and
/// the symbol table to provide a complete runtime for postfix expression
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, printer,
///   and symbol table.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The result of interpreting one input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The fully parenthesized infix rendering of the line's parse tree.
    pub infix: String,
    /// The evaluated value of the line.
    pub value: i64,
}

/// Interprets a single input line against an existing context.
///
/// The line is tokenized, parsed into a tree, rendered as infix text, and
/// evaluated. A line with no tokens (blank, or nothing but a comment)
/// yields `Ok(None)` without invoking the parser. Assignments made by the
/// line persist in `context`.
///
/// # Errors
/// Returns the first tokenization, parse, or evaluation error raised by
/// the line. Nothing is produced for a failed line; the context is only
/// modified by assignments that completed before the failure.
///
/// # Examples
/// ```
/// use repol::{eval_line, interpreter::evaluator::Context};
///
/// let mut context = Context::new();
/// let evaluation = eval_line(&mut context, "x 5 =", 1).unwrap().unwrap();
///
/// assert_eq!(evaluation.infix, "(x=5)");
/// assert_eq!(evaluation.value, 5);
/// assert_eq!(context.symbols().get("x"), Some(5));
/// ```
pub fn eval_line(context: &mut Context,
                 line: &str,
                 line_number: usize)
                 -> Result<Option<Evaluation>, Box<dyn std::error::Error>> {
    let mut tokens = tokenize(line, line_number)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let tree = parse(&mut tokens)?;
    let infix = render_infix(&tree);
    let value = context.eval(&tree)?;

    Ok(Some(Evaluation { infix, value }))
}

/// Returns the final evaluation result after executing a whole script.
///
/// Each line of `source` is interpreted in order against a fresh context,
/// so assignments carry across lines. The value of the last line that
/// produced one is returned, or `None` if no line did.
///
/// # Errors
/// Returns an error as soon as any line fails to tokenize, parse, or
/// evaluate; the remaining lines are not executed.
///
/// # Examples
/// ```
/// use repol::eval_source;
///
/// // ((1+2)*3)
/// assert_eq!(eval_source("1 2 + 3 *").unwrap(), Some(9));
///
/// // 'x' is never assigned, so reading it fails.
/// assert!(eval_source("x 1 +").is_err());
/// ```
pub fn eval_source(source: &str) -> Result<Option<i64>, Box<dyn std::error::Error>> {
    let mut context = Context::new();
    let mut result = None;

    for (index, line) in source.lines().enumerate() {
        if let Some(evaluation) = eval_line(&mut context, line, index + 1)? {
            result = Some(evaluation.value);
        }
    }

    Ok(result)
}
