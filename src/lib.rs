//! # asmexpr
//!
//! asmexpr is the expression evaluation core of an assembler's macro and
//! expression language, written in Rust. It evaluates dynamically typed
//! expression trees (signed, unsigned and float numbers, strings and function
//! values) against a program counter and a symbol table, applying loose
//! scripting-style coercions and reporting problems as diagnostics instead of
//! failing.
//!
//! A small line-oriented front-end (`let`, `assert`, `org` and bare
//! expressions) drives the core from the command line and from tests.

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

use crate::{
    error::RuntimeError,
    interpreter::{
        lexer::tokenize,
        parser::{core::parse_expression, statement::parse_program},
        session::Session,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expression` enum, the operator enums and the
/// statements of the reference front-end. Expression trees are immutable once
/// built and share their children through `Arc`, so one tree can be evaluated
/// many times, from many threads.
///
/// # Responsibilities
/// - Defines the value-oriented and expression-oriented expression nodes.
/// - Defines the binary and unary operators and their families.
/// - Attaches line numbers to statements for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the diagnostics raised while evaluating expressions and
/// the errors raised while lexing, parsing or running statements.
///
/// # Responsibilities
/// - Defines the `Diagnostic` enum reported through diagnostic sinks.
/// - Defines `ParseError` and `RuntimeError` for the front-end.
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the public
/// API for interpreting and executing expressions or programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides the numeric conversions shared by the coercion engine
/// and the canonical text form of floats.
///
/// # Responsibilities
/// - Convert between `i64`, `u64` and `f64` with the language's rules.
/// - Render floats the way the language prints them.
pub mod util;

/// Settings for running a script.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// The program counter the script starts at.
    pub origin:      u64,
    /// Symbols defined before the script runs, each written `NAME=EXPR`.
    pub definitions: Vec<String>,
    /// Print the value of the last expression statement.
    pub auto_print:  bool,
}

/// Returns the final evaluation result after execution.
///
/// This function defines the symbols of `options`, then parses and runs all
/// statements in the provided source string in a fresh session. If execution
/// succeeds, it returns the value of the last expression statement that had
/// one; otherwise, it returns an error with details about the failure.
///
/// # Errors
/// Returns an error if a definition is malformed, if parsing fails, or if any
/// statement fails.
///
/// # Examples
/// ```
/// use asmexpr::{Options, get_result, interpreter::value::core::Value};
///
/// // Simple expression: the last value is returned.
/// let res = get_result("let width = 40\nwidth + 2", &Options::default());
/// assert_eq!(res.unwrap(), Some(Value::UnsignedInt(42)));
///
/// // Predefined symbols and the origin.
/// let options = Options { origin: 0x8000,
///                         definitions: vec!["base=0x10".to_string()],
///                         auto_print: false };
/// let res = get_result("$ + base", &options);
/// assert_eq!(res.unwrap(), Some(Value::UnsignedInt(0x8010)));
///
/// // Example with an intentional error (division by zero).
/// let res = get_result("1 / 0", &Options::default());
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, options: &Options) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut session = Session::new();
    session.set_program_counter(options.origin);

    for definition in &options.definitions {
        define(&mut session, definition)?;
    }

    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;

    let mut result = None;
    for statement in &program {
        if let Some(value) = session.eval_statement(statement)? {
            result = Some(value);
        }
    }

    if options.auto_print
       && let Some(v) = &result
    {
        println!("{v}");
    }

    Ok(result)
}

/// Defines one `NAME=EXPR` symbol in `session`.
fn define(session: &mut Session, definition: &str) -> Result<(), Box<dyn std::error::Error>> {
    let invalid = || RuntimeError::InvalidDefinition { definition: definition.to_string() };

    let (name, expression) = definition.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid().into());
    }

    let tokens = tokenize(expression)?;
    let mut iter = tokens.iter().peekable();
    let expression = parse_expression(&mut iter)?;
    if iter.next().is_some() {
        return Err(invalid().into());
    }

    let value = session.evaluate(&expression, 0)?;
    session.define(name, value, 0)?;
    Ok(())
}
