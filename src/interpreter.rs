/// The evaluator module computes the value of expression trees.
///
/// The evaluator walks an expression against an evaluation context (program
/// counter, symbols, diagnostic sink), applying the loose coercion rules of
/// the expression language. Problems never abort an evaluation: they yield an
/// undetermined value at the failing node and one diagnostic.
///
/// # Responsibilities
/// - Evaluates value-oriented nodes directly and simplifies expression-oriented
///   ones.
/// - Implements every unary and binary operator over every pair of kinds.
/// - Orders function values deterministically per assembly.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// # Responsibilities
/// - Converts the input into tokens: numbers, strings, identifiers, operators
///   and keywords.
/// - Tracks line numbers for error reporting.
/// - Rejects malformed literals.
pub mod lexer;
/// The parser module builds expression trees and statements from tokens.
///
/// Operator precedence follows C: the conditional binds loosest, then `||`,
/// `&&`, the bitwise operators, equality, relations, shifts, additive and
/// multiplicative operators, the unary operators and finally calls, indexers
/// and periods.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: floats, signed and unsigned integers, strings
///   and function handles.
/// - Defines the `Function` trait callables implement.
/// - Reads strings as floats with the language's own numeric grammar.
pub mod value;

/// A line-oriented assembly session over the evaluator.
///
/// Owns the symbol table, the program counter and the assembly token used to
/// order function values, and runs statements one at a time.
pub mod session;

/// Functions predefined in every session.
pub mod builtins;
