/// Expression entry point and the conditional operator.
///
/// Defines `ParseResult` and the lowest precedence level, `? :`.
pub mod core;

/// Unary operators, primary expressions and postfix operators.
///
/// Handles prefix `+ - ~ !`, literals, identifiers, `$`, parenthesized
/// expressions and the postfix call, index and period operators.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from `||` down to the multiplicative
/// operators. Every level is left-associative.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers shared between the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Splits a token stream into lines and parses `let`, `assert`, `org` and
/// bare expression statements.
pub mod statement;
