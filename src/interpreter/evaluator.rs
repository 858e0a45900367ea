/// Binary operator evaluation logic.
///
/// Holds the coercion table that decides, for every operator and pair of
/// operand kinds, how the operands are brought together, and one module per
/// operator family.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements unary plus, negation, bitwise not and logical not.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the value-oriented and
/// expression-oriented evaluation strategies and diagnostic reporting.
pub mod core;

/// Deterministic ordering of function values.
///
/// Functions have no natural order. Each assembly keeps an arena of the
/// functions it has compared, and a function's position in the arena is its
/// rank.
pub mod ordering;

/// Diagnostic sinks.
pub mod sink;

/// Symbol resolution for identifiers.
pub mod symbols;
