/// Arithmetic operators.
///
/// `+`, `-`, `*`, `/` and `%` over unsigned, signed and float operands.
pub mod arithmetic;
/// Bitwise operators.
///
/// `&`, `^` and `|` over integers; floats truncate toward zero first.
pub mod bitwise;
/// Comparison operators.
///
/// The six loose comparisons, including signed/unsigned cross comparison,
/// text comparison and the identity order of function values.
pub mod comparison;
/// Strict equality.
///
/// `===` and `!==`, which require the same kind and the same value.
pub mod equality;
/// Short-circuit logical operators.
pub mod logic;
/// Bit shifts.
pub mod shift;

pub mod core;
