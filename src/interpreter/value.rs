/// Function handles.
///
/// Defines the `Function` capability a function call delegates to and the
/// identity-compared `FunctionRef` handle stored inside values.
pub mod function;
/// The numeric-text reader.
///
/// Implements the grammar and the digit-by-digit accumulation used whenever
/// a string operand has to be read as a float, and for float literals in the
/// reference front-end.
pub mod float_parser;

pub mod core;
