/// Numeric conversion helpers.
///
/// This module gathers the conversions the coercion engine relies on: the
/// unsigned-to-float widening that never flips the sign bit, the truncating
/// float-to-integer casts used by shifts and bitwise operators, bit
/// reinterpretation between signed and unsigned integers, and the canonical
/// text form of floats used by string concatenation and comparison.
pub mod num;
