use crate::{
    ast::BinaryOperator,
    error::Diagnostic,
    interpreter::{
        evaluator::{
            binary::core::{Coercion, as_float, as_signed, as_unsigned},
            core::{EvalResult, EvaluationContext},
        },
        value::core::Value,
    },
    util::num::unsigned_as_signed,
};

impl EvaluationContext<'_> {
    /// Evaluates `+`, `-`, `*`, `/` or `%` between two numeric values.
    ///
    /// Integer arithmetic wraps on overflow. Division truncates toward zero
    /// and the remainder takes the sign of the dividend.
    ///
    /// # Errors
    /// `DivisionByZero` for `/` and `%` with a zero divisor, float zero
    /// included.
    pub(super) fn arithmetic(op: BinaryOperator,
                             coercion: Coercion,
                             left: &Value,
                             right: &Value)
                             -> EvalResult<Value> {
        match coercion {
            Coercion::Unsigned => unsigned_arithmetic(op, as_unsigned(left), as_unsigned(right)),
            Coercion::Signed => signed_arithmetic(op, as_signed(left), as_signed(right)).map(Value::SignedInt),
            Coercion::Float => float_arithmetic(op, as_float(left), as_float(right)).map(Value::Float),
            _ => unreachable!("{coercion:?} is not an arithmetic coercion"),
        }
    }
}

/// Unsigned arithmetic.
///
/// Subtracting a larger value from a smaller one yields the signed
/// difference rather than wrapping around.
///
/// # Example
/// ```
/// use asmexpr::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::arithmetic::unsigned_arithmetic, value::core::Value},
/// };
///
/// assert_eq!(unsigned_arithmetic(BinaryOperator::Sub, 4, 42), Ok(Value::SignedInt(-38)));
/// assert_eq!(unsigned_arithmetic(BinaryOperator::Add, u64::MAX, 1), Ok(Value::UnsignedInt(0)));
/// ```
///
/// # Errors
/// `DivisionByZero` when dividing by zero.
pub fn unsigned_arithmetic(op: BinaryOperator, a: u64, b: u64) -> EvalResult<Value> {
    Ok(Value::UnsignedInt(match op {
                              BinaryOperator::Add => a.wrapping_add(b),
                              BinaryOperator::Sub if a < b => {
                                  return Ok(Value::SignedInt(unsigned_as_signed(a.wrapping_sub(b))));
                              },
                              BinaryOperator::Sub => a - b,
                              BinaryOperator::Mul => a.wrapping_mul(b),
                              BinaryOperator::Div => a.checked_div(b).ok_or(Diagnostic::DivisionByZero)?,
                              BinaryOperator::Mod => a.checked_rem(b).ok_or(Diagnostic::DivisionByZero)?,
                              _ => unreachable!("{op} is not arithmetic"),
                          }))
}

/// Signed arithmetic in two's complement.
///
/// # Errors
/// `DivisionByZero` when dividing by zero.
pub fn signed_arithmetic(op: BinaryOperator, a: i64, b: i64) -> EvalResult<i64> {
    if matches!(op, BinaryOperator::Div | BinaryOperator::Mod) && b == 0 {
        return Err(Diagnostic::DivisionByZero);
    }

    Ok(match op {
           BinaryOperator::Add => a.wrapping_add(b),
           BinaryOperator::Sub => a.wrapping_sub(b),
           BinaryOperator::Mul => a.wrapping_mul(b),
           BinaryOperator::Div => a.wrapping_div(b),
           BinaryOperator::Mod => a.wrapping_rem(b),
           _ => unreachable!("{op} is not arithmetic"),
       })
}

/// Float arithmetic.
///
/// # Errors
/// `DivisionByZero` when dividing by zero, even though a float quotient
/// would exist.
pub fn float_arithmetic(op: BinaryOperator, a: f64, b: f64) -> EvalResult<f64> {
    if matches!(op, BinaryOperator::Div | BinaryOperator::Mod) && b == 0.0 {
        return Err(Diagnostic::DivisionByZero);
    }

    Ok(match op {
           BinaryOperator::Add => a + b,
           BinaryOperator::Sub => a - b,
           BinaryOperator::Mul => a * b,
           BinaryOperator::Div => a / b,
           BinaryOperator::Mod => a % b,
           _ => unreachable!("{op} is not arithmetic"),
       })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_wraps_on_overflow() {
        assert_eq!(signed_arithmetic(BinaryOperator::Add, i64::MAX, 1), Ok(i64::MIN));
        assert_eq!(signed_arithmetic(BinaryOperator::Div, i64::MIN, -1), Ok(i64::MIN));
        assert_eq!(signed_arithmetic(BinaryOperator::Mod, i64::MIN, -1), Ok(0));
    }

    #[test]
    fn remainder_follows_dividend() {
        assert_eq!(signed_arithmetic(BinaryOperator::Mod, -7, 2), Ok(-1));
        assert_eq!(signed_arithmetic(BinaryOperator::Div, -7, 2), Ok(-3));
    }

    #[test]
    fn zero_divisors_are_rejected() {
        assert_eq!(unsigned_arithmetic(BinaryOperator::Mod, 1, 0), Err(Diagnostic::DivisionByZero));
        assert_eq!(float_arithmetic(BinaryOperator::Div, 1.0, -0.0), Err(Diagnostic::DivisionByZero));
        assert_eq!(float_arithmetic(BinaryOperator::Mul, 1.0, 0.0), Ok(0.0));
    }

    #[test]
    fn unsigned_difference_of_equal_values() {
        assert_eq!(unsigned_arithmetic(BinaryOperator::Sub, 42, 42), Ok(Value::UnsignedInt(0)));
        assert_eq!(unsigned_arithmetic(BinaryOperator::Sub, 0, u64::MAX), Ok(Value::SignedInt(1)));
    }
}
