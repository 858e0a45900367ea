use std::ops::{BitAnd, BitOr, BitXor};

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::{Coercion, as_signed, as_unsigned},
            core::EvaluationContext,
        },
        value::core::Value,
    },
};

impl EvaluationContext<'_> {
    /// Evaluates `&`, `^` or `|`.
    ///
    /// Two unsigned operands give an unsigned result. Any other pair is read
    /// as signed, with floats truncated toward zero.
    ///
    /// # Example
    /// ```
    /// use asmexpr::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::EvaluationContext, value::core::Value},
    /// };
    ///
    /// let context = EvaluationContext::dummy();
    ///
    /// let v = context.binary(BinaryOperator::BitAnd, Value::UnsignedInt(0xFF), Value::UnsignedInt(0x0F));
    /// assert_eq!(v, Ok(Value::UnsignedInt(0x0F)));
    ///
    /// let v = context.binary(BinaryOperator::BitOr, Value::Float(2.9), Value::UnsignedInt(1));
    /// assert_eq!(v, Ok(Value::SignedInt(3)));
    /// ```
    pub(super) fn bitwise(op: BinaryOperator, coercion: Coercion, left: &Value, right: &Value) -> Value {
        match coercion {
            Coercion::Unsigned => Value::UnsignedInt(apply(op, as_unsigned(left), as_unsigned(right))),
            Coercion::Signed => Value::SignedInt(apply(op, as_signed(left), as_signed(right))),
            _ => unreachable!("{coercion:?} is not a bitwise coercion"),
        }
    }
}

fn apply<T>(op: BinaryOperator, a: T, b: T) -> T
    where T: BitAnd<Output = T> + BitXor<Output = T> + BitOr<Output = T>
{
    match op {
        BinaryOperator::BitAnd => a & b,
        BinaryOperator::BitXor => a ^ b,
        BinaryOperator::BitOr => a | b,
        _ => unreachable!("{op} is not bitwise"),
    }
}
