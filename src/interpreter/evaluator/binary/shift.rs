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
    /// Evaluates `<<` or `>>`.
    ///
    /// The result takes the kind of the left operand: an unsigned left operand
    /// shifts logically and stays unsigned, anything else is read as signed
    /// (floats truncate) and shifts arithmetically. The count is read as a
    /// signed integer and only its low six bits are used.
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
    /// let v = context.binary(BinaryOperator::ShiftRight, Value::UnsignedInt(u64::MAX), Value::UnsignedInt(60));
    /// assert_eq!(v, Ok(Value::UnsignedInt(15)));
    ///
    /// let v = context.binary(BinaryOperator::ShiftRight, Value::SignedInt(-16), Value::UnsignedInt(2));
    /// assert_eq!(v, Ok(Value::SignedInt(-4)));
    /// ```
    pub(super) fn shift(op: BinaryOperator, coercion: Coercion, left: &Value, right: &Value) -> Value {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = as_signed(right) as u32;

        match (coercion, op) {
            (Coercion::Unsigned, BinaryOperator::ShiftLeft) => Value::UnsignedInt(as_unsigned(left).wrapping_shl(count)),
            (Coercion::Unsigned, BinaryOperator::ShiftRight) => Value::UnsignedInt(as_unsigned(left).wrapping_shr(count)),
            (Coercion::Signed, BinaryOperator::ShiftLeft) => Value::SignedInt(as_signed(left).wrapping_shl(count)),
            (Coercion::Signed, BinaryOperator::ShiftRight) => Value::SignedInt(as_signed(left).wrapping_shr(count)),
            _ => unreachable!("{op} with {coercion:?} is not a shift"),
        }
    }
}
