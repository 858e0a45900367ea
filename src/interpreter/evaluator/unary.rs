use crate::{
    ast::UnaryOperator,
    error::Diagnostic,
    interpreter::{
        evaluator::core::{EvalResult, EvaluationContext},
        value::core::Value,
    },
    util::num::{float_to_unsigned, signed_as_unsigned, unsigned_as_signed},
};

impl EvaluationContext<'_> {
    /// Applies a unary operator to a possibly undetermined operand.
    ///
    /// An undetermined operand gives an undetermined result without a
    /// diagnostic. Failures of [`Self::unary`] are reported through the sink.
    pub fn eval_unary(&self, op: UnaryOperator, operand: Option<Value>) -> Option<Value> {
        let operand = operand?;
        self.report(Self::unary(op, operand))
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: reads an unsigned value as signed (same bits), reads a string
    ///   as a float, leaves signed and float values alone.
    /// - `Negate`: reads an unsigned value as signed, then negates in two's
    ///   complement (`i64::MIN` negates to itself); strings are read as floats.
    /// - `BitNot`: widens any numeric value to 64 unsigned bits (floats
    ///   truncate toward zero) and complements it; strings are read as floats
    ///   first.
    /// - `Not`: `1` if the operand is false, `0` otherwise. Accepts any kind.
    ///
    /// The first three reject function operands.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use asmexpr::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::EvaluationContext, value::core::Value},
    /// };
    ///
    /// let v = EvaluationContext::unary(UnaryOperator::Plus, Value::UnsignedInt(u64::MAX));
    /// assert_eq!(v, Ok(Value::SignedInt(-1)));
    ///
    /// let v = EvaluationContext::unary(UnaryOperator::BitNot, Value::SignedInt(0));
    /// assert_eq!(v, Ok(Value::UnsignedInt(u64::MAX)));
    ///
    /// let v = EvaluationContext::unary(UnaryOperator::Negate, Value::from("2.5"));
    /// assert_eq!(v, Ok(Value::Float(-2.5)));
    /// ```
    pub fn unary(op: UnaryOperator, value: Value) -> EvalResult<Value> {
        if op == UnaryOperator::Not {
            return Ok(Value::from(!value.is_truthy()));
        }

        let value = match value {
            Value::Function(_) => {
                return Err(Diagnostic::FunctionOperand { operator: op.name() });
            },
            Value::String(text) => Value::Float(Self::string_to_float(&text)?),
            numeric => numeric,
        };

        Ok(match op {
               UnaryOperator::Plus => match value {
                   Value::UnsignedInt(u) => Value::SignedInt(unsigned_as_signed(u)),
                   other => other,
               },
               UnaryOperator::Negate => match value {
                   Value::UnsignedInt(u) => Value::SignedInt(unsigned_as_signed(u).wrapping_neg()),
                   Value::SignedInt(i) => Value::SignedInt(i.wrapping_neg()),
                   Value::Float(f) => Value::Float(-f),
                   Value::String(_) | Value::Function(_) => unreachable!("operand kind resolved above"),
               },
               UnaryOperator::BitNot => match value {
                   Value::UnsignedInt(u) => Value::UnsignedInt(!u),
                   Value::SignedInt(i) => Value::UnsignedInt(!signed_as_unsigned(i)),
                   Value::Float(f) => Value::UnsignedInt(!float_to_unsigned(f)),
                   Value::String(_) | Value::Function(_) => unreachable!("operand kind resolved above"),
               },
               UnaryOperator::Not => unreachable!("logical not handled above"),
           })
    }
}
