use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::EvaluationContext,
        value::core::{Value, is_truthy},
    },
};

impl EvaluationContext<'_> {
    /// Returns `true` if the first operand of `&&` or `||` alone decides the
    /// result: a false operand for `&&`, a true one for `||`. An undetermined
    /// operand is false.
    pub(super) fn decides(op: BinaryOperator, first: Option<&Value>) -> bool {
        match op {
            BinaryOperator::And => !is_truthy(first),
            BinaryOperator::Or => is_truthy(first),
            _ => unreachable!("{op} does not short-circuit"),
        }
    }

    /// Combines the operands of `&&` or `||`.
    ///
    /// The result is the deciding operand itself, not a boolean: `0 || "x"`
    /// is `"x"` and `2 && 3` is `3`.
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
    /// let v = context.binary(BinaryOperator::Or, Value::UnsignedInt(0), Value::from("x"));
    /// assert_eq!(v, Ok(Value::from("x")));
    ///
    /// let v = context.binary(BinaryOperator::And, Value::Float(0.0), Value::UnsignedInt(3));
    /// assert_eq!(v, Ok(Value::Float(0.0)));
    /// ```
    pub(super) fn logical(op: BinaryOperator, first: Value, second: Value) -> Value {
        if Self::decides(op, Some(&first)) { first } else { second }
    }
}
