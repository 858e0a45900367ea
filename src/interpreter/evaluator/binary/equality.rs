use ordered_float::OrderedFloat;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::core::Coercion, core::EvaluationContext},
        value::core::Value,
    },
};

impl EvaluationContext<'_> {
    /// Evaluates `===` or `!==`.
    ///
    /// Two values are strictly equal only if they have the same kind and the
    /// same payload: no coercion happens, so `1 === 1.0` is false. Floats are
    /// compared by value except that NaN equals NaN; functions by identity.
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
    /// let v = context.binary(BinaryOperator::StrictEqual, Value::UnsignedInt(1), Value::Float(1.0));
    /// assert_eq!(v, Ok(Value::UnsignedInt(0)));
    ///
    /// let v = context.binary(BinaryOperator::StrictNotEqual, Value::from("a"), Value::from("b"));
    /// assert_eq!(v, Ok(Value::UnsignedInt(1)));
    /// ```
    pub(super) fn strict_equality(op: BinaryOperator, coercion: Coercion, left: &Value, right: &Value) -> Value {
        let identical = match coercion {
            Coercion::KindMismatch => false,
            Coercion::SameKind => same_payload(left, right),
            _ => unreachable!("{coercion:?} is not a strict equality coercion"),
        };

        Value::from(match op {
                        BinaryOperator::StrictEqual => identical,
                        BinaryOperator::StrictNotEqual => !identical,
                        _ => unreachable!("{op} is not a strict equality"),
                    })
    }
}

fn same_payload(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Float(a), Value::Float(b)) => OrderedFloat(*a) == OrderedFloat(*b),
        (Value::SignedInt(a), Value::SignedInt(b)) => a == b,
        (Value::UnsignedInt(a), Value::UnsignedInt(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        _ => unreachable!("operands have the same kind"),
    }
}
