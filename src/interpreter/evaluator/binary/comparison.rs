use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::{Coercion, as_float, as_signed, as_unsigned, comparison_coercion},
            core::EvaluationContext,
        },
        value::core::Value,
    },
};

/// Maps a comparison operator and the ordering of its operands to the
/// boolean result.
///
/// An unordered pair (a NaN was involved) satisfies only `!=`.
///
/// This function does not look at the operands themselves.
#[must_use]
pub fn comparison_holds(op: BinaryOperator, ordering: Option<Ordering>) -> bool {
    match op {
        BinaryOperator::Less => matches!(ordering, Some(Ordering::Less)),
        BinaryOperator::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOperator::Greater => matches!(ordering, Some(Ordering::Greater)),
        BinaryOperator::GreaterEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        BinaryOperator::Equal => matches!(ordering, Some(Ordering::Equal)),
        BinaryOperator::NotEqual => !matches!(ordering, Some(Ordering::Equal)),
        _ => unreachable!("comparison_holds used with a non comparison operator"),
    }
}

impl EvaluationContext<'_> {
    /// Evaluates one of `<`, `<=`, `>`, `>=`, `==` or `!=`.
    ///
    /// The result is `1` if the comparison holds and `0` otherwise.
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
    /// let v = context.binary(BinaryOperator::Less, Value::SignedInt(-1), Value::UnsignedInt(u64::MAX));
    /// assert_eq!(v, Ok(Value::UnsignedInt(1)));
    ///
    /// let v = context.binary(BinaryOperator::Equal, Value::from("10"), Value::UnsignedInt(10));
    /// assert_eq!(v, Ok(Value::UnsignedInt(1)));
    ///
    /// let v = context.binary(BinaryOperator::Less, Value::from("10"), Value::from("9"));
    /// assert_eq!(v, Ok(Value::UnsignedInt(1)));
    /// ```
    pub(super) fn comparison(&self, op: BinaryOperator, coercion: Coercion, left: &Value, right: &Value) -> Value {
        Value::from(comparison_holds(op, self.order(coercion, left, right)))
    }

    /// Orders two determined values the way the comparison operators do.
    ///
    /// - Two functions are ordered by the function registry.
    /// - A function is greater than any other value.
    /// - If either value is a string, the canonical texts are compared.
    /// - If either value is a float, both are compared as floats; a NaN
    ///   leaves the pair unordered.
    /// - A negative signed value is less than any unsigned value; otherwise
    ///   signed and unsigned values compare by magnitude.
    ///
    /// # Returns
    /// The ordering of `left` relative to `right`, or `None` if unordered.
    pub fn compare_values(&self, left: &Value, right: &Value) -> Option<Ordering> {
        self.order(comparison_coercion(left.kind(), right.kind()), left, right)
    }

    fn order(&self, coercion: Coercion, left: &Value, right: &Value) -> Option<Ordering> {
        match coercion {
            Coercion::FunctionIdentity => match (left, right) {
                (Value::Function(a), Value::Function(b)) => Some(self.compare_functions(a, b)),
                _ => unreachable!("both operands are functions"),
            },
            Coercion::FunctionDominates => {
                Some(if left.is_function() { Ordering::Greater } else { Ordering::Less })
            },
            Coercion::Text => Some(left.to_string().cmp(&right.to_string())),
            Coercion::Float => as_float(left).partial_cmp(&as_float(right)),
            Coercion::Unsigned => Some(as_unsigned(left).cmp(&as_unsigned(right))),
            Coercion::Signed => Some(as_signed(left).cmp(&as_signed(right))),
            Coercion::MixedSign => Some(match (left, right) {
                                            (Value::SignedInt(s), Value::UnsignedInt(u)) => signed_to_unsigned(*s, *u),
                                            (Value::UnsignedInt(u), Value::SignedInt(s)) => {
                                                signed_to_unsigned(*s, *u).reverse()
                                            },
                                            _ => unreachable!("operands have mixed signedness"),
                                        }),
            _ => unreachable!("{coercion:?} is not a comparison coercion"),
        }
    }
}

fn signed_to_unsigned(signed: i64, unsigned: u64) -> Ordering {
    u64::try_from(signed).map_or(Ordering::Less, |signed| signed.cmp(&unsigned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_satisfies_only_not_equal() {
        for op in [BinaryOperator::Less,
                   BinaryOperator::LessEqual,
                   BinaryOperator::Greater,
                   BinaryOperator::GreaterEqual,
                   BinaryOperator::Equal]
        {
            assert!(!comparison_holds(op, None), "{op}");
        }
        assert!(comparison_holds(BinaryOperator::NotEqual, None));
    }

    #[test]
    fn mixed_signedness() {
        assert_eq!(signed_to_unsigned(-1, 0), Ordering::Less);
        assert_eq!(signed_to_unsigned(5, 5), Ordering::Equal);
        assert_eq!(signed_to_unsigned(i64::MAX, u64::MAX), Ordering::Less);
        assert_eq!(signed_to_unsigned(7, 3), Ordering::Greater);
    }
}
