use crate::{
    ast::{BinaryOperator, Expression, OperatorFamily},
    error::Diagnostic,
    interpreter::{
        evaluator::core::{EvalResult, EvaluationContext},
        value::core::{Value, ValueKind},
    },
    util::num::{
        float_to_signed, float_to_unsigned, signed_as_unsigned, signed_to_float,
        unsigned_as_signed, unsigned_to_float,
    },
};

/// How the operands of a binary operator are brought together.
///
/// Every `(operator, left kind, right kind)` triple maps to exactly one
/// coercion through [`coercion`]. The operator modules only ever see the
/// coercions their family can produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Coercion {
    /// At least one operand is undetermined; so is the result.
    Undetermined,
    /// A function operand of an operator that does not accept functions.
    RejectFunction,
    /// `+` with a string operand: concatenate the canonical texts.
    Concatenate,
    /// A string operand of a numeric operator: read strings as floats, then
    /// coerce again.
    ParseStrings,
    /// Both operands are read as unsigned integers.
    Unsigned,
    /// Both operands are read as signed integers.
    Signed,
    /// Both operands are read as floats.
    Float,
    /// One signed and one unsigned operand of a comparison.
    MixedSign,
    /// A comparison involving a string: compare canonical texts.
    Text,
    /// Two functions compared: order through the function registry.
    FunctionIdentity,
    /// A function compared with a non-function: the function is greater.
    FunctionDominates,
    /// Strict equality between operands of the same kind.
    SameKind,
    /// Strict equality between operands of different kinds.
    KindMismatch,
    /// `&&` or `||`: decided by the truthiness of the first operand.
    ShortCircuit,
}

/// Looks up the coercion for an operator and its operand kinds.
///
/// `None` stands for an undetermined operand.
///
/// # Example
/// ```
/// use asmexpr::{
///     ast::BinaryOperator,
///     interpreter::{
///         evaluator::binary::core::{Coercion, coercion},
///         value::core::ValueKind,
///     },
/// };
///
/// let c = coercion(BinaryOperator::Add, Some(ValueKind::String), Some(ValueKind::UnsignedInt));
/// assert_eq!(c, Coercion::Concatenate);
///
/// let c = coercion(BinaryOperator::Mul, Some(ValueKind::String), Some(ValueKind::UnsignedInt));
/// assert_eq!(c, Coercion::ParseStrings);
///
/// let c = coercion(BinaryOperator::Less, Some(ValueKind::SignedInt), Some(ValueKind::UnsignedInt));
/// assert_eq!(c, Coercion::MixedSign);
///
/// let c = coercion(BinaryOperator::Sub, None, Some(ValueKind::Float));
/// assert_eq!(c, Coercion::Undetermined);
/// ```
#[must_use]
pub const fn coercion(op: BinaryOperator,
                      left: Option<ValueKind>,
                      right: Option<ValueKind>)
                      -> Coercion {
    use ValueKind::{Function, String, UnsignedInt};

    let (Some(left), Some(right)) = (left, right) else {
        return Coercion::Undetermined;
    };

    match op.family() {
        OperatorFamily::Logical => Coercion::ShortCircuit,
        OperatorFamily::StrictEquality => strict_coercion(left, right),
        OperatorFamily::Comparison => comparison_coercion(left, right),
        OperatorFamily::Additive => match (left, right) {
            (Function, _) | (_, Function) => Coercion::RejectFunction,
            (String, _) | (_, String) => Coercion::Concatenate,
            _ => numeric_promotion(left, right),
        },
        OperatorFamily::Arithmetic => match (left, right) {
            (Function, _) | (_, Function) => Coercion::RejectFunction,
            (String, _) | (_, String) => Coercion::ParseStrings,
            _ => numeric_promotion(left, right),
        },
        OperatorFamily::Shift => match (left, right) {
            (Function, _) | (_, Function) => Coercion::RejectFunction,
            (String, _) | (_, String) => Coercion::ParseStrings,
            (UnsignedInt, _) => Coercion::Unsigned,
            _ => Coercion::Signed,
        },
        OperatorFamily::Bitwise => match (left, right) {
            (Function, _) | (_, Function) => Coercion::RejectFunction,
            (String, _) | (_, String) => Coercion::ParseStrings,
            (UnsignedInt, UnsignedInt) => Coercion::Unsigned,
            _ => Coercion::Signed,
        },
    }
}

const fn numeric_promotion(left: ValueKind, right: ValueKind) -> Coercion {
    use ValueKind::{Float, UnsignedInt};

    match (left, right) {
        (Float, _) | (_, Float) => Coercion::Float,
        (UnsignedInt, UnsignedInt) => Coercion::Unsigned,
        _ => Coercion::Signed,
    }
}

pub(super) const fn comparison_coercion(left: ValueKind, right: ValueKind) -> Coercion {
    use ValueKind::{Float, Function, SignedInt, String, UnsignedInt};

    match (left, right) {
        (Function, Function) => Coercion::FunctionIdentity,
        (Function, _) | (_, Function) => Coercion::FunctionDominates,
        (String, _) | (_, String) => Coercion::Text,
        (Float, _) | (_, Float) => Coercion::Float,
        (UnsignedInt, UnsignedInt) => Coercion::Unsigned,
        (SignedInt, SignedInt) => Coercion::Signed,
        (SignedInt, UnsignedInt) | (UnsignedInt, SignedInt) => Coercion::MixedSign,
    }
}

const fn strict_coercion(left: ValueKind, right: ValueKind) -> Coercion {
    use ValueKind::{Float, Function, SignedInt, String, UnsignedInt};

    match (left, right) {
        (Float, Float)
        | (SignedInt, SignedInt)
        | (UnsignedInt, UnsignedInt)
        | (String, String)
        | (Function, Function) => Coercion::SameKind,
        _ => Coercion::KindMismatch,
    }
}

impl EvaluationContext<'_> {
    /// Evaluates a binary node.
    ///
    /// `&&` and `||` evaluate their first operand alone and only evaluate the
    /// second one when the first does not decide the result. An undetermined
    /// first operand counts as false. Every other
    /// operator evaluates both operands, left to right, before combining them.
    pub(crate) fn eval_binary_expression(&self,
                                         op: BinaryOperator,
                                         left: &Expression,
                                         right: &Expression)
                                         -> Option<Value> {
        if op.family() == OperatorFamily::Logical {
            let first = self.evaluate(left);
            if Self::decides(op, first.as_ref()) {
                return first;
            }
            return self.evaluate(right);
        }

        let left = self.evaluate(left);
        let right = self.evaluate(right);
        self.eval_binary(op, left, right)
    }

    /// Applies a binary operator to two possibly undetermined operands.
    ///
    /// An undetermined operand gives an undetermined result without a
    /// diagnostic, except for `&&` and `||`, which read an undetermined first
    /// operand as false. Failures of [`Self::binary`] are reported through the
    /// sink.
    pub fn eval_binary(&self, op: BinaryOperator, left: Option<Value>, right: Option<Value>) -> Option<Value> {
        if op.family() == OperatorFamily::Logical {
            return if Self::decides(op, left.as_ref()) { left } else { right };
        }

        let (left, right) = left.zip(right)?;
        self.report(self.binary(op, left, right))
    }

    /// Evaluates a binary operation between two values.
    ///
    /// The coercion for the operand kinds is looked up first. Rejections,
    /// string parsing and concatenation are handled here; everything else is
    /// routed to the module of the operator's family.
    ///
    /// `&&` and `||` receive both values eagerly here and return whichever
    /// operand decides the result.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Errors
    /// - `FunctionOperand` if an operand is a function and the operator does
    ///   not accept functions.
    /// - `CannotConvertStringToFloat` if a string operand of a numeric
    ///   operator is not a number.
    /// - `DivisionByZero` for `/` and `%` with a zero divisor.
    ///
    /// # Example
    /// ```
    /// use asmexpr::{
    ///     ast::BinaryOperator,
    ///     error::Diagnostic,
    ///     interpreter::{evaluator::core::EvaluationContext, value::core::Value},
    /// };
    ///
    /// let context = EvaluationContext::dummy();
    ///
    /// let v = context.binary(BinaryOperator::Sub, Value::UnsignedInt(4), Value::UnsignedInt(42));
    /// assert_eq!(v, Ok(Value::SignedInt(-38)));
    ///
    /// let v = context.binary(BinaryOperator::Mul, Value::from("1.5E3"), Value::UnsignedInt(2));
    /// assert_eq!(v, Ok(Value::Float(3000.0)));
    ///
    /// let v = context.binary(BinaryOperator::Div, Value::SignedInt(1), Value::SignedInt(0));
    /// assert_eq!(v, Err(Diagnostic::DivisionByZero));
    /// ```
    pub fn binary(&self, op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        let coercion = coercion(op, Some(left.kind()), Some(right.kind()));

        match coercion {
            Coercion::Undetermined => unreachable!("both operands are determined"),
            Coercion::RejectFunction => Err(Diagnostic::FunctionOperand { operator: op.name() }),
            Coercion::Concatenate => Ok(Value::String(format!("{left}{right}"))),
            Coercion::ParseStrings => {
                let left = Self::parse_operand(left)?;
                let right = Self::parse_operand(right)?;
                self.binary(op, left, right)
            },
            Coercion::ShortCircuit => Ok(Self::logical(op, left, right)),
            _ => match op.family() {
                OperatorFamily::Additive | OperatorFamily::Arithmetic => {
                    Self::arithmetic(op, coercion, &left, &right)
                },
                OperatorFamily::Shift => Ok(Self::shift(op, coercion, &left, &right)),
                OperatorFamily::Bitwise => Ok(Self::bitwise(op, coercion, &left, &right)),
                OperatorFamily::Comparison => Ok(self.comparison(op, coercion, &left, &right)),
                OperatorFamily::StrictEquality => Ok(Self::strict_equality(op, coercion, &left, &right)),
                OperatorFamily::Logical => unreachable!("logical operators short-circuit"),
            },
        }
    }

    fn parse_operand(value: Value) -> EvalResult<Value> {
        match value {
            Value::String(text) => Self::string_to_float(&text).map(Value::Float),
            other => Ok(other),
        }
    }
}

/// Reads a numeric operand as unsigned 64 bits.
///
/// Signed values keep their bits; floats truncate toward zero.
pub(super) fn as_unsigned(value: &Value) -> u64 {
    match value {
        Value::UnsignedInt(u) => *u,
        Value::SignedInt(i) => signed_as_unsigned(*i),
        Value::Float(f) => float_to_unsigned(*f),
        Value::String(_) | Value::Function(_) => unreachable!("operand is not numeric"),
    }
}

/// Reads a numeric operand as signed 64 bits.
///
/// Unsigned values keep their bits; floats truncate toward zero, saturating.
pub(super) fn as_signed(value: &Value) -> i64 {
    match value {
        Value::UnsignedInt(u) => unsigned_as_signed(*u),
        Value::SignedInt(i) => *i,
        Value::Float(f) => float_to_signed(*f),
        Value::String(_) | Value::Function(_) => unreachable!("operand is not numeric"),
    }
}

/// Reads a numeric operand as a float. Unsigned values use their unsigned
/// magnitude.
pub(super) fn as_float(value: &Value) -> f64 {
    match value {
        Value::UnsignedInt(u) => unsigned_to_float(*u),
        Value::SignedInt(i) => signed_to_float(*i),
        Value::Float(f) => *f,
        Value::String(_) | Value::Function(_) => unreachable!("operand is not numeric"),
    }
}
