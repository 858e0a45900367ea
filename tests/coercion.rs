use asmexpr::{
    ast::BinaryOperator::{self, *},
    error::Diagnostic,
    interpreter::{
        evaluator::{
            binary::core::{Coercion, coercion},
            core::EvaluationContext,
        },
        value::core::{Value, ValueKind},
    },
};
use pretty_assertions::assert_eq;

const KINDS: [ValueKind; 5] = [ValueKind::Float,
                               ValueKind::SignedInt,
                               ValueKind::UnsignedInt,
                               ValueKind::String,
                               ValueKind::Function];

const OPERATORS: [BinaryOperator; 20] = [Mul, Div, Mod, Add, Sub, ShiftLeft, ShiftRight, Less, LessEqual,
                                         Greater, GreaterEqual, Equal, NotEqual, StrictEqual,
                                         StrictNotEqual, BitAnd, BitXor, BitOr, And, Or];

fn eval(op: BinaryOperator, left: impl Into<Value>, right: impl Into<Value>) -> Result<Value, Diagnostic> {
    EvaluationContext::dummy().binary(op, left.into(), right.into())
}

#[test]
fn undetermined_operands_win_everywhere() {
    for op in OPERATORS {
        for kind in KINDS {
            assert_eq!(coercion(op, None, Some(kind)), Coercion::Undetermined);
            assert_eq!(coercion(op, Some(kind), None), Coercion::Undetermined);
        }
        assert_eq!(coercion(op, None, None), Coercion::Undetermined);
    }
}

#[test]
fn functions_are_only_accepted_by_comparisons_and_logic() {
    for op in OPERATORS {
        let accepted = matches!(op,
                                Less | LessEqual
                                     | Greater
                                     | GreaterEqual
                                     | Equal
                                     | NotEqual
                                     | StrictEqual
                                     | StrictNotEqual
                                     | And
                                     | Or);
        for kind in KINDS {
            let c = coercion(op, Some(ValueKind::Function), Some(kind));
            assert_eq!(c == Coercion::RejectFunction, !accepted, "{op:?} with {kind:?}");
        }
    }
}

#[test]
fn numeric_promotion() {
    use ValueKind::{Float, SignedInt, UnsignedInt};

    let cases = [((UnsignedInt, UnsignedInt), Coercion::Unsigned),
                 ((UnsignedInt, SignedInt), Coercion::Signed),
                 ((SignedInt, UnsignedInt), Coercion::Signed),
                 ((SignedInt, SignedInt), Coercion::Signed),
                 ((Float, UnsignedInt), Coercion::Float),
                 ((SignedInt, Float), Coercion::Float)];

    for ((left, right), expected) in cases {
        for op in [Add, Sub, Mul, Div, Mod] {
            assert_eq!(coercion(op, Some(left), Some(right)), expected, "{op:?}");
        }
    }
}

#[test]
fn shifts_follow_the_left_kind() {
    use ValueKind::{Float, SignedInt, UnsignedInt};

    assert_eq!(coercion(ShiftLeft, Some(UnsignedInt), Some(SignedInt)), Coercion::Unsigned);
    assert_eq!(coercion(ShiftRight, Some(UnsignedInt), Some(Float)), Coercion::Unsigned);
    assert_eq!(coercion(ShiftRight, Some(SignedInt), Some(UnsignedInt)), Coercion::Signed);
    assert_eq!(coercion(ShiftLeft, Some(Float), Some(UnsignedInt)), Coercion::Signed);
}

#[test]
fn comparison_coercions() {
    use ValueKind::{Float, Function, SignedInt, String, UnsignedInt};

    assert_eq!(coercion(Less, Some(Function), Some(Function)), Coercion::FunctionIdentity);
    assert_eq!(coercion(Less, Some(String), Some(Function)), Coercion::FunctionDominates);
    assert_eq!(coercion(Equal, Some(String), Some(Float)), Coercion::Text);
    assert_eq!(coercion(Equal, Some(UnsignedInt), Some(Float)), Coercion::Float);
    assert_eq!(coercion(Greater, Some(UnsignedInt), Some(SignedInt)), Coercion::MixedSign);
    assert_eq!(coercion(Greater, Some(SignedInt), Some(SignedInt)), Coercion::Signed);
}

#[test]
fn strict_equality_only_looks_at_kinds() {
    for left in KINDS {
        for right in KINDS {
            let expected = if left == right { Coercion::SameKind } else { Coercion::KindMismatch };
            assert_eq!(coercion(StrictEqual, Some(left), Some(right)), expected);
            assert_eq!(coercion(StrictNotEqual, Some(left), Some(right)), expected);
        }
    }
}

#[test]
fn mixed_arithmetic_results() {
    assert_eq!(eval(Add, 1u64, -3i64), Ok(Value::SignedInt(-2)));
    assert_eq!(eval(Mul, 3u64, 0.5), Ok(Value::Float(1.5)));
    assert_eq!(eval(Div, u64::MAX, 2u64), Ok(Value::UnsignedInt(u64::MAX / 2)));
    assert_eq!(eval(Div, u64::MAX, 2i64), Ok(Value::SignedInt(0)));
    assert_eq!(eval(Mod, -7i64, 3u64), Ok(Value::SignedInt(-1)));
    assert_eq!(eval(Sub, i64::MIN, 1i64), Ok(Value::SignedInt(i64::MAX)));
}

#[test]
fn strings_meet_numbers() {
    assert_eq!(eval(Add, "n=", 1.0), Ok(Value::from("n=1.0")));
    assert_eq!(eval(Add, 2u64, "a"), Ok(Value::from("2a")));
    assert_eq!(eval(Sub, "10", "4"), Ok(Value::Float(6.0)));
    assert_eq!(eval(ShiftLeft, "1", 4u64), Ok(Value::SignedInt(16)));
    assert_eq!(eval(BitOr, 1u64, "2"), Ok(Value::SignedInt(3)));
    assert_eq!(eval(Div, "x", 1u64), Err(Diagnostic::CannotConvertStringToFloat("x".into())));
    assert_eq!(eval(Div, "1", "0"), Err(Diagnostic::DivisionByZero));
}

#[test]
fn comparison_results_are_unsigned_booleans() {
    assert_eq!(eval(Less, -1i64, 0u64), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(Greater, i64::MAX, u64::MAX), Ok(Value::UnsignedInt(0)));
    assert_eq!(eval(GreaterEqual, 5i64, 5u64), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(NotEqual, f64::NAN, f64::NAN), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(Equal, f64::NAN, f64::NAN), Ok(Value::UnsignedInt(0)));
    assert_eq!(eval(LessEqual, f64::NAN, 1u64), Ok(Value::UnsignedInt(0)));
    assert_eq!(eval(Less, "abc", "abd"), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(Equal, "1.0", 1.0), Ok(Value::UnsignedInt(1)));
}

#[test]
fn text_orders_by_code_point() {
    assert_eq!(eval(Less, "\u{FFFD}", "\u{1F600}"), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(Less, "Z", "a"), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(Greater, "ab", "a"), Ok(Value::UnsignedInt(1)));
}

#[test]
fn strict_equality_results() {
    assert_eq!(eval(StrictEqual, 1u64, 1u64), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(StrictEqual, 1u64, 1i64), Ok(Value::UnsignedInt(0)));
    assert_eq!(eval(StrictNotEqual, 1u64, 1.0), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(StrictEqual, f64::NAN, f64::NAN), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(StrictEqual, "a", "a"), Ok(Value::UnsignedInt(1)));
    assert_eq!(eval(StrictEqual, 0.0, -0.0), Ok(Value::UnsignedInt(1)));
}

#[test]
fn logical_results_are_operands() {
    assert_eq!(eval(And, "a", 2.5), Ok(Value::Float(2.5)));
    assert_eq!(eval(And, "", 2.5), Ok(Value::from("")));
    assert_eq!(eval(Or, 0i64, "b"), Ok(Value::from("b")));
    assert_eq!(eval(Or, 3u64, "b"), Ok(Value::UnsignedInt(3)));
}

#[test]
fn undetermined_operands_are_silent() {
    let context = EvaluationContext::dummy();

    assert_eq!(context.eval_binary(Div, None, Some(Value::UnsignedInt(0))), None);
    assert_eq!(context.eval_binary(Or, None, Some(Value::UnsignedInt(7))), Some(Value::UnsignedInt(7)));
    assert_eq!(context.eval_binary(And, None, Some(Value::UnsignedInt(7))), None);
    assert_eq!(context.eval_binary(Or, Some(Value::UnsignedInt(1)), None), Some(Value::UnsignedInt(1)));
}
