use std::{collections::HashMap, sync::Arc, thread};

use asmexpr::{
    ast::{BinaryOperator, Expression, UnaryOperator},
    error::Diagnostic,
    interpreter::{
        evaluator::{
            core::EvaluationContext,
            ordering::{AssemblyToken, FunctionOrdering},
            sink::{DiagnosticBag, DiagnosticSink},
            symbols::Symbol,
        },
        value::{
            core::Value,
            function::{Function, FunctionRef},
        },
    },
};
use pretty_assertions::assert_eq;

/// Returns its only argument unevaluated, so a call simplifies to it.
struct Identity;

impl Function for Identity {
    fn name(&self) -> &str {
        "identity"
    }

    fn call(&self, arguments: &[Arc<Expression>], _: &EvaluationContext<'_>) -> Arc<Expression> {
        arguments.first().cloned().unwrap_or_else(Expression::undetermined)
    }
}

fn symbols() -> HashMap<String, Symbol> {
    let mut symbols = HashMap::new();
    symbols.insert("width".to_string(), Symbol::Value(Value::UnsignedInt(40)));
    symbols.insert("table[3]".to_string(), Symbol::Value(Value::from("third")));
    symbols.insert("table.size".to_string(), Symbol::Value(Value::UnsignedInt(8)));
    symbols.insert("table".to_string(), Symbol::Scope);
    symbols.insert("id".to_string(), Symbol::Value(Value::Function(FunctionRef::new(Identity))));
    symbols
}

fn evaluate(expression: &Expression) -> (Option<Value>, Vec<Diagnostic>) {
    let symbols = symbols();
    let diagnostics = DiagnosticBag::default();
    let context = EvaluationContext::new(&diagnostics).with_program_counter(0x8000)
                                                       .with_symbols(&symbols);

    let value = context.evaluate(expression);
    (value, diagnostics.take())
}

fn add(left: Arc<Expression>, right: Arc<Expression>) -> Arc<Expression> {
    Expression::binary(BinaryOperator::Add, left, right)
}

#[test]
fn identifiers_and_program_counter() {
    let expr = add(Expression::identifier("width"), Arc::new(Expression::ProgramCounter));
    assert_eq!(evaluate(&expr), (Some(Value::UnsignedInt(0x8028)), Vec::new()));
}

#[test]
fn unknown_and_valueless_symbols_are_undetermined() {
    assert_eq!(evaluate(&Expression::identifier("nothing")), (None, Vec::new()));
    assert_eq!(evaluate(&Expression::identifier("table")), (None, Vec::new()));
}

#[test]
fn indexer_and_period_synthesize_identifiers() {
    let indexer = Expression::indexer(Expression::identifier("table"),
                                      add(Expression::value(1u64), Expression::value(2u64)));
    assert_eq!(evaluate(&indexer), (Some(Value::from("third")), Vec::new()));

    let period = Expression::period(Expression::identifier("table"), Expression::identifier("size"));
    assert_eq!(evaluate(&period), (Some(Value::UnsignedInt(8)), Vec::new()));

    let context = EvaluationContext::dummy();
    assert_eq!(*context.simplify(&indexer), *Expression::identifier("table[3]"));
    assert_eq!(*context.simplify(&period), *Expression::identifier("table.size"));
}

#[test]
fn nested_names_compose() {
    let context = EvaluationContext::dummy();
    let nested = Expression::indexer(Expression::period(Expression::identifier("a"),
                                                        Expression::identifier("b")),
                                     Expression::value(1.5));
    assert_eq!(*context.simplify(&nested), *Expression::identifier("a.b[1.5]"));

    let undetermined = Expression::indexer(Expression::identifier("a"), Expression::identifier("missing"));
    assert_eq!(*context.simplify(&undetermined), *Expression::undetermined());
}

#[test]
fn grouping_simplifies_to_its_child() {
    let child = add(Expression::value(1u64), Expression::value(2u64));
    let grouping = Expression::grouping(Arc::clone(&child));

    let context = EvaluationContext::dummy();
    assert!(Arc::ptr_eq(&context.simplify(&grouping), &child));
    assert_eq!(context.evaluate(&grouping), Some(Value::UnsignedInt(3)));
}

#[test]
fn value_oriented_nodes_fold_when_simplified() {
    let context = EvaluationContext::dummy();
    let sum = add(Expression::value(1u64), Expression::value(2u64));

    assert!(!sum.is_expression_oriented());
    assert_eq!(*context.simplify(&sum), *Expression::value(3u64));
}

#[test]
fn conditional_selects_a_branch() {
    let pick = |condition| {
        Expression::conditional(condition, Expression::value("yes"), Expression::value("no"))
    };

    assert_eq!(evaluate(&pick(Expression::value(1u64))).0, Some(Value::from("yes")));
    assert_eq!(evaluate(&pick(Expression::value(0.0))).0, Some(Value::from("no")));
    assert_eq!(evaluate(&pick(Expression::identifier("nothing"))), (None, Vec::new()));
}

#[test]
fn function_calls_delegate_to_the_callee() {
    let call = Expression::call(Expression::identifier("id"),
                                vec![add(Expression::value(40u64), Expression::value(2u64))]);
    assert_eq!(evaluate(&call), (Some(Value::UnsignedInt(42)), Vec::new()));
}

#[test]
fn calling_a_non_function_is_reported() {
    let call = Expression::call(Expression::identifier("width"), Vec::new());
    assert_eq!(evaluate(&call), (None, vec![Diagnostic::NotAFunction(Value::UnsignedInt(40))]));

    let call = Expression::call(Expression::identifier("nothing"), Vec::new());
    assert_eq!(evaluate(&call), (None, Vec::new()));
}

#[test]
fn one_diagnostic_per_failing_node() {
    let failing = Expression::binary(BinaryOperator::Div, Expression::value(1u64), Expression::value(0u64));
    let expr = add(Expression::unary(UnaryOperator::Negate, failing), Expression::value(1u64));

    assert_eq!(evaluate(&expr), (None, vec![Diagnostic::DivisionByZero]));
}

#[test]
fn both_operands_report_their_own_failures() {
    let failing = || {
        Expression::binary(BinaryOperator::Mul, Expression::value("x"), Expression::value(1u64))
    };
    let expr = add(failing(), failing());

    let (value, diagnostics) = evaluate(&expr);
    assert_eq!(value, None);
    assert_eq!(diagnostics,
               vec![Diagnostic::CannotConvertStringToFloat("x".into()),
                    Diagnostic::CannotConvertStringToFloat("x".into())]);
}

#[test]
fn function_operands_are_reported_with_the_operator() {
    let expr = Expression::binary(BinaryOperator::ShiftLeft,
                                  Expression::identifier("id"),
                                  Expression::value(1u64));
    assert_eq!(evaluate(&expr), (None, vec![Diagnostic::FunctionOperand { operator: "<<" }]));

    let expr = Expression::unary(UnaryOperator::BitNot, Expression::identifier("id"));
    assert_eq!(evaluate(&expr), (None, vec![Diagnostic::FunctionOperand { operator: "~" }]));
}

#[test]
fn logical_operators_skip_the_second_operand() {
    let failing = Expression::binary(BinaryOperator::Div, Expression::value(1u64), Expression::value(0u64));

    let or = Expression::binary(BinaryOperator::Or, Expression::value("set"), Arc::clone(&failing));
    assert_eq!(evaluate(&or), (Some(Value::from("set")), Vec::new()));

    let and = Expression::binary(BinaryOperator::And, Expression::identifier("nothing"), failing);
    assert_eq!(evaluate(&and), (None, Vec::new()));
}

#[test]
fn one_tree_many_threads() {
    let tree = add(Expression::identifier("width"),
                   Expression::binary(BinaryOperator::Mul,
                                      Arc::new(Expression::ProgramCounter),
                                      Expression::value(2u64)));

    let handles: Vec<_> = (0..8_u64).map(|pc| {
                                        let tree = Arc::clone(&tree);
                                        thread::spawn(move || {
                                            let symbols = symbols();
                                            let diagnostics = DiagnosticBag::default();
                                            let context =
                                                EvaluationContext::new(&diagnostics).with_program_counter(pc)
                                                                                    .with_symbols(&symbols);
                                            (pc, context.evaluate(&tree))
                                        })
                                    })
                                    .collect();

    for handle in handles {
        let (pc, value) = handle.join().unwrap();
        assert_eq!(value, Some(Value::UnsignedInt(40 + pc * 2)));
    }
}

#[test]
fn diagnostics_keep_emission_order() {
    let diagnostics = DiagnosticBag::default();
    diagnostics.emit(Diagnostic::DivisionByZero);
    diagnostics.emit(Diagnostic::NotAFunction(Value::UnsignedInt(1)));

    assert_eq!(diagnostics.first(), Some(Diagnostic::DivisionByZero));
    assert_eq!(diagnostics.len(), 2);
    diagnostics.take();
    assert_eq!(diagnostics.first(), None);
}

#[test]
fn contexts_report_their_assembly() {
    assert_eq!(EvaluationContext::dummy().assembly(), None);

    let registry = FunctionOrdering::new();
    let assembly = AssemblyToken::new();
    let diagnostics = DiagnosticBag::default();
    let context = EvaluationContext::new(&diagnostics).with_assembly(assembly, &registry);
    assert_eq!(context.assembly(), Some(assembly));
}

#[test]
fn concatenation_yields_strings() {
    let expr = add(Expression::value("id:"), Expression::identifier("width"));
    let (value, _) = evaluate(&expr);

    assert!(value.as_ref().is_some_and(Value::is_string));
    assert_eq!(value, Some(Value::from("id:40")));
    assert!(!Value::UnsignedInt(40).is_string());
}
