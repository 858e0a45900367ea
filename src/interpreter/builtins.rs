use std::{cmp::Ordering, sync::Arc};

use crate::{
    ast::Expression,
    error::Diagnostic,
    interpreter::{
        evaluator::core::EvaluationContext,
        value::{
            core::Value,
            function::{Function, FunctionRef},
        },
    },
};

/// Creates a fresh handle for every predefined function.
///
/// Each call yields handles with their own identity, so two sessions never
/// share function values.
///
/// - `str(x)`: the canonical text of `x`.
/// - `len(x)`: the number of characters in the canonical text of `x`.
/// - `min(a, ...)` and `max(a, ...)`: the least or greatest argument, ordered
///   the way the comparison operators order values.
/// - `defined(name)`: `1` if the symbol named by the argument exists, `0`
///   otherwise. The argument is not evaluated when it is an identifier.
#[must_use]
pub fn predefined() -> Vec<FunctionRef> {
    vec![FunctionRef::new(Str),
         FunctionRef::new(Len),
         FunctionRef::new(Extremum { name: "min", keep: Ordering::Less }),
         FunctionRef::new(Extremum { name: "max", keep: Ordering::Greater }),
         FunctionRef::new(Defined)]
}

/// Checks the argument count, emitting `ArgumentCountMismatch` on failure.
fn check_arity(context: &EvaluationContext<'_>,
               function: &str,
               arguments: &[Arc<Expression>],
               minimum: usize,
               exact: bool)
               -> bool {
    let found = arguments.len();
    if found == minimum || (!exact && found > minimum) {
        return true;
    }

    let expected = if exact { minimum.to_string() } else { format!("at least {minimum}") };
    context.emit(Diagnostic::ArgumentCountMismatch { function: function.to_string(),
                                                     expected,
                                                     found });
    false
}

fn constant(value: Option<Value>) -> Arc<Expression> {
    Arc::new(Expression::Value(value))
}

struct Str;

impl Function for Str {
    fn name(&self) -> &str {
        "str"
    }

    fn call(&self, arguments: &[Arc<Expression>], context: &EvaluationContext<'_>) -> Arc<Expression> {
        if !check_arity(context, self.name(), arguments, 1, true) {
            return Expression::undetermined();
        }

        constant(context.evaluate(&arguments[0]).map(|value| Value::String(value.to_string())))
    }
}

struct Len;

impl Function for Len {
    fn name(&self) -> &str {
        "len"
    }

    fn call(&self, arguments: &[Arc<Expression>], context: &EvaluationContext<'_>) -> Arc<Expression> {
        if !check_arity(context, self.name(), arguments, 1, true) {
            return Expression::undetermined();
        }

        constant(context.evaluate(&arguments[0])
                        .map(|value| {
                            let count = value.to_string().chars().count();
                            Value::UnsignedInt(u64::try_from(count).unwrap_or(u64::MAX))
                        }))
    }
}

/// `min` or `max`: keeps the candidate that orders as `keep` against the
/// current pick.
struct Extremum {
    name: &'static str,
    keep: Ordering,
}

impl Function for Extremum {
    fn name(&self) -> &str {
        self.name
    }

    fn call(&self, arguments: &[Arc<Expression>], context: &EvaluationContext<'_>) -> Arc<Expression> {
        if !check_arity(context, self.name, arguments, 1, false) {
            return Expression::undetermined();
        }

        let values: Option<Vec<Value>> = arguments.iter().map(|argument| context.evaluate(argument)).collect();
        let Some(mut values) = values else {
            return Expression::undetermined();
        };

        let mut pick = values.remove(0);
        for candidate in values {
            if context.compare_values(&candidate, &pick) == Some(self.keep) {
                pick = candidate;
            }
        }

        constant(Some(pick))
    }
}

struct Defined;

impl Function for Defined {
    fn name(&self) -> &str {
        "defined"
    }

    fn call(&self, arguments: &[Arc<Expression>], context: &EvaluationContext<'_>) -> Arc<Expression> {
        if !check_arity(context, self.name(), arguments, 1, true) {
            return Expression::undetermined();
        }

        constant(context.name_of(&arguments[0])
                        .map(|name| Value::from(context.lookup(&name).is_some())))
    }
}
