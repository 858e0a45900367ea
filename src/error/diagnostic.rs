use thiserror::Error;

use crate::interpreter::value::core::Value;

/// A recoverable problem raised while evaluating an expression.
///
/// Diagnostics travel through a [`DiagnosticSink`] rather than through
/// `Result` returns of the public evaluation API: the node that raised one
/// evaluates to no value and exactly one diagnostic is emitted for it.
///
/// [`DiagnosticSink`]: crate::interpreter::evaluator::sink::DiagnosticSink
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// A function value was used as the operand of an operator that has no
    /// meaning for functions.
    #[error("function operand is not applicable to operator '{operator}'")]
    FunctionOperand {
        /// The operator's name as written in source.
        operator: &'static str,
    },
    /// The divisor of a division or modulus was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A string operand could not be read as a float.
    #[error("cannot convert string \"{0}\" to float")]
    CannotConvertStringToFloat(String),
    /// The subject of a function call evaluated to something other than a
    /// function.
    #[error("subject of function call is not a function: {0}")]
    NotAFunction(Value),
    /// A builtin function received the wrong number of arguments.
    #[error("function '{function}' expects {expected} argument(s) but received {found}")]
    ArgumentCountMismatch {
        /// The function's name.
        function: String,
        /// Human readable expected count, such as `1` or `at least 1`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
}
