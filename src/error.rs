/// Evaluation diagnostics.
///
/// Defines the typed diagnostics the coercion engine and the expression
/// evaluator raise through a diagnostic sink. A diagnostic never aborts
/// evaluation: the failing node evaluates to no value and the surrounding
/// tree carries on.
pub mod diagnostic;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code for the reference front-end. Parse errors include syntax mistakes,
/// unexpected tokens and invalid literals.
pub mod parse_error;
/// Script errors.
///
/// Contains the errors the script driver raises while running statements:
/// diagnostics escalated to failures, failed assertions, symbol
/// redefinitions and invalid origins.
pub mod runtime_error;

pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
