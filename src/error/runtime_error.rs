use thiserror::Error;

use crate::error::Diagnostic;

/// Represents all errors the script driver raises while running statements.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Evaluating a statement raised a diagnostic.
    #[error("Error on line {line}: {diagnostic}.")]
    Diagnostic {
        /// The first diagnostic the statement raised.
        diagnostic: Diagnostic,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// An `assert` statement evaluated to a false or undetermined value.
    #[error("Error on line {line}: Assertion failed.")]
    AssertionFailed {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `let` statement tried to bind a name that is already defined.
    #[error("Error on line {line}: Symbol '{name}' is already defined.")]
    SymbolRedefinition {
        /// The name of the symbol.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `org` statement did not evaluate to a non-negative integer.
    #[error("Error on line {line}: Origin must be a non-negative integer.")]
    InvalidOrigin {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A predefined symbol given as `NAME=EXPR` was malformed.
    #[error("Invalid definition '{definition}': expected NAME=EXPR.")]
    InvalidDefinition {
        /// The definition as written.
        definition: String,
    },
}
