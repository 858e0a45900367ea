use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing bracket `]` was expected but not found.
    #[error("Error on line {line}: Expected closing bracket ']' but none found.")]
    ExpectedClosingBracket {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `:` of a conditional expression was expected but not found.
    #[error("Error on line {line}: Expected ':' in conditional expression.")]
    ExpectedColon {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after parsing should have completed.
    #[error("Error on line {line}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The lexer could not make sense of a piece of input.
    #[error("Error on line {line}: Invalid input '{slice}'.")]
    InvalidInput {
        /// The offending source text.
        slice: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}
