//! Errors raised while grouping and translating a symbol stream.

use thiserror::Error;

/// The symbol stream is not a well-formed criteria.
///
/// Both variants reject the whole input; no partial result is produced.
/// `input` is the rendered symbol stream the error was found in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A comparison run is incomplete or has the wrong shape.
    #[error("Syntax error in {input}: Malformed expression: {reason}")]
    MalformedExpression { input: String, reason: String },

    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("Syntax error in {input}: Mismatched parenthesis")]
    MismatchedParenthesis { input: String },
}

/// Result type for parser operations
pub type SyntaxResult<T> = Result<T, SyntaxError>;
