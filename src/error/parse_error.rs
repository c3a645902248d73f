use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of a command while arguments were still missing.
    #[error("Error on line {line}: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after a complete command.
    #[error("Error on line {line}: Extra tokens after command. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A path literal could not be read.
    #[error("Error on line {line}: Invalid path: {details}.")]
    InvalidPath {
        /// Why the path was rejected.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
