use thiserror::Error;

use crate::error::BuildError;

/// Represents all errors that can occur while executing commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A context edit named an entry that does not exist.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A tree edit did not fit the current tree.
    #[error("Error on line {line}: {source}.")]
    Build {
        /// The underlying builder error.
        #[source]
        source: BuildError,
        /// The source line where the error occurred.
        line:   usize,
    },
}

/// Result type used when executing commands.
pub type SessionResult<T> = Result<T, SessionError>;
