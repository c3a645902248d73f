/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// command scripts. Parse errors include unknown characters, misplaced
/// keywords, malformed paths and missing arguments, all detected before any
/// command runs.
pub mod parse_error;
/// Tree building errors.
///
/// Raised when an edit addresses a position that does not exist or holds a
/// node of the wrong kind.
pub mod build_error;
/// Session errors.
///
/// Contains the errors a command can raise while it is executed against a
/// session, such as editing a context entry that does not exist.
pub mod session_error;

pub use build_error::BuildError;
pub use parse_error::ParseError;
pub use session_error::SessionError;
