/// Command parsing.
///
/// Turns the tokens of one script line into a [`crate::ast::Command`].
pub mod core;

/// Utility functions for the parser.
///
/// Provides the argument parsers shared by several commands: names, paths,
/// booleans, operators and node kinds.
pub mod utils;
