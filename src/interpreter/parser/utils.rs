use std::iter::Peekable;

use crate::{
    ast::{NodeKind, Operator, Path},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Takes the next argument token of the current command.
///
/// A newline or the end of the script both mean the command ended before
/// its arguments did.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the argument.
/// - `expected`: Description of the argument, used in the error.
/// - `line`: Line of the command, used when the script ends.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if there is no argument.
fn next_argument<'a, I>(tokens: &mut Peekable<I>,
                        expected: &str,
                        line: usize)
                        -> ParseResult<&'a (Token, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next_if(|(tok, _)| !matches!(tok, Token::NewLine))
          .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                            line })
}

/// Parses a variable name, either a plain identifier or a quoted name.
///
/// # Errors
/// Returns a `ParseError` if the command ends or the next token is not a
/// name.
pub(in crate::interpreter::parser) fn parse_name<'a, I>(tokens: &mut Peekable<I>,
                                                        line: usize)
                                                        -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match next_argument(tokens, "a variable name", line)? {
        (Token::Identifier(s) | Token::Quoted(s), _) => Ok(s.clone()),
        (tok, line) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected variable name, found {tok:?}"),
                                              line:  *line, })
        },
    }
}

/// Parses a name if the command has one more argument.
///
/// # Errors
/// Returns a `ParseError` if an argument is present but is not a name.
pub(in crate::interpreter::parser) fn parse_optional_name<'a, I>(tokens: &mut Peekable<I>,
                                                                 line: usize)
                                                                 -> ParseResult<Option<String>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        None | Some((Token::NewLine, _)) => Ok(None),
        Some(_) => parse_name(tokens, line).map(Some),
    }
}

/// Parses a tree path such as `@` or `@lr`.
///
/// # Errors
/// - `UnexpectedToken` if the next token is not a path.
/// - `InvalidPath` if the path contains steps other than `l` and `r`.
pub(in crate::interpreter::parser) fn parse_path<'a, I>(tokens: &mut Peekable<I>,
                                                        line: usize)
                                                        -> ParseResult<Path>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match next_argument(tokens, "a path", line)? {
        (Token::Path(raw), line) => {
            raw.parse()
               .map_err(|details| ParseError::InvalidPath { details,
                                                            line: *line })
        },
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("Expected path, found {tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses `true` or `false`.
///
/// # Errors
/// Returns a `ParseError` if the command ends or the next token is not a
/// boolean.
pub(in crate::interpreter::parser) fn parse_bool<'a, I>(tokens: &mut Peekable<I>,
                                                        line: usize)
                                                        -> ParseResult<bool>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match next_argument(tokens, "true or false", line)? {
        (Token::Bool(value), _) => Ok(*value),
        (tok, line) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected true or false, found {tok:?}"),
                                              line:  *line, })
        },
    }
}

/// Parses `and` or `or`.
///
/// # Errors
/// Returns a `ParseError` if the command ends or the next token is not an
/// operator.
pub(in crate::interpreter::parser) fn parse_operator<'a, I>(tokens: &mut Peekable<I>,
                                                            line: usize)
                                                            -> ParseResult<Operator>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match next_argument(tokens, "and or or", line)? {
        (Token::And, _) => Ok(Operator::And),
        (Token::Or, _) => Ok(Operator::Or),
        (tok, line) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected and or or, found {tok:?}"),
                                              line:  *line, })
        },
    }
}

/// Parses one of the kinds a placeholder can take.
///
/// Grammar: `kind := "constant" | "argument" | "and" | "or"`
///
/// # Errors
/// Returns a `ParseError` if the command ends or the next token is not a
/// kind.
pub(in crate::interpreter::parser) fn parse_kind<'a, I>(tokens: &mut Peekable<I>,
                                                        line: usize)
                                                        -> ParseResult<NodeKind>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match next_argument(tokens, "a node kind", line)? {
        (Token::Constant, _) => Ok(NodeKind::Constant),
        (Token::Argument, _) => Ok(NodeKind::Argument),
        (Token::And, _) => Ok(NodeKind::And),
        (Token::Or, _) => Ok(NodeKind::Or),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("Expected constant, argument, and or or, found {tok:?}"),
                                                         line:  *line, }),
    }
}
