use std::iter::Peekable;

use crate::{
    ast::Command,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::utils::{
            parse_bool, parse_kind, parse_name, parse_operator, parse_optional_name, parse_path,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a single command.
///
/// A command is a keyword followed by its arguments and ends at a newline
/// or at the end of the script. The newline itself is left in the stream.
///
/// Grammar:
/// ```text
///     command := "add" name?
///              | "rename" name name
///              | "remove" name
///              | "set" name bool
///              | "flip" name
///              | "select" path kind
///              | "op" path ("and" | "or")
///              | "const" path bool
///              | "var" path name
///              | "clear" path
///              | "options" path
///              | "show" | "context" | "eval"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs, positioned at
///   the command keyword.
///
/// # Returns
/// The parsed [`Command`].
///
/// # Errors
/// - `UnexpectedToken` if the line does not start with a command keyword or
///   an argument has the wrong form.
/// - `UnexpectedEndOfInput` if arguments are missing. When `tokens` is
///   already exhausted there is no line to point at and the error carries
///   line 0.
/// - `UnexpectedTrailingTokens` if the line goes on after the command.
///
/// # Example
/// ```
/// use booltree::{
///     ast::{Command, NodeKind, Path},
///     interpreter::{lexer::tokenize, parser::core::parse_command},
/// };
///
/// let tokens = tokenize("select @l and").unwrap();
/// let command = parse_command(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(command,
///            Command::Select { path: "@l".parse::<Path>().unwrap(),
///                              kind: NodeKind::And,
///                              line: 1, });
/// ```
pub fn parse_command<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Command>
    where I: Iterator<Item = &'a (Token, usize)>
{
    // Line numbers start at 1, so 0 marks an error with no source line.
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "a command".to_string(),
                                                      line:     0, });
    };
    let line = *line;

    let command = match token {
        Token::Add => Command::Add { name: parse_optional_name(tokens, line)?,
                                     line },
        Token::Rename => {
            let from = parse_name(tokens, line)?;
            let to = parse_name(tokens, line)?;
            Command::Rename { from, to, line }
        },
        Token::Remove => Command::Remove { name: parse_name(tokens, line)?,
                                           line },
        Token::Set => {
            let name = parse_name(tokens, line)?;
            let value = parse_bool(tokens, line)?;
            Command::Set { name, value, line }
        },
        Token::Flip => Command::Flip { name: parse_name(tokens, line)?,
                                       line },
        Token::Select => {
            let path = parse_path(tokens, line)?;
            let kind = parse_kind(tokens, line)?;
            Command::Select { path, kind, line }
        },
        Token::Op => {
            let path = parse_path(tokens, line)?;
            let op = parse_operator(tokens, line)?;
            Command::SetOperator { path, op, line }
        },
        Token::Const => {
            let path = parse_path(tokens, line)?;
            let value = parse_bool(tokens, line)?;
            Command::SetConstant { path, value, line }
        },
        Token::Var => {
            let path = parse_path(tokens, line)?;
            let name = parse_name(tokens, line)?;
            Command::SetVariable { path, name, line }
        },
        Token::Clear => Command::Clear { path: parse_path(tokens, line)?,
                                         line },
        Token::Options => Command::Options { path: parse_path(tokens, line)?,
                                             line },
        Token::Show => Command::Show { line },
        Token::Context => Command::Context { line },
        Token::Eval => Command::Eval { line },
        tok => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected command, found {tok:?}"),
                                                     line });
        },
    };

    expect_end_of_command(tokens)?;

    Ok(command)
}

/// Checks that nothing but a newline or the end of the script follows.
///
/// # Errors
/// Returns `UnexpectedTrailingTokens` naming the first extra token.
fn expect_end_of_command<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        None | Some((Token::NewLine, _)) => Ok(()),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                        line:  *line, }),
    }
}

/// Parses every command of a tokenized script.
///
/// Blank lines are skipped.
///
/// # Errors
/// Returns the first error of [`parse_command`].
pub fn parse_script(tokens: &[(Token, usize)]) -> ParseResult<Vec<Command>> {
    let mut iter = tokens.iter().peekable();
    let mut commands = Vec::new();

    while iter.peek().is_some() {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }
        commands.push(parse_command(&mut iter)?);
    }

    Ok(commands)
}
