use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a command script.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the command language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `add`
    #[token("add")]
    Add,
    /// `rename`
    #[token("rename")]
    Rename,
    /// `remove`
    #[token("remove")]
    Remove,
    /// `set`
    #[token("set")]
    Set,
    /// `flip`
    #[token("flip")]
    Flip,
    /// `select`
    #[token("select")]
    Select,
    /// `op`
    #[token("op")]
    Op,
    /// `const`
    #[token("const")]
    Const,
    /// `var`
    #[token("var")]
    Var,
    /// `clear`
    #[token("clear")]
    Clear,
    /// `options`
    #[token("options")]
    Options,
    /// `show`
    #[token("show")]
    Show,
    /// `context`
    #[token("context")]
    Context,
    /// `eval`
    #[token("eval")]
    Eval,
    /// `constant`
    #[token("constant")]
    Constant,
    /// `argument`
    #[token("argument")]
    Argument,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// Path tokens such as `@` or `@lr`. Validated by the parser.
    #[regex(r"@[a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Path(String),
    /// Identifier tokens; variable names such as `x` or `door_open`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Quoted names, for variables whose name is not an identifier, such as
    /// `"new arg"`.
    #[regex(r#""[^"\n]*""#, parse_quoted, allow_greedy = true)]
    Quoted(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,

    /// Line breaks end a command.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the script being tokenized.
    pub line: usize,
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the surrounding quotes from a quoted name.
fn parse_quoted(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    slice.strip_prefix('"')
         .and_then(|s| s.strip_suffix('"'))
         .map(str::to_string)
}

/// Splits a script into tokens paired with their line numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first piece of text that is
/// not a token.
///
/// # Example
/// ```
/// use booltree::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("flip \"new arg\"\neval").unwrap();
/// assert_eq!(tokens,
///            [(Token::Flip, 1),
///             (Token::Quoted("new arg".to_string()), 1),
///             (Token::NewLine, 2),
///             (Token::Eval, 2)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}
