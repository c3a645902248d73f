use std::fmt;

use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::{
    ast::{Command, Node, Path, Side},
    error::{
        BuildError, SessionError, build_error::BuildResult, session_error::SessionResult,
    },
    interpreter::{
        builder::{self, variable_options},
        evaluator::core::{Context, DEFAULT_NAME, Truth, truth_text},
        lexer::tokenize,
        parser::core::parse_script,
    },
};

/// Output produced by the query commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The current evaluation result (`eval`).
    Result(Truth),
    /// The tree drawn as an outline (`show`).
    Tree(String),
    /// The context entries in order (`context`).
    Context(Vec<(String, bool)>),
    /// The names a variable node may refer to (`options`).
    Options(Vec<String>),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Result(truth) => write!(f, "result: {}", truth_text(*truth)),
            Self::Tree(outline) => write!(f, "{}", outline.trim_end()),
            Self::Context(entries) if entries.is_empty() => write!(f, "(no variables)"),
            Self::Context(entries) => {
                let lines = entries.iter()
                                   .map(|(name, value)| format!("{name} = {value}"))
                                   .collect::<Vec<_>>();
                write!(f, "{}", lines.join("\n"))
            },
            Self::Options(names) => write!(f, "{}", names.join(", ")),
        }
    }
}

/// One tree being built together with the context it is evaluated against.
///
/// This is the state the interactive builder keeps: the expression the user
/// is composing and the variables they have defined. A fresh session holds a
/// single placeholder and no variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The root of the expression. `None` when there is no tree at all.
    pub tree:    Option<Node>,
    /// The variable assignment.
    pub context: Context,
}

impl Default for Session {
    fn default() -> Self {
        Self { tree:    Some(Node::Unselected),
               context: Context::new(), }
    }
}

impl Session {
    /// Creates a session with a placeholder root and an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates the current tree against the current context.
    #[must_use]
    pub fn evaluate(&self) -> Truth {
        self.context.evaluate(self.tree.as_ref())
    }

    /// Draws the current tree as an indented outline.
    ///
    /// Each line shows one position: operators as `and`/`or`, leaves as
    /// their value or variable name, placeholders as `select...`, and
    /// operator children that were never built as `_`.
    ///
    /// # Example
    /// ```
    /// use booltree::{ast::Node, interpreter::session::Session};
    ///
    /// let mut session = Session::new();
    /// session.tree = Some(Node::and(Node::constant(true), Node::Unselected));
    ///
    /// assert_eq!(session.outline().trim_end(), "and\n├── true\n└── select...");
    /// ```
    #[must_use]
    pub fn outline(&self) -> String {
        match &self.tree {
            Some(node) => outline_of(Some(node)).to_string(),
            None => "(no tree)".to_string(),
        }
    }

    /// Executes a single command.
    ///
    /// Context and tree edits change the session and return `None`; the
    /// query commands `show`, `context`, `options` and `eval` return a
    /// [`Report`].
    ///
    /// # Errors
    /// - `UnknownVariable` when `rename`, `remove` or `flip` name an entry
    ///   that does not exist.
    /// - `Build` when a tree edit does not fit the current tree.
    pub fn execute(&mut self, command: &Command) -> SessionResult<Option<Report>> {
        let line = command.line_number();
        debug!(line, ?command, "executing command");

        match command {
            Command::Add { name: None, .. } => {
                self.context.add_default();
                debug!(name = DEFAULT_NAME, "added variable");
            },
            Command::Add { name: Some(name), .. } => {
                self.context.set(name.as_str(), true);
                debug!(%name, "added variable");
            },
            Command::Rename { from, to, .. } => {
                self.context
                    .rename(from, to.as_str())
                    .ok_or_else(|| unknown_variable(from, line))?;
            },
            Command::Remove { name, .. } => {
                self.context
                    .remove(name)
                    .ok_or_else(|| unknown_variable(name, line))?;
            },
            Command::Set { name, value, .. } => {
                self.context.set(name.as_str(), *value);
            },
            Command::Flip { name, .. } => {
                self.context
                    .flip(name)
                    .ok_or_else(|| unknown_variable(name, line))?;
            },
            Command::Select { path, kind, .. } => {
                builder::select(&mut self.tree, path, *kind, &self.context).map_err(build(line))?;
            },
            Command::SetOperator { path, op, .. } => {
                builder::set_operator(&mut self.tree, path, *op).map_err(build(line))?;
            },
            Command::SetConstant { path, value, .. } => {
                builder::set_constant(&mut self.tree, path, *value).map_err(build(line))?;
            },
            Command::SetVariable { path, name, .. } => {
                builder::set_variable(&mut self.tree, path, name).map_err(build(line))?;
            },
            Command::Clear { path, .. } => {
                builder::clear(&mut self.tree, path).map_err(build(line))?;
            },
            Command::Options { path, .. } => {
                let options = self.options_at(path).map_err(build(line))?;
                return Ok(Some(Report::Options(options)));
            },
            Command::Show { .. } => return Ok(Some(Report::Tree(self.outline()))),
            Command::Context { .. } => {
                let entries = self.context
                                  .iter()
                                  .map(|(name, value)| (name.to_string(), value))
                                  .collect();
                return Ok(Some(Report::Context(entries)));
            },
            Command::Eval { .. } => return Ok(Some(Report::Result(self.evaluate()))),
        }

        Ok(None)
    }

    /// Lists the names the variable node at `path` may refer to.
    ///
    /// # Errors
    /// `UnexpectedNode` if the node at `path` is not a variable, or any path
    /// error of [`builder::node_at`].
    pub fn options_at(&self, path: &Path) -> BuildResult<Vec<String>> {
        match builder::node_at(self.tree.as_ref(), path)? {
            Node::Variable(name) => Ok(variable_options(&self.context, name)),
            other => Err(BuildError::UnexpectedNode { path:     path.clone(),
                                                      expected: "argument",
                                                      found:    other.kind_name(), }),
        }
    }

    /// Runs a whole script against this session.
    ///
    /// The script is tokenized and parsed completely before the first
    /// command runs, so a syntax error anywhere leaves the session untouched.
    /// Execution stops at the first failing command.
    ///
    /// # Returns
    /// The reports of the query commands, in order.
    ///
    /// # Errors
    /// Returns the first `ParseError` or `SessionError`.
    ///
    /// # Example
    /// ```
    /// use booltree::interpreter::session::{Report, Session};
    ///
    /// let mut session = Session::new();
    /// let reports = session.run("add x\nselect @ argument\nflip x\neval").unwrap();
    ///
    /// assert_eq!(reports, [Report::Result(Some(false))]);
    /// ```
    #[instrument(level = "debug", skip_all, fields(bytes = script.len()))]
    pub fn run(&mut self, script: &str) -> Result<Vec<Report>, Box<dyn std::error::Error>> {
        let tokens = tokenize(script)?;
        let commands = parse_script(&tokens)?;
        info!(commands = commands.len(), "parsed script");

        let mut reports = Vec::new();
        for command in &commands {
            if let Some(report) = self.execute(command)? {
                reports.push(report);
            }
        }

        Ok(reports)
    }
}

fn unknown_variable(name: &str, line: usize) -> SessionError {
    SessionError::UnknownVariable { name: name.to_string(),
                                    line }
}

fn build(line: usize) -> impl FnOnce(BuildError) -> SessionError {
    move |source| SessionError::Build { source, line }
}

fn outline_of(node: Option<&Node>) -> Tree<String> {
    let Some(node) = node else {
        return Tree::new("_".to_string());
    };

    match node {
        Node::Constant(value) => Tree::new(value.to_string()),
        Node::Variable(name) => Tree::new(format!("{name:?}")),
        Node::Unselected => Tree::new("select...".to_string()),
        Node::And { .. } | Node::Or { .. } => {
            let label = node.as_operator()
                            .map_or_else(String::new, |op| op.to_string());
            let leaves = [Side::Left, Side::Right].map(|side| outline_of(node.child(side)));
            Tree::new(label).with_leaves(leaves)
        },
    }
}
