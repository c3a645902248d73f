use indexmap::IndexMap;
use tracing::trace;

use crate::{
    ast::{Node, Operator},
    interpreter::evaluator::logic::eval_logic,
};

/// Result of evaluating a tree.
///
/// `Some(value)` when the tree resolves to a boolean, `None` when it is
/// unknown: an absent tree, a placeholder, or a variable missing from the
/// context. Unknown is an ordinary outcome, not a failure.
pub type Truth = Option<bool>;

/// Name given to entries created by [`Context::add_default`].
pub const DEFAULT_NAME: &str = "new arg";

/// Stores the variable assignment a tree is evaluated against.
///
/// Maps each variable name to its boolean value. Names are unique. Entries
/// keep the order they were added in, which is the order they are listed and
/// the order the builder picks a default name from; evaluation never depends
/// on it.
///
/// ## Usage
///
/// `Context` is edited by the user between evaluations and only read while
/// evaluating. All edits are plain map operations, see [`Context::rename`]
/// for the one with extra semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    variables: IndexMap<String, bool>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a tree against this context.
    ///
    /// This is the method form of [`evaluate`].
    #[must_use]
    pub fn evaluate(&self, tree: Option<&Node>) -> Truth {
        evaluate(tree, self)
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.variables.get(name).copied()
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` to `value`, returning the previous value.
    ///
    /// An existing entry keeps its position; a new one is appended.
    pub fn set(&mut self, name: impl Into<String>, value: bool) -> Option<bool> {
        self.variables.insert(name.into(), value)
    }

    /// Adds the entry `"new arg"` bound to `true`.
    ///
    /// If the entry already exists its value is reset to `true`.
    pub fn add_default(&mut self) {
        self.set(DEFAULT_NAME, true);
    }

    /// Renames an entry, moving its value to the new name.
    ///
    /// The old name is removed and the new name is placed last. If `to` is
    /// already bound, its value is overwritten by the moved one and it keeps
    /// its position. Renaming a missing entry changes nothing.
    ///
    /// # Returns
    /// The moved value, or `None` if `from` was not bound.
    ///
    /// # Example
    /// ```
    /// use booltree::interpreter::evaluator::core::Context;
    ///
    /// let mut ctx: Context = [("a", false), ("b", true)].into_iter().collect();
    /// assert_eq!(ctx.rename("a", "c"), Some(false));
    ///
    /// assert_eq!(ctx.get("c"), Some(false));
    /// assert!(!ctx.contains("a"));
    /// assert_eq!(ctx.names().collect::<Vec<_>>(), ["b", "c"]);
    /// ```
    pub fn rename(&mut self, from: &str, to: impl Into<String>) -> Option<bool> {
        let value = self.variables.shift_remove(from)?;
        self.variables.insert(to.into(), value);
        Some(value)
    }

    /// Removes an entry, leaving every other entry and their order intact.
    pub fn remove(&mut self, name: &str) -> Option<bool> {
        self.variables.shift_remove(name)
    }

    /// Negates the value bound to `name`.
    ///
    /// # Returns
    /// The new value, or `None` if `name` was not bound.
    pub fn flip(&mut self, name: &str) -> Option<bool> {
        let value = self.variables.get_mut(name)?;
        *value = !*value;
        Some(*value)
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// The first name, which is what a new variable node refers to.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.names().next()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the context has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Context {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self { variables: iter.into_iter()
                              .map(|(name, value)| (name.into(), value))
                              .collect(), }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.iter()
                          .map(|(name, value)| format!("{name} = {value}"))
                          .collect::<Vec<_>>();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

/// Evaluates a tree against a context.
///
/// This is the main entry point for evaluation. It is total: every tree and
/// context yield `Some(true)`, `Some(false)` or `None`, and nothing panics.
///
/// - An absent tree and [`Node::Unselected`] are unknown.
/// - A constant yields its value.
/// - A variable yields its context value, or unknown when the name is not
///   bound.
/// - `and`/`or` evaluate both children, absent children being unknown, and
///   combine them with [`eval_logic`].
///
/// # Example
/// ```
/// use booltree::{
///     ast::Node,
///     interpreter::evaluator::core::{Context, evaluate},
/// };
///
/// let ctx = Context::new();
/// let tree = Node::or(Node::constant(true), Node::variable("missing"));
///
/// assert_eq!(evaluate(Some(&tree), &ctx), Some(true));
/// assert_eq!(evaluate(None, &ctx), None);
/// ```
#[must_use]
pub fn evaluate(tree: Option<&Node>, context: &Context) -> Truth {
    let Some(node) = tree else {
        return None;
    };

    let truth = match node {
        Node::Constant(value) => Some(*value),
        Node::Variable(name) => context.get(name),
        Node::Unselected => None,
        Node::And { left, right } => eval_logic(Operator::And,
                                                evaluate(left.as_deref(), context),
                                                evaluate(right.as_deref(), context)),
        Node::Or { left, right } => eval_logic(Operator::Or,
                                               evaluate(left.as_deref(), context),
                                               evaluate(right.as_deref(), context)),
    };

    trace!(kind = node.kind_name(), result = truth_text(truth), "evaluated node");
    truth
}

/// Renders a [`Truth`] the way results are shown to users.
///
/// # Example
/// ```
/// use booltree::interpreter::evaluator::core::truth_text;
///
/// assert_eq!(truth_text(Some(true)), "true");
/// assert_eq!(truth_text(None), "undefined");
/// ```
#[must_use]
pub const fn truth_text(truth: Truth) -> &'static str {
    match truth {
        Some(true) => "true",
        Some(false) => "false",
        None => "undefined",
    }
}
