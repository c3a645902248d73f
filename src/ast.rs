use std::fmt;

/// An element of a boolean expression tree.
///
/// `Node` covers every kind of position a tree can hold: fixed constants,
/// references into the variable context, binary operators and the
/// placeholder used while a position has not been chosen yet. Operator
/// children are optional because a tree is built one position at a time and
/// a child may simply not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A fixed boolean leaf.
    Constant(bool),
    /// A leaf referencing a name in the context.
    Variable(String),
    /// Logical and of two subtrees.
    And {
        /// Left operand, if built.
        left:  Option<Box<Self>>,
        /// Right operand, if built.
        right: Option<Box<Self>>,
    },
    /// Logical or of two subtrees.
    Or {
        /// Left operand, if built.
        left:  Option<Box<Self>>,
        /// Right operand, if built.
        right: Option<Box<Self>>,
    },
    /// A position whose kind has not been selected yet.
    Unselected,
}

impl Node {
    /// Creates a constant leaf.
    #[must_use]
    pub const fn constant(value: bool) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable leaf.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates an `and` node with both children present.
    ///
    /// ## Example
    /// ```
    /// use booltree::ast::Node;
    ///
    /// let node = Node::and(Node::constant(true), Node::variable("x"));
    /// assert_eq!(node.to_string(), "(true and x)");
    /// ```
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::operator(Operator::And, Some(left), Some(right))
    }

    /// Creates an `or` node with both children present.
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::operator(Operator::Or, Some(left), Some(right))
    }

    /// Creates an operator node from an [`Operator`] and optional children.
    #[must_use]
    pub fn operator(op: Operator, left: Option<Self>, right: Option<Self>) -> Self {
        let left = left.map(Box::new);
        let right = right.map(Box::new);
        match op {
            Operator::And => Self::And { left, right },
            Operator::Or => Self::Or { left, right },
        }
    }

    /// Creates an operator node whose children are both [`Node::Unselected`].
    ///
    /// This is the shape a placeholder takes once the user picks `and` or
    /// `or` for it: two fresh positions waiting for a choice.
    #[must_use]
    pub fn placeholder_operator(op: Operator) -> Self {
        Self::operator(op, Some(Self::Unselected), Some(Self::Unselected))
    }

    /// Returns the operator of an `and`/`or` node, `None` for every other
    /// kind.
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::And { .. } => Some(Operator::And),
            Self::Or { .. } => Some(Operator::Or),
            _ => None,
        }
    }

    /// Returns the child on `side`.
    ///
    /// Leaves and placeholders have no children, and an operator child that
    /// has not been built yet is reported as `None` as well.
    #[must_use]
    pub fn child(&self, side: Side) -> Option<&Self> {
        match (self, side) {
            (Self::And { left, .. } | Self::Or { left, .. }, Side::Left) => left.as_deref(),
            (Self::And { right, .. } | Self::Or { right, .. }, Side::Right) => right.as_deref(),
            _ => None,
        }
    }

    /// Returns a mutable handle to the child slot on `side`.
    ///
    /// Unlike [`Node::child`] this exposes the slot itself, so a caller can
    /// fill an absent child. Leaves and placeholders have no slots.
    pub fn child_mut(&mut self, side: Side) -> Option<&mut Option<Box<Self>>> {
        match (self, side) {
            (Self::And { left, .. } | Self::Or { left, .. }, Side::Left) => Some(left),
            (Self::And { right, .. } | Self::Or { right, .. }, Side::Right) => Some(right),
            _ => None,
        }
    }

    /// The kind name shown to users and used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::Variable(_) => "argument",
            Self::And { .. } => "and",
            Self::Or { .. } => "or",
            Self::Unselected => "unselected",
        }
    }

    /// Number of levels in the tree, a single leaf counting as one.
    ///
    /// ## Example
    /// ```
    /// use booltree::ast::Node;
    ///
    /// let tree = Node::or(Node::constant(false),
    ///                     Node::and(Node::variable("a"), Node::variable("b")));
    /// assert_eq!(tree.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let left = self.child(Side::Left).map_or(0, Self::depth);
        let right = self.child(Side::Right).map_or(0, Self::depth);
        1 + left.max(right)
    }

    /// Number of nodes in the tree, placeholders included.
    #[must_use]
    pub fn size(&self) -> usize {
        let left = self.child(Side::Left).map_or(0, Self::size);
        let right = self.child(Side::Right).map_or(0, Self::size);
        1 + left + right
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_child(f: &mut fmt::Formatter<'_>, child: Option<&Node>) -> fmt::Result {
            match child {
                Some(node) => write!(f, "{node}"),
                None => write!(f, "_"),
            }
        }

        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable(name) if name.is_empty() => write!(f, "\"\""),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Unselected => write!(f, "?"),
            Self::And { .. } | Self::Or { .. } => {
                write!(f, "(")?;
                write_child(f, self.child(Side::Left))?;
                if let Some(op) = self.as_operator() {
                    write!(f, " {op} ")?;
                }
                write_child(f, self.child(Side::Right))?;
                write!(f, ")")
            },
        }
    }
}

/// A binary boolean operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}

/// The kinds a placeholder can be turned into.
///
/// These are the entries of the "select..." prompt: a constant, a reference
/// to a context entry (an argument), or one of the two operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A constant leaf, initially `true`.
    Constant,
    /// A variable leaf, initially the first context name.
    Argument,
    /// An `and` node with two placeholder children.
    And,
    /// An `or` node with two placeholder children.
    Or,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Constant => "constant",
            Self::Argument => "argument",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{kind}")
    }
}

/// One step from an operator node to one of its children.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left operand.
    Left,
    /// The right operand.
    Right,
}

/// The location of a node, as the steps taken from the root to reach it.
///
/// Paths are written `@` followed by one letter per step, `l` or `r`. The
/// empty path `@` is the root.
///
/// ## Example
/// ```
/// use booltree::ast::{Path, Side};
///
/// let path: Path = "@lr".parse().unwrap();
/// assert_eq!(path.steps(), &[Side::Left, Side::Right]);
/// assert_eq!(path.to_string(), "@lr");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Side>,
}

impl Path {
    /// The path of the root node.
    #[must_use]
    pub const fn root() -> Self {
        Self { steps: Vec::new() }
    }

    /// The steps of this path, from the root down.
    #[must_use]
    pub fn steps(&self) -> &[Side] {
        &self.steps
    }

    /// Whether this path designates the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::str::FromStr for Path {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix('@')
                    .ok_or_else(|| format!("path '{s}' must start with '@'"))?;
        let steps = rest.chars()
                        .map(|c| match c {
                            'l' => Ok(Side::Left),
                            'r' => Ok(Side::Right),
                            other => Err(format!("invalid step '{other}' in path '{s}'")),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@")?;
        for side in &self.steps {
            match side {
                Side::Left => write!(f, "l")?,
                Side::Right => write!(f, "r")?,
            }
        }
        Ok(())
    }
}

/// A single edit or query issued against a session.
///
/// Commands are the units parsed from script lines. Each one corresponds to
/// an action of the interactive builder: editing the context, choosing what
/// a tree position holds, or asking for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Adds a context entry with value `true`.
    Add {
        /// Name of the entry. `None` uses the default name.
        name: Option<String>,
        /// Line number in the script.
        line: usize,
    },
    /// Renames a context entry, keeping its value.
    Rename {
        /// Current name.
        from: String,
        /// New name.
        to:   String,
        /// Line number in the script.
        line: usize,
    },
    /// Removes a context entry.
    Remove {
        /// Name of the entry.
        name: String,
        /// Line number in the script.
        line: usize,
    },
    /// Sets the value of a context entry, inserting it if missing.
    Set {
        /// Name of the entry.
        name:  String,
        /// The new value.
        value: bool,
        /// Line number in the script.
        line:  usize,
    },
    /// Negates the value of a context entry.
    Flip {
        /// Name of the entry.
        name: String,
        /// Line number in the script.
        line: usize,
    },
    /// Chooses the kind of a placeholder.
    Select {
        /// Location of the placeholder.
        path: Path,
        /// The chosen kind.
        kind: NodeKind,
        /// Line number in the script.
        line: usize,
    },
    /// Switches an operator node between `and` and `or`.
    SetOperator {
        /// Location of the operator node.
        path: Path,
        /// The new operator.
        op:   Operator,
        /// Line number in the script.
        line: usize,
    },
    /// Changes the value of a constant node.
    SetConstant {
        /// Location of the constant node.
        path:  Path,
        /// The new value.
        value: bool,
        /// Line number in the script.
        line:  usize,
    },
    /// Points a variable node at another name.
    SetVariable {
        /// Location of the variable node.
        path: Path,
        /// The referenced name.
        name: String,
        /// Line number in the script.
        line: usize,
    },
    /// Replaces a subtree with a placeholder.
    Clear {
        /// Location of the subtree.
        path: Path,
        /// Line number in the script.
        line: usize,
    },
    /// Lists the names a variable node may choose from.
    Options {
        /// Location of the variable node.
        path: Path,
        /// Line number in the script.
        line: usize,
    },
    /// Reports the tree as an outline.
    Show {
        /// Line number in the script.
        line: usize,
    },
    /// Reports the context entries.
    Context {
        /// Line number in the script.
        line: usize,
    },
    /// Reports the current evaluation result.
    Eval {
        /// Line number in the script.
        line: usize,
    },
}

impl Command {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use booltree::ast::Command;
    ///
    /// let command = Command::Flip { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(command.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Add { line, .. }
            | Self::Rename { line, .. }
            | Self::Remove { line, .. }
            | Self::Set { line, .. }
            | Self::Flip { line, .. }
            | Self::Select { line, .. }
            | Self::SetOperator { line, .. }
            | Self::SetConstant { line, .. }
            | Self::SetVariable { line, .. }
            | Self::Clear { line, .. }
            | Self::Options { line, .. }
            | Self::Show { line }
            | Self::Context { line }
            | Self::Eval { line } => *line,
        }
    }
}
