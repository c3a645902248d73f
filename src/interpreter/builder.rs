use tracing::{debug, instrument};

use crate::{
    ast::{Node, NodeKind, Operator, Path},
    error::build_error::{BuildError, BuildResult},
    interpreter::evaluator::core::Context,
};

/// Returns the node at `path`.
///
/// # Errors
/// - `NoTree` if `root` is absent.
/// - `PathNotFound` if a step leads through a leaf, a placeholder, or an
///   operator child that has not been built.
///
/// # Example
/// ```
/// use booltree::{
///     ast::{Node, Path},
///     interpreter::builder::node_at,
/// };
///
/// let tree = Node::and(Node::constant(true), Node::variable("x"));
/// let path: Path = "@r".parse().unwrap();
///
/// assert_eq!(node_at(Some(&tree), &path).unwrap(), &Node::variable("x"));
/// assert!(node_at(Some(&tree), &"@rl".parse().unwrap()).is_err());
/// ```
pub fn node_at<'a>(root: Option<&'a Node>, path: &Path) -> BuildResult<&'a Node> {
    let mut node = root.ok_or(BuildError::NoTree)?;
    for side in path.steps() {
        node = node.child(*side)
                   .ok_or_else(|| BuildError::PathNotFound { path: path.clone() })?;
    }
    Ok(node)
}

/// Returns a mutable reference to the node at `path`.
///
/// Follows the same rules as [`node_at`].
pub fn node_at_mut<'a>(root: &'a mut Option<Node>, path: &Path) -> BuildResult<&'a mut Node> {
    let mut node = root.as_mut().ok_or(BuildError::NoTree)?;
    for side in path.steps() {
        node = node.child_mut(*side)
                   .and_then(|slot| slot.as_deref_mut())
                   .ok_or_else(|| BuildError::PathNotFound { path: path.clone() })?;
    }
    Ok(node)
}

fn unexpected(path: &Path, expected: &'static str, found: &Node) -> BuildError {
    BuildError::UnexpectedNode { path: path.clone(),
                                 expected,
                                 found: found.kind_name() }
}

/// Builds the node a placeholder turns into when `kind` is chosen.
///
/// - `Constant` starts out as `true`.
/// - `Argument` refers to the first context name, or to the empty name when
///   the context is empty. Either way a missing name just evaluates to
///   unknown.
/// - `And`/`Or` come with two placeholder children.
#[must_use]
pub fn node_for_kind(kind: NodeKind, context: &Context) -> Node {
    match kind {
        NodeKind::Constant => Node::Constant(true),
        NodeKind::Argument => Node::variable(context.first_name().unwrap_or_default()),
        NodeKind::And => Node::placeholder_operator(Operator::And),
        NodeKind::Or => Node::placeholder_operator(Operator::Or),
    }
}

/// Chooses the kind of the placeholder at `path`.
///
/// # Errors
/// - `AlreadySelected` if the node at `path` is not a placeholder.
/// - Any error of [`node_at_mut`].
///
/// # Example
/// ```
/// use booltree::{
///     ast::{Node, NodeKind, Path},
///     interpreter::{builder::select, evaluator::core::Context},
/// };
///
/// let ctx = Context::new();
/// let mut root = Some(Node::Unselected);
///
/// select(&mut root, &Path::root(), NodeKind::Or, &ctx).unwrap();
/// select(&mut root, &"@l".parse().unwrap(), NodeKind::Constant, &ctx).unwrap();
///
/// assert_eq!(root.unwrap().to_string(), "(true or ?)");
/// ```
#[instrument(level = "debug", skip(root, path, context), fields(path = %path))]
pub fn select(root: &mut Option<Node>,
              path: &Path,
              kind: NodeKind,
              context: &Context)
              -> BuildResult<()> {
    let node = node_at_mut(root, path)?;
    if !matches!(node, Node::Unselected) {
        return Err(BuildError::AlreadySelected { path:  path.clone(),
                                                 found: node.kind_name(), });
    }
    *node = node_for_kind(kind, context);
    debug!(node = %node, "selected kind");
    Ok(())
}

/// Switches the operator node at `path` to `op`, keeping both children.
///
/// # Errors
/// - `UnexpectedNode` if the node at `path` is not an operator.
/// - Any error of [`node_at_mut`].
pub fn set_operator(root: &mut Option<Node>, path: &Path, op: Operator) -> BuildResult<()> {
    let node = node_at_mut(root, path)?;
    if node.as_operator().is_none() {
        return Err(unexpected(path, "operator", node));
    }
    if let Node::And { left, right } | Node::Or { left, right } =
        std::mem::replace(node, Node::Unselected)
    {
        *node = match op {
            Operator::And => Node::And { left, right },
            Operator::Or => Node::Or { left, right },
        };
    }
    debug!(%path, %op, "set operator");
    Ok(())
}

/// Changes the value of the constant node at `path`.
///
/// # Errors
/// - `UnexpectedNode` if the node at `path` is not a constant.
/// - Any error of [`node_at_mut`].
pub fn set_constant(root: &mut Option<Node>, path: &Path, value: bool) -> BuildResult<()> {
    let node = node_at_mut(root, path)?;
    if let Node::Constant(current) = &mut *node {
        *current = value;
        debug!(%path, value, "set constant");
        Ok(())
    } else {
        Err(unexpected(path, "constant", node))
    }
}

/// Points the variable node at `path` to `name`.
///
/// The name does not have to be bound in any context.
///
/// # Errors
/// - `UnexpectedNode` if the node at `path` is not a variable.
/// - Any error of [`node_at_mut`].
pub fn set_variable(root: &mut Option<Node>, path: &Path, name: &str) -> BuildResult<()> {
    let node = node_at_mut(root, path)?;
    if let Node::Variable(current) = &mut *node {
        name.clone_into(current);
        debug!(%path, name, "set variable");
        Ok(())
    } else {
        Err(unexpected(path, "argument", node))
    }
}

/// Replaces the subtree at `path` with a placeholder.
///
/// Clearing the root of an absent tree creates a placeholder root.
///
/// # Errors
/// Any error of [`node_at_mut`] for non-root paths.
pub fn clear(root: &mut Option<Node>, path: &Path) -> BuildResult<()> {
    if path.is_root() {
        *root = Some(Node::Unselected);
    } else {
        *node_at_mut(root, path)? = Node::Unselected;
    }
    debug!(%path, "cleared subtree");
    Ok(())
}

/// Lists the names a variable node currently referring to `current` can
/// choose from.
///
/// These are the context names in order. When `current` is not bound it is
/// put in front, so a node whose variable was renamed or removed still shows
/// what it refers to.
///
/// # Example
/// ```
/// use booltree::interpreter::{builder::variable_options, evaluator::core::Context};
///
/// let ctx: Context = [("a", true), ("b", false)].into_iter().collect();
///
/// assert_eq!(variable_options(&ctx, "b"), ["a", "b"]);
/// assert_eq!(variable_options(&ctx, "gone"), ["gone", "a", "b"]);
/// ```
#[must_use]
pub fn variable_options(context: &Context, current: &str) -> Vec<String> {
    let mut options = Vec::with_capacity(context.len() + 1);
    if !context.contains(current) {
        options.push(current.to_string());
    }
    options.extend(context.names().map(str::to_string));
    options
}
