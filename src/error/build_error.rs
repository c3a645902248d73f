use thiserror::Error;

use crate::ast::Path;

/// Errors raised while editing a tree.
///
/// Building never fails because of the values involved, only because an
/// edit does not fit the current shape of the tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The path leads through a leaf, a placeholder or an absent child.
    #[error("no node at {path}")]
    PathNotFound {
        /// The requested path.
        path: Path,
    },
    /// The node at the path is not of the kind the edit applies to.
    #[error("expected {expected} at {path}, found {found}")]
    UnexpectedNode {
        /// The requested path.
        path:     Path,
        /// The kind the edit needs.
        expected: &'static str,
        /// The kind actually found.
        found:    &'static str,
    },
    /// A kind was chosen for a position that already has one.
    #[error("{path} is already a {found}; clear it first")]
    AlreadySelected {
        /// The requested path.
        path:  Path,
        /// The kind already present.
        found: &'static str,
    },
    /// The edit addresses a node but there is no tree at all.
    #[error("there is no tree to edit")]
    NoTree,
}

/// Result type used by the builder.
pub type BuildResult<T> = Result<T, BuildError>;
