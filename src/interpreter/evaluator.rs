/// Core evaluation logic and context management.
///
/// Contains the variable context, the evaluation entry points and the
/// three-valued result type.
pub mod core;

/// Operator evaluation logic.
///
/// Combines the already evaluated operands of `and` and `or` nodes.
pub mod logic;
