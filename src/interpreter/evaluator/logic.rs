use crate::{ast::Operator, interpreter::evaluator::core::Truth};

/// Combines two evaluated operands with a logical operator.
///
/// Unknown operands are not absorbed the way Kleene logic would absorb them.
/// The operator picks one operand and returns its value unchanged:
///
/// - `or` returns `left` when it is `true`, and `right` otherwise.
/// - `and` returns `right` when `left` is `true`, and `left` otherwise.
///
/// An unknown `left` therefore counts as false for choosing the operand, but
/// the chosen operand may itself be unknown. As a consequence `false or
/// unknown` is unknown while `unknown or false` is `false`, and `unknown and
/// false` is unknown while `false and unknown` is `false`.
///
/// # Parameters
/// - `op`: The logical operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use booltree::{ast::Operator, interpreter::evaluator::logic::eval_logic};
///
/// assert_eq!(eval_logic(Operator::Or, None, Some(false)), Some(false));
/// assert_eq!(eval_logic(Operator::Or, Some(false), None), None);
/// assert_eq!(eval_logic(Operator::And, None, Some(true)), None);
/// assert_eq!(eval_logic(Operator::And, Some(false), None), Some(false));
/// ```
#[must_use]
pub const fn eval_logic(op: Operator, left: Truth, right: Truth) -> Truth {
    match (op, left) {
        (Operator::Or, Some(true)) | (Operator::And, None | Some(false)) => left,
        (Operator::Or, None | Some(false)) | (Operator::And, Some(true)) => right,
    }
}
