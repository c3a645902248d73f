//! # booltree
//!
//! booltree builds boolean expression trees step by step and evaluates them
//! against an editable set of variables. Trees are made of constants,
//! variables, `and`/`or` operators and placeholders for positions that have
//! not been chosen yet; evaluation is three-valued, so an incomplete tree or
//! a missing variable yields "undefined" rather than an error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Truth,
    session::{Report, Session},
};

/// Defines the structure of expression trees and commands.
///
/// This module declares the `Node` enum and related types that describe an
/// expression tree, the paths used to address its positions, and the
/// commands parsed from scripts.
///
/// # Responsibilities
/// - Defines node kinds, operators and placeholder handling.
/// - Addresses tree positions through paths.
/// - Describes every command a session understands.
pub mod ast;
/// Provides error types for parsing, building and command execution.
///
/// Evaluation itself never fails; these errors come from scripts that do
/// not parse and from edits that do not fit the current tree or context.
/// Every error carries the script line it was raised on.
pub mod error;
/// Evaluation, editing and scripting of expression trees.
///
/// This module ties together the evaluator, the tree builder and the command
/// language to provide a complete headless builder session.
///
/// # Responsibilities
/// - Evaluates trees against a context.
/// - Edits trees and contexts.
/// - Lexes, parses and executes command scripts.
pub mod interpreter;

/// Runs a command script and returns the final evaluation result.
///
/// This function executes every command of `source` in a fresh session and
/// prints each report (from `show`, `context`, `options` and `eval`) to
/// stdout. When `auto_print` is set, the result of the finished tree is
/// printed last as `result: <value>`.
///
/// # Errors
/// Returns an error if the script does not parse or a command fails, for
/// example when it edits a variable that does not exist.
///
/// # Examples
/// ```
/// use booltree::get_result;
///
/// // An `or` whose left side is true is true, whatever the right side holds.
/// let source = "select @ or\nselect @l constant";
/// assert_eq!(get_result(source, false).unwrap(), Some(true));
///
/// // Example with an intentional error (unknown variable).
/// let source = "flip x";
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Truth, Box<dyn std::error::Error>> {
    let mut session = Session::new();

    for report in session.run(source)? {
        println!("{report}");
    }

    let result = session.evaluate();

    if auto_print {
        println!("{}", Report::Result(result));
    }

    Ok(result)
}
