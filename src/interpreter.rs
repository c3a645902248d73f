/// The evaluator module computes the value of expression trees.
///
/// The evaluator walks a tree bottom-up against a variable context and
/// produces `true`, `false` or unknown. It never fails: missing variables,
/// placeholders and unbuilt children are all unknown.
///
/// # Responsibilities
/// - Defines the variable context and its edit operations.
/// - Evaluates every node kind, combining operands of `and`/`or`.
/// - Renders results for display.
pub mod evaluator;
/// The builder module edits trees one position at a time.
///
/// Every edit addresses a node by its path from the root and replaces or
/// updates it in place, the way the interactive builder's selection widgets
/// do.
pub mod builder;
/// The lexer module tokenizes command scripts.
///
/// The lexer reads the raw script text and produces a stream of tokens:
/// command keywords, node kinds, booleans, names and paths, each tagged with
/// its line number.
pub mod lexer;
/// The parser module builds commands from tokens.
///
/// Each script line holds one command; the parser checks its arguments and
/// reports errors with their line number.
pub mod parser;
/// The session module ties a tree and a context together.
///
/// A session executes parsed commands against the tree it owns and answers
/// the query commands with reports.
///
/// # Responsibilities
/// - Owns the expression being built and its context.
/// - Dispatches commands to the context, the builder or the evaluator.
/// - Runs whole scripts from source text.
pub mod session;
