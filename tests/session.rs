use std::fs;

use booltree::{
    ast::Node,
    error::{BuildError, ParseError, SessionError},
    get_result,
    interpreter::{
        evaluator::core::Truth,
        lexer::tokenize,
        parser::core::parse_command,
        session::{Report, Session},
    },
};
use rstest::rstest;
use walkdir::WalkDir;

#[test]
fn script_files_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path()
                                                   .extension()
                                                   .is_some_and(|ext| ext == "tree")
                                              })
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = get_result(&script, false) {
            panic!("Script {path:?} failed:\n{script}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_result(src: &str, expected: Truth) {
    match get_result(src, false) {
        Ok(result) => assert_eq!(result, expected, "Script produced the wrong result:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn run(src: &str) -> (Session, Vec<Report>) {
    let mut session = Session::new();
    let reports = session.run(src)
                         .unwrap_or_else(|e| panic!("Script failed: {e}"));
    (session, reports)
}

#[test]
fn fresh_session_is_undefined() {
    assert_result("eval", None);
    assert_result("", None);
    assert_result("// nothing to do\n\n", None);
}

#[rstest]
#[case("select @ constant", Some(true))]
#[case("select @ constant\nconst @ false", Some(false))]
#[case("select @ argument", None)]
#[case("add\nselect @ argument", Some(true))]
#[case("select @ and", None)]
#[case("select @ or", None)]
fn single_node_trees(#[case] src: &str, #[case] expected: Truth) {
    assert_result(src, expected);
}

#[rstest]
#[case::true_or_missing("select @ or\nselect @l constant\nselect @r argument\nvar @r missing",
                        Some(true))]
#[case::missing_or_false("select @ or\nselect @l argument\nvar @l missing\nselect @r constant\nconst @r false",
                         Some(false))]
#[case::false_and_missing("select @ and\nselect @l constant\nconst @l false\nselect @r argument\nvar @r missing",
                          Some(false))]
#[case::missing_and_true("select @ and\nselect @l argument\nvar @l missing\nselect @r constant",
                         None)]
#[case::true_and_true("select @ and\nselect @l constant\nselect @r constant", Some(true))]
fn operators_follow_short_circuit_propagation(#[case] src: &str, #[case] expected: Truth) {
    assert_result(src, expected);
}

#[test]
fn context_edits_reach_the_result() {
    let base = "add x\nselect @ argument\n";
    assert_result(base, Some(true));
    assert_result(&format!("{base}flip x"), Some(false));
    assert_result(&format!("{base}set x false"), Some(false));
    assert_result(&format!("{base}remove x"), None);
    assert_result(&format!("{base}rename x y"), None);
    assert_result(&format!("{base}rename x y\nvar @ y"), Some(true));
    assert_result(&format!("{base}rename x y\nadd x\nflip y\nvar @ y"), Some(false));
}

#[test]
fn default_variable_has_a_quoted_name() {
    let (session, _) = run("add\nflip \"new arg\"");
    assert_eq!(session.context.get("new arg"), Some(false));

    let (session, _) = run("add\nrename \"new arg\" ready\nselect @ argument");
    assert_eq!(session.tree, Some(Node::variable("ready")));
    assert_eq!(session.evaluate(), Some(true));
}

#[test]
fn query_commands_report() {
    let (_, reports) = run("add a\nadd b\nset b false\nselect @ or\nselect @l argument\nvar @l gone\n\
                            options @l\ncontext\nshow\neval");

    assert_eq!(reports,
               [Report::Options(vec!["gone".to_string(), "a".to_string(), "b".to_string()]),
                Report::Context(vec![("a".to_string(), true), ("b".to_string(), false)]),
                Report::Tree("or\n├── \"gone\"\n└── select...\n".to_string()),
                Report::Result(None)]);

    assert_eq!(reports[0].to_string(), "gone, a, b");
    assert_eq!(reports[1].to_string(), "a = true\nb = false");
    assert_eq!(reports[3].to_string(), "result: undefined");
}

#[test]
fn empty_context_report() {
    let (_, reports) = run("context");
    assert_eq!(reports, [Report::Context(Vec::new())]);
    assert_eq!(reports[0].to_string(), "(no variables)");
}

#[test]
fn parse_errors_leave_the_session_untouched() {
    let mut session = Session::new();
    let before = session.clone();

    assert!(session.run("add x\nselect @ wrong").is_err());
    assert_eq!(session, before);
}

#[test]
fn failing_command_stops_the_script() {
    let mut session = Session::new();
    let err = session.run("add x\nflip y\nadd z").unwrap_err();

    let err = err.downcast::<SessionError>().unwrap();
    assert_eq!(*err,
               SessionError::UnknownVariable { name: "y".to_string(),
                                               line: 2, });
    assert!(session.context.contains("x"));
    assert!(!session.context.contains("z"));
}

#[test]
fn build_errors_carry_their_line() {
    let mut session = Session::new();
    let err = session.run("select @ constant\n\nselect @ or").unwrap_err();

    let err = err.downcast::<SessionError>().unwrap();
    assert_eq!(*err,
               SessionError::Build { source: BuildError::AlreadySelected { path:  "@".parse()
                                                                                     .unwrap(),
                                                                           found: "constant", },
                                     line:   3, });
    assert_eq!(err.to_string(), "Error on line 3: @ is already a constant; clear it first.");
}

#[rstest]
#[case::unknown_command("frobnicate x")]
#[case::missing_argument("rename x")]
#[case::trailing_tokens("eval now")]
#[case::bad_path("clear @lx")]
#[case::bad_kind("select @ maybe")]
#[case::bad_character("add x!")]
fn malformed_scripts_fail_to_parse(#[case] src: &str) {
    let err = Session::new().run(src).unwrap_err();
    assert!(err.downcast_ref::<ParseError>().is_some(), "expected a parse error, got {err}");
}

#[test]
fn missing_argument_names_what_was_expected() {
    let err = Session::new().run("set x").unwrap_err();
    let err = err.downcast::<ParseError>().unwrap();
    assert_eq!(*err,
               ParseError::UnexpectedEndOfInput { expected: "true or false".to_string(),
                                                  line:     1, });
}

#[test]
fn command_from_no_tokens_has_no_line() {
    let tokens = tokenize("").unwrap();
    let err = parse_command(&mut tokens.iter().peekable()).unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedEndOfInput { expected: "a command".to_string(),
                                                  line:     0, });
}

#[test]
fn edits_that_do_not_fit_fail() {
    assert_failure("remove x");
    assert_failure("rename x y");
    assert_failure("select @ and\nselect @ or");
    assert_failure("select @ and\nconst @ true");
    assert_failure("select @ constant\nop @ or");
    assert_failure("select @ constant\nvar @ x");
    assert_failure("select @ constant\noptions @");
    assert_failure("select @l constant");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.tree").unwrap();
    assert_result(&contents, Some(false));

    let (session, reports) = run(&contents);
    assert_eq!(session.context.names().collect::<Vec<_>>(),
               ["door_open", "alarm", "override"]);
    assert_eq!(reports.iter()
                      .filter_map(|r| match r {
                          Report::Result(truth) => Some(*truth),
                          _ => None,
                      })
                      .collect::<Vec<_>>(),
               [Some(true), Some(false), Some(false)]);
}
