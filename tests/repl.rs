use iodine::{
    Session,
    diagnostics::dump_ast,
    interpreter::{environment::Environment, lexer::lex, parser::core::parse},
    repl::{Flow, ReplConfig, handle_line, run},
};
use pretty_assertions::assert_eq;

fn quiet() -> ReplConfig {
    ReplConfig { prompt: String::new(),
                 ..ReplConfig::default() }
}

fn transcript(input: &str, config: &ReplConfig) -> String {
    let mut session = Session::new();
    let mut output = Vec::new();
    run(&mut session, input.as_bytes(), &mut output, config).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn prints_values_and_keeps_going_after_errors() {
    let out = transcript("x = 5\ny\nx + 1\n1 + 1.0\n4.0 / 0.0\n", &quiet());
    assert_eq!(out,
               "5\n\
                Error: Undefined variable 'y'.\n\
                6\n\
                Error: Type mismatch: cannot apply '+' to Int32 and F64.\n\
                inf\n");
}

#[test]
fn blank_line_reports_empty_ast() {
    assert_eq!(transcript("\n   \n", &quiet()), "AST is empty\nAST is empty\n");
}

#[test]
fn prompt_is_written_before_every_read() {
    let config = ReplConfig::default();
    assert_eq!(transcript("1\n", &config), ">1\n>");
}

#[test]
fn syntax_errors_are_reported() {
    assert_eq!(transcript("(1 + 2\n", &quiet()),
               "Error: Expected closing parenthesis ')' but found end of input.\n");
    assert_eq!(transcript("1 ^ 2\n", &quiet()),
               "Error: Unrecognized character '^' at position 2.\n");
}

#[test]
fn token_and_tree_dumps() {
    let config = ReplConfig { show_tokens: true,
                              show_ast: true,
                              ..quiet() };
    let out = transcript("x = 2 * y\ny = 3\n", &config);
    let expected = "\
Token: Identifier (x)
Token: Equals (=)
Token: Integer (2)
Token: Star (*)
Token: Identifier (y)
Token: Eof ()
Node type: VarAssignment
variable name: x
value:
  Node type: Arithmetic
  a:
    Node type: ConstVal
    val: 2
  b:
    Node type: VariableReference
    varname: y
    varinfo: unbound
  operation: Mul
Error: Undefined variable 'y'.
Token: Identifier (y)
Token: Equals (=)
Token: Integer (3)
Token: Eof ()
Node type: VarAssignment
variable name: y
value:
  Node type: ConstVal
  val: 3
3
";
    assert_eq!(out, expected);
}

#[test]
fn tree_dump_shows_bound_kind() {
    let mut env = Environment::new();
    env.assign("r", iodine::interpreter::value::Value::F64(1.0));
    let root = parse(&lex("-r").unwrap()).unwrap().unwrap();
    assert_eq!(dump_ast(&root, &env).to_string(),
               "Node type: UnaryOp\n\
                operation: Negate\n\
                child:\n  \
                Node type: VariableReference\n  \
                varname: r\n  \
                varinfo: F64\n");
}

#[test]
fn meta_commands() {
    let out = transcript("b = 2.5\na = 1\n:vars\n:reset\n:vars\na\n:bogus\n", &quiet());
    assert_eq!(out,
               "2.500000\n\
                1\n\
                a: Int32 = 1\n\
                b: F64 = 2.500000\n\
                Environment cleared\n\
                Error: Undefined variable 'a'.\n\
                Error: Unknown command ':bogus'.\n");
}

#[test]
fn quit_stops_reading() {
    assert_eq!(transcript("1\n:quit\n2\n", &quiet()), "1\n");

    let mut session = Session::new();
    let mut sink = Vec::new();
    assert_eq!(handle_line(&mut session, ":q", &mut sink, &quiet()).unwrap(),
               Flow::Quit);
    assert!(sink.is_empty());
}

#[test]
fn invalid_utf8_is_a_lex_error_not_the_end() {
    let mut session = Session::new();
    let mut output = Vec::new();
    run(&mut session, &b"1\n\xff\n2\n"[..], &mut output, &quiet()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(),
               "1\nError: Unrecognized character '\u{FFFD}' at position 0.\n2\n");
}

#[test]
fn line_endings_are_stripped() {
    assert_eq!(transcript("x = 1\r\nx + 1", &quiet()), "1\n2\n");
}
