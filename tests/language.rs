use iodine::{
    Error, Session,
    ast::ArithOperation,
    error::{EvalError, ParseError},
    interpreter::value::{Value, ValueKind},
};
use pretty_assertions::assert_eq;

fn eval_in(session: &mut Session, src: &str) -> Value {
    match session.run_line(src) {
        Ok(outcome) => outcome.value
                              .unwrap_or_else(|| panic!("Line {src:?} produced no value")),
        Err(e) => panic!("Line {src:?} failed: {e}"),
    }
}

fn eval(src: &str) -> Value {
    eval_in(&mut Session::new(), src)
}

fn eval_err(src: &str) -> Error {
    match Session::new().run_line(src) {
        Ok(outcome) => panic!("Line {src:?} succeeded with {:?} but was expected to fail",
                              outcome.value),
        Err(e) => e,
    }
}

#[test]
fn integer_literals_evaluate_to_int32() {
    for (src, expected) in [("0", 0), ("7", 7), ("42", 42), ("2147483647", i32::MAX)] {
        assert_eq!(eval(src), Value::Int32(expected), "literal {src}");
    }
}

#[test]
fn real_literals_evaluate_to_float() {
    assert_eq!(eval("4.0"), Value::F64(4.0));
    assert_eq!(eval(".5"), Value::F64(0.5));
    assert_eq!(eval("3."), Value::F64(3.0));
    assert_eq!(eval("2e3"), Value::F64(2000.0));
    assert_eq!(eval("1.5E-1"), Value::F64(0.15));
    assert_eq!(eval("2.5f"), Value::F32(2.5));
}

#[test]
fn literal_kind_is_integer_iff_no_point_or_exponent() {
    for src in ["1", "10", "123456"] {
        assert_eq!(eval(src).kind(), ValueKind::Int32, "literal {src}");
    }
    for src in ["1.0", "1e1", "10.", ".1", "1.5e2"] {
        assert_eq!(eval(src).kind(), ValueKind::F64, "literal {src}");
    }
}

#[test]
fn pure_expressions_are_idempotent() {
    let mut session = Session::new();
    assert_eq!(eval_in(&mut session, "1 + 2"), Value::Int32(3));
    assert_eq!(eval_in(&mut session, "1 + 2"), Value::Int32(3));
    assert!(session.environment().is_empty());
}

#[test]
fn assignment_persists_across_lines() {
    let mut session = Session::new();
    assert_eq!(eval_in(&mut session, "x = 5"), Value::Int32(5));
    assert_eq!(eval_in(&mut session, "x + 1"), Value::Int32(6));
}

#[test]
fn reassignment_overwrites_value_and_kind() {
    let mut session = Session::new();
    eval_in(&mut session, "x = 5");
    eval_in(&mut session, "x = 10");
    assert_eq!(eval_in(&mut session, "x"), Value::Int32(10));

    eval_in(&mut session, "x = 2.5");
    assert_eq!(eval_in(&mut session, "x"), Value::F64(2.5));
}

#[test]
fn chained_assignment_is_right_associative() {
    let mut session = Session::new();
    assert_eq!(eval_in(&mut session, "a = b = 3"), Value::Int32(3));
    assert_eq!(eval_in(&mut session, "a * b"), Value::Int32(9));
    assert_eq!(session.environment().len(), 2);
}

#[test]
fn nested_assignment_inside_arithmetic() {
    let mut session = Session::new();
    assert_eq!(eval_in(&mut session, "(a = 2) + (b = a * 10)"), Value::Int32(22));
    assert_eq!(eval_in(&mut session, "b"), Value::Int32(20));
}

#[test]
fn mixed_kinds_are_a_type_mismatch() {
    assert_eq!(eval_err("1 + 1.0"),
               Error::Eval(EvalError::TypeMismatch { operation: ArithOperation::Add,
                                                     left:      ValueKind::Int32,
                                                     right:     ValueKind::F64, }));
    assert_eq!(eval_err("1.0 * 2.0f").to_string(),
               "Type mismatch: cannot apply '*' to F64 and F32.");
}

#[test]
fn division_rules() {
    assert_eq!(eval("4 / 2"), Value::Int32(2));
    assert_eq!(eval("7 / 2"), Value::Int32(3));
    assert_eq!(eval("-7 / 2"), Value::Int32(-3));
    assert_eq!(eval_err("4 / 0"), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(eval("4.0 / 0.0"), Value::F64(f64::INFINITY));
    assert_eq!(eval("-4.0 / 0.0"), Value::F64(f64::NEG_INFINITY));
    assert_eq!(eval("1.0f / 0.0f"), Value::F32(f32::INFINITY));

    let Value::F64(nan) = eval("0.0 / 0.0") else {
        panic!("expected an F64 value");
    };
    assert!(nan.is_nan());
}

#[test]
fn integer_overflow_is_an_error() {
    assert_eq!(eval_err("2147483647 + 1"),
               Error::Eval(EvalError::Overflow { operation: "Add" }));
    assert_eq!(eval_err("65536 * 65536"),
               Error::Eval(EvalError::Overflow { operation: "Mul" }));
    assert_eq!(eval_err("m = 0 - 2147483647 - 2\n"),
               Error::Eval(EvalError::Overflow { operation: "Sub" }));
}

#[test]
fn undefined_reference_is_an_error() {
    assert_eq!(eval_err("y"),
               Error::Eval(EvalError::UndefinedVariable { name: "y".to_string() }));
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("2 + 3 * 4"), Value::Int32(14));
    assert_eq!(eval("(2 + 3) * 4"), Value::Int32(20));
    assert_eq!(eval("-2 * 3"), Value::Int32(-6));
    assert_eq!(eval("10 - 4 - 3"), Value::Int32(3));
    assert_eq!(eval("100 / 10 / 5"), Value::Int32(2));
    assert_eq!(eval("--3"), Value::Int32(3));
    assert_eq!(eval("-(1.5 + 1.5)"), Value::F64(-3.0));
}

#[test]
fn malformed_lines_are_parse_errors() {
    for src in ["1 +", "(1 + 2", "1 2", "1 )", "* 3", "3 = x", "x + 1 = 2", "()"] {
        assert!(matches!(eval_err(src), Error::Parse(_)), "line {src:?}");
    }
}

#[test]
fn blank_lines_have_no_ast() {
    let mut session = Session::new();
    for src in ["", "   ", "\t \t"] {
        let outcome = session.run_line(src).unwrap();
        assert_eq!(outcome.ast, None);
        assert_eq!(outcome.value, None);
    }
}

#[test]
fn errors_only_end_the_current_line() {
    let mut session = Session::new();
    eval_in(&mut session, "x = 1");
    assert!(session.run_line("x $ 2").is_err());
    assert!(session.run_line("x +").is_err());
    assert!(session.run_line("x / 0").is_err());
    assert_eq!(eval_in(&mut session, "x"), Value::Int32(1));
}

#[test]
fn assignments_before_a_failure_stay_committed() {
    let mut session = Session::new();
    assert_eq!(session.run_line("(a = 1) + (b = 2.0)").unwrap_err(),
               Error::Eval(EvalError::TypeMismatch { operation: ArithOperation::Add,
                                                     left:      ValueKind::Int32,
                                                     right:     ValueKind::F64, }));
    assert_eq!(session.environment().get("a"), Some(&Value::Int32(1)));
    assert_eq!(session.environment().get("b"), Some(&Value::F64(2.0)));

    // The failing assignment itself never happened.
    assert!(session.run_line("c = 1 / 0").is_err());
    assert!(!session.environment().contains("c"));
}

#[test]
fn sessions_do_not_share_variables() {
    let mut first = Session::new();
    let mut second = Session::new();
    eval_in(&mut first, "x = 1");
    assert!(matches!(second.run_line("x"),
                     Err(Error::Eval(EvalError::UndefinedVariable { .. }))));
}

#[test]
fn float_kind_option_controls_unsuffixed_reals() {
    use iodine::interpreter::parser::core::{FloatKind, ParseOptions};

    assert_eq!(Session::new().options().float_kind, FloatKind::F64);

    let mut session = Session::with_options(ParseOptions { float_kind: FloatKind::F32 });
    assert_eq!(session.options().float_kind, FloatKind::F32);
    assert_eq!(eval_in(&mut session, "1.5 + 2.5"), Value::F32(4.0));
    assert_eq!(eval_in(&mut session, "1.5f * 2.0"), Value::F32(3.0));
    assert_eq!(eval_in(&mut session, "3 - 1"), Value::Int32(2));
}

#[test]
fn lex_errors_surface_at_the_line_boundary() {
    let Error::Lex(err) = eval_err("1 + #") else {
        panic!("expected a lex error");
    };
    assert_eq!((err.character, err.position), ('#', 4));
}

#[test]
fn parse_error_keeps_the_offending_token() {
    let Error::Parse(ParseError::ExpectedClosingParen { found }) = eval_err("(1 + 2") else {
        panic!("expected a missing parenthesis error");
    };
    assert!(found.is_eof());
}

#[test]
fn deeply_nested_lines_fail_without_touching_the_session() {
    use iodine::interpreter::parser::core::MAX_NESTING_DEPTH;

    let mut session = Session::new();
    let deep = format!("x = {}1", "-".repeat(100_000));
    assert!(matches!(session.run_line(&deep),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
    assert!(session.environment().is_empty());

    let depth = MAX_NESTING_DEPTH - 1;
    let allowed = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval_in(&mut session, &allowed), Value::Int32(7));

    let negations = format!("{}7", "-".repeat(MAX_NESTING_DEPTH - 2));
    assert_eq!(eval_in(&mut session, &negations), Value::Int32(7));
}
