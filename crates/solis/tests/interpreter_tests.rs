//! Interpreter-level tests: thunk memoization, short-circuit operators,
//! recursive bindings, builtins, and error propagation.

use solis::value::Value;
use solis::{force, parse_expression_from_source, Interpreter};

fn eval(interpreter: &Interpreter, source: &str) -> solis::ValueRef {
    let expr = parse_expression_from_source(source).unwrap();
    force(&interpreter.eval(&expr).unwrap()).unwrap()
}

fn int(v: &solis::ValueRef) -> i64 {
    match **v {
        Value::Int(n) => n,
        ref other => panic!("expected Int, got {other:?}"),
    }
}

#[test]
fn thunk_forcing_is_idempotent() {
    let interpreter = Interpreter::new();
    // `x` evaluates to an unforced thunk (`Var` never forces); force it twice.
    let expr = parse_expression_from_source("let x = 1 + 2 in x").unwrap();
    let v = interpreter.eval(&expr).unwrap();
    let once = force(&v).unwrap();
    let twice = force(&once).unwrap();
    assert_eq!(int(&once), int(&twice));
}

#[test]
fn if_does_not_evaluate_the_untaken_branch() {
    let interpreter = Interpreter::new();
    let v = eval(&interpreter, "if true then 1 else (1 / 0)");
    assert_eq!(int(&v), 1);
    let v = eval(&interpreter, "if false then (1 / 0) else 2");
    assert_eq!(int(&v), 2);
}

#[test]
fn and_short_circuits_without_forcing_the_right_operand() {
    let interpreter = Interpreter::new();
    let v = eval(&interpreter, "false && (1 / 0 == 0)");
    assert!(matches!(*v, Value::Bool(false)));
}

#[test]
fn or_short_circuits_without_forcing_the_right_operand() {
    let interpreter = Interpreter::new();
    let v = eval(&interpreter, "true || (1 / 0 == 0)");
    assert!(matches!(*v, Value::Bool(true)));
}

#[test]
fn division_by_zero_is_reported() {
    let interpreter = Interpreter::new();
    let expr = parse_expression_from_source("1 / 0").unwrap();
    // `BinOp` forces both operands eagerly, so the error surfaces directly
    // from `eval`, with no thunk to force separately.
    let err = interpreter.eval(&expr).unwrap_err();
    assert_eq!(err.kind, solis::ErrorKind::DivisionByZero);
}

#[test]
fn unbound_variable_is_reported() {
    let interpreter = Interpreter::new();
    let expr = parse_expression_from_source("nope").unwrap();
    let err = interpreter.eval(&expr).unwrap_err();
    assert_eq!(err.kind, solis::ErrorKind::UnboundVariable);
}

#[test]
fn match_failure_when_no_arm_applies() {
    let interpreter = Interpreter::new();
    let expr = parse_expression_from_source("match 1 { 2 => 2 }").unwrap();
    let err = interpreter.eval(&expr).unwrap_err();
    assert_eq!(err.kind, solis::ErrorKind::MatchFailure);
}

#[test]
fn record_access_round_trips_through_a_literal() {
    let interpreter = Interpreter::new();
    let v = eval(&interpreter, "{ f = 99 }.f");
    assert_eq!(int(&v), 99);
}

#[test]
fn length_of_concatenated_lists_is_additive() {
    let interpreter = Interpreter::new();
    let v = eval(&interpreter, "length ([1,2,3] ++ [4,5])");
    assert_eq!(int(&v), 5);
}

#[test]
fn map_preserves_order_and_applies_the_function() {
    let interpreter = Interpreter::new();
    let v = eval(&interpreter, "foldl (\\acc -> \\x -> acc + x) 0 (map (\\x -> x * 2) [1,2,3])");
    assert_eq!(int(&v), 12);
}

#[test]
fn filter_keeps_only_matching_elements() {
    let interpreter = Interpreter::new();
    let v = eval(&interpreter, "length (filter (\\x -> x > 2) [1,2,3,4])");
    assert_eq!(int(&v), 2);
}

#[test]
fn show_renders_a_list_of_ints() {
    let interpreter = Interpreter::new();
    let expr = parse_expression_from_source("show [1,2,3]").unwrap();
    let v = force(&interpreter.eval(&expr).unwrap()).unwrap();
    match &*v {
        Value::Str(s) => assert_eq!(s, "[1, 2, 3]"),
        other => panic!("expected Str, got {other:?}"),
    }
}

#[test]
fn strict_force_evaluates_eagerly() {
    let interpreter = Interpreter::new();
    let expr = parse_expression_from_source("!(1 / 0)").unwrap();
    let err = interpreter.eval(&expr).unwrap_err();
    assert_eq!(err.kind, solis::ErrorKind::DivisionByZero);
}

#[test]
fn declarations_are_visible_to_each_other_regardless_of_order() {
    let mut interpreter = Interpreter::new();
    let tokens = solis::Lexer::new("let g = \\n -> f n\nlet f = \\n -> n + 1").tokenize();
    let mut parser = solis::Parser::new(tokens);
    let module = parser.parse_module();
    interpreter.eval_module(module).unwrap();
    let g = interpreter.get_binding("g").unwrap();
    let result = force(&solis::apply(&g, force(&interpreter.eval(&parse_expression_from_source("1").unwrap()).unwrap()).unwrap())).unwrap();
    assert_eq!(int(&result), 2);
}

#[test]
fn add_binding_extends_the_global_environment() {
    let interpreter = Interpreter::new();
    interpreter.add_binding("answer", std::rc::Rc::new(Value::Int(42)));
    assert!(interpreter.has_binding("answer"));
    let v = force(&interpreter.get_binding("answer").unwrap()).unwrap();
    assert_eq!(int(&v), 42);
}
