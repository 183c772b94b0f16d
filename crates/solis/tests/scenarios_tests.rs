//! The concrete end-to-end scenarios, round-trip laws, and boundary
//! behaviors that the language's evaluator must satisfy, run through the
//! public lexer/parser/interpreter pipeline exactly as a `.solis` file
//! would be.

use solis::value::Value;
use solis::{force, parse_expression_from_source, Interpreter, Lexer, Parser};

fn eval_expr(source: &str) -> solis::ValueRef {
    let interpreter = Interpreter::new();
    let expr = parse_expression_from_source(source).unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"));
    force(&interpreter.eval(&expr).unwrap_or_else(|e| panic!("eval failed for {source:?}: {e}"))).unwrap()
}

fn int(v: &solis::ValueRef) -> i64 {
    match &**v {
        Value::Int(n) => *n,
        other => panic!("expected Int, got {other:?}"),
    }
}

#[test]
fn scenario_curried_addition() {
    let v = eval_expr("let add = \\x -> \\y -> x + y in add 5 3");
    assert_eq!(int(&v), 8);
}

#[test]
fn scenario_recursive_factorial() {
    let v = eval_expr("let fact = \\n -> if n <= 1 then 1 else n * fact (n - 1) in fact 5");
    assert_eq!(int(&v), 120);
}

#[test]
fn scenario_cons_pattern_match_in_a_match_expression() {
    let v = eval_expr("match [10,20,30] { (x:xs) => x }");
    assert_eq!(int(&v), 10);
}

#[test]
fn scenario_record_update_then_access() {
    let v = eval_expr("let p = { name = \"Alice\", age = 30 } in let p2 = { p | age = 31 } in p2.age");
    assert_eq!(int(&v), 31);
}

#[test]
fn scenario_do_block_sequencing() {
    let v = eval_expr("do { let x = 10; let y = 20; x + y }");
    assert_eq!(int(&v), 30);
}

#[test]
fn scenario_right_associative_operators_give_250_not_205() {
    let mut interpreter = Interpreter::new();
    let tokens = Lexer::new("let x = 10\nlet y = 20\nlet main = x * y + 5").tokenize();
    let mut parser = Parser::new(tokens);
    let module = parser.parse_module();
    interpreter.eval_module(module).unwrap();
    let main = interpreter.get_binding("main").unwrap();
    let v = force(&main).unwrap();
    // Right-associative, no precedence: `x * (y + 5)`, i.e. `10 * 25`.
    assert_eq!(int(&v), 250);
}

#[test]
fn scenario_data_constructor_pattern_match() {
    let mut interpreter = Interpreter::new();
    let tokens = Lexer::new("data Maybe a = Just a | Nothing\nlet main = match (Just 42) { Just n => n, Nothing => 0 }").tokenize();
    let mut parser = Parser::new(tokens);
    let module = parser.parse_module();
    interpreter.eval_module(module).unwrap();
    let main = interpreter.get_binding("main").unwrap();
    assert_eq!(int(&force(&main).unwrap()), 42);
}

#[test]
fn parse_module_never_panics_on_garbage_input() {
    for source in ["@@@@", "let = = =", "{{{{", "match", "\"", "data data data"] {
        let tokens = Lexer::new(source).tokenize();
        let mut parser = Parser::new(tokens);
        let _module = parser.parse_module();
    }
}

#[test]
fn right_associative_no_precedence_holds_for_an_arbitrary_operator_pair() {
    // `x - y * z` parses as `x - (y * z)`, not `(x - y) * z`.
    let v = eval_expr("10 - 2 * 3");
    assert_eq!(int(&v), 4);
}

#[test]
fn pattern_matching_is_sequential_first_arm_wins() {
    let v = eval_expr("match 5 { n => n + 1, n => n + 100 }");
    assert_eq!(int(&v), 6);
}

#[test]
fn record_update_leaves_untouched_fields_alone() {
    let v = eval_expr("let r = { a = 1, b = 2, c = 3 } in let r2 = { r | b = 99 } in r2.a + r2.c");
    assert_eq!(int(&v), 4);
}

#[test]
fn length_of_concatenation_equals_sum_of_lengths() {
    let v = eval_expr("length ([1,2,3,4] ++ [5,6])");
    assert_eq!(int(&v), 6);
}

#[test]
fn empty_list_literal_matches_the_empty_list_pattern() {
    let v = eval_expr("match [] { [] => true, _ => false }");
    assert!(matches!(*v, Value::Bool(true)));
}

#[test]
fn empty_record_literal_round_trips_through_structural_equality() {
    let v = eval_expr("{} == {}");
    assert!(matches!(*v, Value::Bool(true)));
}

#[test]
fn let_with_no_semicolon_or_in_evaluates_to_true() {
    let v = eval_expr("let x = 42");
    assert!(matches!(*v, Value::Bool(true)));
}

#[test]
fn signed_literal_in_atom_position_is_not_unary_minus_applied_to_a_var() {
    let v = eval_expr("-5 + 1");
    assert_eq!(int(&v), -4);
}
