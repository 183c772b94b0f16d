//! `BigInt` tests: the floor-division semantics that differ from the
//! truncating `checked_div`/`checked_rem`, plus the `n`-suffixed literal
//! and comparisons as they flow through the full interpreter.

use solis::{force, parse_expression_from_source, BigInt, Interpreter};

fn eval_big(source: &str) -> BigInt {
    let interpreter = Interpreter::new();
    let expr = parse_expression_from_source(source).unwrap();
    let v = force(&interpreter.eval(&expr).unwrap()).unwrap();
    match &*v {
        solis::Value::BigInt(b) => b.clone(),
        other => panic!("expected BigInt, got {other:?}"),
    }
}

#[test]
fn floor_division_rounds_toward_negative_infinity() {
    let a = BigInt::from_i64(-7);
    let b = BigInt::from_i64(2);
    // Truncating division would give -3; floor division gives -4.
    assert_eq!(a.div_floor(&b).unwrap().to_string(), "-4");
    assert_eq!(a.mod_floor(&b).unwrap().to_string(), "1");
}

#[test]
fn floor_division_matches_truncating_division_for_same_sign_operands() {
    let a = BigInt::from_i64(7);
    let b = BigInt::from_i64(2);
    assert_eq!(a.div_floor(&b).unwrap().to_string(), a.checked_div(&b).unwrap().to_string());
    assert_eq!(a.mod_floor(&b).unwrap().to_string(), a.checked_rem(&b).unwrap().to_string());
}

#[test]
fn floor_division_by_zero_is_none() {
    let a = BigInt::from_i64(5);
    let zero = BigInt::from_i64(0);
    assert!(a.div_floor(&zero).is_none());
    assert!(a.mod_floor(&zero).is_none());
}

#[test]
fn big_literal_arithmetic_widens_plain_int_operands() {
    // `100000000000000000000n` overflows i64; adding a plain Int must widen
    // the Int side rather than truncating the BigInt side.
    let v = eval_big("100000000000000000000n + 1");
    assert_eq!(v.to_string(), "100000000000000000001");
}

#[test]
fn big_integer_floor_division_through_the_interpreter() {
    // -7000000000000000001 / 2 is exactly -3500000000000000000.5; floor
    // division rounds that down to -3500000000000000001, one below what
    // Rust's truncating division on the inner bigint would give.
    let v = eval_big("-7000000000000000001n / 2");
    assert_eq!(v.to_string(), "-3500000000000000001");
}

#[test]
fn big_integer_division_by_zero_is_reported() {
    let interpreter = Interpreter::new();
    let expr = parse_expression_from_source("100000000000000000000n / 0").unwrap();
    let err = interpreter.eval(&expr).unwrap_err();
    assert_eq!(err.kind, solis::ErrorKind::DivisionByZero);
}

#[test]
fn big_integers_compare_by_numeric_value_not_string_length() {
    let interpreter = Interpreter::new();
    let expr = parse_expression_from_source("99999999999999999999n > 100000000000000000000n").unwrap();
    let v = force(&interpreter.eval(&expr).unwrap()).unwrap();
    assert!(matches!(*v, solis::Value::Bool(false)));
}
