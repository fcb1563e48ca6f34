//! Integration tests for arithmetic operations

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{eval, eval_stack, lex, parse, Evaluator};

#[test]
fn test_add() {
    let output = eval("5 3 +").unwrap();
    assert_eq!(output.trim(), "8");
}

#[test]
fn test_add_negative() {
    let output = eval("5 -3 +").unwrap();
    assert_eq!(output.trim(), "2");
}

#[test]
fn test_add_word_alias() {
    let output = eval("5 3 add").unwrap();
    assert_eq!(output.trim(), "8");
}

#[test]
fn test_subtract() {
    // top is taken from the value beneath it
    let output = eval("10 3 -").unwrap();
    assert_eq!(output.trim(), "7");
}

#[test]
fn test_subtract_negative_result() {
    let output = eval("2 3 -").unwrap();
    assert_eq!(output.trim(), "-1");
}

#[test]
fn test_multiply() {
    let output = eval("4 5 *").unwrap();
    assert_eq!(output.trim(), "20");
}

#[test]
fn test_divide() {
    // top is the dividend: 10 / 2
    let output = eval("2 10 /").unwrap();
    assert_eq!(output.trim(), "5");
}

#[test]
fn test_divide_fractional() {
    let output = eval("4 10 /").unwrap();
    assert_eq!(output.trim(), "2.5");
}

#[test]
fn test_divide_zero_dividend() {
    // zero on top is fine - the checked divisor is the second pop
    let output = eval("5 0 /").unwrap();
    assert_eq!(output.trim(), "0");
}

#[test]
fn test_divide_by_zero() {
    let err = eval("0 5 /").unwrap_err();
    assert!(err.contains("division by zero"));
}

#[test]
fn test_arithmetic_chain() {
    // (5 + 3) * 2 = 16
    let output = eval("5 3 + 2 *").unwrap();
    assert_eq!(output.trim(), "16");
}

#[test]
fn test_word_alias_chain() {
    let output = eval("5 3 add 2 mul").unwrap();
    assert_eq!(output.trim(), "16");
}

#[test]
fn test_float_operands() {
    let output = eval("2.5 4 *").unwrap();
    assert_eq!(output.trim(), "10");
}

#[test]
fn test_exponent_notation() {
    let output = eval("1e3 1 +").unwrap();
    assert_eq!(output.trim(), "1001");
}

#[test]
fn test_missing_operands() {
    let err = eval("5 +").unwrap_err();
    assert!(err.contains("requires two operands"));
}

#[test]
fn test_operator_on_empty_stack() {
    let err = eval("*").unwrap_err();
    assert!(err.contains("requires two operands"));
}

#[test]
fn test_nan_push_rejected() {
    let err = eval("nan").unwrap_err();
    assert!(err.contains("not a number"));
}

#[test]
fn test_unknown_word() {
    let err = eval("2 3 frobnicate").unwrap_err();
    assert!(err.contains("Unknown instruction"));
}
