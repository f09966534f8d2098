use abacus::{Decimal, Engine};
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn eval(input: &str) -> Decimal {
    Engine::new()
        .evaluate(input)
        .unwrap_or_else(|e| panic!("Failed to evaluate {:?}: {}", input, e))
}

#[test]
fn test_simple_sum() {
    assert_eq!(eval("3+4"), dec("7"));
}

#[test]
fn test_operator_precedence() {
    assert_eq!(eval("3+4*2"), dec("11"));
}

#[test]
fn test_equal_precedence_is_left_to_right() {
    assert_eq!(eval("10-3-2"), dec("5"));
    assert_eq!(eval("100/10/5"), dec("2"));
}

#[test]
fn test_power_is_left_associative() {
    assert_eq!(eval("2^3"), dec("8"));
    assert_eq!(eval("2^3^2"), dec("64"));
}

#[test]
fn test_basic_functions() {
    assert_eq!(eval("sqrt(81)").to_string(), "9");
    assert_eq!(eval("abs(3-10)"), dec("7"));
    assert_eq!(eval("fact(5)"), dec("120"));
    assert_eq!(eval("log(100)"), dec("2"));
    assert_eq!(eval("ln(1)"), dec("0"));
    assert_eq!(eval("cos(0)"), dec("1"));
}

#[test]
fn test_function_names_ignore_case() {
    assert_eq!(eval("SQRT(16)+Abs(-2)"), dec("6"));
}

#[test]
fn test_percent_postfix() {
    assert_eq!(eval("50%"), dec("0.5"));
    assert_eq!(eval("50%").to_string(), "0.5");
}

#[test]
fn test_percent_binds_to_preceding_value() {
    assert_eq!(eval("200*10%"), dec("20"));
    assert_eq!(eval("200+10%"), dec("200.1"));
    assert_eq!(eval("(20+30)%"), dec("0.5"));
}

#[test]
fn test_signed_numbers() {
    assert_eq!(eval("-5+2"), dec("-3"));
    assert_eq!(eval("2*-3"), dec("-6"));
    assert_eq!(eval("abs(-2.5)"), dec("2.5"));
}

#[test]
fn test_decimal_shorthand() {
    assert_eq!(eval(".5+5."), dec("5.5"));
}

#[test]
fn test_exact_decimal_arithmetic() {
    assert_eq!(eval("0.1+0.2").to_string(), "0.3");
    assert_eq!(eval("1.005*1000").to_string(), "1005");
    assert_eq!(eval("1/8").to_string(), "0.125");
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(eval("  ( 1 +\t2 ) * 3 "), dec("9"));
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let engine = Engine::new();
    let first = engine.evaluate("sin(1)/3").unwrap();
    let second = engine.evaluate("sin(1)/3").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}
