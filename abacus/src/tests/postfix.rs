use crate::parser::{parse, to_postfix, tokenize};
use crate::token::Span;
use crate::{CalcError, ResourceLimits};

fn rpn(input: &str) -> String {
    parse(input, &ResourceLimits::default())
        .unwrap_or_else(|e| panic!("Failed to convert {:?}: {}", input, e))
        .to_string()
}

#[test]
fn test_precedence() {
    assert_eq!(rpn("3+4*2"), "3 4 2 * +");
    assert_eq!(rpn("3*4+2"), "3 4 * 2 +");
    assert_eq!(rpn("2*3^2"), "2 3 2 ^ *");
}

#[test]
fn test_equal_precedence_groups_left_to_right() {
    assert_eq!(rpn("10-3-2"), "10 3 - 2 -");
    assert_eq!(rpn("8/4/2"), "8 4 / 2 /");
    assert_eq!(rpn("2^3^2"), "2 3 ^ 2 ^");
}

#[test]
fn test_parentheses_are_dropped() {
    assert_eq!(rpn("(1+2)*3"), "1 2 + 3 *");
    assert_eq!(rpn("((4))"), "4");
}

#[test]
fn test_percent_is_emitted_immediately() {
    assert_eq!(rpn("50%"), "50 percent");
    assert_eq!(rpn("200*10%"), "200 10 percent *");
}

#[test]
fn test_function_binds_to_closed_group() {
    assert_eq!(rpn("sqrt(81)"), "81 sqrt");
    assert_eq!(rpn("abs(2-5)*2"), "2 5 - abs 2 *");
    assert_eq!(rpn("sin(cos(0))"), "0 cos sin");
}

#[test]
fn test_comma_flushes_without_counting_arguments() {
    assert_eq!(rpn("sin(1+1,2)"), "1 1 + 2 sin");
}

#[test]
fn test_leading_minus_folds_into_number() {
    assert_eq!(rpn("-5"), "-5");
    assert_eq!(rpn("fact(-1)"), "-1 fact");
    assert_eq!(rpn("2*-3"), "2 -3 *");
    assert_eq!(rpn("5-3"), "5 3 -");
    assert_eq!(rpn("-(3)"), "3 -");
}

#[test]
fn test_missing_close_paren() {
    match parse("(2+3", &ResourceLimits::default()) {
        Err(CalcError::UnbalancedParentheses { span }) => assert_eq!(span, Span::new(0, 1)),
        other => panic!("Expected UnbalancedParentheses, got {:?}", other),
    }
}

#[test]
fn test_missing_open_paren() {
    match parse("2+3)", &ResourceLimits::default()) {
        Err(CalcError::UnbalancedParentheses { span }) => assert_eq!(span, Span::new(3, 4)),
        other => panic!("Expected UnbalancedParentheses, got {:?}", other),
    }
}

#[test]
fn test_unparseable_number_is_invalid_token() {
    match parse("1.2.3+1", &ResourceLimits::default()) {
        Err(CalcError::InvalidToken { token, span }) => {
            assert_eq!(token, "1.2.3");
            assert_eq!(span, Span::new(0, 5));
        }
        other => panic!("Expected InvalidToken, got {:?}", other),
    }
}

#[test]
fn test_identifiers_and_symbols_are_invalid_tokens() {
    for (input, expected) in [("pi*2", "pi"), ("2 & 3", "&"), ("x", "x")] {
        let tokens = tokenize(input).unwrap();
        match to_postfix(&tokens, &ResourceLimits::default()) {
            Err(CalcError::InvalidToken { token, .. }) => assert_eq!(token, expected),
            other => panic!("Expected InvalidToken for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_nesting_depth_limit() {
    let limits = ResourceLimits {
        max_nesting_depth: 2,
        ..ResourceLimits::default()
    };
    assert!(parse("((1))", &limits).is_ok());
    match parse("(((1)))", &limits) {
        Err(CalcError::ResourceLimitExceeded {
            limit_name,
            actual_value,
            ..
        }) => {
            assert_eq!(limit_name, "max_nesting_depth");
            assert_eq!(actual_value, "3");
        }
        other => panic!("Expected ResourceLimitExceeded, got {:?}", other),
    }
}

#[test]
fn test_expression_size_limit() {
    let limits = ResourceLimits {
        max_expression_bytes: 8,
        ..ResourceLimits::default()
    };
    assert!(parse("1+2+3+4", &limits).is_ok());
    assert!(matches!(
        parse("1+2+3+4+5", &limits),
        Err(CalcError::ResourceLimitExceeded { .. })
    ));
}
