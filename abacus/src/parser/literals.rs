use crate::error::CalcError;
use crate::token::Span;
use crate::CalcResult;
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Whether a digit/point run is a parseable decimal number.
///
/// The tokenizer accepts any run of digits and points; this is where `1.2.3`
/// and a lone `.` are told apart from real numbers.
pub fn is_number(text: &str) -> bool {
    let mut digits = 0;
    let mut points = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

/// Parse a number token, optionally carrying a folded `-` sign, into a decimal.
///
/// Accepts the shorthand forms `.5` and `5.`. Every digit is kept; rounding
/// to the numeric context happens in the evaluator.
pub fn parse_decimal_number(text: &str, span: Span) -> CalcResult<BigDecimal> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    if !is_number(digits) {
        return Err(CalcError::InvalidToken {
            token: text.to_string(),
            span,
        });
    }

    let trimmed = digits.strip_suffix('.').unwrap_or(digits);
    let normalized = if trimmed.starts_with('.') {
        format!("{}0{}", sign, trimmed)
    } else {
        format!("{}{}", sign, trimmed)
    };

    BigDecimal::from_str(&normalized).map_err(|_| CalcError::InvalidToken {
        token: text.to_string(),
        span,
    })
}
