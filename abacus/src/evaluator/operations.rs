//! Arithmetic, percent and function application
//!
//! Decimal-native operations (`+ - * /`, percent, `abs`, `fact`) stay exact up
//! to the context precision. `^` and the transcendental functions go through
//! `f64` and are promoted back into a decimal afterwards.

use super::context::NumericContext;
use crate::error::CalcError;
use crate::token::{Function, Operator, Span};
use crate::CalcResult;
use bigdecimal::BigDecimal;
use num_bigint::Sign;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

/// Largest operand `fact` accepts: the machine-integer range
pub const MAX_FACTORIAL_OPERAND: u32 = i32::MAX as u32;

/// Apply a binary operator to `left` and `right`
pub fn binary_operation(
    context: &NumericContext,
    left: BigDecimal,
    op: Operator,
    right: BigDecimal,
    span: Span,
) -> CalcResult<BigDecimal> {
    let result = match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right.is_zero() {
                return Err(CalcError::DivisionByZero { span });
            }
            left / right
        }
        Operator::Power => return power(context, &left, &right, span),
    };

    Ok(context.round(result))
}

/// Percent marker: `x` becomes `x / 100`, shifting the scale exactly
pub fn percent(context: &NumericContext, value: BigDecimal) -> BigDecimal {
    let (digits, scale) = value.into_bigint_and_exponent();
    context.round(BigDecimal::new(digits, scale + 2))
}

/// Apply a unary function to `value`
pub fn apply_function(
    context: &NumericContext,
    func: Function,
    value: BigDecimal,
    span: Span,
) -> CalcResult<BigDecimal> {
    let approximate: fn(f64) -> f64 = match func {
        Function::Abs => return Ok(context.round(value.abs())),
        Function::Fact => return factorial(context, value, span),
        Function::Sin => f64::sin,
        Function::Cos => f64::cos,
        Function::Tan => f64::tan,
        Function::Log => f64::log10,
        Function::Ln => f64::ln,
        Function::Sqrt => f64::sqrt,
    };

    let describe_input = || plain(&value);
    let input = to_float(&value, func.name(), describe_input, span)?;
    from_float(
        context,
        approximate(input),
        func.name(),
        describe_input,
        span,
    )
}

/// `n!` for a non-negative integer-valued `n`, multiplied out step by step
///
/// Each partial product is rounded through the context, so the magnitude is
/// unbounded; only operands beyond [`MAX_FACTORIAL_OPERAND`] are refused.
pub fn factorial(context: &NumericContext, n: BigDecimal, span: Span) -> CalcResult<BigDecimal> {
    if !n.is_integer() {
        return Err(CalcError::NonIntegerFactorial {
            value: plain(&n),
            span,
        });
    }
    if n.sign() == Sign::Minus {
        return Err(CalcError::NegativeFactorial {
            value: plain(&n),
            span,
        });
    }

    let count = n
        .to_u32()
        .filter(|count| *count <= MAX_FACTORIAL_OPERAND)
        .ok_or_else(|| CalcError::FactorialOverflow {
            value: plain(&n),
            span,
        })?;

    let mut acc = BigDecimal::one();
    for i in 2..=count {
        acc = context.round(acc * BigDecimal::from(i));
    }

    Ok(acc)
}

fn power(
    context: &NumericContext,
    base: &BigDecimal,
    exponent: &BigDecimal,
    span: Span,
) -> CalcResult<BigDecimal> {
    let describe_input = || format!("{}^{}", plain(base), plain(exponent));
    let b = to_float(base, "power", describe_input, span)?;
    let e = to_float(exponent, "power", describe_input, span)?;
    from_float(context, b.powf(e), "power", describe_input, span)
}

fn to_float(
    value: &BigDecimal,
    function: &str,
    describe_input: impl Fn() -> String,
    span: Span,
) -> CalcResult<f64> {
    value.to_f64().ok_or_else(|| CalcError::NonFiniteResult {
        function: function.to_string(),
        value: describe_input(),
        span,
    })
}

/// Promote an `f64` result back into a decimal, keeping its exact binary value
/// up to the context precision
fn from_float(
    context: &NumericContext,
    result: f64,
    function: &str,
    describe_input: impl Fn() -> String,
    span: Span,
) -> CalcResult<BigDecimal> {
    let value = if result.is_finite() {
        BigDecimal::from_f64(result)
    } else {
        None
    };

    value
        .map(|v| context.round(v))
        .ok_or_else(|| CalcError::NonFiniteResult {
            function: function.to_string(),
            value: describe_input(),
            span,
        })
}

fn plain(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}
