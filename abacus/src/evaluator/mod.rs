//! RPN evaluation
//!
//! Executes a postfix sequence against a stack of decimals:
//! 1. Numbers are parsed and pushed
//! 2. Operators pop their right operand, then their left
//! 3. Functions and the percent marker pop one value
//! 4. Exactly one value must remain at the end

pub mod context;
pub mod operations;

use crate::error::CalcError;
use crate::parser::literals::parse_decimal_number;
use crate::token::{Postfix, PostfixItem};
use crate::{CalcResult, Decimal};
use bigdecimal::BigDecimal;
use context::NumericContext;

/// Stack machine that reduces a postfix sequence to a single decimal
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    context: NumericContext,
}

impl Evaluator {
    pub fn new(context: NumericContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &NumericContext {
        &self.context
    }

    /// Evaluate `postfix`, returning the result in canonical form
    pub fn eval_postfix(&self, postfix: &Postfix) -> CalcResult<Decimal> {
        let mut stack: Vec<BigDecimal> = Vec::with_capacity(postfix.len());

        for item in postfix.items() {
            let value = match item {
                PostfixItem::Number { text, span } => {
                    self.context.round(parse_decimal_number(text, *span)?)
                }
                PostfixItem::Operator { op, span } => {
                    let right = pop_operand(&mut stack, item)?;
                    let left = pop_operand(&mut stack, item)?;
                    operations::binary_operation(&self.context, left, *op, right, *span)?
                }
                PostfixItem::Percent { .. } => {
                    let value = pop_operand(&mut stack, item)?;
                    operations::percent(&self.context, value)
                }
                PostfixItem::Function { func, span } => {
                    let value = pop_operand(&mut stack, item)?;
                    operations::apply_function(&self.context, *func, value, *span)?
                }
            };
            tracing::trace!(item = %item, %value, depth = stack.len() + 1, "push");
            stack.push(value);
        }

        match (stack.pop(), stack.len()) {
            (Some(result), 0) => Ok(Decimal::from(result)),
            (None, _) => Err(CalcError::invalid_expression("nothing to evaluate")),
            (Some(_), remaining) => Err(CalcError::invalid_expression(format!(
                "{} values left without an operator",
                remaining + 1
            ))),
        }
    }
}

fn pop_operand(stack: &mut Vec<BigDecimal>, item: &PostfixItem) -> CalcResult<BigDecimal> {
    stack.pop().ok_or_else(|| CalcError::InvalidOperation {
        token: item.to_string(),
        span: item.span(),
    })
}
