use crate::error::CalcError;
use crate::resource_limits::ResourceLimits;
use crate::token::Postfix;
use crate::CalcResult;

pub mod literals;
pub mod postfix;
pub mod tokenizer;

pub use postfix::to_postfix;
pub use tokenizer::tokenize;

/// Tokenize and convert an expression to RPN in one step
pub fn parse(expression: &str, limits: &ResourceLimits) -> CalcResult<Postfix> {
    if expression.len() > limits.max_expression_bytes {
        return Err(CalcError::ResourceLimitExceeded {
            limit_name: "max_expression_bytes".to_string(),
            limit_value: format!("{} bytes", limits.max_expression_bytes),
            actual_value: format!("{} bytes", expression.len()),
        });
    }

    let tokens = tokenize(expression)?;
    tracing::debug!(count = tokens.len(), "tokenized expression");

    to_postfix(&tokens, limits)
}
