//! # Abacus Engine
//!
//! **Exact answers for typed-in arithmetic**
//!
//! Abacus turns a human-written infix expression into a high-precision
//! decimal result. Numbers, `+ - * / ^`, parentheses, a postfix `%` and the
//! functions `sin cos tan log ln sqrt abs fact` are supported.
//!
//! ## Quick Start
//!
//! ```rust
//! use abacus::{Engine, CalcResult};
//!
//! fn main() -> CalcResult<()> {
//!     let engine = Engine::new();
//!
//!     assert_eq!(engine.evaluate("3+4*2")?.to_string(), "11");
//!     assert_eq!(engine.evaluate("200*10%")?.to_string(), "20");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Every evaluation runs three stages, each consuming the previous one's output:
//!
//! 1. [`tokenize`] scans the string into [`Token`]s
//! 2. [`to_postfix`] reorders them into RPN with the shunting-yard algorithm
//! 3. [`Evaluator::eval_postfix`] reduces the RPN on a stack of decimals
//!
//! ### Numeric context
//! Values are arbitrary-precision decimals. Every arithmetic step is rounded to
//! 20 significant digits, half away from zero, with no bound on magnitude:
//! `fact(30)` and `1/3/10^19` both keep all 20 digits.
//! `^` and the transcendental functions are computed in `f64` and promoted
//! back into a decimal, so they are only as exact as a double.
//!
//! ### Associativity
//! Operators of equal precedence always group left to right, `^` included:
//! `2^3^2` is `(2^3)^2 = 64`.

pub mod decimal;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod resource_limits;
pub mod response;
pub mod token;

pub use bigdecimal::BigDecimal;
pub use decimal::Decimal;
pub use engine::Engine;
pub use error::CalcError;
pub use evaluator::context::NumericContext;
pub use evaluator::Evaluator;
pub use parser::{parse, to_postfix, tokenize};
pub use resource_limits::ResourceLimits;
pub use response::Response;
pub use token::{Function, Operator, Postfix, PostfixItem, Span, Token, TokenKind};

/// Result type for Abacus operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluate `expression` with the default numeric context and limits
pub fn evaluate(expression: &str) -> CalcResult<Decimal> {
    Engine::new().evaluate(expression)
}

#[cfg(test)]
mod tests;
