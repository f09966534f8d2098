use crate::evaluator::context::NumericContext;
use crate::evaluator::Evaluator;
use crate::token::Postfix;
use crate::{parser, CalcResult, Decimal, ResourceLimits, Response};

/// The expression evaluation engine.
///
/// Holds only immutable configuration, so one engine can be shared freely
/// across threads and evaluations never observe each other.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    evaluator: Evaluator,
    limits: ResourceLimits,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom precision/rounding policy
    pub fn with_context(context: NumericContext) -> Self {
        Self::with_settings(context, ResourceLimits::default())
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self::with_settings(NumericContext::default(), limits)
    }

    pub fn with_settings(context: NumericContext, limits: ResourceLimits) -> Self {
        Self {
            evaluator: Evaluator::new(context),
            limits,
        }
    }

    pub fn context(&self) -> &NumericContext {
        self.evaluator.context()
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Evaluate an infix expression to a canonical decimal
    pub fn evaluate(&self, expression: &str) -> CalcResult<Decimal> {
        self.run(expression).map(|(_, result)| result)
    }

    /// Evaluate an expression and keep its RPN form alongside the result
    pub fn explain(&self, expression: &str) -> CalcResult<Response> {
        let (postfix, result) = self.run(expression)?;
        Ok(Response {
            expression: expression.to_string(),
            postfix: postfix.to_string(),
            result,
        })
    }

    fn run(&self, expression: &str) -> CalcResult<(Postfix, Decimal)> {
        let postfix = parser::parse(expression, &self.limits)?;
        tracing::debug!(postfix = %postfix, "converted to postfix");

        let result = self.evaluator.eval_postfix(&postfix)?;
        tracing::debug!(%result, "evaluated expression");
        Ok((postfix, result))
    }
}
