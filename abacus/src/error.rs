use crate::token::Span;
use thiserror::Error;

/// Everything that can go wrong while evaluating an expression
///
/// Every variant is terminal for the current evaluation. Variants that can be
/// traced to a token carry its text and [`Span`] so callers can point at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Blank input, or the expression did not reduce to exactly one value
    #[error("Invalid expression: {reason}")]
    InvalidExpression { reason: String },

    #[error("Invalid token '{token}'")]
    InvalidToken { token: String, span: Span },

    #[error("Unbalanced parentheses")]
    UnbalancedParentheses { span: Span },

    /// An operator, function or percent found too few operands on the stack
    #[error("Invalid operation: '{token}' is missing an operand")]
    InvalidOperation { token: String, span: Span },

    #[error("Division by zero")]
    DivisionByZero { span: Span },

    #[error("Factorial is only defined for integers, got {value}")]
    NonIntegerFactorial { value: String, span: Span },

    #[error("Factorial of a negative number is undefined, got {value}")]
    NegativeFactorial { value: String, span: Span },

    /// The operand is beyond the machine-integer range `fact` iterates over
    #[error("Factorial of {value} is out of range")]
    FactorialOverflow { value: String, span: Span },

    /// A floating-point approximated function produced NaN or infinity
    #[error("{function} has no finite result for {value}")]
    NonFiniteResult {
        function: String,
        value: String,
        span: Span,
    },

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
    },
}

impl CalcError {
    pub fn invalid_expression(reason: impl Into<String>) -> Self {
        CalcError::InvalidExpression {
            reason: reason.into(),
        }
    }

    /// Source location of the offending token, when there is one
    pub fn span(&self) -> Option<Span> {
        match self {
            CalcError::InvalidToken { span, .. }
            | CalcError::UnbalancedParentheses { span }
            | CalcError::InvalidOperation { span, .. }
            | CalcError::DivisionByZero { span }
            | CalcError::NonIntegerFactorial { span, .. }
            | CalcError::NegativeFactorial { span, .. }
            | CalcError::FactorialOverflow { span, .. }
            | CalcError::NonFiniteResult { span, .. } => Some(*span),
            CalcError::InvalidExpression { .. }
            | CalcError::UnknownFunction(_)
            | CalcError::UnknownOperator(_)
            | CalcError::ResourceLimitExceeded { .. } => None,
        }
    }

    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::InvalidExpression { .. } => "invalid_expression",
            CalcError::InvalidToken { .. } => "invalid_token",
            CalcError::UnbalancedParentheses { .. } => "unbalanced_parentheses",
            CalcError::InvalidOperation { .. } => "invalid_operation",
            CalcError::DivisionByZero { .. } => "division_by_zero",
            CalcError::NonIntegerFactorial { .. } => "non_integer_factorial",
            CalcError::NegativeFactorial { .. } => "negative_factorial",
            CalcError::FactorialOverflow { .. } => "factorial_overflow",
            CalcError::NonFiniteResult { .. } => "non_finite_result",
            CalcError::UnknownFunction(_) => "unknown_function",
            CalcError::UnknownOperator(_) => "unknown_operator",
            CalcError::ResourceLimitExceeded { .. } => "resource_limit_exceeded",
        }
    }
}
