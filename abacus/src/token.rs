//! Token and operator metadata shared by the tokenizer, converter and evaluator
//!
//! The operator and function sets are closed, so lookups are plain `match`
//! dispatch rather than tables built at runtime.

use std::fmt;

/// Byte range of a token in the source expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Binary operators, all left-associative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    /// Binding strength. `^` is not right-associative: `2^3^2` is `(2^3)^2`.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary functions recognised by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Abs,
    Fact,
}

impl Function {
    /// Look up a function by its lowercase name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "log" => Some(Function::Log),
            "ln" => Some(Function::Ln),
            "sqrt" => Some(Function::Sqrt),
            "abs" => Some(Function::Abs),
            "fact" => Some(Function::Fact),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
            Function::Fact => "fact",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Raw digit/point run; parseability is checked by the converter
    Number(String),
    Operator(Operator),
    Function(Function),
    /// Letter run that names no known function
    Identifier(String),
    LeftParen,
    RightParen,
    Comma,
    Percent,
    /// Any other single character
    Symbol(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(text) | TokenKind::Identifier(text) => f.write_str(text),
            TokenKind::Operator(op) => write!(f, "{}", op),
            TokenKind::Function(func) => write!(f, "{}", func),
            TokenKind::LeftParen => f.write_str("("),
            TokenKind::RightParen => f.write_str(")"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Percent => f.write_str("%"),
            TokenKind::Symbol(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// One element of a postfix (RPN) sequence
///
/// Parentheses and commas never reach this stage. `Percent` is the synthetic
/// marker the converter emits for `%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixItem {
    Number { text: String, span: Span },
    Operator { op: Operator, span: Span },
    Function { func: Function, span: Span },
    Percent { span: Span },
}

impl PostfixItem {
    pub fn span(&self) -> Span {
        match self {
            PostfixItem::Number { span, .. }
            | PostfixItem::Operator { span, .. }
            | PostfixItem::Function { span, .. }
            | PostfixItem::Percent { span } => *span,
        }
    }
}

impl fmt::Display for PostfixItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixItem::Number { text, .. } => f.write_str(text),
            PostfixItem::Operator { op, .. } => write!(f, "{}", op),
            PostfixItem::Function { func, .. } => write!(f, "{}", func),
            PostfixItem::Percent { .. } => f.write_str("percent"),
        }
    }
}

/// A complete RPN sequence in evaluation order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix(pub Vec<PostfixItem>);

impl Postfix {
    pub fn items(&self) -> &[PostfixItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Function {
    type Err = crate::CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Function::from_name(&s.to_lowercase())
            .ok_or_else(|| crate::CalcError::UnknownFunction(s.to_string()))
    }
}

impl TryFrom<char> for Operator {
    type Error = crate::CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Operator::from_symbol(symbol)
            .ok_or_else(|| crate::CalcError::UnknownOperator(symbol.to_string()))
    }
}
