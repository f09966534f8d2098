//! Infix to postfix conversion (shunting-yard)

use crate::error::CalcError;
use crate::parser::literals::is_number;
use crate::resource_limits::ResourceLimits;
use crate::token::{Function, Operator, Postfix, PostfixItem, Span, Token, TokenKind};
use crate::CalcResult;

/// Entries of the converter's operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator, Span),
    Function(Function, Span),
    LeftParen(Span),
}

/// Convert an infix token sequence into RPN.
///
/// Equal precedence always pops, so every operator (including `^`) groups
/// left to right. `%` is emitted straight to the output as a postfix marker
/// on whatever value precedes it. A comma only flushes pending operators back
/// to the nearest `(`; argument counts are not tracked.
///
/// A `-` where an operand is expected (start of input, after `(`, `,` or
/// another operator) and directly followed by a number is folded into that
/// number as its sign, so `fact(-1)` and `2*-3` read as written.
pub fn to_postfix(tokens: &[Token], limits: &ResourceLimits) -> CalcResult<Postfix> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    let mut depth = 0usize;
    let mut expects_operand = true;
    let mut tokens = tokens.iter().peekable();

    while let Some(token) = tokens.next() {
        let span = token.span;
        let operand_position = expects_operand;
        expects_operand = matches!(
            token.kind,
            TokenKind::Operator(_) | TokenKind::LeftParen | TokenKind::Comma
        );

        match &token.kind {
            TokenKind::Number(text) if is_number(text) => output.push(PostfixItem::Number {
                text: text.clone(),
                span,
            }),
            TokenKind::Operator(Operator::Subtract)
                if operand_position && next_is_number(tokens.peek().copied()) =>
            {
                if let Some(next) = tokens.next() {
                    output.push(PostfixItem::Number {
                        text: format!("-{}", next.kind),
                        span: Span::new(span.start, next.span.end),
                    });
                }
                expects_operand = false;
            }
            TokenKind::Function(func) => stack.push(Pending::Function(*func, span)),
            TokenKind::Percent => output.push(PostfixItem::Percent { span }),
            TokenKind::Operator(op) => {
                while let Some(&Pending::Operator(top, top_span)) = stack.last() {
                    if op.precedence() > top.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(PostfixItem::Operator {
                        op: top,
                        span: top_span,
                    });
                }
                stack.push(Pending::Operator(*op, span));
            }
            TokenKind::LeftParen => {
                depth += 1;
                if depth > limits.max_nesting_depth {
                    return Err(CalcError::ResourceLimitExceeded {
                        limit_name: "max_nesting_depth".to_string(),
                        limit_value: limits.max_nesting_depth.to_string(),
                        actual_value: depth.to_string(),
                    });
                }
                stack.push(Pending::LeftParen(span));
            }
            TokenKind::RightParen => {
                flush_to_paren(&mut stack, &mut output);
                match stack.pop() {
                    Some(Pending::LeftParen(_)) => depth -= 1,
                    _ => return Err(CalcError::UnbalancedParentheses { span }),
                }
                if let Some(&Pending::Function(func, func_span)) = stack.last() {
                    stack.pop();
                    output.push(PostfixItem::Function {
                        func,
                        span: func_span,
                    });
                }
            }
            TokenKind::Comma => flush_to_paren(&mut stack, &mut output),
            TokenKind::Number(_) | TokenKind::Identifier(_) | TokenKind::Symbol(_) => {
                return Err(CalcError::InvalidToken {
                    token: token.kind.to_string(),
                    span,
                });
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            Pending::Operator(op, span) => output.push(PostfixItem::Operator { op, span }),
            Pending::Function(func, span) => output.push(PostfixItem::Function { func, span }),
            Pending::LeftParen(span) => return Err(CalcError::UnbalancedParentheses { span }),
        }
    }

    Ok(Postfix(output))
}

fn next_is_number(token: Option<&Token>) -> bool {
    matches!(token, Some(Token { kind: TokenKind::Number(text), .. }) if is_number(text))
}

/// Pop operators and functions to the output until a `(` is on top or the
/// stack is empty. The `(` itself stays.
fn flush_to_paren(stack: &mut Vec<Pending>, output: &mut Vec<PostfixItem>) {
    while let Some(&entry) = stack.last() {
        match entry {
            Pending::LeftParen(_) => break,
            Pending::Operator(op, span) => output.push(PostfixItem::Operator { op, span }),
            Pending::Function(func, span) => output.push(PostfixItem::Function { func, span }),
        }
        stack.pop();
    }
}
