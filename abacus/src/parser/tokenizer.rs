//! Lexical analysis
//!
//! Splits an expression into tokens, left to right. Numbers are kept as raw
//! text; whether they parse is decided later by the converter.

use crate::error::CalcError;
use crate::token::{Function, Operator, Span, Token, TokenKind};
use crate::CalcResult;
use std::iter::Peekable;
use std::str::CharIndices;

/// Scan `text` into tokens.
///
/// Whitespace is skipped. A run of digits and points becomes one `Number`, a
/// run of letters becomes one lowercased `Function` or `Identifier`, and every
/// other character is a token of its own.
pub fn tokenize(text: &str) -> CalcResult<Vec<Token>> {
    if text.trim().is_empty() {
        return Err(CalcError::invalid_expression("expression is empty"));
    }

    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let token = if is_number_char(c) {
            let end = consume_while(&mut chars, start + c.len_utf8(), is_number_char);
            Token::new(
                TokenKind::Number(text[start..end].to_string()),
                Span::new(start, end),
            )
        } else if c.is_alphabetic() {
            let end = consume_while(&mut chars, start + c.len_utf8(), char::is_alphabetic);
            let word = text[start..end].to_lowercase();
            let kind = match Function::from_name(&word) {
                Some(func) => TokenKind::Function(func),
                None => TokenKind::Identifier(word),
            };
            Token::new(kind, Span::new(start, end))
        } else {
            Token::new(symbol_kind(c), Span::new(start, start + c.len_utf8()))
        };

        tokens.push(token);
    }

    Ok(tokens)
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn symbol_kind(c: char) -> TokenKind {
    match c {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        ',' => TokenKind::Comma,
        '%' => TokenKind::Percent,
        _ => match Operator::from_symbol(c) {
            Some(op) => TokenKind::Operator(op),
            None => TokenKind::Symbol(c),
        },
    }
}

/// Advance past every character matching `accept`, returning the byte offset
/// just after the last one consumed.
fn consume_while(
    chars: &mut Peekable<CharIndices<'_>>,
    mut end: usize,
    accept: impl Fn(char) -> bool,
) -> usize {
    while let Some(&(idx, c)) = chars.peek() {
        if !accept(c) {
            break;
        }
        end = idx + c.len_utf8();
        chars.next();
    }
    end
}
