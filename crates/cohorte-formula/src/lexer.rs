//! Formula tokenizer.
//!
//! Identifiers start with a letter or `_` and continue with letters, digits
//! or `_`, so `POIDS` and `POIDS2` are always distinct tokens. Numbers are
//! decimal literals (`175`, `0.5`, `.5`) with an optional exponent (`1e3`,
//! `2.5E-2`).

use std::fmt;

use crate::error::FormulaError;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::Plus => f.write_str("'+'"),
            TokenKind::Minus => f.write_str("'-'"),
            TokenKind::Star => f.write_str("'*'"),
            TokenKind::Slash => f.write_str("'/'"),
            TokenKind::Caret => f.write_str("'^'"),
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character in the source formula.
    pub offset: usize,
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        let kind = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = offset;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let exp_end = end + exponent_len(&source[end..]);
                while chars.peek().is_some_and(|&(i, _)| i < exp_end) {
                    chars.next();
                }
                end = exp_end;
                let literal = &source[offset..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| FormulaError::InvalidNumber {
                        literal: literal.to_string(),
                        offset,
                    })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    offset,
                });
                continue;
            }
            c if is_ident_start(c) => {
                let mut end = offset;
                while let Some(&(i, c)) = chars.peek() {
                    if is_ident_continue(c) {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(source[offset..end].to_string()),
                    offset,
                });
                continue;
            }
            other => return Err(FormulaError::UnexpectedChar { ch: other, offset }),
        };

        chars.next();
        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}

/// Length of an exponent suffix (`e`, optional sign, at least one digit) at
/// the start of `rest`, or 0 when there is none.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let mut end = 1;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start { 0 } else { end }
}

pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
