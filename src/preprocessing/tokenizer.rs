//! Tokenizer turning LTL formula text into a flat stream of [LtlToken]s.

use crate::error::ParseError;

use std::iter::Peekable;
use std::str::CharIndices;

/// A single lexical token, tagged with the byte offset it started at (so a later parse
/// failure can be reported against the original input, not just the token stream).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LtlToken {
    Not,
    And,
    Or,
    Impl,
    Next,
    Future,
    Globally,
    Until,
    Release,
    Weak,
    True,
    False,
    Prop(String),
    LParen,
    RParen,
}

/// Tokenize a complete formula string.
///
/// Whitespace is insignificant and never produces a token. Parentheses are accepted as
/// optional grouping around any sub-term (the grammar is unambiguous without them,
/// since every operator's arity is fixed) but are not required.
pub fn tokenize(input: &str) -> Result<Vec<(usize, LtlToken)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        match c {
            '!' => {
                chars.next();
                tokens.push((offset, LtlToken::Not));
            }
            '&' => {
                chars.next();
                tokens.push((offset, LtlToken::And));
            }
            '|' => {
                chars.next();
                tokens.push((offset, LtlToken::Or));
            }
            '(' => {
                chars.next();
                tokens.push((offset, LtlToken::LParen));
            }
            ')' => {
                chars.next();
                tokens.push((offset, LtlToken::RParen));
            }
            '-' => {
                chars.next();
                match chars.next() {
                    Some((_, '>')) => tokens.push((offset, LtlToken::Impl)),
                    _ => {
                        return Err(ParseError::new(
                            offset,
                            "expected '->' for implication".to_string(),
                        ))
                    }
                }
            }
            'X' => {
                chars.next();
                tokens.push((offset, LtlToken::Next));
            }
            'F' => {
                chars.next();
                tokens.push((offset, LtlToken::Future));
            }
            'G' => {
                chars.next();
                tokens.push((offset, LtlToken::Globally));
            }
            'U' => {
                chars.next();
                tokens.push((offset, LtlToken::Until));
            }
            'R' => {
                chars.next();
                tokens.push((offset, LtlToken::Release));
            }
            'W' => {
                chars.next();
                tokens.push((offset, LtlToken::Weak));
            }
            c if c.is_ascii_lowercase() => {
                let word = read_word(&mut chars);
                tokens.push((
                    offset,
                    match word.as_str() {
                        "true" => LtlToken::True,
                        "false" => LtlToken::False,
                        _ => LtlToken::Prop(word),
                    },
                ));
            }
            other => {
                return Err(ParseError::new(
                    offset,
                    format!("unexpected character '{other}'"),
                ))
            }
        }
    }

    Ok(tokens)
}

fn read_word(chars: &mut Peekable<CharIndices>) -> String {
    let mut word = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            word.push(c);
            chars.next();
        } else {
            break;
        }
    }
    word
}
