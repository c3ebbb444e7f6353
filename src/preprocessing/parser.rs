//! Recursive-descent parser turning a token stream into a [Formula].
//!
//! The grammar is plain prefix notation: an operator token is always immediately
//! followed by as many operand sub-terms as its arity requires.
//!
//! ```text
//! term       ::= "true" | "false" | prop
//!              | "!" term | "X" term | "F" term | "G" term
//!              | "&" term term | "|" term term | "->" term term
//!              | "U" term term | "R" term term | "W" term term
//!              | "(" term ")"
//! ```

use crate::error::ParseError;
use crate::preprocessing::operators::{BinaryOp, UnaryOp};
use crate::preprocessing::tokenizer::{tokenize, LtlToken};
use crate::preprocessing::tree::Formula;

/// Parse a complete LTL formula from its textual representation.
pub fn parse_formula(input: &str) -> Result<Formula, ParseError> {
    let tokens = tokenize(input)?;
    let mut pos = 0;
    let formula = parse_term(&tokens, &mut pos, input.len())?;
    if pos != tokens.len() {
        let offset = tokens[pos].0;
        return Err(ParseError::new(
            offset,
            "unexpected trailing input after a complete formula".to_string(),
        ));
    }
    Ok(formula)
}

fn parse_term(
    tokens: &[(usize, LtlToken)],
    pos: &mut usize,
    end_offset: usize,
) -> Result<Formula, ParseError> {
    let (offset, token) = tokens.get(*pos).ok_or_else(|| {
        ParseError::new(end_offset, "unexpected end of input, expected a term".to_string())
    })?;
    let offset = *offset;

    match token {
        LtlToken::True => {
            *pos += 1;
            Ok(Formula::mk_true())
        }
        LtlToken::False => {
            *pos += 1;
            Ok(Formula::mk_false())
        }
        LtlToken::Prop(name) => {
            let name = name.clone();
            *pos += 1;
            Ok(Formula::mk_prop(&name))
        }
        LtlToken::LParen => {
            *pos += 1;
            let inner = parse_term(tokens, pos, end_offset)?;
            match tokens.get(*pos) {
                Some((_, LtlToken::RParen)) => {
                    *pos += 1;
                    Ok(inner)
                }
                _ => Err(ParseError::new(offset, "unmatched '('".to_string())),
            }
        }
        LtlToken::Not => {
            *pos += 1;
            Ok(Formula::mk_unary(UnaryOp::Not, parse_term(tokens, pos, end_offset)?))
        }
        LtlToken::Next => {
            *pos += 1;
            Ok(Formula::mk_unary(UnaryOp::X, parse_term(tokens, pos, end_offset)?))
        }
        LtlToken::Future => {
            *pos += 1;
            Ok(Formula::mk_unary(UnaryOp::F, parse_term(tokens, pos, end_offset)?))
        }
        LtlToken::Globally => {
            *pos += 1;
            Ok(Formula::mk_unary(UnaryOp::G, parse_term(tokens, pos, end_offset)?))
        }
        LtlToken::And => parse_binary(tokens, pos, end_offset, BinaryOp::And),
        LtlToken::Or => parse_binary(tokens, pos, end_offset, BinaryOp::Or),
        LtlToken::Impl => parse_binary(tokens, pos, end_offset, BinaryOp::Impl),
        LtlToken::Until => parse_binary(tokens, pos, end_offset, BinaryOp::U),
        LtlToken::Release => parse_binary(tokens, pos, end_offset, BinaryOp::R),
        LtlToken::Weak => parse_binary(tokens, pos, end_offset, BinaryOp::W),
        LtlToken::RParen => Err(ParseError::new(offset, "unexpected ')'".to_string())),
    }
}

fn parse_binary(
    tokens: &[(usize, LtlToken)],
    pos: &mut usize,
    end_offset: usize,
    op: BinaryOp,
) -> Result<Formula, ParseError> {
    *pos += 1;
    let left = parse_term(tokens, pos, end_offset)?;
    let right = parse_term(tokens, pos, end_offset)?;
    Ok(Formula::mk_binary(op, left, right))
}
