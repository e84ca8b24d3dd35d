//! Distribution of numeric factors and signs over single-level parenthesized
//! groups such as `- 2 * (y - 3x) * 0.5`.

use tracing::trace;

use crate::error::{ExpansionError, Result};
use crate::format::term_body;
use crate::parser::{parse_decimal, parse_terms};
use crate::term::{Rational, Sign, Term};
use crate::token::{Token, join_tokens, tokenize};
use num_traits::One;

type ExpandResult<T> = std::result::Result<T, ExpansionError>;

pub fn has_parentheses(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .filter_map(Token::as_literal)
        .any(|text| text.contains(['(', ')']))
}

/// Text-level expansion. Input without parentheses is returned unchanged.
pub fn open_parentheses(text: &str) -> Result<String> {
    let tokens = tokenize(text);
    if !has_parentheses(&tokens) {
        return Ok(text.to_string());
    }
    Ok(join_tokens(&expand_parentheses(tokens)?))
}

/// Rewrite every `(...)` group in one left-to-right pass. A group with no
/// adjacent factor and no leading `-` is kept exactly as written.
pub fn expand_parentheses(tokens: Vec<Token>) -> Result<Vec<Token>> {
    Ok(expand_groups(tokens)?)
}

fn expand_groups(tokens: Vec<Token>) -> ExpandResult<Vec<Token>> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        match token.as_literal() {
            Some(text) if text.starts_with('(') => {
                let end = find_group_end(&tokens, index)?;
                let (trailing, next) = trailing_factors(&tokens, end + 1)?;
                let (leading, sign) = take_leading(&mut out)?;
                let group = &tokens[index..=end];
                let terms = group_terms(group)?;

                if leading.is_none() && trailing.is_none() && sign != Some(Sign::Minus) {
                    out.extend(sign.map(Token::Sign));
                    out.extend(group.iter().cloned());
                } else {
                    let factor = leading.unwrap_or_else(Rational::one)
                        * trailing.unwrap_or_else(Rational::one);
                    distribute(&mut out, terms, &factor, sign);
                }
                index = next;
            }
            Some(text) if text.contains('(') => {
                return Err(ExpansionError::MalformedTerm(text.to_string()));
            }
            Some(text) if text.contains(')') => {
                return Err(ExpansionError::Unbalanced(text.to_string()));
            }
            _ => {
                out.push(token.clone());
                index += 1;
            }
        }
    }
    Ok(out)
}

/// Index of the token closing the group opened at `start`.
fn find_group_end(tokens: &[Token], start: usize) -> ExpandResult<usize> {
    for (offset, token) in tokens[start..].iter().enumerate() {
        let text = match token {
            Token::Literal(text) => text,
            Token::Equals => return Err(ExpansionError::Unbalanced(tokens[start].to_string())),
            _ => continue,
        };
        let inner = if offset == 0 { &text[1..] } else { text.as_str() };
        if inner.contains('(') {
            return Err(ExpansionError::Nested(text.clone()));
        }
        match inner.find(')') {
            Some(pos) if pos + 1 == inner.len() => return Ok(start + offset),
            Some(_) => return Err(ExpansionError::Unbalanced(text.clone())),
            None => {}
        }
    }
    Err(ExpansionError::Unbalanced(tokens[start].to_string()))
}

/// Pop `factor *` pairs and then an optional sign off the already emitted
/// tokens.
fn take_leading(
    out: &mut Vec<Token>,
) -> ExpandResult<(Option<Rational>, Option<Sign>)> {
    let mut factor: Option<Rational> = None;
    while matches!(out.last(), Some(Token::Times)) {
        out.pop();
        let operand = out.pop().unwrap_or(Token::Times);
        let value = numeric_factor(&operand)?;
        factor = Some(factor.unwrap_or_else(Rational::one) * value);
    }
    let sign = match out.last() {
        Some(Token::Sign(sign)) => {
            let sign = *sign;
            out.pop();
            Some(sign)
        }
        _ => None,
    };
    Ok((factor, sign))
}

/// Consume `* factor` pairs starting at `from`; returns the product and the
/// index of the first token after them.
fn trailing_factors(
    tokens: &[Token],
    from: usize,
) -> ExpandResult<(Option<Rational>, usize)> {
    let mut factor: Option<Rational> = None;
    let mut index = from;
    while matches!(tokens.get(index), Some(Token::Times)) {
        let value = match tokens.get(index + 1) {
            Some(operand) => numeric_factor(operand)?,
            None => return Err(ExpansionError::NonNumericFactor("*".to_string())),
        };
        factor = Some(factor.unwrap_or_else(Rational::one) * value);
        index += 2;
    }
    Ok((factor, index))
}

fn numeric_factor(token: &Token) -> ExpandResult<Rational> {
    token
        .as_literal()
        .and_then(parse_decimal)
        .ok_or_else(|| ExpansionError::NonNumericFactor(token.to_string()))
}

/// Parse the terms between a group's parentheses. Kept groups are checked
/// too, so every group fails the same way regardless of its factors.
fn group_terms(group: &[Token]) -> ExpandResult<Vec<Term>> {
    let content = group_content(group);
    if content.is_empty() {
        return Err(ExpansionError::EmptyGroup);
    }
    parse_terms(&content).map_err(|_| ExpansionError::MalformedTerm(content))
}

fn distribute(out: &mut Vec<Token>, terms: Vec<Term>, factor: &Rational, sign: Option<Sign>) {
    trace!(terms = terms.len(), %factor, ?sign, "distributing group");

    let flip = sign == Some(Sign::Minus);
    for (index, term) in terms.into_iter().enumerate() {
        let mut term = term.scale(factor);
        if flip {
            term = term.negate();
        }
        if index > 0 || sign.is_some() || term.sign == Sign::Minus {
            out.push(Token::Sign(term.sign));
        }
        out.push(Token::Literal(term_body(&term)));
    }
}

/// Text between the group's parentheses.
fn group_content(group: &[Token]) -> String {
    let joined = join_tokens(group);
    let inner = joined.strip_prefix('(').unwrap_or(&joined);
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    inner.trim().to_string()
}
