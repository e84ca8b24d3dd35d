//! Grouping of like terms and summation of their coefficients.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::trace;

use crate::error::{NormalizeError, Result};
use crate::parser::parse_term;
use crate::term::{GroupKey, Rational, Sign, Term};
use crate::token::Token;

/// Aggregated left side plus the untouched tokens from `=` onwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub terms: Vec<Term>,
    pub tail: Vec<Token>,
}

/// Split at `=`, read the left side into terms and merge like terms. Groups
/// keep the order in which they first appear; zero sums are dropped.
pub fn aggregate(mut tokens: Vec<Token>) -> Result<Aggregation> {
    let split = tokens
        .iter()
        .position(Token::is_equals)
        .ok_or(NormalizeError::MissingEquality)?;
    let tail = tokens.split_off(split);
    let terms = collect_terms(&tokens)?;

    let mut slots: HashMap<GroupKey, usize> = HashMap::new();
    let mut sums: Vec<(GroupKey, Rational)> = Vec::new();
    for term in terms {
        let value = term.value();
        match slots.entry(term.key()) {
            Entry::Occupied(slot) => sums[*slot.get()].1 += value,
            Entry::Vacant(slot) => {
                sums.push((slot.key().clone(), value));
                slot.insert(sums.len() - 1);
            }
        }
    }

    let terms = sums
        .into_iter()
        .filter_map(|(key, sum)| {
            trace!(variable = %key.variable, power = %key.power, %sum, "group sum");
            Term::from_value(key, sum)
        })
        .collect();
    Ok(Aggregation { terms, tail })
}

/// Read signed terms from an operator/literal stream. Consecutive signs
/// multiply; parentheses around literals are transparent.
pub fn collect_terms(tokens: &[Token]) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    let mut pending: Option<Sign> = None;
    let mut after_term = false;

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Sign(sign) => {
                pending = Some(pending.map_or(*sign, |p| p.combine(*sign)));
            }
            Token::Literal(text) => {
                if matches!(text.as_str(), "(" | ")") {
                    continue;
                }
                let inner = strip_group_delimiters(text);
                if after_term && pending.is_none() {
                    return Err(NormalizeError::unexpected(token, position));
                }
                let mut term =
                    parse_term(inner).map_err(|_| NormalizeError::malformed(text.as_str()))?;
                if let Some(sign) = pending.take() {
                    term.sign = sign.combine(term.sign);
                }
                terms.push(term);
                after_term = true;
            }
            Token::Times | Token::Equals => {
                return Err(NormalizeError::unexpected(token, position));
            }
        }
    }

    if pending.is_some() {
        let position = tokens.len() - 1;
        return Err(NormalizeError::unexpected(&tokens[position], position));
    }
    Ok(terms)
}

fn strip_group_delimiters(text: &str) -> &str {
    let text = text.strip_prefix('(').unwrap_or(text);
    text.strip_suffix(')').unwrap_or(text)
}
