//! Moves the right-hand side of an equation to the left with inverted signs.

use crate::error::{NormalizeError, Result};
use crate::term::Sign;
use crate::token::Token;

/// Rewrite `lhs = rhs` as `lhs - rhs = 0`.
///
/// A right side that opens with a term gets a `-` in place of `=`. One that
/// opens with a sign token just loses the `=`, since flipping that sign
/// already negates the first term. Signs attached to a literal (`-y`) are
/// left alone because the operator in front of them is flipped instead.
pub fn move_right(tokens: Vec<Token>) -> Result<Vec<Token>> {
    let index = equality_index(&tokens)?;
    let (left, right) = tokens.split_at(index);
    let right = &right[1..];
    if right.is_empty() {
        return Err(NormalizeError::MissingEquality);
    }

    let mut migrated = Vec::with_capacity(tokens.len() + 2);
    migrated.extend_from_slice(left);
    if !matches!(right[0], Token::Sign(_)) {
        migrated.push(Token::Sign(Sign::Minus));
    }
    migrated.extend(right.iter().map(|token| match token {
        Token::Sign(sign) => Token::Sign(sign.flip()),
        other => other.clone(),
    }));
    migrated.push(Token::Equals);
    migrated.push(Token::literal("0"));
    Ok(migrated)
}

fn equality_index(tokens: &[Token]) -> Result<usize> {
    let mut positions = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is_equals())
        .map(|(index, _)| index);
    let first = positions.next().ok_or(NormalizeError::MissingEquality)?;
    let extra = positions.count();
    if extra > 0 {
        return Err(NormalizeError::MultipleEqualities { count: extra + 1 });
    }
    Ok(first)
}
