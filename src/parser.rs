//! Term grammar.
//!
//! ```text
//! term     := [sign] [ws] ( coef? var pow? | coef )
//! sign     := '+' | '-'
//! coef     := digits ( '.' digits )?
//! var      := [a-z]+
//! pow      := '^' digits
//! sequence := term ( ws sign [ws] monomial )*
//! ```

use crate::error::{NormalizeError, Result};
use crate::term::{Rational, Sign, Term};
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit1, multispace0, multispace1, one_of, satisfy};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::error::VerboseError;
use nom::multi::{fold_many0, many1_count};
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use num_bigint::{BigInt, ParseBigIntError};
use num_traits::Num;

/// Parse a single monomial literal such as `3.5xy^2`, `-x` or `14`.
pub fn parse_term(token: &str) -> Result<Term> {
    match all_consuming(term)(token) {
        Ok((_, term)) => Ok(term),
        Err(_) => Err(NormalizeError::malformed(token)),
    }
}

/// Parse a run of terms like `2x + 5` or `-y - 3x`. Only the first term may
/// omit its sign.
pub fn parse_terms(text: &str) -> Result<Vec<Term>> {
    match all_consuming(delimited(multispace0, term_sequence, multispace0))(text) {
        Ok((_, terms)) => Ok(terms),
        Err(_) => Err(NormalizeError::malformed(text.trim())),
    }
}

/// Parse a bare numeric factor such as `3` or `0.5`.
pub fn parse_decimal(text: &str) -> Option<Rational> {
    all_consuming(decimal)(text).ok().map(|(_, value)| value)
}

fn term_sequence(input: &str) -> IResult<&str, Vec<Term>, VerboseError<&str>> {
    let (rest, first) = term(input)?;
    fold_many0(
        preceded(multispace1, signed_term),
        move || vec![first.clone()],
        |mut acc, term| {
            acc.push(term);
            acc
        },
    )(rest)
}

fn term(input: &str) -> IResult<&str, Term, VerboseError<&str>> {
    map(
        pair(opt(terminated(sign, multispace0)), monomial),
        |(sign, (coefficient, variable, power))| {
            Term::new(sign.unwrap_or(Sign::Plus), coefficient, variable, power)
        },
    )(input)
}

fn signed_term(input: &str) -> IResult<&str, Term, VerboseError<&str>> {
    map(
        pair(terminated(sign, multispace0), monomial),
        |(sign, (coefficient, variable, power))| Term::new(sign, coefficient, variable, power),
    )(input)
}

fn monomial(input: &str) -> IResult<&str, (Option<Rational>, &str, &str), VerboseError<&str>> {
    alt((
        map(
            tuple((opt(decimal), variable, opt(power))),
            |(coefficient, variable, power)| (coefficient, variable, power.unwrap_or("")),
        ),
        map(decimal, |coefficient| (Some(coefficient), "", "")),
    ))(input)
}

fn sign(input: &str) -> IResult<&str, Sign, VerboseError<&str>> {
    map(one_of("+-"), |c| {
        if c == '-' { Sign::Minus } else { Sign::Plus }
    })(input)
}

fn decimal(input: &str) -> IResult<&str, Rational, VerboseError<&str>> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        decimal_value,
    )(input)
}

fn variable(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(many1_count(satisfy(|c| c.is_ascii_lowercase())))(input)
}

fn power(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(pair(char('^'), digit1))(input)
}

fn decimal_value(text: &str) -> std::result::Result<Rational, ParseBigIntError> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let numer = BigInt::from_str_radix(&format!("{whole}{fraction}"), 10)?;
    let denom = num_traits::pow(BigInt::from(10), fraction.len());
    Ok(Rational::new(numer, denom))
}
