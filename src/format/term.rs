use crate::term::{Rational, Sign, Term};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Extra fractional places for a denominator with a factor other than 2 or
/// 5. Decimal inputs never produce one.
const NON_TERMINATING_PLACES: usize = 64;

/// Coefficient, variable and power without the sign, e.g. `4.5xy` or `30`.
/// A unit coefficient is elided unless the term is a constant.
pub fn term_body(term: &Term) -> String {
    let coefficient = match &term.coefficient {
        Some(c) if !(c.is_one() && !term.is_constant()) => format_decimal(c),
        None if term.is_constant() => "1".to_string(),
        _ => String::new(),
    };
    format!("{coefficient}{}{}", term.variable, term.power)
}

/// Render a term at a position in the left-hand side. The leading term omits
/// `+` and attaches `-`; later terms put the operator in its own token.
pub fn render_term(term: &Term, leading: bool) -> String {
    let body = term_body(term);
    match (leading, term.sign) {
        (true, Sign::Plus) => body,
        (true, Sign::Minus) => format!("-{body}"),
        (false, sign) => format!("{sign} {body}"),
    }
}

/// Exact decimal rendering: `9/2` prints as `4.5`, `30/1` as `30`. The output
/// always reparses as a decimal literal.
pub fn format_decimal(value: &Rational) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude.is_integer() {
        return format!("{sign}{}", magnitude.to_integer());
    }

    let scale = decimal_places(magnitude.denom());
    let shift = Rational::from_integer(num_traits::pow(BigInt::from(10), scale));
    let scaled = (magnitude * shift).round().to_integer().to_string();
    let digits = format!("{scaled:0>width$}", width = scale + 1);
    let (whole, fraction) = digits.split_at(digits.len() - scale);
    let fraction = fraction.trim_end_matches('0');
    match (whole, fraction) {
        ("0", "") => "0".to_string(),
        (whole, "") => format!("{sign}{whole}"),
        (whole, fraction) => format!("{sign}{whole}.{fraction}"),
    }
}

// A denominator of 2^a * 5^b terminates after max(a, b) places.
fn decimal_places(denom: &BigInt) -> usize {
    let mut rest = denom.clone();
    let twos = strip_factor(&mut rest, 2);
    let fives = strip_factor(&mut rest, 5);
    let places = twos.max(fives);
    if rest.is_one() {
        places
    } else {
        places + NON_TERMINATING_PLACES
    }
}

fn strip_factor(n: &mut BigInt, factor: u32) -> usize {
    let factor = BigInt::from(factor);
    let mut count = 0;
    loop {
        let (quotient, rem) = n.div_rem(&factor);
        if !rem.is_zero() {
            return count;
        }
        *n = quotient;
        count += 1;
    }
}
