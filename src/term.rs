//! Monomial term definitions and helpers.

use std::fmt;

use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

pub type Rational = BigRational;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Plus),
            '-' => Some(Sign::Minus),
            _ => None,
        }
    }

    /// Sign of `value`; zero counts as positive.
    pub fn of(value: &Rational) -> Self {
        if value.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    /// Product of two signs, as when `- (-x)` collapses to `+x`.
    pub fn combine(self, other: Sign) -> Self {
        if self == other { Sign::Plus } else { Sign::Minus }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of like terms: two terms combine iff both fields match exactly.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GroupKey {
    pub variable: String,
    pub power: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Term {
    pub sign: Sign,
    /// Magnitude of the coefficient; `None` means an implicit `1`.
    pub coefficient: Option<Rational>,
    /// Lowercase letters; empty for a constant term.
    pub variable: String,
    /// Literal `^<digits>` suffix, or empty.
    pub power: String,
}

impl Term {
    pub fn new(
        sign: Sign,
        coefficient: Option<Rational>,
        variable: impl Into<String>,
        power: impl Into<String>,
    ) -> Self {
        Term {
            sign,
            coefficient,
            variable: variable.into(),
            power: power.into(),
        }
    }

    pub fn constant(sign: Sign, value: Rational) -> Self {
        Term::new(sign, Some(value), "", "")
    }

    /// Rebuild a term from the signed sum of a group. Returns `None` when the
    /// sum is zero so the group disappears from the equation.
    pub fn from_value(key: GroupKey, value: Rational) -> Option<Self> {
        if value.is_zero() {
            return None;
        }
        let magnitude = value.abs();
        let coefficient = if magnitude.is_one() {
            None
        } else {
            Some(magnitude)
        };
        Some(Term {
            sign: Sign::of(&value),
            coefficient,
            variable: key.variable,
            power: key.power,
        })
    }

    pub fn is_constant(&self) -> bool {
        self.variable.is_empty()
    }

    pub fn magnitude(&self) -> Rational {
        self.coefficient.clone().unwrap_or_else(Rational::one)
    }

    /// Signed contribution of this term to its group.
    pub fn value(&self) -> Rational {
        match self.sign {
            Sign::Plus => self.magnitude(),
            Sign::Minus => -self.magnitude(),
        }
    }

    pub fn key(&self) -> GroupKey {
        GroupKey {
            variable: self.variable.clone(),
            power: self.power.clone(),
        }
    }

    pub fn negate(mut self) -> Self {
        self.sign = self.sign.flip();
        self
    }

    /// Multiply the coefficient by `factor`. The result always carries an
    /// explicit coefficient.
    pub fn scale(mut self, factor: &Rational) -> Self {
        let product = self.magnitude() * factor;
        if product.is_negative() {
            self.sign = self.sign.flip();
        }
        self.coefficient = Some(product.abs());
        self
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, crate::format::term_body(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rational(num: i64, den: i64) -> Rational {
        Rational::new(num.into(), den.into())
    }

    #[test]
    fn signs_combine_like_multiplication() {
        assert_eq!(Sign::Minus.combine(Sign::Minus), Sign::Plus);
        assert_eq!(Sign::Plus.combine(Sign::Minus), Sign::Minus);
        assert_eq!(Sign::Plus.combine(Sign::Plus), Sign::Plus);
    }

    #[test]
    fn implicit_coefficient_counts_as_one() {
        let term = Term::new(Sign::Minus, None, "xy", "");
        assert_eq!(term.value(), rational(-1, 1));
    }

    #[test]
    fn scaling_keeps_sign_and_makes_coefficient_explicit() {
        let term = Term::new(Sign::Minus, None, "y", "").scale(&rational(1, 2));
        assert_eq!(term.sign, Sign::Minus);
        assert_eq!(term.coefficient, Some(rational(1, 2)));
    }

    #[test]
    fn zero_sum_drops_the_group() {
        let key = Term::new(Sign::Plus, None, "x", "^2").key();
        assert!(Term::from_value(key, rational(0, 1)).is_none());
    }

    #[test]
    fn unit_sum_elides_coefficient() {
        let key = Term::new(Sign::Plus, None, "x", "").key();
        let term = Term::from_value(key, rational(-1, 1)).expect("non-zero");
        assert_eq!(term.sign, Sign::Minus);
        assert_eq!(term.coefficient, None);
        assert_eq!(term.to_string(), "-x");
    }
}
