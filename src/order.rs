//! Canonical ordering of aggregated terms.

use std::cmp::Ordering;

use crate::options::PowerOrdering;
use crate::term::Term;
use num_bigint::BigUint;

/// Power descending, then variable length descending, then variable
/// ascending with constants last.
pub fn compare_terms(a: &Term, b: &Term, ordering: PowerOrdering) -> Ordering {
    compare_powers(&b.power, &a.power, ordering)
        .then_with(|| b.variable.len().cmp(&a.variable.len()))
        .then_with(|| compare_variables(&a.variable, &b.variable))
}

/// Stable sort; terms that compare equal keep their aggregation order.
pub fn order_terms(terms: &mut [Term], ordering: PowerOrdering) {
    terms.sort_by(|a, b| compare_terms(a, b, ordering));
}

fn compare_powers(a: &str, b: &str, ordering: PowerOrdering) -> Ordering {
    match ordering {
        PowerOrdering::Lexicographic => a.cmp(b),
        PowerOrdering::Numeric => exponent(a).cmp(&exponent(b)),
    }
}

// Missing power maps to `None`, which is below every exponent.
fn exponent(power: &str) -> Option<BigUint> {
    power.strip_prefix('^').and_then(|digits| digits.parse().ok())
}

fn compare_variables(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Sign;

    fn term(variable: &str, power: &str) -> Term {
        Term::new(Sign::Plus, None, variable, power)
    }

    fn ordered(mut terms: Vec<Term>, ordering: PowerOrdering) -> Vec<String> {
        order_terms(&mut terms, ordering);
        terms
            .iter()
            .map(|t| format!("{}{}", t.variable, t.power))
            .collect()
    }

    #[test]
    fn higher_powers_then_longer_variables_then_alphabetical() {
        let terms = vec![
            term("", ""),
            term("y", ""),
            term("xy", ""),
            term("y", "^2"),
            term("x", ""),
            term("x", "^2"),
        ];
        assert_eq!(
            ordered(terms, PowerOrdering::Lexicographic),
            vec!["x^2", "y^2", "xy", "x", "y", ""]
        );
    }

    #[test]
    fn lexicographic_powers_put_two_before_ten() {
        let terms = vec![term("x", "^10"), term("x", "^2"), term("x", "")];
        assert_eq!(
            ordered(terms, PowerOrdering::Lexicographic),
            vec!["x^2", "x^10", "x"]
        );
    }

    #[test]
    fn numeric_powers_put_ten_before_two() {
        let terms = vec![term("x", "^2"), term("x", ""), term("x", "^10")];
        assert_eq!(
            ordered(terms, PowerOrdering::Numeric),
            vec!["x^10", "x^2", "x"]
        );
    }

    #[test]
    fn constants_sort_after_every_variable() {
        assert_eq!(
            compare_terms(&term("", ""), &term("z", ""), PowerOrdering::default()),
            Ordering::Greater
        );
    }
}
