//! Property-based tests for the normalization pipeline.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::normalize::normalize;
    use crate::token::{join_tokens, tokenize};

    #[derive(Clone, Debug)]
    struct Monomial {
        negative: bool,
        body: String,
    }

    // Coefficients are small with up to six fractional digits; constants
    // always carry one.
    fn monomial() -> impl Strategy<Value = Monomial> {
        (
            any::<bool>(),
            proptest::option::of((1u32..20, "[0-9]{0,6}")),
            prop_oneof![Just(""), Just("x"), Just("y"), Just("xy")],
            prop_oneof![Just(""), Just("^2"), Just("^3")],
        )
            .prop_map(|(negative, coefficient, variable, power)| {
                let coefficient = match (coefficient, variable.is_empty()) {
                    (Some((n, fraction)), _) if fraction.is_empty() => format!("{n}"),
                    (Some((n, fraction)), _) => format!("{n}.{fraction}"),
                    (None, true) => "1".to_string(),
                    (None, false) => String::new(),
                };
                let power = if variable.is_empty() { "" } else { power };
                Monomial {
                    negative,
                    body: format!("{coefficient}{variable}{power}"),
                }
            })
    }

    fn factor() -> impl Strategy<Value = String> {
        "[0-9]{1,2}(\\.[0-9]{1,3})?"
    }

    fn group() -> impl Strategy<Value = Vec<Monomial>> {
        proptest::collection::vec(monomial(), 1..4)
    }

    fn side(terms: &[Monomial]) -> String {
        let mut text = String::new();
        for (index, term) in terms.iter().enumerate() {
            match (index, term.negative) {
                (0, false) => text.push_str(&term.body),
                (0, true) => text.push_str(&format!("-{}", term.body)),
                (_, false) => text.push_str(&format!(" + {}", term.body)),
                (_, true) => text.push_str(&format!(" - {}", term.body)),
            }
        }
        text
    }

    fn equation() -> impl Strategy<Value = (Vec<Monomial>, Vec<Monomial>)> {
        (
            proptest::collection::vec(monomial(), 1..6),
            proptest::collection::vec(monomial(), 1..6),
        )
    }

    proptest! {
        #[test]
        fn tokens_rejoin_to_the_input((lhs, rhs) in equation()) {
            let text = format!("{} = {}", side(&lhs), side(&rhs));
            prop_assert_eq!(join_tokens(&tokenize(&text)), text);
        }

        #[test]
        fn left_side_order_does_not_matter((lhs, rhs) in equation()) {
            let forward = format!("{} = {}", side(&lhs), side(&rhs));
            let reversed: Vec<Monomial> = lhs.iter().rev().cloned().collect();
            let backward = format!("{} = {}", side(&reversed), side(&rhs));
            prop_assert_eq!(normalize(&forward).unwrap(), normalize(&backward).unwrap());
        }

        #[test]
        fn normalizing_twice_changes_nothing((lhs, rhs) in equation()) {
            let text = format!("{} = {}", side(&lhs), side(&rhs));
            let once = normalize(&text).unwrap();
            prop_assert_eq!(normalize(&once).unwrap(), once.clone());
            prop_assert!(once.ends_with("= 0"));
        }

        #[test]
        fn identical_sides_cancel(lhs in proptest::collection::vec(monomial(), 1..6)) {
            let text = format!("{} = {}", side(&lhs), side(&lhs));
            prop_assert_eq!(normalize(&text).unwrap(), "0 = 0");
        }

        #[test]
        fn grouped_equations_are_idempotent(
            (lhs, rhs) in equation(),
            inner in group(),
            k in factor(),
        ) {
            let text = format!("{} + {k} * ({}) = {}", side(&lhs), side(&inner), side(&rhs));
            let once = normalize(&text).unwrap();
            prop_assert_eq!(normalize(&once).unwrap(), once);
        }

        #[test]
        fn group_order_does_not_matter((lhs, rhs) in equation(), inner in group(), k in factor()) {
            let reversed: Vec<Monomial> = inner.iter().rev().cloned().collect();
            let forward = format!("{} - ({}) * {k} = {}", side(&lhs), side(&inner), side(&rhs));
            let backward = format!("{} - ({}) * {k} = {}", side(&lhs), side(&reversed), side(&rhs));
            prop_assert_eq!(normalize(&forward).unwrap(), normalize(&backward).unwrap());
        }

        #[test]
        fn groups_move_across_sides((lhs, rhs) in equation(), inner in group(), k in factor()) {
            let left = format!("{} + {k} * ({}) = {}", side(&lhs), side(&inner), side(&rhs));
            let right = format!("{} = {} - {k} * ({})", side(&lhs), side(&rhs), side(&inner));
            prop_assert_eq!(normalize(&left).unwrap(), normalize(&right).unwrap());
        }

        #[test]
        fn opposite_terms_vanish(term in monomial()) {
            let text = format!("{} - {} = 0", term.body, term.body);
            prop_assert_eq!(normalize(&text).unwrap(), "0 = 0");
        }
    }
}
