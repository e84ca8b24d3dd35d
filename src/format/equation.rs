use crate::format::term::render_term;
use crate::term::Term;
use crate::token::{Token, join_tokens};

/// Join the ordered left-hand terms with the preserved `= 0` tail. A left
/// side where every group cancelled renders as `0`.
pub fn render_equation(terms: &[Term], tail: &[Token]) -> String {
    let mut parts: Vec<String> = terms
        .iter()
        .enumerate()
        .map(|(index, term)| render_term(term, index == 0))
        .collect();
    if parts.is_empty() {
        parts.push("0".to_string());
    }
    if !tail.is_empty() {
        parts.push(join_tokens(tail));
    }
    parts.join(" ")
}
