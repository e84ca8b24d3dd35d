//! The normalization pipeline:
//!
//! ```text
//! tokenize -> expand parentheses -> move right -> aggregate -> order -> render
//! ```
//!
//! Each stage is a plain function over tokens or terms; nothing is cached
//! between calls, so `normalize` can run concurrently from any thread.

use tracing::debug;

use crate::aggregate::{Aggregation, aggregate};
use crate::error::Result;
use crate::expand::{expand_parentheses, has_parentheses};
use crate::format::render_equation;
use crate::migrate::move_right;
use crate::options::NormalizeOptions;
use crate::order::order_terms;
use crate::token::{join_tokens, tokenize};

/// Reduce an equation to canonical single-sided form, e.g.
/// `x^2 + 3.5xy + y = y^2 - xy + y` becomes `x^2 - y^2 + 4.5xy = 0`.
pub fn normalize(text: &str) -> Result<String> {
    normalize_with(text, &NormalizeOptions::default())
}

pub fn normalize_with(text: &str, options: &NormalizeOptions) -> Result<String> {
    let mut tokens = tokenize(text);
    debug!(tokens = %join_tokens(&tokens), "tokenized");

    if has_parentheses(&tokens) {
        tokens = expand_parentheses(tokens)?;
        debug!(tokens = %join_tokens(&tokens), "expanded parentheses");
    }

    let migrated = move_right(tokens)?;
    debug!(tokens = %join_tokens(&migrated), "moved right side");

    let Aggregation { mut terms, tail } = aggregate(migrated)?;
    order_terms(&mut terms, options.power_ordering);
    let rendered = render_equation(&terms, &tail);
    debug!(groups = terms.len(), %rendered, "normalized");

    Ok(rendered.trim().to_string())
}
