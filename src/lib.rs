//! Normalization of polynomial equations written as space-separated tokens.
//!
//! All terms are moved to the left-hand side, like terms are combined and the
//! survivors are ordered canonically:
//!
//! ```
//! assert_eq!(
//!     eqnorm::normalize("x^2 + 3.5xy + y = y^2 - xy + y").unwrap(),
//!     "x^2 - y^2 + 4.5xy = 0"
//! );
//! ```

pub mod aggregate;
pub mod error;
pub mod expand;
pub mod format;
pub mod migrate;
pub mod normalize;
pub mod options;
pub mod order;
pub mod parser;
pub mod term;
pub mod token;
pub mod ui;

#[cfg(test)]
mod proptests;

pub use aggregate::{Aggregation, aggregate, collect_terms};
pub use error::{ExpansionError, NormalizeError, Result};
pub use expand::{expand_parentheses, open_parentheses};
pub use format::{format_decimal, render_equation, render_term};
pub use migrate::move_right;
pub use normalize::{normalize, normalize_with};
pub use options::{NormalizeOptions, PowerOrdering};
pub use order::{compare_terms, order_terms};
pub use parser::{parse_decimal, parse_term, parse_terms};
pub use term::{GroupKey, Rational, Sign, Term};
pub use token::{Token, join_tokens, tokenize};
