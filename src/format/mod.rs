//! Formatting helpers for rendering terms and normalized equations.

pub mod equation;
pub mod term;

pub use equation::render_equation;
pub use term::{format_decimal, render_term, term_body};
