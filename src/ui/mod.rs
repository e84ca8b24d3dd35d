//! String-based helpers for front ends that show or store results.

use crate::normalize::normalize_with;
use crate::options::NormalizeOptions;

/// Normalized form of `input`, or `[ERROR]{input}[{message}]` when it cannot
/// be normalized.
pub fn annotate(input: &str, options: &NormalizeOptions) -> String {
    match normalize_with(input, options) {
        Ok(normalized) => normalized,
        Err(e) => format!("[ERROR]{input}[{e}]"),
    }
}

/// Annotate each line independently; the output has one entry per input line.
pub fn annotate_lines<'a, I>(lines: I, options: &NormalizeOptions) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| annotate(line, options))
        .collect()
}

pub fn is_error(annotated: &str) -> bool {
    annotated.starts_with("[ERROR]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_annotated_with_the_input() {
        let options = NormalizeOptions::default();
        let annotated = annotate("x + y", &options);
        assert_eq!(
            annotated,
            "[ERROR]x + y[equation must contain '=' followed by a right-hand side]"
        );
        assert!(is_error(&annotated));
    }

    #[test]
    fn lines_are_processed_independently() {
        let options = NormalizeOptions::default();
        let out = annotate_lines(["x = x", "2 * (x = 0", "x + 1 = 1"], &options);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], "0 = 0");
        assert!(is_error(&out[1]));
        assert_eq!(out[2], "x = 0");
    }
}
