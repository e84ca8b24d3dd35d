/// How power suffixes compare when ordering terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerOrdering {
    /// Compare the literal suffix text, so `^2` sorts ahead of `^10`.
    #[default]
    Lexicographic,
    /// Compare exponents as integers, so `^10` sorts ahead of `^2`.
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    pub power_ordering: PowerOrdering,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_power_ordering(mut self, power_ordering: PowerOrdering) -> Self {
        self.power_ordering = power_ordering;
        self
    }
}
