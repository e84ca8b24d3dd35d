use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("malformed term: '{token}'")]
    MalformedTerm { token: String },
    #[error("could not expand parentheses: {0}")]
    ParenthesisExpansion(#[from] ExpansionError),
    #[error("equation must contain '=' followed by a right-hand side")]
    MissingEquality,
    #[error("equation must contain exactly one '=', found {count}")]
    MultipleEqualities { count: usize },
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },
}

impl NormalizeError {
    pub(crate) fn malformed(token: impl Into<String>) -> Self {
        NormalizeError::MalformedTerm {
            token: token.into(),
        }
    }

    pub(crate) fn unexpected(token: impl ToString, position: usize) -> Self {
        NormalizeError::UnexpectedToken {
            token: token.to_string(),
            position,
        }
    }
}

/// Reasons a parenthesized group could not be distributed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    #[error("nested parentheses are not supported near '{0}'")]
    Nested(String),
    #[error("unbalanced parentheses near '{0}'")]
    Unbalanced(String),
    #[error("empty parentheses")]
    EmptyGroup,
    #[error("factor '{0}' is not a number")]
    NonNumericFactor(String),
    #[error("malformed term inside parentheses: '{0}'")]
    MalformedTerm(String),
}
