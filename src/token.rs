//! Whitespace tokenizer for equation text.

use std::fmt;

use crate::term::Sign;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Sign(Sign),
    Equals,
    Times,
    /// A monomial or numeric factor; parentheses stay attached, e.g. `(2x`.
    Literal(String),
}

impl Token {
    pub fn classify(fragment: &str) -> Self {
        match fragment {
            "+" => Token::Sign(Sign::Plus),
            "-" => Token::Sign(Sign::Minus),
            "=" => Token::Equals,
            "*" => Token::Times,
            other => Token::Literal(other.to_string()),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Token::Literal(text.into())
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Token::Literal(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_equals(&self) -> bool {
        matches!(self, Token::Equals)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Sign(sign) => write!(f, "{sign}"),
            Token::Equals => f.write_str("="),
            Token::Times => f.write_str("*"),
            Token::Literal(text) => f.write_str(text),
        }
    }
}

pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::classify).collect()
}

pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
