//! Errors in ISO-8601 period strings
use std::fmt::Display;
use pest::{RuleType, error::InputLocation};

/// Type alias for a `Result` with [`PError`] as the error type.
pub type PResult<T> = Result<T, PError>;


/// An error related to parsing a period string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PError {
    /// Indicates that the string did not start with a "P" or was too short
    /// to hold anything after it.
    MissingPrefix,

    /// Indicates that a run of digits and decimal points could not be converted
    /// to a floating point value, e.g. "1.2.3".
    InvalidNumber(String),

    /// Indicates a character that is not a digit, decimal point, sign, or one of
    /// the designators Y, M, W, or D. `pos` is the byte offset in the input.
    InvalidCharacter{ ch: char, pos: usize },

    /// Indicates that a quoted token was too short to hold even an empty
    /// quoted string. Holds the length of the token.
    InvalidQuotedLength(usize),
}

impl Display for PError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PError::MissingPrefix => write!(f, "invalid period format: must start with P"),
            PError::InvalidNumber(num) => write!(f, "invalid number format: {num}"),
            PError::InvalidCharacter { ch, pos } => {
                write!(f, "invalid character in period: '{ch}' at position {pos}")
            },
            PError::InvalidQuotedLength(len) => {
                write!(f, "invalid quoted string length: {len} (must be at least 2)")
            },
        }
    }
}

impl std::error::Error for PError {}

impl PError {
    /// Convert a grammar failure into an `InvalidCharacter` pointing at the
    /// place in `s` where the grammar stopped matching.
    pub(crate) fn from_pest<R: RuleType>(e: pest::error::Error<R>, s: &str) -> Self {
        let pos = match e.location {
            InputLocation::Pos(p) => p,
            InputLocation::Span((start, _)) => start,
        };

        // The grammar only fails at a character it cannot accept, but fall back
        // to the replacement character rather than panic if it ever reports the end.
        let ch = s.get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Self::InvalidCharacter { ch, pos }
    }
}
