//! Write and read periods as quoted string tokens, e.g. `"P1Y2M"`.
//!
//! These work on the raw token as it would appear in a JSON document (or any
//! similar format), and are what the serde implementations amount to. The
//! period grammar never needs characters that would be escaped inside a
//! string, so no escaping or unescaping is done.
use crate::period::Period;
use crate::period_error::{PError, PResult};

/// Write `period` as a double-quoted token, e.g. `"P0D"`.
pub fn to_quoted(period: &Period) -> String {
    format!("\"{period}\"")
}

/// Read a period from a quoted token such as `"P1Y2M"`.
///
/// Exactly one leading and one trailing character are stripped (they are assumed
/// to be the quotes, and are not checked) and the rest is parsed as a period.
/// Returns [`PError::InvalidQuotedLength`] if the token is shorter than two characters.
pub fn from_quoted(token: &str) -> PResult<Period> {
    let mut chars = token.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(PError::InvalidQuotedLength(token.chars().count()));
    }

    Period::parse(chars.as_str())
}
