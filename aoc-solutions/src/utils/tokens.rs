//! Small helpers for tokenizing puzzle lines

use aoc_solver::LineError;
use std::num::ParseIntError;
use std::str::FromStr;

/// Parse one whitespace-free token as a number
pub fn parse_number<T>(token: &str) -> Result<T, LineError>
where
    T: FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| LineError::InvalidNumber {
        token: token.to_string(),
        source,
    })
}

/// Parse a whitespace separated list of numbers
pub fn parse_numbers<T>(text: &str) -> Result<Vec<T>, LineError>
where
    T: FromStr<Err = ParseIntError>,
{
    text.split_whitespace().map(parse_number).collect()
}

/// Split `"<label> <id>: <rest>"` into the id and the text after the colon
///
/// Runs of spaces between label and id are allowed (`"Card   3: ..."`).
pub fn labelled_id<'a>(text: &'a str, label: &str) -> Result<(u32, &'a str), LineError> {
    let (head, rest) = text
        .split_once(':')
        .ok_or_else(|| LineError::Malformed("missing ':'".into()))?;
    let id = head
        .trim()
        .strip_prefix(label)
        .ok_or_else(|| LineError::Malformed(format!("expected '{label} <id>' before ':'")))?;
    Ok((parse_number(id.trim())?, rest))
}
