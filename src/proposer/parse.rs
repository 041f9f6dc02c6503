//! Tolerant extraction of a move from free text.
//!
//! Chat replies arrive as prose: `"(0, 2)"`, `I'll play (1,3).`, quoted
//! tuples, or nothing useful at all. Parsing is a pure function over the
//! untrusted text; it finds the first embedded integer pair and leaves
//! legality to the caller.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::Move;
use crate::error::ParseMoveError;

fn pair_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d+)\s*,\s*(\d+)").expect("pair pattern is valid")
    })
}

/// Extract the first integer pair embedded in `text`.
///
/// Tolerates surrounding quotes, parentheses, whitespace, and prose. Fails
/// with [`ParseMoveError::NoIntegerPair`] when no pair exists, or
/// [`ParseMoveError::IntegerOverflow`] when a matched number does not fit in
/// a machine integer.
pub fn parse_move(text: &str) -> Result<Move, ParseMoveError> {
    let caps = pair_pattern()
        .captures(text)
        .ok_or(ParseMoveError::NoIntegerPair)?;

    let a: usize = caps[1]
        .parse()
        .map_err(|_| ParseMoveError::IntegerOverflow)?;
    let b: usize = caps[2]
        .parse()
        .map_err(|_| ParseMoveError::IntegerOverflow)?;

    Ok(Move(a, b))
}
