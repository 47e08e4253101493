//! Numeric prefix grammar shared by the console reader and the
//! command-line calculator.
//!
//! Reads follow stream-extraction rules: the longest numeric prefix of the
//! text is taken and whatever follows it is left for the next read. Nothing
//! here ever fails; callers decide what a missing prefix means.

use regex::Regex;
use std::sync::LazyLock;

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("integer pattern is valid"));

static DOUBLE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("floating point pattern is valid")
});

/// Parse the integer at the start of `text`.
///
/// Returns the value and the number of bytes it occupied. Values outside the
/// `i32` range saturate to the nearest bound.
pub fn int_prefix(text: &str) -> Option<(i32, usize)> {
    let found = INT_PREFIX.find(text)?;
    let digits = found.as_str();
    let value = digits.parse::<i32>().unwrap_or(if digits.starts_with('-') {
        i32::MIN
    } else {
        i32::MAX
    });
    Some((value, found.end()))
}

/// Parse the floating point number at the start of `text`.
///
/// Accepts an optional sign, digits with an optional fraction (`5`, `5.`,
/// `.5`, `5.25`) and an optional exponent. Overflowing exponents produce an
/// infinity.
pub fn double_prefix(text: &str) -> Option<(f64, usize)> {
    let found = DOUBLE_PREFIX.find(text)?;
    let value = found.as_str().parse::<f64>().ok()?;
    Some((value, found.end()))
}

/// Convert an argument the way `atoi` does: leading whitespace is skipped,
/// the integer prefix is used and anything unparsable is `0`.
pub fn atoi(text: &str) -> i32 {
    int_prefix(text.trim_start()).map_or(0, |(value, _)| value)
}
