//! Number rendering shared by the text writers.

/// Shortest round-trip form of `v`, always with a decimal point or
/// exponent: `2.0`, `768000.0`, `0.15`, `1e16`.
pub fn float(v: f64) -> String {
    format!("{v:?}")
}

/// Count of decimal digits in the integer part of `v` (sign included).
///
/// `digits(5.0) == 1`, `digits(123.45) == 3`, `digits(0.5) == 1`.
pub fn digits(v: f64) -> usize {
    format!("{:.0}", v.trunc()).len()
}

/// `n` spaces.  Non-positive widths give an empty string.
pub fn spaces(width: usize, used: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}
