//! Numeric literal cooking.
//!
//! The scanner finds the extent of a literal; this module turns its text
//! into an `f64` the way the source language does: every number is a
//! double, `_` separators are ignored, and a trailing BigInt `n` is kept
//! as its numeric value.

/// Parse the text of a numeric literal.
///
/// Returns `None` for malformed text such as `0x`, `1e` or `1__0`.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.strip_suffix('n').unwrap_or(text);
    if text.is_empty() || text.starts_with('_') || text.ends_with('_') || text.contains("__") {
        return None;
    }

    let bytes = text.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix(&text[2..], radix);
        }
    }
    if bytes.len() == 2 && bytes[0] == b'0' && bytes[1].is_ascii_alphabetic() {
        return None;
    }

    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    // `1.` and `.5` are valid literals; Rust's parser accepts both too.
    if cleaned.ends_with(['e', 'E', '+', '-']) {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Accumulate digits of a non-decimal literal.
///
/// Accumulates in `f64` so literals past `u64::MAX` degrade to the nearest
/// double instead of failing, matching the source language.
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() || digits.starts_with('_') {
        return None;
    }
    let mut value = 0.0_f64;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(radix)?;
        value = value * f64::from(radix) + f64::from(digit);
    }
    Some(value)
}

#[cfg(test)]
mod tests;
