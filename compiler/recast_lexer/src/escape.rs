//! String literal escape cooking.
//!
//! Follows the sloppy-mode rules of the source language: unknown escapes
//! stand for the escaped character itself, and a backslash before a line
//! terminator is a line continuation.

/// Cook the body of a string literal (between the quotes).
///
/// Returns `None` when the body contains no backslash, so the caller can
/// intern the source slice without allocating.
pub fn unescape(body: &str) -> Option<String> {
    if !body.contains('\\') {
        return None;
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push('\0'),
            'x' => push_hex(&mut out, &mut chars, 2, 'x'),
            'u' if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String = chars.by_ref().take_while(|&c| c != '}').collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("u{");
                        out.push_str(&hex);
                        out.push('}');
                    }
                }
            }
            'u' => push_hex(&mut out, &mut chars, 4, 'u'),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
    }
    Some(out)
}

/// Decode exactly `width` hex digits; on failure keep the text verbatim.
fn push_hex(
    out: &mut String,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    width: usize,
    marker: char,
) {
    let mut digits = String::with_capacity(width);
    while digits.len() < width {
        match chars.peek() {
            Some(c) if c.is_ascii_hexdigit() => {
                digits.push(*c);
                chars.next();
            }
            _ => break,
        }
    }
    let decoded = if digits.len() == width {
        u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32)
    } else {
        None
    };
    match decoded {
        Some(c) => out.push(c),
        None => {
            out.push(marker);
            out.push_str(&digits);
        }
    }
}

#[cfg(test)]
mod tests;
