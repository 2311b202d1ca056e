//! Hex color string parsing.
//!
//! Two parsers live here. [`parse`] is strict: an optional `#` followed by
//! exactly 3, 4, 6 or 8 hex digits, anything else is an error. Configuration
//! surfaces use it so typos get reported. [`parse_lossy`] never fails: it
//! sanitizes arbitrary input into *some* color, for call sites where a typo
//! must not take anything down.

use crate::color::Color;
use crate::error::ParseColorError;

/// Parse a strict hex color string.
///
/// Accepts `rgb`, `rgba`, `rrggbb` and `rrggbbaa` digit forms, with or
/// without a leading `#`, case-insensitive. Shorthand digits expand by
/// duplication (`f` becomes `ff`).
pub fn parse(s: &str) -> Result<Color, ParseColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() {
        return Err(ParseColorError::Empty);
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit(bad));
    }
    let b = digits.as_bytes();
    match b.len() {
        3 => Ok(Color::rgb(expand(b[0]), expand(b[1]), expand(b[2]))),
        4 => Ok(Color::rgba(
            expand(b[0]),
            expand(b[1]),
            expand(b[2]),
            expand(b[3]),
        )),
        6 => Ok(Color::rgb(
            hex_byte(&digits[0..2]),
            hex_byte(&digits[2..4]),
            hex_byte(&digits[4..6]),
        )),
        8 => Ok(Color::rgba(
            hex_byte(&digits[0..2]),
            hex_byte(&digits[2..4]),
            hex_byte(&digits[4..6]),
            hex_byte(&digits[6..8]),
        )),
        n => Err(ParseColorError::InvalidLength(n)),
    }
}

/// Parse any string into a color, sanitizing invalid input.
///
/// This never fails. The input is normalized in a fixed order:
///
/// 1. Trim surrounding whitespace and lowercase.
/// 2. Strip one leading `0x`, then one leading `#`.
/// 3. Replace every remaining character outside `0-9a-f` with `0`.
/// 4. Exactly three characters expand as shorthand (`abc` becomes `aabbcc`).
/// 5. Pad on the right with `0` to six characters, or truncate to six.
/// 6. Parse the three byte pairs; `alpha` is clamped to `[0.0, 1.0]`.
///
/// Prefixes are stripped once, before sanitizing. A second `#` or a stray
/// `x` is replaced by `0`, not removed, so `parse_lossy("##123456", 1.0)`
/// equals `parse_lossy("012345", 1.0)`. Shorthand expansion only applies to
/// exactly three characters: `"1"` pads to `"100000"` rather than expanding.
pub fn parse_lossy(s: &str, alpha: f32) -> Color {
    let lowered = s.trim().to_lowercase();
    let mut rest = lowered.as_str();
    if let Some(stripped) = rest.strip_prefix("0x") {
        rest = stripped;
    }
    if let Some(stripped) = rest.strip_prefix('#') {
        rest = stripped;
    }

    let mut hex: String = rest
        .chars()
        .map(|c| match c {
            '0'..='9' | 'a'..='f' => c,
            _ => '0',
        })
        .collect();

    if hex.len() == 3 {
        hex = hex.chars().flat_map(|c| [c, c]).collect();
    }
    while hex.len() < 6 {
        hex.push('0');
    }
    hex.truncate(6);

    Color::rgb(
        hex_byte(&hex[0..2]),
        hex_byte(&hex[2..4]),
        hex_byte(&hex[4..6]),
    )
    .with_opacity(alpha)
}

/// Value of one validated hex digit byte.
fn hex_digit(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'a'..=b'f' => ch - b'a' + 10,
        b'A'..=b'F' => ch - b'A' + 10,
        _ => 0,
    }
}

/// Expand one shorthand digit into a full byte (`f` becomes `0xff`).
fn expand(ch: u8) -> u8 {
    let n = hex_digit(ch);
    n << 4 | n
}

/// Parse two hex digits into a byte, 0 on failure.
fn hex_byte(s: &str) -> u8 {
    u8::from_str_radix(s, 16).unwrap_or(0)
}
