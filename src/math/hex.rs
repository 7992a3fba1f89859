use super::color::NormalizedColor;
use crate::error::ColorParseError;

/// Parse the digits of a hex color (without the leading `#`).
///
/// - `rgb` / `rgba`: each digit is scaled by 16, so `f` reads as 240.
///   The alpha digit is divided by 16, so `f` is 0.9375, not 1.0.
/// - `rrggbb` / `rrggbbaa`: pairs read as bytes, alpha pair / 255.
pub fn parse_hex_digits(raw: &str) -> Result<NormalizedColor, ColorParseError> {
    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHexDigit(raw.to_string()));
    }

    let digit = |i: usize| -> u8 { nibble(raw.as_bytes()[i]) };
    let pair = |i: usize| -> u8 { (digit(i) << 4) | digit(i + 1) };

    match raw.len() {
        3 => Ok(NormalizedColor::opaque(digit(0) * 16, digit(1) * 16, digit(2) * 16)),
        4 => Ok(NormalizedColor {
            red: digit(0) * 16,
            green: digit(1) * 16,
            blue: digit(2) * 16,
            alpha: digit(3) as f64 / 16.0,
        }),
        6 => Ok(NormalizedColor::opaque(pair(0), pair(2), pair(4))),
        8 => Ok(NormalizedColor {
            red: pair(0),
            green: pair(2),
            blue: pair(4),
            alpha: pair(6) as f64 / 255.0,
        }),
        n => Err(ColorParseError::InvalidHexLength(n)),
    }
}

// Caller has already checked `b` is an ASCII hex digit.
fn nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}
