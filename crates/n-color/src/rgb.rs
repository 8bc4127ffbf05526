// SPDX-License-Identifier: MIT
//
// 8-bit sRGB triples and their canonical `#rrggbb` text form.
//
// Hex parsing is deliberately lenient about trailing characters: only the
// first six hex digits after an optional `#` are consumed, anything after
// them is ignored. It is strict about everything it consumes.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, MalformedReason, Result};
use crate::hsl::{Hsl, rgb_to_hsl};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A color as three 8-bit sRGB channels.
///
/// ```
/// use n_color::Rgb;
///
/// let blue = Rgb::from_hex("#3366cc").unwrap();
/// assert_eq!(blue, Rgb::new(51, 102, 204));
/// assert_eq!(blue.to_string(), "#3366cc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`. See [`hex_to_rgb`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::MalformedInput`] if fewer than six hex digits
    /// follow the optional `#`, or one of them is not a hex digit.
    pub fn from_hex(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// The channels as a plain tuple.
    #[inline]
    #[must_use]
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// CSS functional notation, `rgb(r, g, b)`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        rgb.to_tuple()
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── Hex Codec ───────────────────────────────────────────────────────────────

/// Parse a hex color into RGB.
///
/// Strips one leading `#`, then reads three two-digit channels at offsets
/// 0, 2 and 4. Upper and lower case digits are both accepted. Characters
/// past the sixth are never looked at.
///
/// # Errors
///
/// [`ColorError::MalformedInput`] with [`MalformedReason::TooShort`] when
/// fewer than six characters remain after the `#`, or
/// [`MalformedReason::InvalidDigit`] for the first non-hex byte among the
/// six consumed.
pub fn hex_to_rgb(input: &str) -> Result<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();

    if digits.len() < 6 {
        return Err(ColorError::malformed(
            input,
            MalformedReason::TooShort { len: digits.len() },
        ));
    }

    let channel = |offset: usize| -> Result<u8> {
        let hi = parse_hex_digit(digits[offset]).ok_or_else(|| {
            ColorError::malformed(
                input,
                MalformedReason::InvalidDigit { position: offset, found: digits[offset] },
            )
        })?;
        let lo = parse_hex_digit(digits[offset + 1]).ok_or_else(|| {
            ColorError::malformed(
                input,
                MalformedReason::InvalidDigit { position: offset + 1, found: digits[offset + 1] },
            )
        })?;
        Ok(hi << 4 | lo)
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format RGB as lowercase, zero-padded `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parses_with_hash() {
        assert_eq!(hex_to_rgb("#3366cc").unwrap(), Rgb::new(51, 102, 204));
    }

    #[test]
    fn parses_without_hash() {
        assert_eq!(hex_to_rgb("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn parses_uppercase() {
        assert_eq!(hex_to_rgb("#FF8040").unwrap(), Rgb::new(255, 128, 64));
    }

    #[test]
    fn parses_extremes() {
        assert_eq!(hex_to_rgb("#000000").unwrap(), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#ffffff").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn ignores_trailing_characters() {
        assert_eq!(hex_to_rgb("#3366ccff").unwrap(), Rgb::new(51, 102, 204));
        assert_eq!(hex_to_rgb("3366cc-garbage").unwrap(), Rgb::new(51, 102, 204));
    }

    #[test]
    fn only_one_hash_is_stripped() {
        let err = hex_to_rgb("##3366cc").unwrap_err();
        assert_eq!(
            err.reason(),
            MalformedReason::InvalidDigit { position: 0, found: b'#' }
        );
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(
            hex_to_rgb("#12345").unwrap_err().reason(),
            MalformedReason::TooShort { len: 5 }
        );
        assert_eq!(
            hex_to_rgb("").unwrap_err().reason(),
            MalformedReason::TooShort { len: 0 }
        );
        assert_eq!(
            hex_to_rgb("#").unwrap_err().reason(),
            MalformedReason::TooShort { len: 0 }
        );
    }

    #[test]
    fn shorthand_is_not_expanded() {
        assert!(hex_to_rgb("#f80").is_err());
    }

    #[test]
    fn rejects_non_hex_digit() {
        assert_eq!(
            hex_to_rgb("#33g6cc").unwrap_err().reason(),
            MalformedReason::InvalidDigit { position: 2, found: b'g' }
        );
        assert_eq!(
            hex_to_rgb("3366c ").unwrap_err().reason(),
            MalformedReason::InvalidDigit { position: 5, found: b' ' }
        );
    }

    #[test]
    fn rejects_multibyte_in_consumed_slice() {
        let err = hex_to_rgb("#é3366cc").unwrap_err();
        assert!(matches!(
            err.reason(),
            MalformedReason::InvalidDigit { position: 0, .. }
        ));
    }

    #[test]
    fn from_str_delegates() {
        let rgb: Rgb = "#c86432".parse().unwrap();
        assert_eq!(rgb, Rgb::new(200, 100, 50));
        assert!("nope".parse::<Rgb>().is_err());
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn formats_zero_padded_lowercase() {
        assert_eq!(rgb_to_hex(Rgb::new(1, 10, 171)), "#010aab");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn hex_roundtrip_normalizes_case() {
        let rgb = hex_to_rgb("#ABCDEF").unwrap();
        assert_eq!(rgb.to_hex(), "#abcdef");
    }

    #[test]
    fn css_form() {
        assert_eq!(Rgb::new(51, 102, 204).to_css(), "rgb(51, 102, 204)");
    }

    #[test]
    fn tuple_conversions() {
        let rgb = Rgb::from((1, 2, 3));
        let tuple: (u8, u8, u8) = rgb.into();
        assert_eq!(tuple, (1, 2, 3));
    }
}
