// SPDX-License-Identifier: MIT
//
// HSL color model with hue as a fraction of a full turn.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t, k) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Hue lives in [0, 1), not degrees. Saturation and lightness live in [0, 1].
// Every conversion is done in f64 so results match the usual textbook
// formulas bit for bit, including the tie-break order when two channels
// share the maximum (red, then green, then blue).

use std::fmt;

use crate::rgb::Rgb;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in Hue-Saturation-Lightness form.
///
/// ```
/// use n_color::{Hsl, Rgb};
///
/// let hsl = Rgb::new(51, 102, 204).to_hsl();
/// assert!((hsl.h - 0.6111).abs() < 1e-4);
/// assert_eq!(hsl.to_css(), "hsl(220, 60%, 50%)");
/// assert_eq!(hsl.to_rgb(), Rgb::new(51, 102, 204));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue as a fraction of a turn: 0.0 is red, 1/3 green, 2/3 blue.
    pub h: f64,

    /// Saturation: 0.0 (gray) to 1.0 (fully saturated).
    pub s: f64,

    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    /// `hsl(H, S%, L%)` with integer degrees and percentages.
    #[must_use]
    pub fn to_css(self) -> String {
        hsl_to_css(self)
    }

    /// Lowercase `#rrggbb`, computed directly without going through [`Rgb`].
    #[must_use]
    pub fn to_hex(self) -> String {
        hsl_to_hex(self)
    }

    /// Whether hue carries no information (saturation exactly zero).
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }

    /// Raise lightness by `delta`, clamping only the upper bound.
    #[inline]
    #[must_use]
    pub fn lighten(self, delta: f64) -> Self {
        Self {
            l: (self.l + delta).min(1.0),
            ..self
        }
    }

    /// Lower lightness by `delta`, clamping only the lower bound.
    #[inline]
    #[must_use]
    pub fn darken(self, delta: f64) -> Self {
        Self {
            l: (self.l - delta).max(0.0),
            ..self
        }
    }

    /// Add `delta` to the hue. The result is not wrapped; see [`Hsl::wrapped`].
    #[inline]
    #[must_use]
    pub fn shift_hue(self, delta: f64) -> Self {
        Self {
            h: self.h + delta,
            ..self
        }
    }

    /// Bring the hue into its canonical `[0, 1)` range.
    #[inline]
    #[must_use]
    pub fn wrapped(self) -> Self {
        Self {
            h: wrap_hue(self.h),
            ..self
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, l) = css_components(*self);
        write!(f, "hsl({h}, {s}%, {l}%)")
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Wrap a hue into `[0, 1)`, the same turn as `(h + 1) mod 1`.
///
/// Hues already in `[0, 1)` come back bit for bit. Adding the full turn
/// first would round away their low bits.
#[inline]
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid can round up to the divisor for tiny negative inputs.
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert RGB to HSL.
///
/// Achromatic colors (all channels equal) get `h = s = 0`. Otherwise
/// saturation uses `d / (2 - max - min)` when `l > 0.5` and `d / (max + min)`
/// otherwise, so `l == 0.5` takes the second branch. Hue follows the
/// six-sector formula selected by the maximum channel, checked in the order
/// red, green, blue.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Also the only case where either saturation denominator could be zero.
    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

/// Convert HSL to RGB.
///
/// Zero saturation short-circuits to a gray of `round(l * 255)` and ignores
/// the hue entirely. Channels are rounded, never truncated.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

/// Piecewise-linear channel ramp with breakpoints at 1/6, 1/2 and 2/3.
#[inline]
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Format HSL as `hsl(H, S%, L%)`.
///
/// `H = round(h * 360)`, `S = round(s * 100)`, `L = round(l * 100)`.
#[must_use]
pub fn hsl_to_css(hsl: Hsl) -> String {
    hsl.to_string()
}

/// Convert HSL straight to `#rrggbb` using the chroma-free formula.
///
/// With `a = s * min(l, 1 - l)`, each channel with sector offset
/// `n ∈ {0, 8, 4}` is `l - a * clamp(min(k - 3, 9 - k, 1), -1, 1)` where
/// `k = (n + 12h) mod 12`. Agrees with [`hsl_to_rgb`] to within one unit
/// per channel.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    let Hsl { h, s, l } = hsl;
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| {
        let k = h.mul_add(12.0, n).rem_euclid(12.0);
        let ramp = (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        to_channel(a.mul_add(-ramp, l))
    };

    Rgb::new(channel(0.0), channel(8.0), channel(4.0)).to_hex()
}

/// Scale a unit value to a rounded 8-bit channel.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before the cast.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[allow(clippy::cast_possible_truncation)]
fn css_components(hsl: Hsl) -> (i64, i64, i64) {
    (
        (hsl.h * 360.0).round() as i64,
        (hsl.s * 100.0).round() as i64,
        (hsl.l * 100.0).round() as i64,
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
