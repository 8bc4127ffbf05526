// SPDX-License-Identifier: MIT
//
// n-color: HEX, RGB and HSL codecs for n-palette.
//
// Conversion pipeline:
//
//   "#rrggbb" ↔ Rgb (u8 × 3) ↔ Hsl (f64 × 3, hue in turns) → "hsl(H, S%, L%)"
//                                 └──────────────────────→ "#rrggbb" (direct)
//
// Every function here is pure. Hex parsing is the only fallible step and
// reports `ColorError::MalformedInput`; everything else is total.

pub mod error;
pub mod hsl;
pub mod rgb;

pub use error::{ColorError, MalformedReason, Result};
pub use hsl::{Hsl, hsl_to_css, hsl_to_hex, hsl_to_rgb, rgb_to_hsl, wrap_hue};
pub use rgb::{Rgb, hex_to_rgb, rgb_to_hex};
