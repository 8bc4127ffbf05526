//! # n-swatch: tonal palette generation
//!
//! Derives a 3×5 grid of related colors from a single base color. One
//! parameter change (base color or warmth) produces a completely new palette;
//! nothing is updated in place.
//!
//! # Architecture
//!
//! ```text
//! "#rrggbb" + warmth %
//!     │
//!     ▼
//! n-color:      hex → Rgb → Hsl
//!     │
//!     ▼
//! intensity.rs: warmth % → Intensity → effective hue shift
//!     │
//!     ▼
//! palette.rs:   3 hue rows × 5 lightness steps, hues wrapped into [0, 1)
//!     │
//!     ▼
//! swatch.rs:    per-entry hex / rgb / css strings + contrasting text tone
//! ```
//!
//! # Grid
//!
//! ```text
//!            +0.2   +0.1    0    −0.1   −0.2
//! warm  (+)   0      1      2     3      4
//! neutral     5      6     [7]    8      9
//! cool  (−)  10     11     12    13     14
//! ```
//!
//! Index 7 is always the base color, see [`BASE_INDEX`].

pub mod intensity;
pub mod palette;
pub mod swatch;

pub use intensity::{BASE_HUE_SHIFT, Intensity};
pub use palette::{
    BASE_INDEX, COLUMNS, LIGHTNESS_STEPS, PALETTE_LEN, Palette, PaletteEntry, ROWS, Row, generate,
};
pub use swatch::{Swatch, TextTone, contrast_text_color};
