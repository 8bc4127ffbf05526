//! Presentation view of palette entries.
//!
//! Everything a renderer needs to paint a swatch, derived from the entry's
//! HSL value: hex string, RGB triple, CSS string, and a text tone that stays
//! legible on top of the swatch.

use std::fmt;

use n_color::{Hsl, Rgb};

use crate::palette::{Palette, PaletteEntry, Row};

/// Swatches lighter than this get dark text.
pub const CONTRAST_LIGHTNESS_THRESHOLD: f64 = 0.6;

/// Text color to draw on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTone {
    /// Dark text, for light swatches.
    Dark,
    /// Light text, for dark swatches.
    Light,
}

impl TextTone {
    /// The concrete text color.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Dark => Rgb::new(0x1a, 0x1a, 0x1a),
            Self::Light => Rgb::WHITE,
        }
    }
}

impl fmt::Display for TextTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

/// Pick the text tone for a background: dark when `l > 0.6`, light otherwise.
#[must_use]
pub fn contrast_text_color(background: Hsl) -> TextTone {
    if background.l > CONTRAST_LIGHTNESS_THRESHOLD {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}

/// A palette entry with all its display forms precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub hsl: Hsl,
    pub rgb: Rgb,
    /// `#rrggbb`.
    pub hex: String,
    /// `hsl(H, S%, L%)`.
    pub css: String,
    pub tone: TextTone,
    pub row: Row,
    pub column: usize,
    pub is_base: bool,
}

impl Swatch {
    #[must_use]
    pub fn from_entry(entry: &PaletteEntry) -> Self {
        let rgb = entry.hsl.to_rgb();
        Self {
            hsl: entry.hsl,
            rgb,
            hex: rgb.to_hex(),
            css: entry.hsl.to_css(),
            tone: contrast_text_color(entry.hsl),
            row: entry.row,
            column: entry.column,
            is_base: entry.is_base(),
        }
    }

    /// CSS `rgb(r, g, b)` form.
    #[must_use]
    pub fn rgb_css(&self) -> String {
        self.rgb.to_css()
    }
}

impl From<&PaletteEntry> for Swatch {
    fn from(entry: &PaletteEntry) -> Self {
        Self::from_entry(entry)
    }
}

impl PaletteEntry {
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.hsl.to_rgb().to_hex()
    }

    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        self.hsl.to_rgb()
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        self.hsl.to_css()
    }

    #[must_use]
    pub fn text_tone(&self) -> TextTone {
        contrast_text_color(self.hsl)
    }
}

impl Palette {
    /// Display views for every entry, row-major.
    #[must_use]
    pub fn swatches(&self) -> Vec<Swatch> {
        self.iter().map(Swatch::from_entry).collect()
    }
}
