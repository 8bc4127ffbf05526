//! Palette generation: one base color in, a 3×5 grid of variants out.
//!
//! Rows shift the hue (warm `+shift`, neutral, cool `−shift`); columns step
//! the lightness by `+0.2, +0.1, 0, −0.1, −0.2`. Saturation is never touched.
//! The base color itself always lands in the middle of the grid, at flat
//! index [`BASE_INDEX`].

use n_color::{Hsl, Rgb};

use crate::intensity::Intensity;

// ---------------------------------------------------------------------------
// Grid geometry
// ---------------------------------------------------------------------------

/// Number of hue rows.
pub const ROWS: usize = 3;

/// Number of lightness steps per row.
pub const COLUMNS: usize = 5;

/// Total swatches in a palette.
pub const PALETTE_LEN: usize = ROWS * COLUMNS;

/// Lightness offsets, one per column, in output order.
pub const LIGHTNESS_STEPS: [f64; COLUMNS] = [0.2, 0.1, 0.0, -0.1, -0.2];

/// Row holding the unshifted hue.
pub const BASE_ROW: Row = Row::Neutral;

/// Column holding the unshifted lightness.
pub const BASE_COLUMN: usize = 2;

/// Flat index of the base swatch. Consumers rely on this position.
pub const BASE_INDEX: usize = 7;

const _: () = assert!(BASE_INDEX == BASE_ROW.index() * COLUMNS + BASE_COLUMN);

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// Hue-shift direction of a palette row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    /// Hue + shift.
    Warm,
    /// Base hue.
    Neutral,
    /// Hue − shift.
    Cool,
}

impl Row {
    /// All rows in output order.
    pub const ALL: [Self; ROWS] = [Self::Warm, Self::Neutral, Self::Cool];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Warm => 0,
            Self::Neutral => 1,
            Self::Cool => 2,
        }
    }

    /// Multiplier applied to the effective hue shift.
    #[must_use]
    pub const fn hue_sign(self) -> f64 {
        match self {
            Self::Warm => 1.0,
            Self::Neutral => 0.0,
            Self::Cool => -1.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Neutral => "neutral",
            Self::Cool => "cool",
        }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the 15 palette colors in row-major order.
///
/// Every hue is wrapped into `[0, 1)` after shifting. Positive lightness
/// steps clamp only at 1, negative steps only at 0.
#[must_use]
pub fn generate(base: Hsl, intensity: Intensity) -> [Hsl; PALETTE_LEN] {
    let shift = intensity.hue_shift();
    std::array::from_fn(|i| {
        let row = Row::ALL[i / COLUMNS];
        let step = LIGHTNESS_STEPS[i % COLUMNS];
        let hsl = match row {
            Row::Neutral => base,
            Row::Warm | Row::Cool => base.shift_hue(row.hue_sign() * shift),
        };
        step_lightness(hsl, step).wrapped()
    })
}

fn step_lightness(hsl: Hsl, step: f64) -> Hsl {
    if step > 0.0 {
        hsl.lighten(step)
    } else if step < 0.0 {
        hsl.darken(-step)
    } else {
        hsl
    }
}

// ---------------------------------------------------------------------------
// PaletteEntry
// ---------------------------------------------------------------------------

/// One generated color together with its place in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub hsl: Hsl,
    pub row: Row,
    /// Lightness step, `0..COLUMNS`, indexing [`LIGHTNESS_STEPS`].
    pub column: usize,
}

impl PaletteEntry {
    /// Flat row-major index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.row.index() * COLUMNS + self.column
    }

    #[must_use]
    pub const fn is_base(&self) -> bool {
        self.index() == BASE_INDEX
    }

    /// Lightness offset this entry was generated with.
    #[must_use]
    pub const fn lightness_step(&self) -> f64 {
        LIGHTNESS_STEPS[self.column]
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A fully generated palette.
///
/// Immutable: a new base color or intensity means a new `Palette`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    base: Hsl,
    intensity: Intensity,
    entries: [PaletteEntry; PALETTE_LEN],
}

impl Palette {
    #[must_use]
    pub fn new(base: Hsl, intensity: Intensity) -> Self {
        let colors = generate(base, intensity);
        let entries = std::array::from_fn(|i| PaletteEntry {
            hsl: colors[i],
            row: Row::ALL[i / COLUMNS],
            column: i % COLUMNS,
        });

        log::debug!(
            "generated palette from {base} (shift {:.3}, base swatch {})",
            intensity.hue_shift(),
            colors[BASE_INDEX].to_rgb(),
        );

        Self { base, intensity, entries }
    }

    #[must_use]
    pub fn from_rgb(rgb: Rgb, intensity: Intensity) -> Self {
        Self::new(rgb.to_hsl(), intensity)
    }

    /// Parse a hex color and generate its palette.
    ///
    /// # Errors
    ///
    /// Propagates [`n_color::ColorError::MalformedInput`] from hex parsing.
    pub fn from_hex(hex: &str, intensity: Intensity) -> n_color::Result<Self> {
        Ok(Self::from_rgb(Rgb::from_hex(hex)?, intensity))
    }

    /// The color the palette was generated from.
    #[must_use]
    pub const fn base(&self) -> Hsl {
        self.base
    }

    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        self.intensity
    }

    #[must_use]
    pub const fn entries(&self) -> &[PaletteEntry; PALETTE_LEN] {
        &self.entries
    }

    /// The swatch at the fixed base position.
    #[must_use]
    pub const fn base_entry(&self) -> &PaletteEntry {
        &self.entries[BASE_INDEX]
    }

    /// Entry at `(row, column)`, or `None` if `column` is out of range.
    #[must_use]
    pub fn get(&self, row: Row, column: usize) -> Option<&PaletteEntry> {
        (column < COLUMNS).then(|| &self.entries[row.index() * COLUMNS + column])
    }

    /// Rows in output order, each with its five entries.
    pub fn rows(&self) -> impl Iterator<Item = (Row, &[PaletteEntry])> {
        Row::ALL.into_iter().zip(self.entries.chunks_exact(COLUMNS))
    }

    /// Just the colors, row-major.
    #[must_use]
    pub fn colors(&self) -> [Hsl; PALETTE_LEN] {
        self.entries.map(|entry| entry.hsl)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
