//! Hue-shift intensity: the "warmth" control.
//!
//! Users see a 0–100 percentage. Internally it is a signed offset in
//! `[-0.1, 0.1]` added to the fixed [`BASE_HUE_SHIFT`], so the effective
//! shift between palette rows ranges from 0.05 − 0.1 to 0.05 + 0.1 of a turn.

/// Hue shift applied at neutral intensity (50%).
pub const BASE_HUE_SHIFT: f64 = 0.05;

/// Largest magnitude an [`Intensity`] can take.
pub const MAX_INTENSITY: f64 = 0.1;

/// User-tunable hue-shift intensity, always within `[-0.1, 0.1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Intensity(f64);

impl Intensity {
    /// Neutral intensity: the rows differ by exactly [`BASE_HUE_SHIFT`].
    pub const NEUTRAL: Self = Self(0.0);

    /// Build from a raw offset, clamped into `[-0.1, 0.1]`.
    ///
    /// NaN is treated as neutral.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(-MAX_INTENSITY, MAX_INTENSITY))
    }

    /// Map a 0–100 percentage to an offset via `(pct - 50) / 500`.
    ///
    /// Out-of-range percentages are clamped first.
    #[must_use]
    pub fn from_percent(pct: f64) -> Self {
        if pct.is_nan() {
            return Self::NEUTRAL;
        }
        Self::new((pct.clamp(0.0, 100.0) - 50.0) / 500.0)
    }

    /// Inverse of [`Intensity::from_percent`].
    #[must_use]
    pub fn to_percent(self) -> f64 {
        self.0.mul_add(500.0, 50.0)
    }

    /// The raw offset in `[-0.1, 0.1]`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Effective hue shift between rows: `0.05 + intensity`.
    #[inline]
    #[must_use]
    pub fn hue_shift(self) -> f64 {
        BASE_HUE_SHIFT + self.0
    }
}

impl From<f64> for Intensity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
