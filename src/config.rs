// SPDX-License-Identifier: MIT
//
// Command-line surface and the validated configuration built from it.
//
// clap does the parsing and range checks; `Config` is what the rest of the
// binary sees. Terminal queries (is stdout a TTY, how wide is it) happen
// once here, so rendering stays a pure function of its inputs.

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use n_swatch::Intensity;
use n_term::tty;

use crate::render::{Format, RenderOptions};

/// Width of the row-label column in the grid.
pub const LABEL_WIDTH: usize = 9;

const MIN_CELL_WIDTH: usize = 9;
const MAX_CELL_WIDTH: usize = 14;

// ─── Cli ────────────────────────────────────────────────────────────────────

/// Generate a 3×5 tonal palette from one base color.
///
/// Rows shift the hue warmer, not at all, and cooler. Columns step the
/// lightness from +20% to −20%. The base color sits in the middle.
#[derive(Debug, Parser)]
#[command(name = "n-palette", version, about, long_about = None)]
pub struct Cli {
    /// Base color as 6 hex digits, with or without a leading '#'.
    #[arg(value_name = "HEX")]
    pub base: String,

    /// Hue-shift warmth in percent; 50 is neutral.
    #[arg(
        short,
        long,
        default_value_t = 50,
        env = "N_PALETTE_WARMTH",
        value_parser = clap::value_parser!(u8).range(0..=100),
    )]
    pub warmth: u8,

    /// Output layout.
    #[arg(short, long, value_enum, default_value_t = Format::Grid)]
    pub format: Format,

    /// When to emit ANSI colors.
    #[arg(long = "color", value_enum, default_value_t = ColorMode::Auto)]
    pub color_mode: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Whether ANSI colors are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Only when stdout is a terminal.
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

// ─── Config ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base: String,
    pub intensity: Intensity,
    pub render: RenderOptions,
    pub log_level: LevelFilter,
}

impl Config {
    /// Resolve the parsed arguments against the current terminal.
    #[must_use]
    pub fn from_cli(cli: Cli) -> Self {
        let is_terminal = tty::stdout_is_terminal();
        let cols = tty::stdout_cols().unwrap_or(tty::DEFAULT_COLS);
        Self::resolve(cli, is_terminal, cols)
    }

    fn resolve(cli: Cli, is_terminal: bool, cols: u16) -> Self {
        Self {
            base: cli.base,
            intensity: Intensity::from_percent(f64::from(cli.warmth)),
            render: RenderOptions {
                format: cli.format,
                color: cli.color_mode.resolve(is_terminal),
                cell_width: cell_width_for(cols),
            },
            log_level: level_for(cli.verbose),
        }
    }
}

/// Grid cell width that fits five cells plus the label column in `cols`.
#[must_use]
pub fn cell_width_for(cols: u16) -> usize {
    let available = usize::from(cols).saturating_sub(LABEL_WIDTH) / 5;
    available.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH)
}

#[must_use]
pub const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
