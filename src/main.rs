// SPDX-License-Identifier: MIT
//
// n-palette: tonal color palettes from a single base color.
//
// This is the binary that wires the crates together:
//
//   n-color  → hex / RGB / HSL codecs
//   n-swatch → palette generation and per-swatch display forms
//   n-term   → ANSI colors and TTY queries for the output
//
// Data flow:
//
//   argv → Cli → Config → hex → Rgb → Hsl → Palette (15 entries) → render → stdout
//
// A malformed base color is reported and the process exits non-zero. No
// fallback color is ever substituted.

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use n_swatch::Palette;

mod config;
mod render;

use config::{Cli, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse());
    init_logging(&config);

    log::debug!("resolved configuration: {config:?}");

    let palette = Palette::from_hex(&config.base, config.intensity)
        .with_context(|| format!("cannot build a palette from {:?}", config.base))?;

    log::info!(
        "palette for {} at warmth {:.0}%",
        palette.base_entry().hsl.to_rgb(),
        palette.intensity().to_percent(),
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render::render(&mut out, &palette, &config.render).context("failed to write palette")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}

/// Install `env_logger` on stderr at the level chosen by `-v`.
///
/// `RUST_LOG`, when set, takes precedence.
fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
