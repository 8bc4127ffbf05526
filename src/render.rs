// SPDX-License-Identifier: MIT
//
// Palette rendering: swatches to any `impl Write`.
//
// Two layouts:
//
//   grid   one line per hue row, five colored cells labelled with their hex,
//          the base swatch in bold + underline (bracketed when uncolored)
//   list   one line per swatch: index, row, hex, rgb(), hsl(), base marker
//
// Rendering never touches the terminal directly. Whether escapes are wanted
// and how wide a cell may be are decided up front in `Config`.

use std::io::{self, Write};

use clap::ValueEnum;
use n_swatch::{Palette, Swatch};
use n_term::text::{pad_center, pad_right};
use n_term::{Attr, Style};

use crate::config::LABEL_WIDTH;

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// 3×5 grid of colored cells.
    Grid,
    /// One line per swatch with every textual form.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: Format,
    /// Emit ANSI colors and attributes.
    pub color: bool,
    /// Grid cell width in columns.
    pub cell_width: usize,
}

/// Render `palette` according to `options`.
pub fn render(w: &mut impl Write, palette: &Palette, options: &RenderOptions) -> io::Result<()> {
    write_header(w, palette)?;
    match options.format {
        Format::Grid => render_grid(w, palette, options),
        Format::List => render_list(w, palette, options),
    }
}

fn write_header(w: &mut impl Write, palette: &Palette) -> io::Result<()> {
    let base = palette.base();
    let intensity = palette.intensity();
    writeln!(
        w,
        "base {}  {}  warmth {:.0}%  hue shift {:+.3}",
        base.to_rgb(),
        base,
        intensity.to_percent(),
        intensity.hue_shift(),
    )
}

// ─── Grid ───────────────────────────────────────────────────────────────────

fn render_grid(w: &mut impl Write, palette: &Palette, options: &RenderOptions) -> io::Result<()> {
    for (row, entries) in palette.rows() {
        w.write_all(pad_right(row.label(), LABEL_WIDTH).as_bytes())?;
        for entry in entries {
            let swatch = Swatch::from_entry(entry);
            let label = if swatch.is_base && !options.color {
                format!("[{}]", swatch.hex)
            } else {
                swatch.hex.clone()
            };
            swatch_style(&swatch, options.color)
                .paint(w, &pad_center(&label, options.cell_width))?;
        }
        w.write_all(b"\n")?;
    }
    Ok(())
}

fn swatch_style(swatch: &Swatch, color: bool) -> Style {
    if !color {
        return Style::new();
    }
    let attr = if swatch.is_base {
        Attr::BOLD | Attr::UNDERLINE
    } else {
        Attr::empty()
    };
    Style::new().bg(swatch.rgb).fg(swatch.tone.rgb()).attr(attr)
}

// ─── List ───────────────────────────────────────────────────────────────────

fn render_list(w: &mut impl Write, palette: &Palette, options: &RenderOptions) -> io::Result<()> {
    for (index, swatch) in palette.swatches().iter().enumerate() {
        if options.color {
            Style::new().bg(swatch.rgb).paint(w, "    ")?;
            w.write_all(b" ")?;
        }
        let marker = if swatch.is_base { "  (base)" } else { "" };
        writeln!(
            w,
            "{index:>2}  {}  {}  {}  {}{marker}",
            pad_right(swatch.row.label(), 7),
            swatch.hex,
            pad_right(&swatch.rgb_css(), 18),
            swatch.css,
        )?;
    }
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use n_swatch::{BASE_INDEX, Intensity};
    use pretty_assertions::assert_eq;

    fn rendered(format: Format, color: bool) -> String {
        let palette = Palette::from_hex("#3366cc", Intensity::NEUTRAL).unwrap();
        let options = RenderOptions { format, color, cell_width: 11 };
        let mut buf = Vec::new();
        render(&mut buf, &palette, &options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_describes_input() {
        let out = rendered(Format::List, false);
        let header = out.lines().next().unwrap();
        assert_eq!(header, "base #3366cc  hsl(220, 60%, 50%)  warmth 50%  hue shift +0.050");
    }

    #[test]
    fn plain_grid_has_three_rows_and_brackets_base() {
        let out = rendered(Format::Grid, false);
        let lines: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("warm     "));
        assert!(lines[1].starts_with("neutral  "));
        assert!(lines[2].starts_with("cool     "));
        assert!(lines[1].contains(" [#3366cc] "));
        assert!(!out.contains('\x1b'));
        assert_eq!(out.matches('[').count(), 1);
    }

    #[test]
    fn plain_grid_cells_are_fixed_width() {
        let out = rendered(Format::Grid, false);
        for line in out.lines().skip(1) {
            assert_eq!(line.len(), LABEL_WIDTH + 5 * 11, "{line:?}");
        }
    }

    #[test]
    fn colored_grid_paints_base_swatch() {
        let out = rendered(Format::Grid, true);
        assert!(out.contains("\x1b[48;2;51;102;204m\x1b[1;4m  #3366cc  \x1b[0m"));
        // Light text on the mid-lightness base.
        assert!(out.contains("\x1b[38;2;255;255;255m\x1b[48;2;51;102;204m"));
        assert!(!out.contains("[#3366cc]"));
    }

    #[test]
    fn list_has_every_form() {
        let out = rendered(Format::List, false);
        let lines: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(
            lines[BASE_INDEX],
            " 7  neutral  #3366cc  rgb(51, 102, 204)   hsl(220, 60%, 50%)  (base)"
        );
        assert_eq!(lines.iter().filter(|l| l.ends_with("(base)")).count(), 1);
    }

    #[test]
    fn colored_list_prefixes_chip() {
        let out = rendered(Format::List, true);
        let base_line = out.lines().nth(1 + BASE_INDEX).unwrap();
        assert!(base_line.starts_with("\x1b[48;2;51;102;204m    \x1b[0m  7  neutral"));
    }
}
