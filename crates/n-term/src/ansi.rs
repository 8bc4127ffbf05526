// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit. Whether color is wanted at all is decided
// by the caller (see `tty`).
//
// All functions return `io::Result` propagated from the underlying writer.
use std::io::{self, Write};

use n_color::Rgb;

use crate::style::Attr;

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Colors ──────────────────────────────────────────────────────────────────

/// Set the foreground (text) color as 24-bit `TrueColor`.
#[inline]
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let Rgb { r, g, b } = color;
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set the background color as 24-bit `TrueColor`.
#[inline]
pub fn bg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let Rgb { r, g, b } = color;
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

// ─── Text Attributes ─────────────────────────────────────────────────────────

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Multiple attributes are semicolon-separated: `\x1b[1;4m` for
/// bold + underline. Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    const CODES: [(Attr, &str); 2] = [(Attr::BOLD, "1"), (Attr::UNDERLINE, "4")];

    if attr.is_empty() {
        return Ok(());
    }

    let params: Vec<&str> = CODES
        .iter()
        .filter(|(flag, _)| attr.contains(*flag))
        .map(|(_, code)| *code)
        .collect();

    write!(w, "\x1b[{}m", params.join(";"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn written(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reset_clears_everything() {
        assert_eq!(written(|w| reset(w)), "\x1b[0m");
    }

    #[test]
    fn swatch_background() {
        assert_eq!(written(|w| bg(w, Rgb::new(51, 102, 204))), "\x1b[48;2;51;102;204m");
    }

    #[test]
    fn text_tone_foreground() {
        assert_eq!(written(|w| fg(w, Rgb::new(26, 26, 26))), "\x1b[38;2;26;26;26m");
        assert_eq!(written(|w| fg(w, Rgb::WHITE)), "\x1b[38;2;255;255;255m");
    }

    #[test]
    fn zero_channels_are_written() {
        assert_eq!(written(|w| fg(w, Rgb::BLACK)), "\x1b[38;2;0;0;0m");
    }

    #[test]
    fn no_attrs_no_sequence() {
        assert_eq!(written(|w| attrs(w, Attr::empty())), "");
    }

    #[test]
    fn base_swatch_attrs() {
        assert_eq!(written(|w| attrs(w, Attr::BOLD | Attr::UNDERLINE)), "\x1b[1;4m");
        assert_eq!(written(|w| attrs(w, Attr::UNDERLINE | Attr::BOLD)), "\x1b[1;4m");
    }

    #[test]
    fn single_attrs() {
        assert_eq!(written(|w| attrs(w, Attr::BOLD)), "\x1b[1m");
        assert_eq!(written(|w| attrs(w, Attr::UNDERLINE)), "\x1b[4m");
        assert_eq!(written(|w| attrs(w, Attr::all())), "\x1b[1;4m");
    }
}
