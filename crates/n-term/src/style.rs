// SPDX-License-Identifier: MIT
//
// Style: colors plus attributes for a run of text.
//
// A swatch cell is one styled run: background = the swatch color,
// foreground = its contrasting text tone, attributes to flag the base
// swatch. `Style::paint` writes the run and resets afterwards so styles
// never bleed into the next cell or the shell prompt.

use std::io::{self, Write};

use n_color::Rgb;

use crate::ansi;

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes that flag a swatch, as SGR parameters.
    ///
    /// ```
    /// use n_term::style::Attr;
    ///
    /// let base = Attr::BOLD | Attr::UNDERLINE;
    /// assert!(base.contains(Attr::BOLD));
    /// assert!(!Attr::BOLD.contains(Attr::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1: increased intensity.
        const BOLD      = 1 << 0;
        /// SGR 4: single underline.
        const UNDERLINE = 1 << 1;
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// Foreground, background and attributes for one run of text.
///
/// `None` colors leave the terminal default untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub attr: Attr,
}

impl Style {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { fg: None, bg: None, attr: Attr::empty() }
    }

    #[inline]
    #[must_use]
    pub const fn fg(self, color: Rgb) -> Self {
        Self { fg: Some(color), ..self }
    }

    #[inline]
    #[must_use]
    pub const fn bg(self, color: Rgb) -> Self {
        Self { bg: Some(color), ..self }
    }

    #[inline]
    #[must_use]
    pub const fn attr(self, attr: Attr) -> Self {
        Self { attr, ..self }
    }

    /// Whether painting with this style would emit no escape codes.
    #[inline]
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attr.is_empty()
    }

    /// Write `text` in this style, then reset.
    ///
    /// A plain style writes `text` untouched with no reset.
    pub fn paint(&self, w: &mut impl Write, text: &str) -> io::Result<()> {
        if self.is_plain() {
            return w.write_all(text.as_bytes());
        }
        if let Some(color) = self.fg {
            ansi::fg(w, color)?;
        }
        if let Some(color) = self.bg {
            ansi::bg(w, color)?;
        }
        ansi::attrs(w, self.attr)?;
        w.write_all(text.as_bytes())?;
        ansi::reset(w)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn painted(style: Style, text: &str) -> String {
        let mut buf = Vec::new();
        style.paint(&mut buf, text).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_style_writes_text_only() {
        assert!(Style::new().is_plain());
        assert_eq!(painted(Style::new(), "abc"), "abc");
    }

    #[test]
    fn colors_then_text_then_reset() {
        let style = Style::new().fg(Rgb::WHITE).bg(Rgb::new(51, 102, 204));
        assert_eq!(
            painted(style, " x "),
            "\x1b[38;2;255;255;255m\x1b[48;2;51;102;204m x \x1b[0m"
        );
    }

    #[test]
    fn attributes_only() {
        let style = Style::new().attr(Attr::BOLD | Attr::UNDERLINE);
        assert!(!style.is_plain());
        assert_eq!(painted(style, "b"), "\x1b[1;4mb\x1b[0m");
    }

    #[test]
    fn builder_keeps_earlier_fields() {
        let style = Style::new().bg(Rgb::BLACK).attr(Attr::UNDERLINE).fg(Rgb::WHITE);
        assert_eq!(style.bg, Some(Rgb::BLACK));
        assert_eq!(style.fg, Some(Rgb::WHITE));
        assert_eq!(style.attr, Attr::UNDERLINE);
    }
}
