// SPDX-License-Identifier: MIT
//
// n-term: terminal output for n-palette.
//
// Just enough of a terminal layer to paint swatches: 24-bit SGR colors,
// a handful of text attributes, display-width padding, and the TTY queries
// needed to decide whether escape codes belong in the output at all.
//
// No TUI framework. Every escape code is written by hand to any
// `impl Write`, which keeps the renderer testable against a `Vec<u8>`.

pub mod ansi;
pub mod style;
pub mod text;
pub mod tty;

pub use style::{Attr, Style};
