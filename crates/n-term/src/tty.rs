// SPDX-License-Identifier: MIT
//
// Terminal queries: is stdout a TTY, and how wide is it.
//
// Safety: isatty and ioctl(TIOCGWINSZ) are the POSIX interfaces for these
// questions. Each unsafe block is a single call on a fixed fd.
#![allow(unsafe_code)]

/// Terminal width assumed when stdout is not a terminal.
pub const DEFAULT_COLS: u16 = 80;

/// Check whether stdout is connected to a terminal.
#[cfg(unix)]
#[must_use]
pub fn stdout_is_terminal() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn stdout_is_terminal() -> bool {
    false
}

/// Width of the terminal attached to stdout, via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn stdout_cols() -> Option<u16> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    (result == 0 && ws.ws_col > 0).then_some(ws.ws_col)
}

#[cfg(not(unix))]
#[must_use]
pub fn stdout_cols() -> Option<u16> {
    None
}
