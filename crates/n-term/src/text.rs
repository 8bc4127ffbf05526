// SPDX-License-Identifier: MIT
//
// Display-width aware padding.
//
// Cells are laid out by terminal columns, not bytes or chars. A label that
// contains wide characters still lines up with its neighbours.

use unicode_width::UnicodeWidthStr;

/// Center `text` in a field `width` columns wide.
///
/// Extra space goes to the right. Text already wider than the field is
/// returned unchanged.
#[must_use]
pub fn pad_center(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_owned();
    }
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Left-align `text` in a field `width` columns wide.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_owned();
    }
    format!("{text}{}", " ".repeat(width - used))
}
