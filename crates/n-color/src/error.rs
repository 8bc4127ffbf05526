// SPDX-License-Identifier: MIT
//
// Error taxonomy for the color codecs.
//
// Conversions between RGB and HSL are total. The only fallible entry point
// is hex parsing, so there is exactly one error kind. No default color is
// ever substituted on failure; the caller decides what to do.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a 6-digit hex color.
    #[error("malformed hex color {input:?}: {reason}")]
    MalformedInput {
        input: String,
        reason: MalformedReason,
    },
}

impl ColorError {
    pub(crate) fn malformed(input: &str, reason: MalformedReason) -> Self {
        log::trace!("rejecting hex color {input:?}: {reason}");
        Self::MalformedInput {
            input: input.to_owned(),
            reason,
        }
    }

    /// Why the input was rejected.
    #[must_use]
    pub const fn reason(&self) -> MalformedReason {
        match self {
            Self::MalformedInput { reason, .. } => *reason,
        }
    }
}

/// Detail attached to [`ColorError::MalformedInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Fewer than 6 characters after the optional `#`.
    TooShort { len: usize },

    /// A byte in one of the consumed positions (0..6) is not a hex digit.
    /// `position` is relative to the first character after `#`.
    InvalidDigit { position: usize, found: u8 },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "expected at least 6 hex digits, found {len}")
            }
            Self::InvalidDigit { position, found } if found.is_ascii_graphic() => {
                write!(f, "'{}' at position {position} is not a hex digit", *found as char)
            }
            Self::InvalidDigit { position, found } => {
                write!(f, "byte 0x{found:02x} at position {position} is not a hex digit")
            }
        }
    }
}
