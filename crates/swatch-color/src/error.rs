// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while parsing color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Not a `#RGB` or `#RRGGBB` hex string.
    #[error("invalid color format {value:?}: expected #RGB or #RRGGBB")]
    InvalidColorFormat { value: String },

    /// Neither a hex color nor an `rgba(r, g, b, a)` string.
    #[error("invalid color value {value:?}: expected #RGB, #RRGGBB or rgba(r, g, b, a)")]
    InvalidColorValue { value: String },
}
