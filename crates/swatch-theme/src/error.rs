//! Theme construction errors.
//!
//! Every error here is fatal: the matrix is either built completely and
//! passes every guard, or it is not built at all.

use swatch_color::ColorError;
use thiserror::Error;

use crate::token::Token;

/// Why the theme matrix could not be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    /// A seed color is not a valid `#RGB` / `#RRGGBB` string.
    #[error("{variant}: {token}: {source}")]
    InvalidColorFormat {
        variant: String,
        token: String,
        #[source]
        source: ColorError,
    },

    /// A guarded text/background pair is not legible.
    #[error(
        "{variant}: contrast of {foreground} on {background} is {ratio:.2}:1, below the required {minimum}:1"
    )]
    ContrastViolation {
        variant: String,
        foreground: Token,
        background: Token,
        ratio: f64,
        minimum: f64,
    },

    /// A variant key that does not name a palette/aesthetic/mode triple.
    #[error("unknown theme variant {key:?}")]
    UnknownVariant { key: String },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
