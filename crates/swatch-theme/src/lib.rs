//! # swatch-theme: deterministic theme matrix
//!
//! Derives a complete semantic color token set for every combination of
//! palette, aesthetic and mode from six four-color seeds, and refuses to
//! produce a theme whose text is not legible.
//!
//! # Architecture
//!
//! ```text
//! SeedTable (3 palettes × 2 modes × 4 colors)
//!     │
//!     ▼
//! palette.rs:   parse seeds for all 18 variants (fail fast on bad hex)
//!     │
//!     ▼
//! recolor.rs:   seed + recipe.rs weights + overrides.rs → 40 tokens
//!     │             ├─ contrast.rs: readable tones (bounded search)
//!     │             └─ accent.rs:   button fill/ink pair
//!     ▼
//! contrast.rs:  guard six text/background pairs (>= 4.5:1)
//!     │
//!     ▼
//! matrix.rs:    name → Arc<SemanticTokenSet>, plus legacy aliases
//! ```
//!
//! The matrix is built once per process with [`matrix::init`] and never
//! changes afterwards. UI code looks tokens up by name:
//!
//! ```no_run
//! let matrix = swatch_theme::matrix::init()?;
//! let bg = matrix["alloy_modern_light"].lookup("buttonPrimaryBg");
//! # Ok::<(), swatch_theme::ThemeError>(())
//! ```

pub mod accent;
pub mod contrast;
pub mod error;
pub mod matrix;
pub mod overrides;
pub mod palette;
pub mod recipe;
pub mod recolor;
pub mod token;

pub use accent::{AccentPair, normalize_accent};
pub use contrast::{make_readable_tone, pick_readable_foreground};
pub use error::{Result, ThemeError};
pub use matrix::ThemeMatrix;
pub use palette::{Aesthetic, Mode, Palette, PaletteSeed, SeedTable, ThemeVariantKey};
pub use token::{SemanticTokenSet, Token};
