//! Palette identities and their seed colors.
//!
//! A seed is the four colors a designer picks for one palette in one mode.
//! Everything else in a token set is derived from it. Seeds are written as
//! hex strings and parsed once, up front, when the matrix is built.

use std::fmt;
use std::str::FromStr;

use swatch_color::Rgb;

use crate::error::{Result, ThemeError};

// ---------------------------------------------------------------------------
// Palette / Aesthetic / Mode
// ---------------------------------------------------------------------------

/// A named base color identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Palette {
    /// Cool neutral slate.
    Alloy,
    /// Lime on near-white / near-black.
    Signal,
    /// Warm paper with a burnt-orange accent.
    Ember,
}

impl Palette {
    pub const ALL: [Self; 3] = [Self::Alloy, Self::Signal, Self::Ember];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alloy => "alloy",
            Self::Signal => "signal",
            Self::Ember => "ember",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A visual treatment applied on top of any palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Aesthetic {
    /// Flat surfaces, soft tinted shadows.
    Modern,
    /// Translucent cards and tab bar over a colored backdrop.
    Glass,
    /// Hard borders, solid offset shadows, saturated chips.
    Brutal,
}

impl Aesthetic {
    pub const ALL: [Self; 3] = [Self::Modern, Self::Glass, Self::Brutal];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Glass => "glass",
            Self::Brutal => "brutal",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

/// Light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// ThemeVariantKey
// ---------------------------------------------------------------------------

/// One cell of the theme matrix: `(palette, aesthetic, mode)`.
///
/// Displays as `<palette>_<aesthetic>_<mode>`, e.g. `alloy_modern_light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeVariantKey {
    pub palette: Palette,
    pub aesthetic: Aesthetic,
    pub mode: Mode,
}

impl ThemeVariantKey {
    #[must_use]
    pub const fn new(palette: Palette, aesthetic: Aesthetic, mode: Mode) -> Self {
        Self {
            palette,
            aesthetic,
            mode,
        }
    }

    /// Every variant, palette-major: 3 × 3 × 2 = 18 keys.
    pub fn all() -> impl Iterator<Item = Self> {
        Palette::ALL.into_iter().flat_map(|palette| {
            Aesthetic::ALL.into_iter().flat_map(move |aesthetic| {
                Mode::ALL
                    .into_iter()
                    .map(move |mode| Self::new(palette, aesthetic, mode))
            })
        })
    }
}

impl fmt::Display for ThemeVariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.palette.name(),
            self.aesthetic.name(),
            self.mode.name()
        )
    }
}

impl FromStr for ThemeVariantKey {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || ThemeError::UnknownVariant { key: s.to_string() };
        let mut parts = s.split('_');
        let (Some(palette), Some(aesthetic), Some(mode), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(unknown());
        };
        Ok(Self::new(
            Palette::from_name(palette).ok_or_else(unknown)?,
            Aesthetic::from_name(aesthetic).ok_or_else(unknown)?,
            Mode::from_name(mode).ok_or_else(unknown)?,
        ))
    }
}

// ---------------------------------------------------------------------------
// Seeds
// ---------------------------------------------------------------------------

/// The four designer-picked colors for one palette in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSeed {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

/// A seed with every color parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub background: Rgb,
    pub foreground: Rgb,
    pub border: Rgb,
    pub accent: Rgb,
}

impl PaletteSeed {
    /// Parse all four colors, attributing failures to `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColorFormat`] naming the variant and the
    /// seed token (`seed.background`, `seed.accent`, …) that failed.
    pub fn parse(&self, variant: ThemeVariantKey) -> Result<Seed> {
        let field = |token: &str, value: &str| {
            Rgb::from_hex(value).map_err(|source| ThemeError::InvalidColorFormat {
                variant: variant.to_string(),
                token: format!("seed.{token}"),
                source,
            })
        };
        Ok(Seed {
            background: field("background", self.background)?,
            foreground: field("foreground", self.foreground)?,
            border: field("border", self.border)?,
            accent: field("accent", self.accent)?,
        })
    }
}

const fn seed(
    background: &'static str,
    foreground: &'static str,
    border: &'static str,
    accent: &'static str,
) -> PaletteSeed {
    PaletteSeed {
        background,
        foreground,
        border,
        accent,
    }
}

/// One seed per (palette, mode), indexed `[palette][mode]`.
const BUILTIN_SEEDS: [[PaletteSeed; 2]; 3] = [
    // alloy
    [
        seed("#F4F5F7", "#13161C", "#CCD1D9", "#2A3340"),
        seed("#111419", "#E8EBF0", "#2C323C", "#AEB8C6"),
    ],
    // signal
    [
        seed("#F6FAEE", "#141A0B", "#CFDCB4", "#4E7D0F"),
        seed("#10140A", "#EEF5DF", "#2A3320", "#B6E85A"),
    ],
    // ember
    [
        seed("#FBF6F1", "#221511", "#E4D3C6", "#C2521E"),
        seed("#1A120E", "#F6EBE3", "#3A2A22", "#FF8A4C"),
    ],
];

/// The 6 seeds the matrix is generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTable {
    seeds: [[PaletteSeed; 2]; 3],
}

impl SeedTable {
    /// The shipped seed table.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            seeds: BUILTIN_SEEDS,
        }
    }

    #[must_use]
    pub const fn get(&self, palette: Palette, mode: Mode) -> &PaletteSeed {
        &self.seeds[palette.index()][mode.index()]
    }

    /// Replace one seed, keeping the rest.
    #[must_use]
    pub fn with_seed(mut self, palette: Palette, mode: Mode, seed: PaletteSeed) -> Self {
        self.seeds[palette.index()][mode.index()] = seed;
        self
    }
}

impl Default for SeedTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
