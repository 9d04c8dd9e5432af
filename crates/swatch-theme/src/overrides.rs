//! Hard-coded colors for specific variants.
//!
//! Some variants are art-directed rather than derived: their backdrop or
//! page color is picked by hand. An override replaces the mixed value
//! outright. An overridden page is also the base every other surface of
//! that variant is mixed from.

use swatch_color::Rgb;

use crate::palette::{Aesthetic, Mode, Palette, ThemeVariantKey};

/// Colors that replace the derived value for one variant. `None` fields
/// are derived as usual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    pub surface_page: Option<Rgb>,
    pub backdrop_start: Option<Rgb>,
    pub backdrop_end: Option<Rgb>,
    pub backdrop_accent: Option<Rgb>,
    pub accent: Option<Rgb>,
}

impl Override {
    /// Derive everything.
    pub const NONE: Self = Self {
        surface_page: None,
        backdrop_start: None,
        backdrop_end: None,
        backdrop_accent: None,
        accent: None,
    };
}

const fn hex(v: u32) -> Option<Rgb> {
    Some(Rgb::from_u24(v))
}

const fn key(palette: Palette, aesthetic: Aesthetic, mode: Mode) -> ThemeVariantKey {
    ThemeVariantKey::new(palette, aesthetic, mode)
}

/// Every variant with at least one hand-picked color.
pub const OVERRIDES: &[(ThemeVariantKey, Override)] = &[
    (
        key(Palette::Signal, Aesthetic::Glass, Mode::Light),
        Override {
            surface_page: hex(0xF7_FFE6),
            backdrop_start: hex(0xC4_F25A),
            backdrop_end: hex(0xF5_FFDE),
            backdrop_accent: hex(0x7F_D12B),
            ..Override::NONE
        },
    ),
    (
        key(Palette::Signal, Aesthetic::Glass, Mode::Dark),
        Override {
            surface_page: hex(0x0E_1408),
            backdrop_start: hex(0x1E_2E0A),
            backdrop_end: hex(0x0B_1006),
            backdrop_accent: hex(0x5F_A31C),
            ..Override::NONE
        },
    ),
    (
        key(Palette::Ember, Aesthetic::Glass, Mode::Light),
        Override {
            backdrop_start: hex(0xFF_D8BF),
            backdrop_end: hex(0xFF_F6EE),
            backdrop_accent: hex(0xFF_9A5C),
            ..Override::NONE
        },
    ),
    (
        // Slate is too quiet for filled chips; brutal alloy gets cobalt.
        key(Palette::Alloy, Aesthetic::Brutal, Mode::Light),
        Override {
            accent: hex(0x2F_5BD3),
            ..Override::NONE
        },
    ),
    (
        key(Palette::Ember, Aesthetic::Brutal, Mode::Dark),
        Override {
            surface_page: hex(0x14_0C08),
            ..Override::NONE
        },
    ),
];

/// The override for `key`, or [`Override::NONE`].
#[must_use]
pub fn lookup(key: ThemeVariantKey) -> Override {
    OVERRIDES
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(Override::NONE, |&(_, o)| o)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
