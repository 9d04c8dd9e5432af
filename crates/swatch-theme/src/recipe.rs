//! Per-aesthetic mixing recipes.
//!
//! A recipe is pure data: every weight the recolor pass uses, as a
//! `(light, dark)` pair. The three aesthetics differ only here. Nothing in
//! [`crate::recolor`] branches on the aesthetic itself.
//!
//! Weights are fractions of the distance from the first color toward the
//! second in a [`Rgb::mix`](swatch_color::Rgb::mix) call. Alphas are the
//! alpha channel of a translucent token.

use crate::palette::{Aesthetic, Mode};

/// One weight for light mode and one for dark mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeWeights {
    pub light: f64,
    pub dark: f64,
}

impl ModeWeights {
    #[must_use]
    pub const fn pick(self, mode: Mode) -> f64 {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }
}

const fn w(light: f64, dark: f64) -> ModeWeights {
    ModeWeights { light, dark }
}

/// Alphas for surfaces rendered see-through over the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translucency {
    /// Card and raised card.
    pub card: ModeWeights,
    pub chip: ModeWeights,
    pub tab: ModeWeights,
}

/// What the secondary button border is pulled toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Accent,
    Foreground,
}

/// Every weight one aesthetic applies on top of a seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AestheticRecipe {
    /// Seed accent toward seed foreground.
    pub accent_depth: ModeWeights,

    // ── Surfaces (page toward a tint) ─────────────────────────
    pub surface_secondary: ModeWeights,
    pub surface_card: ModeWeights,
    pub surface_card_raised: ModeWeights,
    pub surface_panel: ModeWeights,
    pub surface_field: ModeWeights,
    pub surface_chip: ModeWeights,
    /// Page toward accent.
    pub surface_chip_active: ModeWeights,
    pub surface_tab_glass: ModeWeights,
    /// Alpha of the near-black scrim.
    pub overlay_alpha: ModeWeights,
    pub translucency: Option<Translucency>,

    // ── Backdrop ──────────────────────────────────────────────
    pub backdrop_start: ModeWeights,
    pub backdrop_end: ModeWeights,
    pub backdrop_accent: ModeWeights,

    // ── Text (foreground toward page, strictly increasing) ────
    pub text_primary: ModeWeights,
    pub text_secondary: ModeWeights,
    pub text_muted: ModeWeights,

    // ── Borders ───────────────────────────────────────────────
    pub border_subtle: ModeWeights,
    pub border_default: ModeWeights,
    pub border_strong: ModeWeights,
    pub divider: ModeWeights,

    // ── Shadows ───────────────────────────────────────────────
    /// Page toward accent, before alpha.
    pub shadow_mix: ModeWeights,
    pub shadow_soft_alpha: ModeWeights,
    pub shadow_strong_alpha: ModeWeights,

    // ── Accent and buttons ────────────────────────────────────
    pub accent_soft_alpha: ModeWeights,
    pub accent_glow_alpha: ModeWeights,
    /// Primary button background toward black (light) or white (dark).
    pub accent_press: ModeWeights,
    /// Panel toward accent.
    pub secondary_button: ModeWeights,
    /// Seed border toward `secondary_border_ink`.
    pub secondary_border: ModeWeights,
    pub secondary_border_ink: Ink,
}

/// Flat surfaces, soft accent-tinted shadows.
pub const MODERN: AestheticRecipe = AestheticRecipe {
    accent_depth: w(0.0, 0.0),

    surface_secondary: w(0.04, 0.25),
    surface_card: w(0.70, 0.05),
    surface_card_raised: w(1.0, 0.09),
    surface_panel: w(0.03, 0.20),
    surface_field: w(0.55, 0.07),
    surface_chip: w(0.06, 0.10),
    surface_chip_active: w(0.14, 0.22),
    surface_tab_glass: w(0.80, 0.06),
    overlay_alpha: w(0.40, 0.60),
    translucency: None,

    backdrop_start: w(0.02, 0.04),
    backdrop_end: w(0.60, 0.03),
    backdrop_accent: w(0.10, 0.14),

    text_primary: w(0.0, 0.0),
    text_secondary: w(0.30, 0.28),
    text_muted: w(0.48, 0.46),

    border_subtle: w(0.08, 0.10),
    border_default: w(0.0, 0.0),
    border_strong: w(0.25, 0.25),
    divider: w(0.60, 0.70),

    shadow_mix: w(0.72, 0.35),
    shadow_soft_alpha: w(0.08, 0.30),
    shadow_strong_alpha: w(0.16, 0.45),

    accent_soft_alpha: w(0.12, 0.18),
    accent_glow_alpha: w(0.20, 0.28),
    accent_press: w(0.14, 0.14),
    secondary_button: w(0.08, 0.10),
    secondary_border: w(0.0, 0.0),
    secondary_border_ink: Ink::Accent,
};

/// Translucent cards, chips and tab bar over a saturated backdrop.
pub const GLASS: AestheticRecipe = AestheticRecipe {
    accent_depth: w(0.0, 0.0),

    surface_secondary: w(0.05, 0.20),
    surface_card: w(0.85, 0.08),
    surface_card_raised: w(1.0, 0.12),
    surface_panel: w(0.04, 0.18),
    surface_field: w(0.60, 0.08),
    surface_chip: w(0.08, 0.12),
    surface_chip_active: w(0.18, 0.26),
    surface_tab_glass: w(0.90, 0.08),
    overlay_alpha: w(0.32, 0.55),
    translucency: Some(Translucency {
        card: w(0.62, 0.55),
        chip: w(0.55, 0.50),
        tab: w(0.72, 0.68),
    }),

    backdrop_start: w(0.16, 0.18),
    backdrop_end: w(0.70, 0.04),
    backdrop_accent: w(0.38, 0.42),

    text_primary: w(0.02, 0.02),
    text_secondary: w(0.28, 0.26),
    text_muted: w(0.46, 0.44),

    border_subtle: w(0.06, 0.08),
    border_default: w(0.0, 0.0),
    border_strong: w(0.20, 0.22),
    divider: w(0.50, 0.60),

    shadow_mix: w(0.55, 0.45),
    shadow_soft_alpha: w(0.10, 0.34),
    shadow_strong_alpha: w(0.20, 0.50),

    accent_soft_alpha: w(0.16, 0.22),
    accent_glow_alpha: w(0.32, 0.40),
    accent_press: w(0.12, 0.12),
    secondary_button: w(0.10, 0.12),
    secondary_border: w(0.30, 0.30),
    secondary_border_ink: Ink::Accent,
};

/// Hard ink borders, solid offset shadows, filled chips.
pub const BRUTAL: AestheticRecipe = AestheticRecipe {
    accent_depth: w(0.12, 0.0),

    surface_secondary: w(0.07, 0.30),
    surface_card: w(1.0, 0.04),
    surface_card_raised: w(1.0, 0.08),
    surface_panel: w(0.05, 0.22),
    surface_field: w(1.0, 0.06),
    surface_chip: w(0.10, 0.12),
    surface_chip_active: w(0.85, 0.80),
    surface_tab_glass: w(1.0, 0.05),
    overlay_alpha: w(0.55, 0.70),
    translucency: None,

    backdrop_start: w(0.0, 0.0),
    backdrop_end: w(0.0, 0.0),
    backdrop_accent: w(0.22, 0.25),

    text_primary: w(0.0, 0.0),
    text_secondary: w(0.24, 0.24),
    text_muted: w(0.40, 0.40),

    border_subtle: w(0.35, 0.30),
    border_default: w(0.80, 0.70),
    border_strong: w(1.0, 1.0),
    divider: w(0.90, 0.90),

    // Shadows are the accent itself, fully opaque.
    shadow_mix: w(1.0, 1.0),
    shadow_soft_alpha: w(1.0, 1.0),
    shadow_strong_alpha: w(1.0, 1.0),

    accent_soft_alpha: w(0.22, 0.26),
    accent_glow_alpha: w(0.45, 0.50),
    accent_press: w(0.18, 0.18),
    secondary_button: w(0.0, 0.0),
    secondary_border: w(1.0, 1.0),
    secondary_border_ink: Ink::Foreground,
};

/// The recipe for `aesthetic`.
#[must_use]
pub const fn recipe(aesthetic: Aesthetic) -> &'static AestheticRecipe {
    match aesthetic {
        Aesthetic::Modern => &MODERN,
        Aesthetic::Glass => &GLASS,
        Aesthetic::Brutal => &BRUTAL,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
