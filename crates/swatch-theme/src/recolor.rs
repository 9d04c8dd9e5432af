//! The recolor pass: one seed plus one recipe in, one full token set out.
//!
//! There is exactly one derivation function. Aesthetics differ only through
//! their [`AestheticRecipe`] weights and variants only through their
//! [`Override`] record, so every branch of the theme matrix runs the same
//! code.
//!
//! Surfaces are mixed from the page toward a *tint* whose direction flips
//! with the mode:
//!
//! ```text
//!              light mode        dark mode
//!   raised     white             seed foreground
//!   recessed   seed foreground   black
//! ```
//!
//! Cards and fields are raised, sections and panels are recessed. In dark
//! mode "raised" therefore means lighter, which is how elevation reads on a
//! dark page.

use swatch_color::{ColorValue, Rgb, WCAG_AA, WCAG_AA_LARGE, WCAG_AAA};
use tracing::trace;

use crate::accent::normalize_accent;
use crate::contrast::{
    NEAR_BLACK, make_readable_tone, pick_readable_foreground, readable_accent, solid,
};
use crate::overrides::{self, Override};
use crate::palette::{Mode, Seed, ThemeVariantKey};
use crate::recipe::{AestheticRecipe, Ink, ModeWeights, recipe};
use crate::token::{SemanticTokenSet, Token};

/// Status hues before they are deepened for legibility.
pub const STATUS_SUCCESS: Rgb = Rgb::from_u24(0x2E_9E5B);
pub const STATUS_WARNING: Rgb = Rgb::from_u24(0xC9_8A0B);
pub const STATUS_DANGER: Rgb = Rgb::from_u24(0xD8_453B);

/// Derive every token for `key` from its parsed seed, using the built-in
/// recipe and override tables.
#[must_use]
pub fn recolor(key: ThemeVariantKey, seed: &Seed) -> SemanticTokenSet {
    recolor_with(key, seed, recipe(key.aesthetic), &overrides::lookup(key))
}

/// Derive every token for `key` from explicit recipe and override data.
#[must_use]
pub fn recolor_with(
    key: ThemeVariantKey,
    seed: &Seed,
    recipe: &AestheticRecipe,
    over: &Override,
) -> SemanticTokenSet {
    let mode = key.mode;
    let at = |weights: ModeWeights| weights.pick(mode);
    let fg = seed.foreground;

    let (raised, recessed) = match mode {
        Mode::Light => (Rgb::WHITE, fg),
        Mode::Dark => (fg, Rgb::BLACK),
    };

    let page = over.surface_page.unwrap_or(seed.background);
    let accent = over
        .accent
        .unwrap_or_else(|| seed.accent.mix(fg, at(recipe.accent_depth)));

    // ── Surfaces ──────────────────────────────────────────────
    let secondary = page.mix(recessed, at(recipe.surface_secondary));
    let card = page.mix(raised, at(recipe.surface_card));
    let card_raised = page.mix(raised, at(recipe.surface_card_raised));
    let panel = page.mix(recessed, at(recipe.surface_panel));
    let field = page.mix(raised, at(recipe.surface_field));
    let chip = page.mix(recessed, at(recipe.surface_chip));
    let chip_active = page.mix(accent, at(recipe.surface_chip_active));
    let tab_glass = page.mix(raised, at(recipe.surface_tab_glass));

    let (card, card_raised, chip, tab_glass) = match recipe.translucency {
        Some(t) => (
            ColorValue::Translucent(card.with_alpha(at(t.card))),
            ColorValue::Translucent(card_raised.with_alpha(at(t.card))),
            ColorValue::Translucent(chip.with_alpha(at(t.chip))),
            ColorValue::Translucent(tab_glass.with_alpha(at(t.tab))),
        ),
        None => (solid(card), solid(card_raised), solid(chip), solid(tab_glass)),
    };
    let overlay = NEAR_BLACK.with_alpha(at(recipe.overlay_alpha));

    // ── Backdrop ──────────────────────────────────────────────
    let backdrop_start = over
        .backdrop_start
        .unwrap_or_else(|| page.mix(accent, at(recipe.backdrop_start)));
    let backdrop_end = over
        .backdrop_end
        .unwrap_or_else(|| page.mix(raised, at(recipe.backdrop_end)));
    let backdrop_accent = over
        .backdrop_accent
        .unwrap_or_else(|| page.mix(accent, at(recipe.backdrop_accent)));

    // ── Text ──────────────────────────────────────────────────
    let text_primary = make_readable_tone(fg, page, WCAG_AAA, at(recipe.text_primary));
    let text_secondary = make_readable_tone(fg, page, WCAG_AA, at(recipe.text_secondary));
    let text_muted = make_readable_tone(fg, page, WCAG_AA_LARGE, at(recipe.text_muted));
    let text_inverse = pick_readable_foreground(fg, page);
    let text_accent = readable_accent(accent, fg, page);
    let text_on_chip_active = pick_readable_foreground(chip_active, text_primary);

    // ── Borders ───────────────────────────────────────────────
    let border_subtle = page.mix(fg, at(recipe.border_subtle));
    let border_default = seed.border.mix(fg, at(recipe.border_default));
    let border_strong = seed.border.mix(fg, at(recipe.border_strong));
    let divider = page.mix(seed.border, at(recipe.divider));

    // ── Shadows ───────────────────────────────────────────────
    let shadow = page.mix(accent, at(recipe.shadow_mix));
    let shadow_soft = shadow.with_alpha(at(recipe.shadow_soft_alpha));
    let shadow_strong = shadow.with_alpha(at(recipe.shadow_strong_alpha));

    // ── Accent and buttons ────────────────────────────────────
    let accent_soft = accent.with_alpha(at(recipe.accent_soft_alpha));
    let accent_glow = accent.with_alpha(at(recipe.accent_glow_alpha));
    let primary_button = normalize_accent(accent);
    let press_toward = if mode.is_dark() {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    };
    let accent_press = primary_button
        .background
        .mix(press_toward, at(recipe.accent_press));

    let secondary_bg = panel.mix(accent, at(recipe.secondary_button));
    let secondary_fg = pick_readable_foreground(secondary_bg, text_primary);
    let border_ink = match recipe.secondary_border_ink {
        Ink::Accent => accent,
        Ink::Foreground => fg,
    };
    let secondary_border = seed.border.mix(border_ink, at(recipe.secondary_border));

    trace!(variant = %key, page = %page, accent = %accent, "recolored");

    SemanticTokenSet::from_fn(key, |token| match token {
        Token::SurfacePage => solid(page),
        Token::SurfaceSecondary => solid(secondary),
        Token::SurfaceCard => card,
        Token::SurfaceCardRaised => card_raised,
        Token::SurfacePanel => solid(panel),
        Token::SurfaceField => solid(field),
        Token::SurfaceChip => chip,
        Token::SurfaceChipActive => solid(chip_active),
        Token::SurfaceTabGlass => tab_glass,
        Token::SurfaceOverlay => ColorValue::Translucent(overlay),

        Token::BackdropStart => solid(backdrop_start),
        Token::BackdropEnd => solid(backdrop_end),
        Token::BackdropAccent => solid(backdrop_accent),

        Token::TextPrimary => solid(text_primary),
        Token::TextSecondary => solid(text_secondary),
        Token::TextMuted | Token::TabInactive => solid(text_muted),
        Token::TextInverse => solid(text_inverse),
        Token::TextAccent | Token::TabActive => solid(text_accent),
        Token::TextOnChipActive => solid(text_on_chip_active),

        Token::BorderSubtle => solid(border_subtle),
        Token::BorderDefault => solid(border_default),
        Token::BorderStrong => solid(border_strong),
        Token::BorderFocus | Token::Accent => solid(accent),
        Token::Divider => solid(divider),

        Token::ShadowSoft => ColorValue::Translucent(shadow_soft),
        Token::ShadowStrong => ColorValue::Translucent(shadow_strong),

        Token::AccentSoft => ColorValue::Translucent(accent_soft),
        Token::AccentPress => solid(accent_press),
        Token::AccentGlow => ColorValue::Translucent(accent_glow),

        Token::ButtonPrimaryBg => solid(primary_button.background),
        Token::ButtonPrimaryFg => solid(primary_button.foreground),
        Token::ButtonSecondaryBg => solid(secondary_bg),
        Token::ButtonSecondaryFg => solid(secondary_fg),
        Token::ButtonSecondaryBorder => solid(secondary_border),

        Token::StatusSuccess => solid(readable_accent(STATUS_SUCCESS, fg, page)),
        Token::StatusWarning => solid(readable_accent(STATUS_WARNING, fg, page)),
        Token::StatusDanger => solid(readable_accent(STATUS_DANGER, fg, page)),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
