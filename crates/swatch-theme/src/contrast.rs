//! WCAG contrast enforcement for generated token sets.
//!
//! Two halves:
//!
//! - **Correction** during derivation. A bounded search nudges a color
//!   step by step toward a target until it is legible against a fixed
//!   background. Every search in the crate runs through [`Nudge`], so the
//!   retry budget is one constant.
//! - **Guarding** after derivation. Six text/background pairs must reach
//!   4.5:1 on every token set; anything less is a construction error.
//!
//! Searches that run out of budget do not fail. They return a best-effort
//! color and log a warning, because only the guarded pairs are hard
//! requirements. A seed change that silently degrades a non-guarded tone
//! shows up in the logs rather than in a crash.

use swatch_color::{
    ColorValue, Rgb, WCAG_AA, contrast_ratio, meets_wcag_aa, relative_luminance,
};
use tracing::warn;

use crate::error::{Result, ThemeError};
use crate::token::{SemanticTokenSet, Token};

/// How many candidates a bounded search checks: the start plus 13 nudges.
/// An exhausted search nudges once more and returns that color unchecked,
/// so its result is 14 nudges from the start.
pub const RETRY_BUDGET: usize = 14;

/// Fraction of the remaining distance a tone search moves per step.
pub const TONE_STEP: f64 = 0.16;

/// Dark candidate for text on arbitrary fills.
pub const NEAR_BLACK: Rgb = Rgb::from_u24(0x0F_1115);

/// Light candidate for text on arbitrary fills.
pub const NEAR_WHITE: Rgb = Rgb::from_u24(0xFA_FBFC);

/// Text/background pairs every token set must keep at or above 4.5:1.
pub const GUARDED_PAIRS: [(Token, Token); 6] = [
    (Token::TextPrimary, Token::SurfacePage),
    (Token::TextSecondary, Token::SurfacePage),
    (Token::ButtonPrimaryFg, Token::ButtonPrimaryBg),
    (Token::ButtonSecondaryFg, Token::ButtonSecondaryBg),
    (Token::TextPrimary, Token::SurfaceSecondary),
    (Token::TextPrimary, Token::SurfaceTabGlass),
];

// ---------------------------------------------------------------------------
// Bounded search
// ---------------------------------------------------------------------------

/// One color tried by a search, with its contrast against the fixed side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub color: Rgb,
    pub ratio: f64,
}

/// How a bounded search ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The first candidate that reached the minimum.
    Passed(Candidate),
    /// No checked candidate reached the minimum; this is the color after
    /// the final nudge.
    Exhausted(Candidate),
}

impl Outcome {
    #[must_use]
    pub const fn candidate(self) -> Candidate {
        match self {
            Self::Passed(c) | Self::Exhausted(c) => c,
        }
    }

    #[must_use]
    pub const fn passed(self) -> bool {
        matches!(self, Self::Passed(_))
    }
}

/// Successive candidates: `start`, then each previous candidate mixed
/// `step` of the way toward `toward`, at most [`RETRY_BUDGET`] of them.
///
/// Contrast is always measured against `against`.
#[derive(Debug, Clone)]
pub struct Nudge {
    current: Rgb,
    toward: Rgb,
    step: f64,
    against: Rgb,
    remaining: usize,
}

impl Nudge {
    #[must_use]
    pub const fn new(start: Rgb, toward: Rgb, step: f64, against: Rgb) -> Self {
        Self {
            current: start,
            toward,
            step,
            against,
            remaining: RETRY_BUDGET,
        }
    }

    /// The color the next call to `next` would yield, measured.
    #[must_use]
    pub fn pending(&self) -> Candidate {
        Candidate {
            color: self.current,
            ratio: contrast_ratio(self.current, self.against),
        }
    }

    /// Take the first candidate reaching `minimum`, or the color after the
    /// final nudge.
    #[must_use]
    pub fn settle(mut self, minimum: f64) -> Outcome {
        if let Some(passed) = self.by_ref().find(|c| c.ratio >= minimum) {
            return Outcome::Passed(passed);
        }
        Outcome::Exhausted(self.pending())
    }
}

impl Iterator for Nudge {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let color = self.current;
        self.current = color.mix(self.toward, self.step);
        Some(Candidate {
            color,
            ratio: contrast_ratio(color, self.against),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Nudge {}

// ---------------------------------------------------------------------------
// Tone correction
// ---------------------------------------------------------------------------

/// Whether `color` reads as a light color (luminance above mid-scale).
#[must_use]
pub fn is_light(color: Rgb) -> bool {
    relative_luminance(color) > 0.5
}

/// Whichever of `a` and `b` contrasts more with `background` (`a` on ties).
#[must_use]
pub fn higher_contrast(a: Rgb, b: Rgb, background: Rgb) -> Rgb {
    if contrast_ratio(a, background) >= contrast_ratio(b, background) {
        a
    } else {
        b
    }
}

/// `preferred` if it already reaches 4.5:1 on `background`, otherwise the
/// better of [`NEAR_BLACK`] and [`NEAR_WHITE`].
#[must_use]
pub fn pick_readable_foreground(background: Rgb, preferred: Rgb) -> Rgb {
    if meets_wcag_aa(preferred, background) {
        preferred
    } else {
        higher_contrast(NEAR_BLACK, NEAR_WHITE, background)
    }
}

/// A tone of `primary` faded toward `background` by `initial_mix`, pulled
/// back toward `primary` until it reaches `minimum_ratio`.
///
/// Falls back to `primary` itself when the budget runs out.
#[must_use]
pub fn make_readable_tone(
    primary: Rgb,
    background: Rgb,
    minimum_ratio: f64,
    initial_mix: f64,
) -> Rgb {
    let start = primary.mix(background, initial_mix);
    match Nudge::new(start, primary, TONE_STEP, background).settle(minimum_ratio) {
        Outcome::Passed(candidate) => candidate.color,
        Outcome::Exhausted(last) => {
            warn!(
                primary = %primary,
                background = %background,
                minimum = minimum_ratio,
                best = last.ratio,
                "tone search retry budget exhausted; falling back to primary"
            );
            primary
        }
    }
}

/// `color` deepened toward `toward` until it reaches 4.5:1 on `background`.
///
/// Used for accent-hued text and status colors, which should keep their
/// hue where possible. Falls back to `toward` when the budget runs out.
#[must_use]
pub fn readable_accent(color: Rgb, toward: Rgb, background: Rgb) -> Rgb {
    match Nudge::new(color, toward, TONE_STEP, background).settle(WCAG_AA) {
        Outcome::Passed(candidate) => candidate.color,
        Outcome::Exhausted(last) => {
            warn!(
                color = %color,
                background = %background,
                best = last.ratio,
                "accent tone retry budget exhausted; falling back to {}",
                toward
            );
            toward
        }
    }
}

// ---------------------------------------------------------------------------
// Guard
// ---------------------------------------------------------------------------

/// One guarded pair as measured on a token set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairMeasurement {
    pub foreground: Token,
    pub background: Token,
    pub ratio: f64,
}

/// Fail with [`ThemeError::ContrastViolation`] unless `fg` on `bg` reaches
/// `minimum`. Returns the measured ratio.
///
/// # Errors
///
/// Returns [`ThemeError::ContrastViolation`] naming `label`, both tokens of
/// `pair`, the measured ratio and `minimum`.
pub fn assert_contrast(
    label: &str,
    pair: (Token, Token),
    fg: Rgb,
    bg: Rgb,
    minimum: f64,
) -> Result<f64> {
    let ratio = contrast_ratio(fg, bg);
    if ratio >= minimum {
        Ok(ratio)
    } else {
        Err(ThemeError::ContrastViolation {
            variant: label.to_string(),
            foreground: pair.0,
            background: pair.1,
            ratio,
            minimum,
        })
    }
}

/// Opaque on-screen color of `token`: translucent values are flattened
/// over `surfacePage`.
fn on_screen(set: &SemanticTokenSet, token: Token) -> Rgb {
    let page = set.get(Token::SurfacePage).rgb();
    set.get(token).flatten_over(page)
}

/// Measure every guarded pair without failing.
#[must_use]
pub fn measure_guarded(set: &SemanticTokenSet) -> [PairMeasurement; 6] {
    GUARDED_PAIRS.map(|(foreground, background)| PairMeasurement {
        foreground,
        background,
        ratio: contrast_ratio(on_screen(set, foreground), on_screen(set, background)),
    })
}

/// Check every guarded pair of a finished token set.
///
/// # Errors
///
/// Returns the first [`ThemeError::ContrastViolation`] found.
pub fn guard(set: &SemanticTokenSet) -> Result<()> {
    let label = set.key().to_string();
    for pair in GUARDED_PAIRS {
        assert_contrast(
            &label,
            pair,
            on_screen(set, pair.0),
            on_screen(set, pair.1),
            WCAG_AA,
        )?;
    }
    Ok(())
}

/// Wrap an opaque color as a token value.
#[must_use]
pub const fn solid(color: Rgb) -> ColorValue {
    ColorValue::Solid(color)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Aesthetic, Mode, Palette, ThemeVariantKey};
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    // ── Nudge ───────────────────────────────────────────────────────

    #[test]
    fn nudge_yields_retry_budget_candidates() {
        let nudge = Nudge::new(Rgb::BLACK, Rgb::WHITE, 0.5, Rgb::BLACK);
        assert_eq!(nudge.len(), RETRY_BUDGET);
        assert_eq!(nudge.count(), RETRY_BUDGET);
    }

    #[test]
    fn nudge_starts_at_start_and_moves_toward_target() {
        let mut nudge = Nudge::new(Rgb::BLACK, Rgb::WHITE, 0.5, Rgb::BLACK);
        assert_eq!(nudge.next().unwrap().color, Rgb::BLACK);
        assert_eq!(nudge.next().unwrap().color, Rgb::new(128, 128, 128));
        assert_eq!(nudge.next().unwrap().color, Rgb::new(192, 192, 192));
    }

    #[test]
    fn settle_takes_first_passing() {
        let outcome = Nudge::new(Rgb::BLACK, Rgb::WHITE, 0.5, Rgb::BLACK).settle(3.0);
        assert!(outcome.passed());
        // Black itself is 1:1; mid gray is the first to clear 3:1.
        assert_eq!(outcome.candidate().color, Rgb::new(128, 128, 128));
    }

    #[test]
    fn settle_passes_immediately_when_start_is_fine() {
        let outcome = Nudge::new(Rgb::WHITE, Rgb::BLACK, 0.5, Rgb::BLACK).settle(4.5);
        assert_eq!(
            outcome,
            Outcome::Passed(Candidate {
                color: Rgb::WHITE,
                ratio: contrast_ratio(Rgb::WHITE, Rgb::BLACK),
            })
        );
    }

    #[test]
    fn settle_exhausted_returns_color_after_final_nudge() {
        let mut expected = Rgb::BLACK;
        for _ in 0..RETRY_BUDGET {
            expected = expected.mix(Rgb::WHITE, 0.1);
        }
        let last_checked = Nudge::new(Rgb::BLACK, Rgb::WHITE, 0.1, Rgb::BLACK).last().unwrap();
        let outcome = Nudge::new(Rgb::BLACK, Rgb::WHITE, 0.1, Rgb::BLACK).settle(25.0);
        assert_eq!(outcome.candidate().color, expected);
        assert_eq!(last_checked.color.mix(Rgb::WHITE, 0.1), expected);
        assert!(!outcome.passed());
    }

    #[test]
    fn pending_is_next_candidate() {
        let mut nudge = Nudge::new(Rgb::BLACK, Rgb::WHITE, 0.5, Rgb::BLACK);
        let pending = nudge.pending();
        assert_eq!(nudge.next(), Some(pending));
        assert_eq!(nudge.pending().color, Rgb::new(128, 128, 128));
    }

    // ── pick_readable_foreground ────────────────────────────────────

    #[test]
    fn preferred_kept_when_readable() {
        let bg = hex("#F4F5F7");
        let preferred = hex("#13161C");
        assert_eq!(pick_readable_foreground(bg, preferred), preferred);
    }

    #[test]
    fn falls_back_to_near_black_on_light() {
        let bg = hex("#F4F5F7");
        assert_eq!(pick_readable_foreground(bg, hex("#DDDDDD")), NEAR_BLACK);
    }

    #[test]
    fn preferred_at_exactly_aa_is_kept() {
        // #767676 on white is the classic 4.54:1 gray.
        let bg = Rgb::WHITE;
        let preferred = hex("#767676");
        assert!(meets_wcag_aa(preferred, bg));
        assert_eq!(pick_readable_foreground(bg, preferred), preferred);
    }

    #[test]
    fn falls_back_to_near_white_on_dark() {
        let bg = hex("#111419");
        assert_eq!(pick_readable_foreground(bg, hex("#333333")), NEAR_WHITE);
    }

    #[test]
    fn candidates_are_light_and_dark() {
        assert!(is_light(NEAR_WHITE));
        assert!(!is_light(NEAR_BLACK));
    }

    // ── make_readable_tone ──────────────────────────────────────────

    #[test]
    fn tone_passes_from_initial_mix() {
        let fg = hex("#13161C");
        let bg = hex("#F4F5F7");
        let tone = make_readable_tone(fg, bg, WCAG_AA, 0.3);
        assert_eq!(tone, fg.mix(bg, 0.3));
        assert!(contrast_ratio(tone, bg) >= WCAG_AA);
    }

    #[test]
    fn tone_pulls_back_toward_primary() {
        let fg = hex("#13161C");
        let bg = hex("#F4F5F7");
        // 90% faded fails; the search walks back until legible.
        let tone = make_readable_tone(fg, bg, WCAG_AA, 0.9);
        assert_ne!(tone, fg.mix(bg, 0.9));
        assert_ne!(tone, fg);
        assert!(contrast_ratio(tone, bg) >= WCAG_AA);
    }

    #[test]
    fn tone_mixes_are_ordered_by_distance() {
        let fg = hex("#13161C");
        let bg = hex("#F4F5F7");
        let near = make_readable_tone(fg, bg, 3.0, 0.1);
        let far = make_readable_tone(fg, bg, 3.0, 0.4);
        assert!(contrast_ratio(near, bg) > contrast_ratio(far, bg));
    }

    #[test]
    #[traced_test]
    fn tone_exhausted_falls_back_to_primary() {
        // Two mid grays can never reach 4.5:1.
        let primary = hex("#777777");
        let bg = hex("#808080");
        assert_eq!(make_readable_tone(primary, bg, WCAG_AA, 0.5), primary);
        assert!(logs_contain("retry budget exhausted"));
    }

    // ── readable_accent ─────────────────────────────────────────────

    #[test]
    fn accent_already_readable_is_kept() {
        let accent = hex("#2A3340");
        assert_eq!(readable_accent(accent, hex("#13161C"), hex("#F4F5F7")), accent);
    }

    #[test]
    fn accent_deepens_toward_ink() {
        let page = hex("#FBF6F1");
        let accent = hex("#C2521E");
        assert!(contrast_ratio(accent, page) < WCAG_AA);
        let text = readable_accent(accent, hex("#221511"), page);
        assert_ne!(text, accent);
        assert!(contrast_ratio(text, page) >= WCAG_AA);
    }

    #[test]
    #[traced_test]
    fn accent_exhausted_falls_back_to_target() {
        let gray = hex("#808080");
        assert_eq!(readable_accent(gray, hex("#7A7A7A"), gray), hex("#7A7A7A"));
        assert!(logs_contain("retry budget exhausted"));
    }

    // ── assert_contrast ─────────────────────────────────────────────

    #[test]
    fn assert_contrast_returns_ratio() {
        let ratio = assert_contrast(
            "alloy_modern_light",
            (Token::TextPrimary, Token::SurfacePage),
            Rgb::BLACK,
            Rgb::WHITE,
            WCAG_AA,
        )
        .unwrap();
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn assert_contrast_fails_loudly() {
        let err = assert_contrast(
            "ember_glass_dark",
            (Token::ButtonPrimaryFg, Token::ButtonPrimaryBg),
            hex("#777777"),
            hex("#808080"),
            WCAG_AA,
        )
        .unwrap_err();
        let ThemeError::ContrastViolation {
            variant,
            foreground,
            background,
            ratio,
            minimum,
        } = &err
        else {
            panic!("unexpected error {err:?}");
        };
        assert_eq!(variant, "ember_glass_dark");
        assert_eq!(*foreground, Token::ButtonPrimaryFg);
        assert_eq!(*background, Token::ButtonPrimaryBg);
        assert!(*ratio < 1.2);
        assert_eq!(*minimum, WCAG_AA);
        let message = err.to_string();
        assert!(message.contains("buttonPrimaryFg on buttonPrimaryBg"), "{message}");
    }

    // ── guard ───────────────────────────────────────────────────────

    fn key() -> ThemeVariantKey {
        ThemeVariantKey::new(Palette::Signal, Aesthetic::Glass, Mode::Light)
    }

    #[test]
    fn guard_accepts_legible_set() {
        let set = SemanticTokenSet::from_fn(key(), |token| match token {
            Token::TextPrimary
            | Token::TextSecondary
            | Token::ButtonPrimaryFg
            | Token::ButtonSecondaryFg => solid(NEAR_BLACK),
            _ => solid(NEAR_WHITE),
        });
        assert_eq!(guard(&set), Ok(()));
    }

    #[test]
    fn guard_rejects_illegible_secondary_text() {
        let set = SemanticTokenSet::from_fn(key(), |token| match token {
            Token::TextSecondary => solid(hex("#DDDDDD")),
            Token::TextPrimary | Token::ButtonPrimaryFg | Token::ButtonSecondaryFg => {
                solid(NEAR_BLACK)
            }
            _ => solid(NEAR_WHITE),
        });
        let err = guard(&set).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::ContrastViolation {
                foreground: Token::TextSecondary,
                background: Token::SurfacePage,
                ..
            }
        ));
        assert!(err.to_string().starts_with("signal_glass_light:"));
    }

    #[test]
    fn guard_flattens_translucent_tab_bar_over_page() {
        // Dark ink at 90% over a white page is too dark for dark text.
        let set = SemanticTokenSet::from_fn(key(), |token| match token {
            Token::SurfaceTabGlass => ColorValue::Translucent(NEAR_BLACK.with_alpha(0.9)),
            Token::TextPrimary
            | Token::TextSecondary
            | Token::ButtonPrimaryFg
            | Token::ButtonSecondaryFg => solid(NEAR_BLACK),
            _ => solid(NEAR_WHITE),
        });
        let err = guard(&set).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::ContrastViolation {
                background: Token::SurfaceTabGlass,
                ..
            }
        ));

        // The same color at 10% is just a tint.
        let set = SemanticTokenSet::from_fn(key(), |token| match token {
            Token::SurfaceTabGlass => ColorValue::Translucent(NEAR_BLACK.with_alpha(0.1)),
            Token::TextPrimary
            | Token::TextSecondary
            | Token::ButtonPrimaryFg
            | Token::ButtonSecondaryFg => solid(NEAR_BLACK),
            _ => solid(NEAR_WHITE),
        });
        assert_eq!(guard(&set), Ok(()));
    }

    #[test]
    fn measure_reports_every_pair() {
        let set = SemanticTokenSet::from_fn(key(), |token| match token {
            Token::TextPrimary
            | Token::TextSecondary
            | Token::ButtonPrimaryFg
            | Token::ButtonSecondaryFg => solid(Rgb::BLACK),
            _ => solid(Rgb::WHITE),
        });
        let rows = measure_guarded(&set);
        assert_eq!(rows.len(), GUARDED_PAIRS.len());
        for (row, pair) in rows.iter().zip(GUARDED_PAIRS) {
            assert_eq!((row.foreground, row.background), pair);
            assert!((row.ratio - 21.0).abs() < 1e-9);
        }
    }
}
