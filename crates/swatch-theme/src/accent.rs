//! Accent normalization: an accessible (background, foreground) pair from
//! a single accent color.
//!
//! The foreground is always one of two fixed inks, picked once. Only the
//! background moves: it is nudged away from the ink in 8% steps until the
//! pair reaches the minimum or the retry budget runs out. Running out is
//! not an error; the pair after the final nudge is returned and a warning
//! is logged.

use swatch_color::{Rgb, WCAG_AA};
use tracing::warn;

use crate::contrast::{NEAR_BLACK, NEAR_WHITE, Nudge, Outcome, higher_contrast, is_light};

/// Fraction of the remaining distance the background moves per attempt.
pub const ACCENT_STEP: f64 = 0.08;

/// A filled control color and the text drawn on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentPair {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Normalize `accent` to a pair reaching 4.5:1.
#[must_use]
pub fn normalize_accent(accent: Rgb) -> AccentPair {
    normalize_accent_to(accent, WCAG_AA)
}

/// Normalize `accent` to a pair reaching `minimum`.
///
/// Light ink pushes the background toward black, dark ink toward white.
#[must_use]
pub fn normalize_accent_to(accent: Rgb, minimum: f64) -> AccentPair {
    let foreground = higher_contrast(NEAR_BLACK, NEAR_WHITE, accent);
    let away = if is_light(foreground) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    };

    let background = match Nudge::new(accent, away, ACCENT_STEP, foreground).settle(minimum) {
        Outcome::Passed(candidate) => candidate.color,
        Outcome::Exhausted(last) => {
            warn!(
                accent = %accent,
                background = %last.color,
                foreground = %foreground,
                best = last.ratio,
                minimum,
                "accent retry budget exhausted; keeping last pair"
            );
            last.color
        }
    };

    AccentPair {
        background,
        foreground,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::RETRY_BUDGET;
    use pretty_assertions::assert_eq;
    use swatch_color::contrast_ratio;
    use tracing_test::traced_test;

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    #[test]
    fn dark_accent_keeps_background_and_takes_light_ink() {
        let accent = hex("#2A3340");
        let pair = normalize_accent(accent);
        assert_eq!(
            pair,
            AccentPair {
                background: accent,
                foreground: NEAR_WHITE,
            }
        );
    }

    #[test]
    fn light_accent_takes_dark_ink() {
        let accent = hex("#B6E85A");
        let pair = normalize_accent(accent);
        assert_eq!(pair.foreground, NEAR_BLACK);
        assert_eq!(pair.background, accent);
    }

    #[test]
    fn borderline_accent_is_darkened_under_light_ink() {
        // Burnt orange is just under 4.5:1 against both inks.
        let accent = hex("#C2521E");
        assert!(contrast_ratio(accent, NEAR_WHITE) < WCAG_AA);
        let pair = normalize_accent(accent);
        assert_eq!(pair.foreground, NEAR_WHITE);
        assert_eq!(pair.background, accent.mix(Rgb::BLACK, ACCENT_STEP));
        assert!(contrast_ratio(pair.background, pair.foreground) >= WCAG_AA);
    }

    #[test]
    fn mid_gray_takes_dark_ink_unchanged() {
        let accent = hex("#808080");
        let pair = normalize_accent(accent);
        assert_eq!(
            pair,
            AccentPair {
                background: accent,
                foreground: NEAR_BLACK,
            }
        );
    }

    #[test]
    fn darker_gray_is_darkened_under_light_ink() {
        // #767676 sits near the balance point and prefers light ink.
        let accent = hex("#767676");
        let pair = normalize_accent(accent);
        assert_eq!(pair.foreground, NEAR_WHITE);
        assert_ne!(pair.background, accent);
        assert!(contrast_ratio(pair.background, pair.foreground) >= WCAG_AA);
    }

    #[test]
    fn result_always_meets_aa_for_any_gray() {
        for v in (0..=255u8).step_by(5) {
            let pair = normalize_accent(Rgb::new(v, v, v));
            let ratio = contrast_ratio(pair.background, pair.foreground);
            assert!(ratio >= WCAG_AA, "gray {v}: {ratio}");
        }
    }

    #[test]
    #[traced_test]
    fn unreachable_minimum_returns_pair_after_final_nudge() {
        // Nothing reaches 22:1; the background after every nudge comes back.
        let accent = hex("#808080");
        let pair = normalize_accent_to(accent, 22.0);
        assert_eq!(pair.foreground, NEAR_BLACK);

        let mut expected = accent;
        for _ in 0..RETRY_BUDGET {
            expected = expected.mix(Rgb::WHITE, ACCENT_STEP);
        }
        assert_eq!(pair.background, expected);
        assert_eq!(pair.background, hex("#D7D7D7"));
        assert!(logs_contain("accent retry budget exhausted"));
    }
}
