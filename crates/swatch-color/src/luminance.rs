// SPDX-License-Identifier: MIT
//
// WCAG 2.x relative luminance and contrast ratio.
//
// The linearization threshold is the WCAG text's 0.03928 rather than the
// IEC 61966-2-1 value 0.04045. The two only disagree for channel values
// 11 and 12 (out of 255), and matching the guideline text keeps measured
// ratios identical to the ones accessibility checkers report.

use crate::color::Rgb;
use crate::error::ColorError;

/// Minimum contrast for normal-size text (WCAG AA).
pub const WCAG_AA: f64 = 4.5;

/// Minimum contrast for large text and UI glyphs (WCAG AA).
pub const WCAG_AA_LARGE: f64 = 3.0;

/// Minimum contrast for normal-size text (WCAG AAA).
pub const WCAG_AAA: f64 = 7.0;

/// Convert one gamma-encoded sRGB channel in [0, 1] to linear light.
#[inline]
#[must_use]
pub fn channel_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG: `0.2126 R + 0.7152 G + 0.0722 B` in
/// linear light. Returns a value in [0, 1].
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.channels();
    let r_lin = channel_to_linear(r / 255.0);
    let g_lin = channel_to_linear(g / 255.0);
    let b_lin = channel_to_linear(b / 255.0);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// WCAG contrast ratio, `(L_lighter + 0.05) / (L_darker + 0.05)`.
///
/// Always in [1, 21] and symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex strings.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either input is malformed.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(Rgb::from_hex(a)?, Rgb::from_hex(b)?))
}

/// Whether `fg` on `bg` reaches [`WCAG_AA`].
#[inline]
#[must_use]
pub fn meets_wcag_aa(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Linearization ───────────────────────────────────────────────

    #[test]
    fn linear_endpoints() {
        assert!(approx_eq(channel_to_linear(0.0), 0.0, 1e-12));
        assert!(approx_eq(channel_to_linear(1.0), 1.0, 1e-12));
    }

    #[test]
    fn linear_below_threshold_is_scaled() {
        assert!(approx_eq(channel_to_linear(0.03), 0.03 / 12.92, 1e-12));
    }

    #[test]
    fn linear_mid_gray() {
        // sRGB 0.5 linearizes to ~0.214.
        let lin = channel_to_linear(0.5);
        assert!(approx_eq(lin, 0.214, 0.001), "mid gray: {lin}");
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance(Rgb::BLACK), 0.0, 1e-12));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(relative_luminance(Rgb::WHITE), 1.0, 1e-9));
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 1e-9));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Rgb::new(0x2A, 0x33, 0x40);
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Rgb::new(0xC2, 0x52, 0x1E);
        let b = Rgb::new(0xFB, 0xF6, 0xF1);
        assert_eq!(contrast_ratio(a, b).to_bits(), contrast_ratio(b, a).to_bits());
    }

    #[test]
    fn contrast_known_pair() {
        // #767676 on white is the classic "just passes AA" gray.
        let ratio = contrast_ratio_hex("#767676", "#FFFFFF").unwrap();
        assert!(ratio >= WCAG_AA && ratio < 4.6, "#767676 on white: {ratio}");
        let ratio = contrast_ratio_hex("#777777", "#FFFFFF").unwrap();
        assert!(ratio < WCAG_AA, "#777777 on white: {ratio}");
    }

    #[test]
    fn contrast_hex_rejects_malformed() {
        assert!(contrast_ratio_hex("#ZZZ", "#FFFFFF").is_err());
    }

    #[test]
    fn seed_text_meets_aa() {
        let fg = Rgb::from_hex("#13161C").unwrap();
        let bg = Rgb::from_hex("#F4F5F7").unwrap();
        assert!(meets_wcag_aa(fg, bg));
        assert!(!meets_wcag_aa(bg, bg));
    }
}
