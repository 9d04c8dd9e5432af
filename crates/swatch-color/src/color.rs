// SPDX-License-Identifier: MIT
//
// swatch color primitives: 8-bit sRGB with hex and rgba string forms.
//
// Theme tokens travel as strings (`#RRGGBB`, `rgba(r, g, b, a)`) because
// that is what the rendering layer consumes. Internally every operation
// runs on the `Rgb` triple: mixing interpolates per channel in sRGB and
// rounds back to 8 bits immediately, so any derived color is exactly
// representable as a 6-digit hex string.
//
// Alpha composition (`Rgba::over`) also interpolates in sRGB. That is how
// the consuming renderer flattens a translucent surface over the page, so
// contrast is measured against what will actually be on screen.

// Single-character variable names (r, g, b, a, t) are the standard
// convention in color math.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// ```
/// use swatch_color::Rgb;
///
/// let slate = Rgb::from_hex("#2a3340").unwrap();
/// assert_eq!(slate.to_hex(), "#2A3340");
///
/// let half = Rgb::BLACK.mix(Rgb::WHITE, 0.5);
/// assert_eq!(half, Rgb::new(128, 128, 128));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` literal.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u24(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Parse `#RGB` or `#RRGGBB` (case-insensitive, `#` required).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for any other length, a
    /// missing `#`, or a non-hex digit.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidColorFormat {
            value: s.to_string(),
        })
    }

    /// Build a color from floating-point channels on the 0–255 scale.
    ///
    /// Each channel is clamped to [0, 255] and rounded to the nearest
    /// integer. NaN channels become 0.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Channels as floats on the 0–255 scale.
    #[inline]
    #[must_use]
    pub fn channels(self) -> (f64, f64, f64) {
        (f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Interpolate each channel linearly toward `other`.
    ///
    /// `weight` is clamped to [0, 1]: 0 returns `self`, 1 returns `other`.
    #[must_use]
    pub fn mix(self, other: Self, weight: f64) -> Self {
        let t = clamp_unit(weight);
        let lerp = |from: u8, to: u8| {
            let from = f64::from(from);
            (f64::from(to) - from).mul_add(t, from)
        };
        Self::from_channels(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }

    /// Attach an alpha value (clamped to [0, 1]).
    #[inline]
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba::new(self, alpha)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// A translucent color: an `Rgb` plus alpha in [0, 1].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// Create a translucent color. Alpha is clamped to [0, 1].
    #[must_use]
    pub fn new(rgb: Rgb, alpha: f64) -> Self {
        Self {
            rgb,
            alpha: clamp_unit(alpha),
        }
    }

    /// Flatten this color over an opaque backdrop ("source over").
    ///
    /// Alpha 0 returns the backdrop, alpha 1 returns the color itself.
    #[must_use]
    pub fn over(self, backdrop: Rgb) -> Rgb {
        backdrop.mix(self.rgb, self.alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.rgb;
        write!(f, "rgba({r}, {g}, {b}, {})", format_alpha(self.alpha))
    }
}

// ─── String-level operations ─────────────────────────────────────────────────
//
// Callers that only hold strings (seed tables, token lookups) use these.
// Each one parses, delegates to `Rgb`, and formats the result.

/// Canonical form of a hex color: shorthand expanded, digits uppercased.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `value` is not `#RGB` or
/// `#RRGGBB`.
pub fn normalize_hex(value: &str) -> Result<String, ColorError> {
    Rgb::from_hex(value).map(Rgb::to_hex)
}

/// Parse a hex color into its channels.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for malformed input.
pub fn hex_to_rgb(value: &str) -> Result<Rgb, ColorError> {
    Rgb::from_hex(value)
}

/// Format float channels as `#RRGGBB`, clamping to [0, 255] and rounding.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::from_channels(r, g, b).to_hex()
}

/// Mix two hex colors; `weight` 0 yields `a`, 1 yields `b`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either input is malformed.
pub fn mix_hex(a: &str, b: &str, weight: f64) -> Result<String, ColorError> {
    Ok(Rgb::from_hex(a)?.mix(Rgb::from_hex(b)?, weight).to_hex())
}

/// Render a hex color as an `rgba(r, g, b, a)` string.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `hex` is malformed.
pub fn with_alpha(hex: &str, alpha: f64) -> Result<String, ColorError> {
    Ok(Rgb::from_hex(hex)?.with_alpha(alpha).to_string())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#')?.as_bytes();

    match digits.len() {
        3 => {
            let r = parse_hex_digit(digits[0])?;
            let g = parse_hex_digit(digits[1])?;
            let b = parse_hex_digit(digits[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&digits[0..2])?;
            let g = parse_hex_byte(&digits[2..4])?;
            let b = parse_hex_byte(&digits[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Round a 0–255 float to a channel byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.clamp(0.0, 255.0).round() as u8
}

/// Clamp to [0, 1], mapping NaN to 0.
#[inline]
pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// At most three decimals, trailing zeros trimmed: `0.5`, `0.125`, `1`.
fn format_alpha(alpha: f64) -> String {
    let rounded = (clamp_unit(alpha) * 1000.0).round() / 1000.0;
    if rounded <= 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
