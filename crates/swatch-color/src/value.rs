// SPDX-License-Identifier: MIT
//
// Token values as the rendering layer sees them: either an opaque hex
// color or a translucent `rgba(...)` string.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Rgb, Rgba};
use crate::error::ColorError;

static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d+(?:\.\d+)?|\.\d+)\s*\)$")
        .expect("rgba regex")
});

/// A resolved token color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ColorValue {
    /// Fully opaque, rendered as `#RRGGBB`.
    Solid(Rgb),
    /// Translucent, rendered as `rgba(r, g, b, a)`.
    Translucent(Rgba),
}

impl ColorValue {
    /// Parse either a hex color or an `rgba(r, g, b, a)` string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorValue`] when `s` is neither form,
    /// a channel exceeds 255, or alpha falls outside [0, 1].
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        if s.starts_with('#') {
            return Rgb::from_hex(s)
                .map(Self::Solid)
                .map_err(|_| invalid_value(s));
        }

        let caps = RGBA_PATTERN.captures(s).ok_or_else(|| invalid_value(s))?;
        let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid_value(s));
        let rgb = Rgb::new(channel(1)?, channel(2)?, channel(3)?);
        let alpha: f64 = caps[4].parse().map_err(|_| invalid_value(s))?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid_value(s));
        }
        Ok(Self::Translucent(Rgba::new(rgb, alpha)))
    }

    /// The opaque color on screen when this value is painted over
    /// `backdrop`. Solid values ignore the backdrop.
    #[must_use]
    pub fn flatten_over(self, backdrop: Rgb) -> Rgb {
        match self {
            Self::Solid(rgb) => rgb,
            Self::Translucent(rgba) => rgba.over(backdrop),
        }
    }

    /// The underlying color without alpha.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Solid(rgb) => rgb,
            Self::Translucent(rgba) => rgba.rgb,
        }
    }

    #[must_use]
    pub const fn is_translucent(self) -> bool {
        matches!(self, Self::Translucent(_))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(rgb) => fmt::Display::fmt(rgb, f),
            Self::Translucent(rgba) => fmt::Display::fmt(rgba, f),
        }
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        Self::Solid(rgb)
    }
}

impl From<Rgba> for ColorValue {
    fn from(rgba: Rgba) -> Self {
        Self::Translucent(rgba)
    }
}

fn invalid_value(s: &str) -> ColorError {
    ColorError::InvalidColorValue {
        value: s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_hex() {
        assert_eq!(
            ColorValue::parse("#abc").unwrap(),
            ColorValue::Solid(Rgb::new(0xAA, 0xBB, 0xCC))
        );
    }

    #[test]
    fn parses_rgba() {
        let value = ColorValue::parse("rgba(42, 51, 64, 0.12)").unwrap();
        assert_eq!(value, ColorValue::Translucent(Rgba::new(Rgb::new(42, 51, 64), 0.12)));
    }

    #[test]
    fn parses_rgba_without_spaces() {
        let value: ColorValue = "rgba(0,0,0,1)".parse().unwrap();
        assert_eq!(value.to_string(), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn display_matches_input_forms() {
        for s in ["#F4F5F7", "rgba(244, 245, 247, 0.72)", "rgba(0, 0, 0, 0)"] {
            assert_eq!(ColorValue::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ColorValue::parse("rgba(256, 0, 0, 0.5)").is_err());
        assert!(ColorValue::parse("rgba(0, 0, 0, 1.5)").is_err());
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "red", "rgb(1, 2, 3)", "rgba(1, 2, 3)", "#ZZZ", "rgba(-1, 0, 0, 0.5)"] {
            let err = ColorValue::parse(bad).unwrap_err();
            assert!(
                matches!(err, ColorError::InvalidColorValue { .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn flatten_solid_ignores_backdrop() {
        let ink = Rgb::new(0x13, 0x16, 0x1C);
        assert_eq!(ColorValue::Solid(ink).flatten_over(Rgb::WHITE), ink);
    }

    #[test]
    fn flatten_translucent_composites() {
        let glass = ColorValue::Translucent(Rgb::WHITE.with_alpha(0.5));
        assert_eq!(glass.flatten_over(Rgb::BLACK), Rgb::new(128, 128, 128));
        assert!(glass.is_translucent());
        assert_eq!(glass.rgb(), Rgb::WHITE);
    }
}
