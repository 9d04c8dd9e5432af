// SPDX-License-Identifier: MIT
//
// swatch-color: color math for the swatch theme engine.
//
// Everything here is pure and allocation-light: hex parsing and
// formatting, per-channel sRGB mixing, alpha attachment and composition,
// and the WCAG relative-luminance / contrast-ratio formulas. The theme
// crate builds every semantic token out of these operations, so they are
// kept small and exactly specified: a mix rounds to 8-bit
// channels immediately, and contrast is symmetric bit-for-bit.

pub mod color;
pub mod error;
pub mod luminance;
pub mod value;

pub use color::{Rgb, Rgba, hex_to_rgb, mix_hex, normalize_hex, rgb_to_hex, with_alpha};
pub use error::ColorError;
pub use luminance::{
    WCAG_AA, WCAG_AA_LARGE, WCAG_AAA, channel_to_linear, contrast_ratio, contrast_ratio_hex,
    meets_wcag_aa, relative_luminance,
};
pub use value::ColorValue;
