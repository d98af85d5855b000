// SPDX-License-Identifier: MIT
//
// prism-color — the color model underneath prism.
//
// A deliberately small sRGB/HSL model: hex parsing, 8-bit RGB, integer and
// fractional HSL, WCAG relative luminance, and the handful of lightness,
// saturation and hue operations the palette engine builds on. There is no
// perceptual color space here and no gamut mapping; every value is an
// ordinary 24-bit sRGB color.

pub mod color;
pub mod error;

pub use color::{Color, ColorInfo, Hsl, Rgb};
pub use error::ColorError;
