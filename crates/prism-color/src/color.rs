// SPDX-License-Identifier: MIT
//
// prism color model — one color, three synchronized views.
//
// Single-character variable names (r, g, b, h, s, l, p, q) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// A `Color` is built exactly once from a single representation (hex, 8-bit
// RGB, or fractional HSL) and the other views are derived from the 8-bit
// RGB triple. Nothing is stored twice in a way that could drift: the RGB
// triple is the source of truth, the integer HSL view is computed from it
// at construction, and the hex string is formatted on demand.
//
// Conversion pipeline:
//
//   hex ──parse──▶ RGB (u8) ──▶ HSL (f64, exact) ──round──▶ HSL (integers)
//   HSL (f64) ──▶ RGB (f64) ──round──▶ RGB (u8) ──▶ …
//
// Every lightness/saturation operation works on the exact fractional HSL
// of the 8-bit color and re-enters through `from_hsl`, which clamps. No
// operation can produce NaN or an out-of-range channel.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// How far one unit of `brighten`/`darken`/`saturate` moves the normalized
/// lightness or saturation. Matches the "one step is 18 points" scale used
/// by chroma-style color APIs.
pub const ADJUST_STEP: f64 = 0.18;

// ─── Channel views ───────────────────────────────────────────────────────────

/// 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Integer HSL view: hue in whole degrees [0, 360), saturation and lightness
/// in whole percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable sRGB color exposing hex, RGB and HSL views.
///
/// # Examples
///
/// ```
/// use prism_color::Color;
///
/// let blue = Color::from_hex("#3B82F6").unwrap();
/// assert_eq!(blue.hex(), "#3b82f6");
/// assert_eq!(blue.rgb().r, 59);
/// assert_eq!(blue.hsl().h, 217);
///
/// let lighter = blue.brighten(1.0);
/// assert!(lighter.hsl().l > blue.hsl().l);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ColorInfo", try_from = "ColorRepr")]
pub struct Color {
    rgb: Rgb,
    hsl: Hsl,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self {
        rgb: Rgb { r: 0, g: 0, b: 0 },
        hsl: Hsl { h: 0, s: 0, l: 0 },
    };

    /// Pure white.
    pub const WHITE: Self = Self {
        rgb: Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
        hsl: Hsl { h: 0, s: 0, l: 100 },
    };

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit sRGB channels.
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let (h, s, l) = rgb_to_hsl(unit(r), unit(g), unit(b));
        Self {
            rgb: Rgb { r, g, b },
            hsl: round_hsl(h, s, l),
        }
    }

    /// Create a color from fractional HSL.
    ///
    /// - `h`: hue in degrees, any value (wrapped into [0, 360))
    /// - `s`: saturation, clamped to [0, 1]
    /// - `l`: lightness, clamped to [0, 1]
    ///
    /// Non-finite inputs are treated as 0.
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = normalize_hue(finite_or_zero(h));
        let s = finite_or_zero(s).clamp(0.0, 1.0);
        let l = finite_or_zero(l).clamp(0.0, 1.0);
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self::from_rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Parse a `#RRGGBB` hex string (the `#` is optional, digits are
    /// case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for anything that is not exactly
    /// six hex digits.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidFormat {
            input: s.to_string(),
        })
    }

    /// A uniformly random color drawn from `rng`.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let [_, r, g, b] = rng.gen_range(0..=0x00FF_FFFFu32).to_be_bytes();
        Self::from_rgb(r, g, b)
    }

    /// A uniformly random color from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    // ─── Views ───────────────────────────────────────────────────────────

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn hex(self) -> String {
        let Rgb { r, g, b } = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// 8-bit channel view.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.rgb
    }

    /// Rounded integer HSL view.
    #[inline]
    #[must_use]
    pub const fn hsl(self) -> Hsl {
        self.hsl
    }

    /// Exact fractional HSL of the 8-bit color: hue in degrees [0, 360),
    /// saturation and lightness in [0, 1]. Achromatic colors report hue 0.
    #[must_use]
    pub fn hsl_f(self) -> (f64, f64, f64) {
        let Rgb { r, g, b } = self.rgb;
        rgb_to_hsl(unit(r), unit(g), unit(b))
    }

    /// Hue in degrees [0, 360).
    #[must_use]
    pub fn hue(self) -> f64 {
        self.hsl_f().0
    }

    /// Saturation in [0, 1].
    #[must_use]
    pub fn saturation(self) -> f64 {
        self.hsl_f().1
    }

    /// Lightness in [0, 1].
    #[must_use]
    pub fn lightness(self) -> f64 {
        self.hsl_f().2
    }

    /// Whether the color has no hue (all three channels equal).
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.rgb.r == self.rgb.g && self.rgb.g == self.rgb.b
    }

    /// WCAG 2.1 relative luminance, in [0, 1].
    ///
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let Rgb { r, g, b } = self.rgb;
        let r_lin = srgb_to_linear(unit(r));
        let g_lin = srgb_to_linear(unit(g));
        let b_lin = srgb_to_linear(unit(b));
        0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
    }

    // ─── HSL Operations ──────────────────────────────────────────────────
    //
    // All of these keep hue and saturation (or lightness) fixed and move a
    // single coordinate, clamped to its valid range.

    /// Raise lightness by `amount` steps of [`ADJUST_STEP`]. Negative
    /// amounts darken.
    #[must_use]
    pub fn brighten(self, amount: f64) -> Self {
        let (h, s, l) = self.hsl_f();
        Self::from_hsl(h, s, ADJUST_STEP.mul_add(amount, l))
    }

    /// Lower lightness by `amount` steps of [`ADJUST_STEP`].
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.brighten(-amount)
    }

    /// Raise saturation by `amount` steps of [`ADJUST_STEP`]. Negative
    /// amounts desaturate.
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        let (h, s, l) = self.hsl_f();
        Self::from_hsl(h, ADJUST_STEP.mul_add(amount, s), l)
    }

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        let (h, s, l) = self.hsl_f();
        Self::from_hsl(h + degrees, s, l)
    }

    /// Replace lightness with an absolute value (clamped to [0, 1]).
    #[must_use]
    pub fn with_lightness(self, lightness: f64) -> Self {
        let (h, s, _) = self.hsl_f();
        Self::from_hsl(h, s, lightness)
    }

    /// The color 180° around the wheel.
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_hex(s)
    }
}

// ─── Serialized Form ─────────────────────────────────────────────────────────

/// The serialized shape of a color: all three views side by side, the way
/// exporters and the web front end consume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl From<Color> for ColorInfo {
    fn from(color: Color) -> Self {
        Self {
            hex: color.hex(),
            rgb: color.rgb,
            hsl: color.hsl,
        }
    }
}

/// Accepted input shapes: a bare hex string, or an object whose `hex`
/// field is authoritative (other fields are ignored and re-derived).
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Info { hex: String },
}

impl TryFrom<ColorRepr> for Color {
    type Error = ColorError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(hex) | ColorRepr::Info { hex } => Self::from_hex(&hex),
        }
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────
//
// Standard sRGB ↔ HSL formulas. All inputs and outputs are in [0, 1] except
// hue, which is in degrees.

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Convert sRGB (0.0–1.0) to HSL (degrees, 0.0–1.0, 0.0–1.0).
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d <= f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let s = if l < 0.5 { d / (max + min) } else { d / (2.0 - max - min) };

    let h = if (max - r).abs() <= f64::EPSILON {
        (g - b) / d
    } else if (max - g).abs() <= f64::EPSILON {
        2.0 + (b - r) / d
    } else {
        4.0 + (r - g) / d
    };

    (normalize_hue(h * 60.0), s, l)
}

/// Convert HSL (degrees, 0.0–1.0, 0.0–1.0) to sRGB (0.0–1.0).
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s <= f64::EPSILON {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let p = 2.0f64.mul_add(l, -q);
    let hk = normalize_hue(h) / 360.0;

    (
        hue_to_channel(p, q, hk + 1.0 / 3.0),
        hue_to_channel(p, q, hk),
        hue_to_channel(p, q, hk - 1.0 / 3.0),
    )
}

#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * 6.0).mul_add(2.0 / 3.0 - t, p)
    } else {
        p
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn unit(c: u8) -> f64 {
    f64::from(c) / 255.0
}

#[inline]
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_hsl(h: f64, s: f64, l: f64) -> Hsl {
    Hsl {
        h: (h.round() as u16) % 360,
        s: (s * 100.0).round().clamp(0.0, 100.0) as u8,
        l: (l * 100.0).round().clamp(0.0, 100.0) as u8,
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse `#RRGGBB` / `RRGGBB`.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Color::from_rgb(r, g, b))
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

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    // ── Parsing ─────────────────────────────────────────────────────

    #[test]
    fn parse_with_hash() {
        let c = hex("#3B82F6");
        assert_eq!(c.rgb(), Rgb {
            r: 59,
            g: 130,
            b: 246,
        });
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(hex("3b82f6"), hex("#3B82F6"));
        assert_eq!("3B82F6".parse::<Color>().unwrap(), hex("#3b82f6"));
        // Only a single leading `#` is optional.
        assert!(Color::from_hex("##3b82f6").is_err());
        assert!(Color::from_hex("3b82f6#").is_err());
    }

    #[test]
    fn hex_is_lowercase_canonical() {
        assert_eq!(hex("#ABCDEF").hex(), "#abcdef");
    }

    #[test]
    fn parse_rejects_short_form() {
        let err = Color::from_hex("#fff").unwrap_err();
        assert_eq!(err, ColorError::InvalidFormat {
            input: "#fff".to_string(),
        });
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        assert!(Color::from_hex("#12345g").is_err());
        assert!(Color::from_hex("#1234567").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("##123456").is_err());
    }

    #[test]
    fn parse_rejects_multibyte_input() {
        // Six bytes but not six hex digits.
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn from_str_delegates() {
        let c: Color = "#10b981".parse().unwrap();
        assert_eq!(c.hex(), "#10b981");
    }

    // ── HSL view ────────────────────────────────────────────────────

    #[test]
    fn hsl_of_primary_blue() {
        let c = hex("#3B82F6");
        assert_eq!(c.hsl(), Hsl {
            h: 217,
            s: 91,
            l: 60,
        });
    }

    #[test]
    fn hsl_of_pure_red() {
        assert_eq!(hex("#ff0000").hsl(), Hsl {
            h: 0,
            s: 100,
            l: 50,
        });
    }

    #[test]
    fn hsl_of_gray_has_zero_hue() {
        let c = hex("#808080");
        assert_eq!(c.hsl().h, 0);
        assert_eq!(c.hsl().s, 0);
        assert!(c.is_achromatic());
    }

    #[test]
    fn black_and_white_constants_match_parsing() {
        assert_eq!(hex("#000000"), Color::BLACK);
        assert_eq!(hex("#ffffff"), Color::WHITE);
    }

    #[test]
    fn hue_near_360_wraps_to_zero() {
        // Hue ≈ 359.8°, rounds to 360 and must wrap.
        let c = Color::from_rgb(255, 0, 1);
        assert!(c.hsl().h < 360);
    }

    #[test]
    fn from_hsl_matches_known_rgb() {
        let c = Color::from_hsl(120.0, 1.0, 0.5);
        assert_eq!(c.rgb(), Rgb { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn from_hsl_wraps_negative_hue() {
        assert_eq!(Color::from_hsl(-240.0, 1.0, 0.5), Color::from_hsl(120.0, 1.0, 0.5));
    }

    #[test]
    fn from_hsl_clamps_out_of_range() {
        assert_eq!(Color::from_hsl(0.0, 2.0, 1.5), Color::WHITE);
        assert_eq!(Color::from_hsl(0.0, -1.0, -0.5), Color::BLACK);
    }

    #[test]
    fn from_hsl_treats_nan_as_zero() {
        let c = Color::from_hsl(f64::NAN, f64::NAN, f64::NAN);
        assert_eq!(c, Color::BLACK);
    }

    // ── Operations ──────────────────────────────────────────────────

    #[test]
    fn brighten_raises_lightness() {
        let c = hex("#3B82F6");
        let b = c.brighten(0.5);
        assert!(approx_eq(b.lightness(), c.lightness() + 0.09, 0.01));
        assert!(approx_eq(b.hue(), c.hue(), 1.0));
    }

    #[test]
    fn darken_lowers_lightness() {
        let c = hex("#3B82F6");
        assert!(c.darken(1.0).lightness() < c.lightness());
    }

    #[test]
    fn brighten_clamps_to_white() {
        assert_eq!(hex("#3B82F6").brighten(100.0), Color::WHITE);
    }

    #[test]
    fn darken_clamps_to_black() {
        assert_eq!(hex("#3B82F6").darken(100.0), Color::BLACK);
    }

    #[test]
    fn saturate_raises_saturation() {
        let c = hex("#7f9fbf");
        assert!(c.saturate(1.0).saturation() > c.saturation());
        assert!(c.saturate(-1.0).saturation() < c.saturation());
    }

    #[test]
    fn saturate_clamps() {
        let c = hex("#3B82F6").saturate(-100.0);
        assert!(c.is_achromatic());
    }

    #[test]
    fn shift_hue_wraps() {
        let c = hex("#ff0000").shift_hue(370.0);
        assert_eq!(c.hsl().h, 10);
    }

    #[test]
    fn complement_is_180_degrees() {
        assert_eq!(hex("#ff0000").complement().hex(), "#00ffff");
    }

    #[test]
    fn with_lightness_sets_absolute() {
        let c = hex("#ff0000").with_lightness(0.25);
        assert_eq!(c.hsl().l, 25);
        assert_eq!(c.hsl().h, 0);
    }

    // ── Luminance ───────────────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(Color::BLACK.relative_luminance(), 0.0, 1e-9));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(Color::WHITE.relative_luminance(), 1.0, 1e-9));
    }

    #[test]
    fn luminance_pure_green() {
        assert!(approx_eq(hex("#00ff00").relative_luminance(), 0.7152, 1e-4));
    }

    // ── Random ──────────────────────────────────────────────────────

    #[test]
    fn random_with_seeded_rng_is_reproducible() {
        let a = Color::random_with(&mut StdRng::seed_from_u64(7));
        let b = Color::random_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn random_produces_parseable_hex() {
        let c = Color::random();
        assert_eq!(Color::from_hex(&c.hex()).unwrap(), c);
    }

    // ── Formatting & serde ──────────────────────────────────────────

    #[test]
    fn display_is_hex() {
        assert_eq!(hex("#F59E0B").to_string(), "#f59e0b");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", hex("#8B5CF6")), "Color(#8b5cf6)");
    }

    #[test]
    fn serializes_all_three_views() {
        let json = serde_json::to_value(hex("#ff0000")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hex": "#ff0000",
                "rgb": { "r": 255, "g": 0, "b": 0 },
                "hsl": { "h": 0, "s": 100, "l": 50 },
            })
        );
    }

    #[test]
    fn deserializes_from_hex_string() {
        let c: Color = serde_json::from_str("\"#10B981\"").unwrap();
        assert_eq!(c.hex(), "#10b981");
    }

    #[test]
    fn deserializes_from_object_using_hex() {
        let c: Color = serde_json::from_str(
            r##"{"hex":"#ef4444","rgb":{"r":0,"g":0,"b":0},"hsl":{"h":0,"s":0,"l":0}}"##,
        )
        .unwrap();
        assert_eq!(c.hex(), "#ef4444");
    }

    #[test]
    fn deserialize_rejects_bad_hex() {
        assert!(serde_json::from_str::<Color>("\"#zzzzzz\"").is_err());
    }

    // ── Properties ──────────────────────────────────────────────────

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trips(r: u8, g: u8, b: u8) {
                let c = Color::from_rgb(r, g, b);
                prop_assert_eq!(Color::from_hex(&c.hex()).unwrap(), c);
            }

            #[test]
            fn rgb_hsl_rgb_within_one(r: u8, g: u8, b: u8) {
                let c = Color::from_rgb(r, g, b);
                let (h, s, l) = c.hsl_f();
                let back = Color::from_hsl(h, s, l).rgb();
                prop_assert!((i16::from(back.r) - i16::from(r)).abs() <= 1);
                prop_assert!((i16::from(back.g) - i16::from(g)).abs() <= 1);
                prop_assert!((i16::from(back.b) - i16::from(b)).abs() <= 1);
            }

            #[test]
            fn hsl_view_in_range(r: u8, g: u8, b: u8) {
                let hsl = Color::from_rgb(r, g, b).hsl();
                prop_assert!(hsl.h < 360);
                prop_assert!(hsl.s <= 100);
                prop_assert!(hsl.l <= 100);
            }

            #[test]
            fn normalize_hue_always_in_range(h in -1000.0_f64..1000.0) {
                let n = normalize_hue(h);
                prop_assert!((0.0..360.0).contains(&n), "normalize_hue({h}) = {n}");
            }

            #[test]
            fn brighten_never_leaves_range(r: u8, g: u8, b: u8, amount in -20.0_f64..20.0) {
                let l = Color::from_rgb(r, g, b).brighten(amount).lightness();
                prop_assert!((0.0..=1.0).contains(&l));
            }
        }
    }
}
