//! Harmony engine — deterministic color generation around the HSL wheel.
//!
//! Each harmony takes a base color and produces exactly `count` colors. The
//! fixed-anchor harmonies (complementary, triadic, tetradic,
//! split-complementary) place their anchors at hue offsets from the base
//! with the base's saturation and lightness, then fill any remaining slots
//! with lightness variations. The sweep harmonies (analogous,
//! monochromatic) compute every slot directly from its index.
//!
//! Every slot depends only on the base and its own index, so asking for
//! more colors never changes the ones already produced.

use std::fmt;
use std::str::FromStr;

use prism_color::Color;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PaletteError, Result};

/// Hue step between neighbouring analogous colors.
const ANALOGOUS_STEP: f64 = 30.0;

/// Lightness step between neighbouring monochromatic colors.
const MONO_STEP: f64 = 0.15;

/// Monochromatic lightness is kept inside this band.
const MONO_MIN_LIGHTNESS: f64 = 0.1;
const MONO_MAX_LIGHTNESS: f64 = 0.9;

/// The rule used to pick related hues around the color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    /// 30° steps centred on the base.
    #[default]
    Analogous,
    /// Base and its opposite, then lighter base / darker complement.
    Complementary,
    /// 120° spacing.
    Triadic,
    /// 90° spacing.
    Tetradic,
    /// Base plus the two neighbours of its complement (±30°).
    SplitComplementary,
    /// Single hue, stepped lightness.
    Monochromatic,
}

impl HarmonyType {
    /// Kebab-case tag of this harmony.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "split-complementary",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Parse a harmony from its tag (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|h| h.name() == lower).copied()
    }

    /// All harmony types, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Analogous,
            Self::Complementary,
            Self::Triadic,
            Self::Tetradic,
            Self::SplitComplementary,
            Self::Monochromatic,
        ]
    }

    /// Hue offsets of the fixed anchors, in output order. Empty for the
    /// sweep harmonies, whose positions depend on the slot index alone.
    #[must_use]
    pub const fn anchor_offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[0.0, 180.0],
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            Self::SplitComplementary => &[0.0, 150.0, 210.0],
            Self::Analogous | Self::Monochromatic => &[],
        }
    }

    /// Generate `count` colors from `base`. See [`generate`].
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidArgument`] when `count` is zero.
    pub fn generate(self, base: Color, count: usize) -> Result<Vec<Color>> {
        generate(base, self, count)
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyType {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
            .ok_or_else(|| PaletteError::InvalidArgument(format!("unknown harmony type '{s}'")))
    }
}

/// Generate exactly `count` colors from `base` using `harmony`.
///
/// The first color of every fixed-anchor harmony is `base` itself.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidArgument`] when `count` is zero.
pub fn generate(base: Color, harmony: HarmonyType, count: usize) -> Result<Vec<Color>> {
    if count == 0 {
        return Err(PaletteError::InvalidArgument(
            "harmony color count must be at least 1".to_string(),
        ));
    }

    let (hue, sat, light) = base.hsl_f();
    let at = |offset: f64| Color::from_hsl(hue + offset, sat, light);

    // Fixed anchors first, with the base itself in slot 0.
    let mut colors: Vec<Color> = harmony
        .anchor_offsets()
        .iter()
        .enumerate()
        .map(|(slot, &offset)| if slot == 0 { base } else { at(offset) })
        .collect();
    let anchors = colors.clone();

    match harmony {
        HarmonyType::Analogous => colors.extend(
            (0..count).map(|i| at((i as f64).mul_add(ANALOGOUS_STEP, -2.0 * ANALOGOUS_STEP))),
        ),
        HarmonyType::Complementary => colors.extend((2..count).map(|i| {
            if i % 2 == 0 {
                base.brighten(0.5 * (i - 1) as f64)
            } else {
                anchors[1].darken(0.3 * (i - 2) as f64)
            }
        })),
        HarmonyType::Triadic => colors
            .extend((3..count).map(|i| anchors[i % 3].brighten((i - 2) as f64 * 0.3))),
        // One lighter base for a fifth slot; further slots keep climbing so
        // the output length always matches `count`.
        HarmonyType::Tetradic => {
            colors.extend((4..count).map(|i| base.brighten(0.5 * (i - 3) as f64)));
        }
        HarmonyType::SplitComplementary => {
            colors.extend((3..count).map(|i| base.brighten((i - 2) as f64 * 0.4)));
        }
        HarmonyType::Monochromatic => colors.extend((0..count).map(|i| {
            let l = (i as f64 - 2.0)
                .mul_add(MONO_STEP, light)
                .clamp(MONO_MIN_LIGHTNESS, MONO_MAX_LIGHTNESS);
            Color::from_hsl(hue, sat, l)
        })),
    }

    colors.truncate(count);
    debug!(%harmony, %base, count, "generated harmony");
    Ok(colors)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
