//! Palette assembly — the record the preview and export layers consume.
//!
//! A [`Palette`] is built in one shot from a [`PaletteRequest`] (or from an
//! externally supplied color list) and never edited afterwards: any change
//! to the inputs produces a brand-new palette with a fresh id and
//! timestamp.

use chrono::{DateTime, Utc};
use prism_color::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adjust::{ColorAdjustment, adjust_color};
use crate::error::{PaletteError, Result};
use crate::harmony::{self, HarmonyType};
use crate::naming::generate_palette_name;

/// Colors handed out when nothing better is available.
pub const FALLBACK_COLORS: [&str; 5] = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6"];

const FALLBACK_RGB: [(u8, u8, u8); 5] = [
    (0x3b, 0x82, 0xf6),
    (0xef, 0x44, 0x44),
    (0x10, 0xb9, 0x81),
    (0xf5, 0x9e, 0x0b),
    (0x8b, 0x5c, 0xf6),
];

/// Name carried by [`Palette::fallback`].
pub const FALLBACK_NAME: &str = "Fallback Palette";

/// Number of colors generated when the caller does not say otherwise.
pub const DEFAULT_COUNT: usize = 5;

/// The generic five-color set used by fallbacks.
#[must_use]
pub fn fallback_colors() -> Vec<Color> {
    FALLBACK_RGB.iter().map(|&(r, g, b)| Color::from_rgb(r, g, b)).collect()
}

// ---------------------------------------------------------------------------
// PaletteRequest
// ---------------------------------------------------------------------------

/// Everything that determines a generated palette's colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRequest {
    pub base_color: Color,
    pub harmony: HarmonyType,
    pub count: usize,
    #[serde(default)]
    pub adjustment: ColorAdjustment,
}

impl Default for PaletteRequest {
    fn default() -> Self {
        let (r, g, b) = FALLBACK_RGB[0];
        Self {
            base_color: Color::from_rgb(r, g, b),
            harmony: HarmonyType::default(),
            count: DEFAULT_COUNT,
            adjustment: ColorAdjustment::default(),
        }
    }
}

impl PaletteRequest {
    #[must_use]
    pub fn new(base_color: Color, harmony: HarmonyType, count: usize) -> Self {
        Self {
            base_color,
            harmony,
            count,
            adjustment: ColorAdjustment::default(),
        }
    }

    #[must_use]
    pub const fn with_adjustment(self, adjustment: ColorAdjustment) -> Self {
        Self { adjustment, ..self }
    }

    /// The base color after adjustments, i.e. the color harmonies start from.
    #[must_use]
    pub fn adjusted_base(&self) -> Color {
        adjust_color(self.base_color, &self.adjustment)
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A named, timestamped list of colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    id: Uuid,
    name: String,
    colors: Vec<Color>,
    harmony_type: HarmonyType,
    base_color: String,
    created_at: DateTime<Utc>,
}

impl Palette {
    /// Adjust the base color, run the harmony, and name the result.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidArgument`] when `request.count` is zero.
    pub fn generate<R: Rng + ?Sized>(request: &PaletteRequest, rng: &mut R) -> Result<Self> {
        let base = request.adjusted_base();
        let colors = harmony::generate(base, request.harmony, request.count)?;
        let name = generate_palette_name(request.harmony, base, rng);
        Ok(Self::assemble(name, colors, request.harmony, base))
    }

    /// Wrap an externally supplied color list. The first color acts as the
    /// base for naming.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] when `colors` is empty.
    pub fn from_colors<R: Rng + ?Sized>(
        colors: Vec<Color>,
        harmony: HarmonyType,
        rng: &mut R,
    ) -> Result<Self> {
        let base = *colors.first().ok_or(PaletteError::EmptyPalette)?;
        let name = generate_palette_name(harmony, base, rng);
        Ok(Self::assemble(name, colors, harmony, base))
    }

    /// The clearly labeled generic palette used when a suggestion cannot be
    /// turned into colors.
    #[must_use]
    pub fn fallback() -> Self {
        let colors = fallback_colors();
        let base = colors[0];
        Self::assemble(FALLBACK_NAME.to_string(), colors, HarmonyType::Analogous, base)
    }

    fn assemble(name: String, colors: Vec<Color>, harmony: HarmonyType, base: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            colors,
            harmony_type: harmony,
            base_color: base.hex(),
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub const fn harmony(&self) -> HarmonyType {
        self.harmony_type
    }

    /// Hex of the (adjusted) base color.
    #[must_use]
    pub fn base_color(&self) -> &str {
        &self.base_color
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether this is the generic fallback palette.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.name == FALLBACK_NAME
    }

    /// Name turned into a file-name stem: lowercase, whitespace runs
    /// replaced by `-`.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    #[test]
    fn generate_packages_harmony() {
        let request = PaletteRequest::new(hex("#3B82F6"), HarmonyType::Triadic, 4);
        let palette = Palette::generate(&request, &mut rng()).unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.harmony(), HarmonyType::Triadic);
        assert_eq!(palette.base_color(), "#3b82f6");
        assert_eq!(
            palette.colors(),
            &harmony::generate(hex("#3B82F6"), HarmonyType::Triadic, 4).unwrap()[..]
        );
        assert!(palette.name().ends_with("Azure Trio"), "{}", palette.name());
    }

    #[test]
    fn generate_applies_adjustment_first() {
        let request = PaletteRequest::new(hex("#ff0000"), HarmonyType::Complementary, 2)
            .with_adjustment(ColorAdjustment::hue(120.0));
        let palette = Palette::generate(&request, &mut rng()).unwrap();
        assert_eq!(palette.base_color(), "#00ff00");
        assert_eq!(palette.colors()[0].hex(), "#00ff00");
        assert_eq!(palette.colors()[1].hex(), "#ff00ff");
    }

    #[test]
    fn zero_count_fails_fast() {
        let request = PaletteRequest::new(hex("#3B82F6"), HarmonyType::Analogous, 0);
        assert!(matches!(
            Palette::generate(&request, &mut rng()),
            Err(PaletteError::InvalidArgument(_))
        ));
    }

    #[test]
    fn every_generation_is_a_new_palette() {
        let request = PaletteRequest::default();
        let a = Palette::generate(&request, &mut rng()).unwrap();
        let b = Palette::generate(&request, &mut rng()).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.colors(), b.colors());
        assert!(b.created_at() >= a.created_at());
    }

    #[test]
    fn from_colors_names_after_first_color() {
        let colors = vec![hex("#10B981"), hex("#F59E0B")];
        let palette = Palette::from_colors(colors, HarmonyType::Complementary, &mut rng()).unwrap();
        assert_eq!(palette.base_color(), "#10b981");
        assert!(palette.name().ends_with(" Contrast"));
    }

    #[test]
    fn from_colors_rejects_empty() {
        let err = Palette::from_colors(Vec::new(), HarmonyType::Analogous, &mut rng()).unwrap_err();
        assert!(matches!(err, PaletteError::EmptyPalette));
    }

    #[test]
    fn fallback_is_labeled() {
        let palette = Palette::fallback();
        assert!(palette.is_fallback());
        let hexes: Vec<String> = palette.colors().iter().map(|c| c.hex()).collect();
        assert_eq!(hexes, FALLBACK_COLORS);
    }

    #[test]
    fn slug_is_file_friendly() {
        let palette = Palette::fallback();
        assert_eq!(palette.slug(), "fallback-palette");
    }

    #[test]
    fn default_request() {
        let request = PaletteRequest::default();
        assert_eq!(request.base_color, hex("#3B82F6"));
        assert_eq!(request.harmony, HarmonyType::Analogous);
        assert_eq!(request.count, DEFAULT_COUNT);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let palette = Palette::fallback();
        let json = serde_json::to_value(&palette).unwrap();
        assert_eq!(json["harmonyType"], "analogous");
        assert_eq!(json["baseColor"], "#3b82f6");
        assert_eq!(json["colors"][1]["hex"], "#ef4444");
        assert!(json["createdAt"].is_string());
        assert!(json["id"].is_string());
    }

    #[test]
    fn deserializes_what_it_serializes() {
        let palette = Palette::fallback();
        let json = serde_json::to_string(&palette).unwrap();
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }
}
