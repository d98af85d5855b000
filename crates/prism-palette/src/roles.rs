//! Brand-preview role assignment.
//!
//! Maps palette colors onto the semantic slots a brand mockup paints with.
//! The first three palette colors drive primary/secondary/accent; the
//! neutral roles come from the preview theme.

use prism_color::Color;
use serde::{Deserialize, Serialize};

/// Semantic color slot in a brand preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrandRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Text,
    TextSecondary,
}

impl BrandRole {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Primary,
            Self::Secondary,
            Self::Accent,
            Self::Background,
            Self::Surface,
            Self::Text,
            Self::TextSecondary,
        ]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary Color",
            Self::Secondary => "Secondary Color",
            Self::Accent => "Accent Color",
            Self::Background => "Background",
            Self::Surface => "Surface",
            Self::Text => "Text",
            Self::TextSecondary => "Secondary Text",
        }
    }

    /// Where the role shows up in the mockup.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Primary => "Header, primary buttons",
            Self::Secondary => "Secondary buttons, accents",
            Self::Accent => "Icons, highlights",
            Self::Background => "Main background color",
            Self::Surface => "Cards, sections",
            Self::Text => "Headings and body copy",
            Self::TextSecondary => "Captions and muted copy",
        }
    }
}

/// Light or dark mockup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewTheme {
    #[default]
    Light,
    Dark,
}

/// A full role → color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    primary: Color,
    secondary: Color,
    accent: Color,
    background: Color,
    surface: Color,
    text: Color,
    text_secondary: Color,
}

// Fallbacks for palettes with fewer than three colors.
const DEFAULT_BRAND: [(u8, u8, u8); 3] = [
    (0x3b, 0x82, 0xf6),
    (0xef, 0x44, 0x44),
    (0x10, 0xb9, 0x81),
];

// (background, surface, text, text-secondary) per theme.
const LIGHT_NEUTRALS: [(u8, u8, u8); 4] =
    [(0xff, 0xff, 0xff), (0xf9, 0xfa, 0xfb), (0x11, 0x18, 0x27), (0x6b, 0x72, 0x80)];
const DARK_NEUTRALS: [(u8, u8, u8); 4] =
    [(0x1f, 0x29, 0x37), (0x37, 0x41, 0x51), (0xf9, 0xfa, 0xfb), (0xd1, 0xd5, 0xdb)];

fn swatch((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb(r, g, b)
}

impl RoleAssignment {
    /// Assign `colors` to roles for the given theme.
    #[must_use]
    pub fn from_palette(colors: &[Color], theme: PreviewTheme) -> Self {
        let neutrals = match theme {
            PreviewTheme::Light => LIGHT_NEUTRALS,
            PreviewTheme::Dark => DARK_NEUTRALS,
        };
        let [background, surface, text, text_secondary] = neutrals.map(swatch);
        let brand = |i: usize| colors.get(i).copied().unwrap_or_else(|| swatch(DEFAULT_BRAND[i]));

        Self {
            primary: brand(0),
            secondary: brand(1),
            accent: brand(2),
            background,
            surface,
            text,
            text_secondary,
        }
    }

    /// Color assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: BrandRole) -> Color {
        match role {
            BrandRole::Primary => self.primary,
            BrandRole::Secondary => self.secondary,
            BrandRole::Accent => self.accent,
            BrandRole::Background => self.background,
            BrandRole::Surface => self.surface,
            BrandRole::Text => self.text,
            BrandRole::TextSecondary => self.text_secondary,
        }
    }

    /// A copy with `role` reassigned to `color`.
    #[must_use]
    pub fn set(mut self, role: BrandRole, color: Color) -> Self {
        let slot = match role {
            BrandRole::Primary => &mut self.primary,
            BrandRole::Secondary => &mut self.secondary,
            BrandRole::Accent => &mut self.accent,
            BrandRole::Background => &mut self.background,
            BrandRole::Surface => &mut self.surface,
            BrandRole::Text => &mut self.text,
            BrandRole::TextSecondary => &mut self.text_secondary,
        };
        *slot = color;
        self
    }

    /// Every role with its color, in [`BrandRole::all`] order.
    pub fn iter(&self) -> impl Iterator<Item = (BrandRole, Color)> + '_ {
        BrandRole::all().iter().map(|&role| (role, self.get(role)))
    }
}
