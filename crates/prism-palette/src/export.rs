//! Palette export — text renderings for design tools and stylesheets.

use std::fmt;
use std::str::FromStr;

use prism_color::{Color, Hsl, Rgb};
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::harmony::HarmonyType;
use crate::palette::Palette;

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Json,
    Tailwind,
    Figma,
    Ase,
}

impl ExportFormat {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Scss, Self::Json, Self::Tailwind, Self::Figma, Self::Ase]
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS Variables",
            Self::Scss => "SCSS Variables",
            Self::Json => "JSON",
            Self::Tailwind => "Tailwind Config",
            Self::Figma => "Figma Plugin",
            Self::Ase => "Adobe ASE",
        }
    }

    /// Short lowercase tag, as accepted by [`FromStr`].
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
            Self::Tailwind => "tailwind",
            Self::Figma => "figma",
            Self::Ase => "ase",
        }
    }

    /// Download file name for `palette` in this format.
    #[must_use]
    pub fn file_name(self, palette: &Palette) -> String {
        let slug = palette.slug();
        match self {
            Self::Css => format!("{slug}.css"),
            Self::Scss => format!("{slug}.scss"),
            Self::Json => format!("{slug}.json"),
            Self::Tailwind => "tailwind.config.js".to_string(),
            Self::Figma => format!("{slug}-figma.json"),
            Self::Ase => format!("{slug}.ase"),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|f| f.tag() == lower)
            .copied()
            .ok_or_else(|| PaletteError::InvalidArgument(format!("unknown export format '{s}'")))
    }
}

// JSON document shapes.

#[derive(Serialize)]
struct NamedColor {
    name: String,
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
}

impl NamedColor {
    fn new(name: String, color: Color) -> Self {
        Self {
            name,
            hex: color.hex(),
            rgb: color.rgb(),
            hsl: color.hsl(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    name: &'a str,
    harmony_type: HarmonyType,
    colors: Vec<NamedColor>,
}

#[derive(Serialize)]
struct FigmaExport<'a> {
    name: &'a str,
    colors: Vec<NamedColor>,
}

/// Render `palette` in `format`. Color indices in the output are 1-based.
///
/// # Errors
///
/// [`PaletteError::EmptyPalette`] for a palette without colors, or
/// [`PaletteError::Json`] if a JSON document cannot be serialized.
pub fn export(palette: &Palette, format: ExportFormat) -> Result<String> {
    if palette.is_empty() {
        return Err(PaletteError::EmptyPalette);
    }
    let numbered = || palette.colors().iter().copied().enumerate().map(|(i, c)| (i + 1, c));

    let out = match format {
        ExportFormat::Css => {
            let vars: Vec<String> =
                numbered().map(|(n, c)| format!("  --color-{n}: {};", c.hex())).collect();
            format!(":root {{\n{}\n}}", vars.join("\n"))
        }
        ExportFormat::Scss => numbered()
            .map(|(n, c)| format!("$color-{n}: {};", c.hex()))
            .collect::<Vec<_>>()
            .join("\n"),
        ExportFormat::Json => serde_json::to_string_pretty(&JsonExport {
            name: palette.name(),
            harmony_type: palette.harmony(),
            colors: numbered().map(|(n, c)| NamedColor::new(format!("color-{n}"), c)).collect(),
        })?,
        ExportFormat::Tailwind => {
            let entries: Vec<String> = numbered()
                .map(|(n, c)| format!("        'brand-{n}': '{}',", c.hex()))
                .collect();
            format!(
                "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n{}\n      }}\n    }}\n  }}\n}}",
                entries.join("\n")
            )
        }
        ExportFormat::Figma => serde_json::to_string_pretty(&FigmaExport {
            name: palette.name(),
            colors: numbered()
                .map(|(n, c)| NamedColor::new(format!("Brand Color {n}"), c))
                .collect(),
        })?,
        ExportFormat::Ase => numbered()
            .map(|(n, c)| {
                let Rgb { r, g, b } = c.rgb();
                format!("Color {n}\t{}\t{r}\t{g}\t{b}", c.hex())
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}
