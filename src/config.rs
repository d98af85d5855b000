// SPDX-License-Identifier: MIT
//
// User configuration: `prism.toml` in the platform config directory.
//
//   Linux:   ~/.config/prism/prism.toml
//   macOS:   ~/Library/Application Support/prism/prism.toml
//   Windows: %APPDATA%\prism\prism.toml
//
// Every field has a default, so a missing file, a missing table or a
// missing key all fall back cleanly. The suggestion API key is never stored
// here; it only comes from the environment.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use prism_color::Color;
use prism_palette::export::ExportFormat;
use prism_palette::harmony::HarmonyType;
use prism_palette::palette::{DEFAULT_COUNT, PaletteRequest};
use prism_palette::suggest::{ENV_DEPLOYMENT, ENV_ENDPOINT, SuggestionConfig};

const APP_DIR: &str = "prism";
const FILE_NAME: &str = "prism.toml";

/// Defaults for `prism generate` and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    /// Hex base color.
    pub base_color: String,
    pub harmony: HarmonyType,
    pub count: usize,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            base_color: PaletteRequest::default().base_color.hex(),
            harmony: HarmonyType::default(),
            count: DEFAULT_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportDefaults {
    pub format: ExportFormat,
}

/// Non-secret suggestion service settings. Environment variables win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: GenerationDefaults,
    pub export: ExportDefaults,
    pub suggestions: SuggestionSettings,
}

impl Config {
    /// Platform config directory for prism.
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR))
    }

    /// Full path of `prism.toml`.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(FILE_NAME))
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write via a temp file and rename so a crash never leaves half a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }
        let content = self.to_toml()?;
        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp config file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    pub fn validate(&self) -> Result<()> {
        self.base_color()?;
        if self.defaults.count == 0 {
            bail!("defaults.count must be at least 1");
        }
        Ok(())
    }

    pub fn base_color(&self) -> Result<Color> {
        Color::from_hex(&self.defaults.base_color).context("Invalid defaults.base_color")
    }

    /// The generation request these defaults describe.
    pub fn request(&self) -> Result<PaletteRequest> {
        Ok(PaletteRequest::new(self.base_color()?, self.defaults.harmony, self.defaults.count))
    }

    /// Suggestion settings: environment variables first, then this file.
    pub fn suggestion_config(&self) -> SuggestionConfig {
        self.suggestion_config_with(|key| std::env::var(key).ok())
    }

    fn suggestion_config_with(&self, env: impl Fn(&str) -> Option<String>) -> SuggestionConfig {
        SuggestionConfig::from_lookup(|key| {
            env(key).filter(|v| !v.trim().is_empty()).or_else(|| match key {
                ENV_ENDPOINT => self.suggestions.endpoint.clone(),
                ENV_DEPLOYMENT => self.suggestions.deployment.clone(),
                _ => None,
            })
        })
    }
}
