//! Data side of the AI color-suggestion collaborator.
//!
//! The engine never talks to the network itself. It builds prompts from a
//! [`BrandStrategy`], hands them to whatever [`SuggestionClient`] the caller
//! injects, and turns the raw completion text back into an [`AiAnalysis`].
//!
//! ```text
//!   BrandStrategy ──► suggestion_prompt ──► SuggestionClient::complete
//!                                                   │
//!   AiAnalysis ◄──── parse_analysis ◄───────── raw text
//! ```

use std::fmt;
use std::sync::LazyLock;

use prism_color::Color;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::palette::FALLBACK_COLORS;

/// Deployment used when none is configured.
pub const DEFAULT_DEPLOYMENT: &str = "gpt-4";
/// Service API version sent with every request.
pub const DEFAULT_API_VERSION: &str = "2024-02-15-preview";

pub const ENV_API_KEY: &str = "PRISM_AI_API_KEY";
pub const ENV_ENDPOINT: &str = "PRISM_AI_ENDPOINT";
pub const ENV_DEPLOYMENT: &str = "PRISM_AI_DEPLOYMENT";

/// Most colors taken from an enhancement response.
pub const MAX_ENHANCED_COLORS: usize = 5;

/// Role text sent as the system message of a suggestion request.
pub const SYSTEM_PROMPT: &str = "You are an expert color psychologist and brand designer with deep \
knowledge of color theory, cultural color meanings, and psychological effects of colors on human \
behavior. You understand how colors influence brand perception, consumer behavior, and emotional \
responses across different industries and demographics.";

static JSON_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON block pattern is valid"));
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("hex color pattern is valid"));

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// What the brand is about; the input to every prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStrategy {
    pub brand_name: String,
    pub industry: String,
    pub target_audience: String,
    #[serde(default)]
    pub brand_personality: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub goals: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub colors: Vec<String>,
    #[serde(default)]
    pub reason: String,
}

/// The palette part of an analysis. Colors and harmony are kept as the
/// service sent them; turning them into engine types is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiColorSuggestion {
    pub colors: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub harmony_type: String,
    #[serde(default)]
    pub psychology_explanation: String,
    #[serde(default)]
    pub brand_alignment: String,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPsychology {
    pub color: String,
    #[serde(default)]
    pub emotions: Vec<String>,
    #[serde(default)]
    pub associations: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub cultural_meaning: String,
}

/// A complete suggestion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub suggestion: AiColorSuggestion,
    pub psychology: Vec<ColorPsychology>,
    /// Self-reported confidence, 0–100.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl AiAnalysis {
    /// Whether this is [`fallback_analysis`] rather than a service answer.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.suggestion.reasoning == FALLBACK_REASONING
    }
}

const FALLBACK_REASONING: &str = "AI response parsing failed. Using fallback colors.";

/// Generic analysis substituted when a response cannot be used.
#[must_use]
pub fn fallback_analysis() -> AiAnalysis {
    AiAnalysis {
        suggestion: AiColorSuggestion {
            colors: FALLBACK_COLORS.iter().map(|c| c.to_uppercase()).collect(),
            reasoning: FALLBACK_REASONING.to_string(),
            harmony_type: "analogous".to_string(),
            psychology_explanation: "These colors provide a balanced, professional appearance."
                .to_string(),
            brand_alignment: "Generic professional palette suitable for most brands.".to_string(),
            alternatives: Vec::new(),
        },
        psychology: Vec::new(),
        confidence: 50.0,
        recommendations: vec!["Please try again for AI-generated suggestions.".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Why suggestions cannot be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Unavailable {
    #[error("AI suggestions unavailable: no API key (set PRISM_AI_API_KEY)")]
    MissingApiKey,
    #[error("AI suggestions unavailable: no endpoint (set PRISM_AI_ENDPOINT)")]
    MissingEndpoint,
}

/// Connection settings for the suggestion service. Passed explicitly to
/// whoever needs it; nothing reads the environment behind the caller's back.
#[derive(Clone, PartialEq, Eq)]
pub struct SuggestionConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub deployment: String,
    pub api_version: String,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            deployment: DEFAULT_DEPLOYMENT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

// The key never reaches logs.
impl fmt::Debug for SuggestionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl SuggestionConfig {
    /// Read `PRISM_AI_API_KEY`, `PRISM_AI_ENDPOINT` and `PRISM_AI_DEPLOYMENT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            api_key: get(ENV_API_KEY),
            endpoint: get(ENV_ENDPOINT),
            deployment: get(ENV_DEPLOYMENT).unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string()),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Fill the endpoint from `endpoint` when none was set.
    #[must_use]
    pub fn or_endpoint(mut self, endpoint: Option<String>) -> Self {
        if self.endpoint.is_none() {
            self.endpoint = endpoint.filter(|e| !e.trim().is_empty());
        }
        self
    }

    /// Ready to send requests, or the first missing piece.
    ///
    /// # Errors
    ///
    /// [`Unavailable::MissingApiKey`] before [`Unavailable::MissingEndpoint`].
    pub const fn available(&self) -> std::result::Result<(), Unavailable> {
        if self.api_key.is_none() {
            return Err(Unavailable::MissingApiKey);
        }
        if self.endpoint.is_none() {
            return Err(Unavailable::MissingEndpoint);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Transport seam
// ---------------------------------------------------------------------------

/// Sends one chat completion and returns the text of the first choice.
pub trait SuggestionClient {
    /// # Errors
    ///
    /// Any transport failure, or an empty answer, as
    /// [`PaletteError::Suggestion`].
    fn complete(&self, config: &SuggestionConfig, system: Option<&str>, user: &str)
    -> Result<String>;
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

/// The full analysis request for `strategy`.
#[must_use]
pub fn suggestion_prompt(strategy: &BrandStrategy) -> String {
    let mut out = String::from(
        "Create a comprehensive color palette analysis for a brand \
         with the following strategy:\n\n",
    );
    out.push_str(&format!("Brand Name: {}\n", strategy.brand_name));
    out.push_str(&format!("Industry: {}\n", strategy.industry));
    out.push_str(&format!("Target Audience: {}\n", strategy.target_audience));
    out.push_str(&format!("Brand Personality: {}\n", strategy.brand_personality.join(", ")));
    out.push_str(&format!("Core Values: {}\n", strategy.values.join(", ")));
    out.push_str(&format!("Goals: {}\n", strategy.goals));
    if let Some(competitors) = strategy.competitors.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&format!("Competitors: {competitors}\n"));
    }
    if let Some(context) = strategy.additional_context.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&format!("Additional Context: {context}\n"));
    }
    out.push_str(RESPONSE_SCHEMA);
    out
}

const RESPONSE_SCHEMA: &str = r##"
Please provide a detailed analysis in the following JSON format:
{
  "suggestion": {
    "colors": ["#hex1", "#hex2", "#hex3", "#hex4", "#hex5"],
    "reasoning": "Detailed explanation of why these colors work for this brand",
    "harmonyType": "analogous|complementary|triadic|tetradic|split-complementary|monochromatic",
    "psychologyExplanation": "How these colors psychologically impact the target audience",
    "brandAlignment": "How these colors align with brand values and personality",
    "alternatives": [
      { "colors": ["#alt1", "#alt2", "#alt3"], "reason": "Alternative option explanation" }
    ]
  },
  "psychology": [
    {
      "color": "#hex1",
      "emotions": ["emotion1", "emotion2"],
      "associations": ["association1", "association2"],
      "industries": ["industry1", "industry2"],
      "culturalMeaning": "Cultural significance and meaning"
    }
  ],
  "confidence": 85,
  "recommendations": ["Specific recommendation 1", "Specific recommendation 2"]
}

Consider:
1. Color psychology and emotional impact
2. Industry standards and expectations
3. Target audience preferences and cultural context
4. Brand personality and values alignment
5. Accessibility and contrast requirements
6. Current design trends while maintaining timelessness
7. Competitive differentiation
8. Cross-cultural color meanings if applicable

Ensure the palette is professional, cohesive, and strategically sound.
"##;

/// Request for 3–5 improved colors based on an existing palette.
#[must_use]
pub fn enhancement_prompt(colors: &[Color], strategy: &BrandStrategy) -> String {
    let current: Vec<String> = colors.iter().map(|c| c.hex()).collect();
    format!(
        "As a color expert, analyze this existing color palette and suggest improvements based on \
the brand strategy:\n\n\
Current Colors: {}\n\n\
Brand Strategy:\n\
- Brand: {}\n\
- Industry: {}\n\
- Target Audience: {}\n\
- Personality: {}\n\
- Values: {}\n\n\
Please suggest 3-5 improved colors that:\n\
1. Maintain the overall aesthetic but better align with the brand\n\
2. Consider color psychology for the target audience\n\
3. Ensure good contrast and accessibility\n\
4. Follow color harmony principles\n\n\
Respond with only the hex color codes separated by commas (e.g., #FF5733, #33FF57, #3357FF).\n",
        current.join(", "),
        strategy.brand_name,
        strategy.industry,
        strategy.target_audience,
        strategy.brand_personality.join(", "),
        strategy.values.join(", "),
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parse a completion into an analysis.
///
/// Surrounding prose and code fences are tolerated: the text from the
/// first `{` to the last `}` is taken as the JSON document.
///
/// # Errors
///
/// [`PaletteError::Suggestion`] when there is no JSON block or it does not
/// have the analysis shape (`suggestion.colors` and `psychology` are
/// required).
pub fn parse_analysis(content: &str) -> Result<AiAnalysis> {
    let block = JSON_BLOCK
        .find(content)
        .ok_or_else(|| PaletteError::Suggestion("no JSON object in response".to_string()))?;
    serde_json::from_str(block.as_str())
        .map_err(|e| PaletteError::Suggestion(format!("invalid analysis structure: {e}")))
}

/// Up to [`MAX_ENHANCED_COLORS`] `#RRGGBB` codes found in `content`, in
/// order of appearance.
#[must_use]
pub fn extract_hex_colors(content: &str) -> Vec<Color> {
    HEX_COLOR
        .find_iter(content)
        .filter_map(|m| Color::from_hex(m.as_str()).ok())
        .take(MAX_ENHANCED_COLORS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strategy() -> BrandStrategy {
        BrandStrategy {
            brand_name: "Acme".to_string(),
            industry: "Fintech".to_string(),
            target_audience: "Young professionals".to_string(),
            brand_personality: vec!["Trustworthy".to_string(), "Modern".to_string()],
            values: vec!["Security".to_string(), "Clarity".to_string()],
            goals: "Grow savings adoption".to_string(),
            competitors: None,
            additional_context: Some("Mobile first".to_string()),
        }
    }

    const RESPONSE: &str = r##"Here is your palette:
```json
{
  "suggestion": {
    "colors": ["#1E3A8A", "#10B981", "#F59E0B"],
    "reasoning": "Blue builds trust.",
    "harmonyType": "triadic",
    "psychologyExplanation": "Calm and confident.",
    "brandAlignment": "Matches security values.",
    "alternatives": [{"colors": ["#0F766E"], "reason": "Greener"}]
  },
  "psychology": [
    {"color": "#1E3A8A", "emotions": ["trust"], "associations": ["banks"],
     "industries": ["finance"], "culturalMeaning": "Stability"}
  ],
  "confidence": 85,
  "recommendations": ["Use navy for headers"]
}
```
Let me know!"##;

    #[test]
    fn parses_fenced_response() {
        let analysis = parse_analysis(RESPONSE).unwrap();
        assert_eq!(analysis.suggestion.colors, ["#1E3A8A", "#10B981", "#F59E0B"]);
        assert_eq!(analysis.suggestion.harmony_type, "triadic");
        assert_eq!(analysis.suggestion.alternatives[0].reason, "Greener");
        assert_eq!(analysis.psychology[0].cultural_meaning, "Stability");
        assert!((analysis.confidence - 85.0).abs() < f64::EPSILON);
        assert!(!analysis.is_fallback());
    }

    #[test]
    fn missing_json_is_rejected() {
        let err = parse_analysis("Sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, PaletteError::Suggestion(_)));
    }

    #[test]
    fn missing_colors_is_rejected() {
        let err = parse_analysis(r#"{"suggestion": {"reasoning": "x"}, "psychology": []}"#)
            .unwrap_err();
        assert!(matches!(err, PaletteError::Suggestion(_)));
    }

    #[test]
    fn missing_psychology_is_rejected() {
        let err = parse_analysis(r##"{"suggestion": {"colors": ["#000000"]}}"##).unwrap_err();
        assert!(matches!(err, PaletteError::Suggestion(_)));
    }

    #[test]
    fn minimal_shape_fills_defaults() {
        let analysis =
            parse_analysis(r##"{"suggestion": {"colors": ["#000000"]}, "psychology": []}"##)
                .unwrap();
        assert_eq!(analysis.suggestion.harmony_type, "");
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn fallback_analysis_is_labeled() {
        let analysis = fallback_analysis();
        assert!(analysis.is_fallback());
        assert_eq!(analysis.suggestion.colors.len(), 5);
        assert_eq!(analysis.suggestion.colors[0], "#3B82F6");
        assert_eq!(analysis.suggestion.harmony_type, "analogous");
    }

    #[test]
    fn extracts_at_most_five_hex_colors() {
        let text = "#FF5733, #33FF57, #3357FF, #abcdef, #123456, #654321";
        let colors = extract_hex_colors(text);
        let hexes: Vec<String> = colors.iter().map(|c| c.hex()).collect();
        assert_eq!(hexes, ["#ff5733", "#33ff57", "#3357ff", "#abcdef", "#123456"]);
    }

    #[test]
    fn extract_ignores_short_codes() {
        assert!(extract_hex_colors("try #fff or #12345").is_empty());
    }

    #[test]
    fn suggestion_prompt_lists_strategy() {
        let prompt = suggestion_prompt(&strategy());
        assert!(prompt.contains("Brand Name: Acme\n"));
        assert!(prompt.contains("Brand Personality: Trustworthy, Modern\n"));
        assert!(prompt.contains("Core Values: Security, Clarity\n"));
        assert!(prompt.contains("Additional Context: Mobile first\n"));
        assert!(!prompt.contains("Competitors:"));
        assert!(prompt.contains("\"harmonyType\""));
    }

    #[test]
    fn enhancement_prompt_lists_current_colors() {
        let colors = [Color::from_rgb(0x3b, 0x82, 0xf6), Color::WHITE];
        let prompt = enhancement_prompt(&colors, &strategy());
        assert!(prompt.contains("Current Colors: #3b82f6, #ffffff\n"));
        assert!(prompt.contains("- Brand: Acme\n"));
        assert!(prompt.contains("- Values: Security, Clarity\n"));
    }

    #[test]
    fn config_from_lookup() {
        let config = SuggestionConfig::from_lookup(|key| match key {
            ENV_API_KEY => Some("secret".to_string()),
            ENV_ENDPOINT => Some("https://example.invalid".to_string()),
            _ => None,
        });
        assert_eq!(config.deployment, DEFAULT_DEPLOYMENT);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.available(), Ok(()));
    }

    #[test]
    fn missing_key_reported_first() {
        let config = SuggestionConfig::default();
        assert_eq!(config.available(), Err(Unavailable::MissingApiKey));

        let config = SuggestionConfig::from_lookup(|key| {
            (key == ENV_API_KEY).then(|| "secret".to_string())
        });
        assert_eq!(config.available(), Err(Unavailable::MissingEndpoint));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = SuggestionConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.api_key, None);
        assert_eq!(config.deployment, DEFAULT_DEPLOYMENT);
    }

    #[test]
    fn or_endpoint_only_fills_gaps() {
        let config = SuggestionConfig::default().or_endpoint(Some("https://a".to_string()));
        assert_eq!(config.endpoint.as_deref(), Some("https://a"));
        let config = config.or_endpoint(Some("https://b".to_string()));
        assert_eq!(config.endpoint.as_deref(), Some("https://a"));
    }

    #[test]
    fn debug_redacts_key() {
        let config = SuggestionConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let shown = format!("{config:?}");
        assert!(!shown.contains("secret"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn strategy_uses_camel_case() {
        let json = serde_json::to_value(strategy()).unwrap();
        assert_eq!(json["brandName"], "Acme");
        assert_eq!(json["targetAudience"], "Young professionals");
        assert!(json.get("competitors").is_none());
    }
}
