//! The palette workspace a front end drives.
//!
//! `Studio` holds the current palette and the request that produced it.
//! Nothing regenerates on its own: every change is an explicit call, and
//! each successful call swaps in a brand-new [`Palette`].

use prism_color::Color;
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::harmony::HarmonyType;
use crate::palette::{Palette, PaletteRequest};
use crate::suggest::{
    AiAnalysis, BrandStrategy, SYSTEM_PROMPT, SuggestionClient, SuggestionConfig, Unavailable,
    enhancement_prompt, extract_hex_colors, fallback_analysis, parse_analysis, suggestion_prompt,
};

pub struct Studio<R = ThreadRng> {
    config: SuggestionConfig,
    request: PaletteRequest,
    palette: Palette,
    rng: R,
}

impl Studio<ThreadRng> {
    /// A studio showing the default request's palette, naming with the
    /// thread-local generator.
    #[must_use]
    pub fn new(config: SuggestionConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Studio<R> {
    #[must_use]
    pub fn with_rng(config: SuggestionConfig, mut rng: R) -> Self {
        let request = PaletteRequest::default();
        let palette = Palette::generate(&request, &mut rng).unwrap_or_else(|_| Palette::fallback());
        Self {
            config,
            request,
            palette,
            rng,
        }
    }

    /// The current palette.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The request behind the current generated palette.
    #[must_use]
    pub const fn request(&self) -> &PaletteRequest {
        &self.request
    }

    #[must_use]
    pub const fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Whether suggestion calls can be made, or why not.
    ///
    /// # Errors
    ///
    /// The first missing piece of configuration.
    pub const fn suggestions_available(&self) -> std::result::Result<(), Unavailable> {
        self.config.available()
    }

    /// Replace the palette with one generated from `request`. On error the
    /// previous palette and request stay current.
    ///
    /// # Errors
    ///
    /// Whatever [`Palette::generate`] rejects.
    pub fn regenerate(&mut self, request: PaletteRequest) -> Result<&Palette> {
        let palette = Palette::generate(&request, &mut self.rng)?;
        debug!(name = palette.name(), "palette regenerated");
        self.request = request;
        self.palette = palette;
        Ok(&self.palette)
    }

    /// Regenerate from a random base color, keeping harmony, count and
    /// adjustment.
    ///
    /// # Errors
    ///
    /// Whatever [`Palette::generate`] rejects.
    pub fn reshuffle(&mut self) -> Result<&Palette> {
        let request = PaletteRequest {
            base_color: Color::random_with(&mut self.rng),
            ..self.request
        };
        self.regenerate(request)
    }

    /// Ask `client` for an analysis of `strategy` and show its palette.
    ///
    /// Transport and parse failures degrade to [`fallback_analysis`]; only
    /// a missing configuration is an error.
    ///
    /// # Errors
    ///
    /// [`Unavailable`] when the config cannot make requests.
    pub fn suggest<C>(&mut self, client: &C, strategy: &BrandStrategy) -> Result<AiAnalysis>
    where
        C: SuggestionClient + ?Sized,
    {
        self.config.available()?;
        let prompt = suggestion_prompt(strategy);
        match client.complete(&self.config, Some(SYSTEM_PROMPT), &prompt) {
            Ok(content) => Ok(self.apply_suggestion(&content)),
            Err(e) => {
                warn!(error = %e, "suggestion request failed, using fallback analysis");
                let analysis = fallback_analysis();
                self.apply_analysis(&analysis);
                Ok(analysis)
            }
        }
    }

    /// Parse a raw service response and show its palette. Unusable
    /// responses yield the fallback analysis.
    pub fn apply_suggestion(&mut self, content: &str) -> AiAnalysis {
        let analysis = parse_analysis(content).unwrap_or_else(|e| {
            warn!(error = %e, "unusable suggestion response, using fallback analysis");
            fallback_analysis()
        });
        self.apply_analysis(&analysis);
        analysis
    }

    /// Show the suggested colors as the current palette. Colors that do not
    /// parse are skipped; an unknown harmony reads as analogous; with no
    /// usable colors left the fallback palette is shown. A fallback analysis
    /// always shows the labeled fallback palette.
    pub fn apply_analysis(&mut self, analysis: &AiAnalysis) -> &Palette {
        if analysis.is_fallback() {
            self.palette = Palette::fallback();
            info!(name = self.palette.name(), "showing fallback palette");
            return &self.palette;
        }

        let colors: Vec<Color> = analysis
            .suggestion
            .colors
            .iter()
            .filter_map(|hex| match Color::from_hex(hex) {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!(error = %e, "skipping suggested color");
                    None
                }
            })
            .collect();
        let harmony = HarmonyType::from_name(&analysis.suggestion.harmony_type).unwrap_or_default();

        self.palette = Palette::from_colors(colors, harmony, &mut self.rng).unwrap_or_else(|_| {
            warn!("suggestion has no usable colors, showing fallback palette");
            Palette::fallback()
        });
        info!(name = self.palette.name(), colors = self.palette.len(), "applied suggestion");
        &self.palette
    }

    /// Ask `client` for up to five improved colors for the current palette.
    /// The palette itself is left alone.
    ///
    /// # Errors
    ///
    /// [`Unavailable`] when the config cannot make requests, or the client's
    /// own error.
    pub fn enhance<C>(&self, client: &C, strategy: &BrandStrategy) -> Result<Vec<Color>>
    where
        C: SuggestionClient + ?Sized,
    {
        self.config.available()?;
        let prompt = enhancement_prompt(self.palette.colors(), strategy);
        let content = client.complete(&self.config, None, &prompt)?;
        Ok(extract_hex_colors(&content))
    }
}
