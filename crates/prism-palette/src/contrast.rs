//! WCAG contrast ratios and palette accessibility checks.
//!
//! Contrast follows WCAG 2.1: relative luminance from linearized sRGB
//! channels, ratio = (`L_lighter` + 0.05) / (`L_darker` + 0.05). Levels:
//!
//! - `AAA`: ratio >= 7.0
//! - `AA`: ratio >= 4.5 (also the "readable" threshold)
//! - `A`: ratio >= 3.0 (large text only)
//! - `FAIL`: anything lower
//!
//! The color-blind check is a coarse heuristic: a palette passes when every
//! pair of colors has a contrast ratio of at least 3. It does not simulate
//! any color vision deficiency, so two colors with equal luminance but
//! different hue fail it even when most viewers can tell them apart, and a
//! red/green pair with enough luminance difference passes.

use prism_color::Color;
use serde::{Deserialize, Serialize};

/// Minimum ratio for body text (WCAG AA).
pub const READABLE_RATIO: f64 = 4.5;

/// Minimum pairwise ratio for the color-blind heuristic.
pub const DISTINGUISHABLE_RATIO: f64 = 3.0;

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0] regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance level of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "FAIL")]
    Fail,
}

impl ContrastLevel {
    /// Classify a ratio. Boundaries are inclusive: exactly 4.5 is `AA`.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= READABLE_RATIO {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::A
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::A => "A",
            Self::Fail => "FAIL",
        }
    }

    /// One-line verdict shown next to a tested pair.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Aaa => "Excellent - WCAG AAA",
            Self::Aa => "Good - WCAG AA",
            Self::A => "Fair - Large text only",
            Self::Fail => "Poor - Not accessible",
        }
    }
}

impl std::fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast of a foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Ratio rounded to two decimal places.
    pub ratio: f64,
    pub level: ContrastLevel,
    /// `ratio >= 4.5`.
    pub is_readable: bool,
}

/// Evaluate a foreground color against a background.
///
/// Level and readability are decided on the exact ratio; only the reported
/// `ratio` is rounded.
#[must_use]
pub fn contrast(fg: Color, bg: Color) -> ContrastResult {
    let ratio = contrast_ratio(fg, bg);
    ContrastResult {
        ratio: (ratio * 100.0).round() / 100.0,
        level: ContrastLevel::from_ratio(ratio),
        is_readable: ratio >= READABLE_RATIO,
    }
}

/// Heuristic color-blind safety: every unordered pair must reach a contrast
/// ratio of [`DISTINGUISHABLE_RATIO`]. Empty and single-color sets are safe.
#[must_use]
pub fn is_color_blind_safe(colors: &[Color]) -> bool {
    colors.iter().enumerate().all(|(i, &a)| {
        colors[i + 1..]
            .iter()
            .all(|&b| contrast_ratio(a, b) >= DISTINGUISHABLE_RATIO)
    })
}

// ---------------------------------------------------------------------------
// AccessibilityReport
// ---------------------------------------------------------------------------

/// One tested foreground/background combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastCheck {
    pub foreground: Color,
    pub background: Color,
    pub result: ContrastResult,
}

impl ContrastCheck {
    #[must_use]
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            result: contrast(foreground, background),
        }
    }
}

/// Accessibility summary of a palette: the color-blind verdict, the common
/// pairings a designer would try first, and plain-language advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    pub color_blind_safe: bool,
    pub checks: Vec<ContrastCheck>,
    pub recommendations: Vec<String>,
}

impl AccessibilityReport {
    /// Analyze `colors`. The tested pairs are, in order: the explicitly
    /// `selected` (foreground, background) pair if any, last-on-first,
    /// first-on-last, and third-on-second when there are three or more
    /// colors.
    #[must_use]
    pub fn analyze(colors: &[Color], selected: Option<(Color, Color)>) -> Self {
        let mut checks = Vec::new();

        if let Some((fg, bg)) = selected {
            checks.push(ContrastCheck::new(fg, bg));
        }
        if let [first, .., last] = colors {
            checks.push(ContrastCheck::new(*last, *first));
            checks.push(ContrastCheck::new(*first, *last));
            if let [_, second, third, ..] = colors {
                checks.push(ContrastCheck::new(*third, *second));
            }
        }

        let color_blind_safe = is_color_blind_safe(colors);
        let recommendations = recommend(color_blind_safe, &checks);

        Self {
            color_blind_safe,
            checks,
            recommendations,
        }
    }

    /// Whether every tested pair is readable as body text.
    #[must_use]
    pub fn all_readable(&self) -> bool {
        self.checks.iter().all(|c| c.result.is_readable)
    }
}

fn recommend(color_blind_safe: bool, checks: &[ContrastCheck]) -> Vec<String> {
    let mut out = Vec::new();

    if checks.is_empty() {
        out.push("Generate a palette with multiple colors to see contrast analysis.".to_string());
    }

    if !color_blind_safe {
        out.push(
            "Some colors in this palette may be difficult to distinguish for people with \
             color blindness; increase the lightness difference between similar colors."
                .to_string(),
        );
    }

    for check in checks {
        let ContrastCheck { foreground, background, result } = check;
        match result.level {
            ContrastLevel::Fail => out.push(format!(
                "{foreground} on {background} ({:.2}:1) is not accessible; avoid it for text.",
                result.ratio
            )),
            ContrastLevel::A => out.push(format!(
                "{foreground} on {background} ({:.2}:1) only suits large text \
                 (18pt+ or 14pt bold).",
                result.ratio
            )),
            ContrastLevel::Aa | ContrastLevel::Aaa => {}
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
