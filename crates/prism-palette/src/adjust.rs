//! Base-color adjustments applied before harmony generation.

use prism_color::Color;
use serde::{Deserialize, Serialize};

/// Independent, optional offsets applied to a color. `None` fields are
/// no-ops; the default adjustment changes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorAdjustment {
    /// Degrees added to the hue, wrapped modulo 360.
    pub hue: Option<f64>,
    /// Saturation delta in [`ADJUST_STEP`](prism_color::color::ADJUST_STEP)
    /// units; negative values desaturate.
    pub saturation: Option<f64>,
    /// Lightness delta in the same units: positive brightens, negative
    /// darkens by `abs(value)`.
    pub lightness: Option<f64>,
}

impl ColorAdjustment {
    #[must_use]
    pub const fn hue(degrees: f64) -> Self {
        Self {
            hue: Some(degrees),
            saturation: None,
            lightness: None,
        }
    }

    #[must_use]
    pub const fn with_saturation(self, delta: f64) -> Self {
        Self {
            saturation: Some(delta),
            ..self
        }
    }

    #[must_use]
    pub const fn with_lightness(self, delta: f64) -> Self {
        Self {
            lightness: Some(delta),
            ..self
        }
    }

    /// Whether applying this adjustment leaves every color unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        [self.hue, self.saturation, self.lightness]
            .iter()
            .all(|v| v.is_none_or(|v| v.abs() < f64::EPSILON))
    }
}

/// Apply `adjustment` to `color`: hue first, then saturation, then
/// lightness. Every result is clamped into range.
#[must_use]
pub fn adjust_color(color: Color, adjustment: &ColorAdjustment) -> Color {
    let mut c = color;
    if let Some(degrees) = adjustment.hue {
        c = c.shift_hue(degrees);
    }
    if let Some(delta) = adjustment.saturation {
        c = c.saturate(delta);
    }
    if let Some(delta) = adjustment.lightness {
        c = if delta > 0.0 { c.brighten(delta) } else { c.darken(delta.abs()) };
    }
    c
}
