//! # prism-palette — Color Harmony Palette Engine
//!
//! Turns one base color into a named palette of related colors, checks the
//! result against WCAG contrast thresholds, maps it onto brand-preview
//! roles, and renders it for stylesheets and design tools.
//!
//! # Architecture
//!
//! ```text
//! PaletteRequest (base color + harmony + count + adjustment)
//!     │
//!     ▼
//! adjust.rs:   hue / saturation / lightness offsets on the base
//!     │
//!     ▼
//! harmony.rs:  generate `count` colors around the HSL wheel (pure math)
//!     │
//!     ▼
//! naming.rs:   "<tone> <hue> <harmony>" name
//!     │
//!     ▼
//! palette.rs:  immutable Palette { id, name, colors, harmony, created_at }
//!     │
//!     ├──► contrast.rs: WCAG ratios, levels, accessibility report
//!     ├──► roles.rs:    primary / secondary / accent / neutrals
//!     └──► export.rs:   CSS, SCSS, JSON, Tailwind, Figma, ASE
//! ```
//!
//! `studio.rs` ties the pipeline together for a front end, and `suggest.rs`
//! handles the AI suggestion round trip through an injected
//! [`SuggestionClient`].
//!
//! # Color Space
//!
//! Everything happens in plain sRGB/HSL with 8-bit storage (see
//! [`prism_color`]). Harmonies are deterministic; the only randomness is
//! the tone word in palette names and random base colors, both drawn from
//! a caller-supplied [`rand::Rng`].

// Loop indices feed hue and lightness offsets.
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
#![allow(clippy::module_name_repetitions)]

pub mod adjust;
pub mod contrast;
pub mod error;
pub mod export;
pub mod harmony;
pub mod naming;
pub mod palette;
pub mod roles;
pub mod studio;
pub mod suggest;

pub use adjust::{ColorAdjustment, adjust_color};
pub use contrast::{AccessibilityReport, ContrastLevel, ContrastResult, contrast, contrast_ratio};
pub use error::{PaletteError, Result};
pub use export::{ExportFormat, export};
pub use harmony::HarmonyType;
pub use palette::{Palette, PaletteRequest};
pub use roles::{BrandRole, PreviewTheme, RoleAssignment};
pub use studio::Studio;
pub use suggest::{AiAnalysis, BrandStrategy, SuggestionClient, SuggestionConfig, Unavailable};
