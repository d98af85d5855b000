//! Error taxonomy for the palette engine.
//!
//! Nothing here is retried and nothing is silently replaced with a default
//! color: every error goes straight back to the caller, which decides on a
//! fallback (keep the previous palette, show a validation message). The one
//! place a default is substituted is [`Studio`](crate::studio::Studio)'s
//! handling of the external suggestion service, and that path never
//! produces an error in the first place.

use prism_color::ColorError;

use crate::suggest::Unavailable;

/// Convenience alias used throughout the crate.
pub type Result<T, E = PaletteError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// A caller-supplied argument is outside what the engine supports
    /// (zero color count, unknown harmony tag, unknown export format).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A color string failed to parse.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// An operation that needs at least one color got none.
    #[error("palette has no colors")]
    EmptyPalette,

    /// The suggestion service returned something that is not a usable
    /// analysis, or the transport failed.
    #[error("suggestion response rejected: {0}")]
    Suggestion(String),

    /// Suggestions were requested without a usable service configuration.
    #[error(transparent)]
    Unavailable(#[from] Unavailable),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
