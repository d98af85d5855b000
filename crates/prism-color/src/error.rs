// SPDX-License-Identifier: MIT

/// Errors raised while constructing a [`Color`](crate::Color).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input was not a six-digit `#RRGGBB` hex string.
    #[error("invalid hex color '{input}': expected #RRGGBB")]
    InvalidFormat { input: String },
}
