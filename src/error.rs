// Copyright 2022-2023 Martin Pool.

//! Errors from building styles and printing renderables.

use std::io;

/// Errors from paprika.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color channel was outside its allowed range.
    #[error("Color channel {channel} out of range: {value}")]
    ColorOutOfRange {
        /// Which channel: "red", "green" or "blue".
        channel: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Text could not be parsed as a color.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// A style definition contained an unknown word.
    #[error("Unknown style word: {0:?}")]
    UnknownStyle(String),

    /// Writing to the output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    /// A renderable failed while producing segments.
    #[error("Render failed: {0}")]
    Render(Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for paprika operations.
pub type Result<T> = std::result::Result<T, Error>;
