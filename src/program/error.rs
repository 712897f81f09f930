//! Program loading and execution errors.

use std::path::PathBuf;

/// Errors that can occur while loading or running a drawing program.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("Failed to read program {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid program: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Canvas must be at least 1x1 (got {width}x{height})")]
    EmptyCanvas { width: usize, height: usize },

    #[error("Canvas {width}x{height} is too large (at most {max} cells)")]
    CanvasTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("Scribe '{scribe}': unknown color '{color}'")]
    UnknownColor { scribe: String, color: String },

    #[error("Scribe '{scribe}': {field} '{glyph}' must be exactly one column wide")]
    WideGlyph {
        scribe: String,
        field: &'static str,
        glyph: char,
    },

    #[error("Scribe '{scribe}': direction ({x}, {y}) must be finite and non-zero")]
    InvalidDirection { scribe: String, x: f64, y: f64 },

    #[error("Scribe '{scribe}': degrees {degrees} is not a finite angle")]
    InvalidDegrees { scribe: String, degrees: f64 },

    #[error("Scribe '{scribe}': start position ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        scribe: String,
        x: f64,
        y: f64,
        width: usize,
        height: usize,
    },

    #[error("Failed to render frame: {0}")]
    Render(#[from] std::io::Error),
}
